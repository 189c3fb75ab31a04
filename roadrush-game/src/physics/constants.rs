// lateral positions are measured in car widths from the centre line
pub const LANE_LIMIT: f64 = 1.2;
pub const LANE_STEER_FACTOR: f64 = 0.015;

// braking bites harder than the engine pulls
pub const BRAKE_MULTIPLIER: f64 = 1.5;
pub const REVERSE_SPEED_FRACTION: f64 = 0.5;

// AI never idles or reverses; it cruises within this band of its top speed
pub const OPPONENT_MIN_SPEED_FRACTION: f64 = 0.75;
pub const OPPONENT_MAX_SPEED_FRACTION: f64 = 0.95;
pub const OPPONENT_SPEED_JITTER: f64 = 3.0;

pub const HANDLER_LANE_CHANGE_CHANCE: f64 = 0.02;
pub const DEFAULT_LANE_CHANGE_CHANCE: f64 = 0.01;
pub const HANDLER_LANE_RATE: f64 = 0.05;
pub const DEFAULT_LANE_RATE: f64 = 0.03;
pub const LANE_SNAP_DISTANCE: f64 = 0.01;

// where the player's car sits on screen, as an offset up from the bottom edge
pub const PLAYER_SCREEN_OFFSET: f64 = 80.0;

pub const SPEED_DISPLAY_SCALE: f64 = 10.0;
