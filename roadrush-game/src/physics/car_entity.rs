use roadrush_core::player::{
    choices::{CarStats, CarType, Color},
    lap_info::LapInformation,
};

use crate::physics::constants::*;

// AI-only state; lives on the opponent variant so it can't be missing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpponentBrain {
    pub target_lane: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarRole {
    Player,
    Opponent(OpponentBrain),
}

#[derive(Clone, Debug)]
pub struct CarEntity {
    pub car_type: CarType,
    pub stats: CarStats,
    pub color: Color,

    pub speed: f64,
    pub lane: f64,

    // unwrapped distance along the track; only reduced modulo the lap length
    // when checking checkpoints
    pub track_position: f64,
    pub last_track_position: f64,

    pub lap_info: LapInformation,
    pub role: CarRole,
}

impl CarEntity {
    pub fn new_player(car_type: CarType) -> Self {
        CarEntity {
            car_type,
            stats: car_type.stats(),
            color: car_type.color(),
            speed: 0.0,
            lane: 0.0,
            track_position: 0.0,
            last_track_position: 0.0,
            lap_info: LapInformation::new(),
            role: CarRole::Player,
        }
    }

    pub fn new_opponent(car_type: CarType, lane: f64, speed: f64, track_position: f64) -> Self {
        CarEntity {
            car_type,
            stats: car_type.stats(),
            color: car_type.color(),
            speed,
            lane,
            track_position,
            last_track_position: track_position,
            lap_info: LapInformation::new(),
            role: CarRole::Opponent(OpponentBrain { target_lane: lane }),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, CarRole::Player)
    }

    // give the player a new car; stats and paint change, race progress doesn't
    pub fn set_car_type(&mut self, car_type: CarType) {
        self.car_type = car_type;
        self.stats = car_type.stats();
        self.color = car_type.color();
    }

    pub fn speed_display(&self) -> u32 {
        (self.speed * SPEED_DISPLAY_SCALE).abs().round() as u32
    }

    pub fn reverse_speed_limit(&self) -> f64 {
        -self.stats.max_speed * REVERSE_SPEED_FRACTION
    }

    pub fn opponent_speed_band(&self) -> (f64, f64) {
        (
            self.stats.max_speed * OPPONENT_MIN_SPEED_FRACTION,
            self.stats.max_speed * OPPONENT_MAX_SPEED_FRACTION,
        )
    }

    // opponents aren't simulated in screen space; their height on screen
    // follows from how far ahead of (or behind) the player they are
    pub fn screen_y_relative_to(&self, player: &CarEntity, player_screen_y: f64) -> f64 {
        player_screen_y - (self.track_position - player.track_position)
    }
}
