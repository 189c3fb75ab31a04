use rand::Rng;

pub const HORIZON_RATIO: f64 = 0.35;
pub const ROAD_WIDTH: f64 = 600.0;
pub const CURVE_GAIN: f64 = 100.0;
pub const SEGMENT_FREQUENCY: f64 = 1.0;
pub const SCROLL_RATE: f64 = 0.02;

pub const CURVE_SMOOTHING: f64 = 0.02;
pub const CURVE_RESAMPLE_CHANCE: f64 = 0.005;
pub const CURVE_RESET_CHANCE: f64 = 0.003;

// Per-race road state. There is no real track geometry: the bends are
// invented as we go and the road only scrolls with the player.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackState {
    pub track_offset: f64,
    pub curve: f64,
    pub curve_target: f64,
}

impl TrackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<R: Rng + ?Sized>(&mut self, time_step: f64, player_speed: f64, rng: &mut R) {
        self.scroll(time_step, player_speed);
        self.smooth_curve(time_step);

        let resample = if rng.gen::<f64>() < CURVE_RESAMPLE_CHANCE {
            Some(rng.gen_range(-1.0..=1.0))
        } else {
            None
        };
        let reset = rng.gen::<f64>() < CURVE_RESET_CHANCE;
        self.roll_curve_target(resample, reset);
    }

    pub fn scroll(&mut self, time_step: f64, player_speed: f64) {
        self.track_offset += player_speed * time_step;
    }

    // exponential approach; dt is capped at 3 frames so this never overshoots
    pub fn smooth_curve(&mut self, time_step: f64) {
        self.curve += (self.curve_target - self.curve) * CURVE_SMOOTHING * time_step;
    }

    // both rolls can land in one frame, in which case the reset wins
    pub fn roll_curve_target(&mut self, resample: Option<f64>, reset: bool) {
        if let Some(target) = resample {
            self.curve_target = target.clamp(-1.0, 1.0);
        }
        if reset {
            self.curve_target = 0.0;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadRow {
    pub y: f64,
    pub center_x: f64,
    pub half_width: f64,
    // 0 at the horizon, 1 at the bottom of the screen
    pub progress: f64,
    // distance into the scene; 1 at the bottom row, growing toward the horizon
    pub depth: f64,
    // alternates 0/1 in bands that scroll with the track offset
    pub segment: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub screen_width: f64,
    pub screen_height: f64,
    pub horizon_y: f64,
    pub cam_depth: f64,
    pub road_width: f64,
    pub curve_gain: f64,
    pub segment_frequency: f64,
    pub scroll_rate: f64,
}

impl Projector {
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        let horizon_y = screen_height * HORIZON_RATIO;
        Self {
            screen_width,
            screen_height,
            horizon_y,
            // puts the bottom row at depth 1, so 1/depth == progress
            cam_depth: screen_height - horizon_y,
            road_width: ROAD_WIDTH,
            curve_gain: CURVE_GAIN,
            segment_frequency: SEGMENT_FREQUENCY,
            scroll_rate: SCROLL_RATE,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.screen_width / 2.0
    }

    pub fn progress_at(&self, y: f64) -> f64 {
        ((y - self.horizon_y) / (self.screen_height - self.horizon_y)).clamp(0.0, 1.0)
    }

    // bends are strongest at the horizon and fade out quadratically toward the camera
    pub fn curve_offset(&self, progress: f64, curve: f64) -> f64 {
        curve * self.curve_gain * (1.0 - progress).powi(2)
    }

    /* Where the road is on screen row `y`. Rows at or above the horizon have
     * no road and yield None. */
    pub fn project_row(&self, y: f64, track: &TrackState) -> Option<RoadRow> {
        if y <= self.horizon_y {
            return None;
        }

        let depth = self.cam_depth / (y - self.horizon_y);
        let scale = 1.0 / depth;
        let progress = (y - self.horizon_y) / (self.screen_height - self.horizon_y);

        let band = (depth * 10.0 * self.segment_frequency + track.track_offset * self.scroll_rate)
            .floor();

        Some(RoadRow {
            y,
            center_x: self.center_x() + self.curve_offset(progress, track.curve),
            half_width: self.road_width * scale / 2.0,
            progress,
            depth,
            segment: band.rem_euclid(2.0) as u8,
        })
    }

    // like project_row, but pinned to a zero-width road at the horizon for
    // anything above it and to the bottom row for anything below the screen;
    // used to place cars that are far away or just behind the camera
    pub fn road_at(&self, y: f64, track: &TrackState) -> (f64, f64) {
        match self.project_row(y.min(self.screen_height), track) {
            Some(row) => (row.center_x, row.half_width),
            None => (self.center_x() + self.curve_offset(0.0, track.curve), 0.0),
        }
    }
}
