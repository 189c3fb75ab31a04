use tracing::trace;

// all per-frame tuning is expressed in "60 Hz frames"; dt = 1.0 is one of those
pub const TARGET_FRAME_MS: f64 = 1000.0 / 60.0;

// longest real gap we'll integrate in one go (about three frames), so a
// backgrounded tab doesn't teleport everyone on resume
pub const MAX_FRAME_DELTA_MS: f64 = 50.0;

pub fn normalize_delta(raw_delta_ms: f64) -> f64 {
    raw_delta_ms.max(0.0).min(MAX_FRAME_DELTA_MS) / TARGET_FRAME_MS
}

#[derive(Default)]
pub struct FrameTimer {
    last_frame_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last_frame_ms: None }
    }

    pub fn seed(&mut self, timestamp_ms: f64) {
        self.last_frame_ms = Some(timestamp_ms);
    }

    pub fn is_seeded(&self) -> bool {
        self.last_frame_ms.is_some()
    }

    // the normalised dt since the previous tick; an unseeded timer seeds
    // itself and reports no elapsed time
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let raw_delta = match self.last_frame_ms {
            Some(last) => timestamp_ms - last,
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);

        if raw_delta > MAX_FRAME_DELTA_MS {
            trace!(raw_delta, "clamping long frame");
        }
        normalize_delta(raw_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_at_60hz_is_unit() {
        assert!((normalize_delta(TARGET_FRAME_MS) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        assert_eq!(normalize_delta(5000.0), normalize_delta(MAX_FRAME_DELTA_MS));
        assert!((normalize_delta(5000.0) - 3.0).abs() < 1e-12);
        assert_eq!(normalize_delta(-20.0), 0.0);
    }

    #[test]
    fn test_timer_needs_no_previous_timestamp() {
        let mut timer = FrameTimer::new();
        assert!(!timer.is_seeded());
        assert_eq!(timer.tick(12_345.0), 0.0);

        let dt = timer.tick(12_345.0 + 2.0 * TARGET_FRAME_MS);
        assert!((dt - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_timer() {
        let mut timer = FrameTimer::new();
        timer.seed(1000.0);
        let dt = timer.tick(1000.0 + TARGET_FRAME_MS / 2.0);
        assert!((dt - 0.5).abs() < 1e-9);
    }
}
