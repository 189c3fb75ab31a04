use serde::{Deserialize, Serialize};

pub type LapNumber = u8;
pub type CheckpointID = usize;

// length of one lap in track units
pub const LAP_LENGTH: f64 = 6000.0;
pub const CHECKPOINT_COUNT: usize = 4;
pub const CHECKPOINT_DISTANCE: f64 = LAP_LENGTH / CHECKPOINT_COUNT as f64;
pub const TOTAL_LAPS: LapNumber = 3;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LapInformation {
    pub laps: LapNumber,
    pub checkpoints: [bool; CHECKPOINT_COUNT],
}

impl LapInformation {
    pub fn new() -> Self {
        LapInformation {
            laps: 0,
            checkpoints: [false; CHECKPOINT_COUNT],
        }
    }

    pub fn all_checkpoints_passed(&self) -> bool {
        self.checkpoints.iter().all(|&passed| passed)
    }

    pub fn has_finished(&self) -> bool {
        self.laps >= TOTAL_LAPS
    }

    // the lap the HUD shows; never reads past the final lap
    pub fn display_lap(&self) -> LapNumber {
        LapNumber::min(self.laps + 1, TOTAL_LAPS)
    }

    pub fn lap_label(&self) -> String {
        format!("{}/{}", self.display_lap(), TOTAL_LAPS)
    }
}

impl Default for LapInformation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_label_is_capped() {
        let mut info = LapInformation::new();
        assert_eq!(info.lap_label(), "1/3");
        info.laps = 2;
        assert_eq!(info.lap_label(), "3/3");
        info.laps = 3;
        assert_eq!(info.lap_label(), "3/3");
        assert!(info.has_finished());
    }
}
