use roadrush_core::player::lap_info::*;

use crate::physics::{car_entity::CarEntity, trigger_entity::TriggerEntity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LapEvent {
    CheckpointCrossed(CheckpointID),
    LapCompleted(LapNumber),
    RaceFinished,
}

// Reduce an unwrapped track position into [0, LAP_LENGTH). Unlike `%` this
// stays non-negative for cars that have reversed behind the start line.
pub fn position_in_lap(track_position: f64) -> f64 {
    let wrapped = track_position.rem_euclid(LAP_LENGTH);
    // rem_euclid can round up to exactly LAP_LENGTH for tiny negative inputs
    if wrapped >= LAP_LENGTH {
        0.0
    } else {
        wrapped
    }
}

// Was `checkpoint` passed moving from `previous` to `current`, both already
// reduced into a single lap? If the lap position went down, the car crossed
// the start line and the checkpoint is passed if it lies in either end of the
// gap.
pub fn crossed_between(previous: f64, current: f64, checkpoint: f64) -> bool {
    if previous <= current {
        previous < checkpoint && current >= checkpoint
    } else {
        previous < checkpoint || current >= checkpoint
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    pub id: CheckpointID,
    pub position: f64,
}

impl Checkpoint {
    pub fn new(id: CheckpointID, position: f64) -> Self {
        Self { id, position }
    }
}

impl TriggerEntity for Checkpoint {
    fn is_crossed_by(&self, car: &CarEntity) -> bool {
        crossed_between(
            position_in_lap(car.last_track_position),
            position_in_lap(car.track_position),
            self.position,
        )
    }

    fn trigger(&self, car: &mut CarEntity) -> Option<LapEvent> {
        let lap_info = &mut car.lap_info;
        // passing an already-marked checkpoint again does nothing
        if lap_info.checkpoints[self.id] {
            return None;
        }

        lap_info.checkpoints[self.id] = true;
        if lap_info.all_checkpoints_passed() {
            lap_info.laps += 1;
            lap_info.checkpoints = [false; CHECKPOINT_COUNT];
            Some(LapEvent::LapCompleted(lap_info.laps))
        } else {
            Some(LapEvent::CheckpointCrossed(self.id))
        }
    }
}

pub struct Circuit {
    checkpoints: Vec<Checkpoint>,
}

impl Circuit {
    // checkpoints evenly spaced around the lap, the first on the start line
    pub fn new() -> Self {
        let checkpoints = (0..CHECKPOINT_COUNT)
            .map(|id| Checkpoint::new(id, id as f64 * CHECKPOINT_DISTANCE))
            .collect();
        Self { checkpoints }
    }

    /* Check every checkpoint against the car's latest step. `race_ended` is
     * shared across all cars of a frame; the first car to reach the final lap
     * flips it and only that car reports RaceFinished. */
    pub fn update_laps(&self, car: &mut CarEntity, race_ended: &mut bool) -> Vec<LapEvent> {
        let mut events = Vec::new();

        for checkpoint in self.checkpoints.iter() {
            if !checkpoint.is_crossed_by(car) {
                continue;
            }

            if let Some(event) = checkpoint.trigger(car) {
                events.push(event);

                if let LapEvent::LapCompleted(_) = event {
                    if car.lap_info.has_finished() && !*race_ended {
                        *race_ended = true;
                        events.push(LapEvent::RaceFinished);
                    }
                }
            }
        }

        events
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}
