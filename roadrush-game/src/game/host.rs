use rand::Rng;
use tracing::{debug, enabled, info, trace, warn, Level};

use roadrush_core::error::Result;
use roadrush_core::player::{placement::RaceResult, player_inputs::PlayerInputs};

use crate::checkpoints::LapEvent;
use crate::game::clock::Clock;
use crate::game::phase::GamePhase;
use crate::game::{RaceSession, PLAYER_ID};
use crate::physics::car_entity::CarEntity;

// how far off centre the autopilot lets the car wander before correcting
const AUTOPILOT_LANE_TOLERANCE: f64 = 0.1;

// Foot to the floor and keep to the middle of the road.
pub fn autopilot(car: &CarEntity) -> PlayerInputs {
    PlayerInputs {
        accelerate: true,
        brake: false,
        steer_left: car.lane > AUTOPILOT_LANE_TOLERANCE,
        steer_right: car.lane < -AUTOPILOT_LANE_TOLERANCE,
    }
}

pub struct RaceHost<'a, C: Clock, R: Rng> {
    session: RaceSession<R>,
    clock: &'a C,
    frame_interval_ms: f64,
    max_frames: u64,
}

impl<'a, C: Clock, R: Rng> RaceHost<'a, C, R> {
    pub fn new(
        session: RaceSession<R>,
        clock: &'a C,
        frame_interval_ms: f64,
        max_frames: u64,
    ) -> Self {
        Self {
            session,
            clock,
            frame_interval_ms,
            max_frames,
        }
    }

    pub fn session(&self) -> &RaceSession<R> {
        &self.session
    }

    /* Count down, then run frames until somebody finishes. Returns None if the
     * frame budget runs out first. */
    pub fn run(
        &mut self,
        mut inputs: impl FnMut(&CarEntity) -> PlayerInputs,
    ) -> Result<Option<RaceResult>> {
        self.session.start_countdown(self.clock.now_ms())?;
        let mut frames: u64 = 0;

        loop {
            let frame_start = self.clock.now_ms();

            match self.session.phase() {
                GamePhase::Racing => {
                    let player_inputs = inputs(self.session.player());
                    let report = self.session.step(frame_start, player_inputs)?;

                    let player_lapped = report.events.iter().any(|(car, event)| {
                        *car == PLAYER_ID && matches!(event, LapEvent::LapCompleted(_))
                    });
                    if player_lapped {
                        let hud = self.session.hud();
                        info!(
                            lap = %hud.lap_label,
                            rank = %hud.rank_label,
                            speed = hud.speed,
                            "player completed a lap"
                        );
                    }
                    if report.race_ended {
                        break;
                    }
                }
                _ => {
                    self.session.poll_countdown(frame_start);
                }
            }

            let frame = self.session.render();
            debug!(items = frame.items.len(), "frame rendered");
            if enabled!(Level::TRACE) {
                if let Ok(display_list) = serde_json::to_string(&frame) {
                    trace!(%display_list);
                }
            }

            frames += 1;
            if frames >= self.max_frames {
                warn!(frames, "giving up before the race finished");
                return Ok(None);
            }

            self.clock.wait_until(frame_start + self.frame_interval_ms);
        }

        Ok(self.session.result().cloned())
    }
}
