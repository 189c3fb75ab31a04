use rand::Rng;

use roadrush_core::player::choices::CarType;
use roadrush_core::player::player_inputs::PlayerInputs;

pub mod car_entity;
pub mod constants;
pub mod trigger_entity;

#[cfg(test)]
mod tests;

use car_entity::{CarEntity, CarRole};
use constants::*;

fn clamp_lane(lane: f64) -> f64 {
    lane.clamp(-LANE_LIMIT, LANE_LIMIT)
}

impl CarEntity {
    /* Advance this car by one frame. The player reacts to inputs; opponents
     * ignore them and drive off the random source instead. */
    pub fn do_physics_step<R: Rng + ?Sized>(
        &mut self,
        time_step: f64,
        inputs: &PlayerInputs,
        rng: &mut R,
    ) {
        match self.role {
            CarRole::Player => self.do_player_step(time_step, inputs),
            CarRole::Opponent(_) => self.do_opponent_step(time_step, rng),
        }
    }

    fn do_player_step(&mut self, time_step: f64, inputs: &PlayerInputs) {
        let max_speed = self.stats.max_speed;
        let reverse_limit = self.reverse_speed_limit();

        if inputs.accelerate && self.speed < max_speed {
            self.speed += self.stats.acceleration * time_step;
        } else if inputs.brake && self.speed > reverse_limit {
            self.speed -= self.stats.acceleration * BRAKE_MULTIPLIER * time_step;
        } else {
            self.apply_friction(time_step);
        }
        // a single large step could otherwise carry us past either limit
        self.speed = self.speed.clamp(reverse_limit, max_speed);

        self.advance_track_position(time_step);

        let lane_step = self.stats.turn_speed * LANE_STEER_FACTOR * time_step;
        if inputs.steer_left {
            self.lane = clamp_lane(self.lane - lane_step);
        }
        if inputs.steer_right {
            self.lane = clamp_lane(self.lane + lane_step);
        }
        self.lane = clamp_lane(self.lane);
    }

    // coast toward a standstill without ever crossing zero
    fn apply_friction(&mut self, time_step: f64) {
        let decay = self.stats.friction * time_step;
        if self.speed > 0.0 {
            self.speed = f64::max(0.0, self.speed - decay);
        } else if self.speed < 0.0 {
            self.speed = f64::min(0.0, self.speed + decay);
        }
    }

    fn do_opponent_step<R: Rng + ?Sized>(&mut self, time_step: f64, rng: &mut R) {
        let jitter: f64 = rng.gen::<f64>() - 0.5;
        self.speed += jitter * self.stats.acceleration * OPPONENT_SPEED_JITTER * time_step;
        let (min_speed, max_speed) = self.opponent_speed_band();
        self.speed = self.speed.clamp(min_speed, max_speed);

        self.advance_track_position(time_step);

        let (change_chance, lane_rate) = match self.car_type {
            CarType::Handler => (HANDLER_LANE_CHANGE_CHANCE, HANDLER_LANE_RATE),
            _ => (DEFAULT_LANE_CHANGE_CHANCE, DEFAULT_LANE_RATE),
        };

        if let CarRole::Opponent(brain) = &mut self.role {
            if rng.gen::<f64>() < change_chance {
                brain.target_lane = rng.gen_range(-1..=1) as f64;
            }

            let gap = brain.target_lane - self.lane;
            if gap.abs() > LANE_SNAP_DISTANCE {
                // steps stop at the target rather than past it
                let lane_step = f64::min(lane_rate * time_step, gap.abs());
                self.lane += lane_step.copysign(gap);
            } else {
                self.lane = brain.target_lane;
            }
        }
        self.lane = clamp_lane(self.lane);
    }

    // the snapshot has to happen before the move so checkpoint detection
    // sees both ends of this frame's travel
    fn advance_track_position(&mut self, time_step: f64) {
        self.last_track_position = self.track_position;
        self.track_position += self.speed * time_step;
    }
}
