use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, trace};

use roadrush_core::error::{RaceError, Result};
use roadrush_core::player::{
    choices::CarType,
    placement::{ordinal_label, Placement, RaceResult},
    player_inputs::PlayerInputs,
};
use roadrush_core::CarID;

use crate::checkpoints::{Circuit, LapEvent};
use crate::physics::car_entity::CarEntity;
use crate::progress::{rank_of, standings};
use crate::renderer::{render_frame, Frame};
use crate::timing::FrameTimer;
use crate::track::{Projector, TrackState};

use self::phase::{Countdown, CountdownOverlay, GamePhase};

pub mod clock;
pub mod host;
pub mod phase;

pub const PLAYER_ID: CarID = 0;

// the opponents' starting grid: (car, lane, speed, track position)
const OPPONENT_GRID: [(CarType, f64, f64, f64); 3] = [
    (CarType::Handler, -1.0, 9.5, 150.0),
    (CarType::Speedster, 1.0, 11.0, 300.0),
    (CarType::Accelerator, 0.0, 8.5, 450.0),
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub speed: u32,
    pub rank: Placement,
    pub rank_label: String,
    pub lap_label: String,
    pub countdown: Option<CountdownOverlay>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub time_step: f64,
    pub events: Vec<(CarID, LapEvent)>,
    pub player_rank: Placement,
    pub race_ended: bool,
}

/*
 * One race, from car selection to the chequered flag. Everything the race
 * touches lives here and is passed around explicitly; starting another race
 * means building another session.
 */
pub struct RaceSession<R: Rng> {
    cars: Vec<CarEntity>,
    track: TrackState,
    circuit: Circuit,
    projector: Projector,
    countdown: Countdown,
    timer: FrameTimer,
    rng: R,
    game_ended: bool,
    result: Option<RaceResult>,
    frame_count: u64,
}

impl<R: Rng> RaceSession<R> {
    // a confirmed car choice is the price of entry; there is no default car
    pub fn new(car_type: CarType, projector: Projector, rng: R) -> Self {
        let mut cars = vec![CarEntity::new_player(car_type)];
        cars.extend(
            OPPONENT_GRID
                .iter()
                .map(|&(car, lane, speed, position)| {
                    CarEntity::new_opponent(car, lane, speed, position)
                }),
        );

        let mut session = Self {
            cars,
            track: TrackState::new(),
            circuit: Circuit::new(),
            projector,
            countdown: Countdown::new(),
            timer: FrameTimer::new(),
            rng,
            game_ended: false,
            result: None,
            frame_count: 0,
        };
        session.select_car(car_type);
        info!(
            car = car_type.name(),
            advantage = car_type.advantage(),
            "race session created"
        );
        session
    }

    pub fn from_selection(selection: Option<&str>, projector: Projector, rng: R) -> Result<Self> {
        let car_type: CarType = selection.ok_or(RaceError::NoCarSelected)?.parse()?;
        Ok(Self::new(car_type, projector, rng))
    }

    /* Give the player the chosen car and repaint any opponent driving the
     * same model, so nobody looks like the player. Stats of opponents stay. */
    fn select_car(&mut self, car_type: CarType) {
        self.cars[PLAYER_ID].set_car_type(car_type);

        let alternatives: Vec<CarType> = CarType::ALL
            .into_iter()
            .filter(|&other| other != car_type)
            .collect();
        let used: Vec<CarType> = self.opponents().map(|car| car.car_type).collect();
        let repaint = alternatives
            .iter()
            .copied()
            .find(|other| !used.contains(other))
            .unwrap_or(alternatives[0]);

        for car in self.cars.iter_mut().filter(|car| !car.is_player()) {
            if car.car_type == car_type {
                car.color = repaint.color();
            }
        }
    }

    pub fn player(&self) -> &CarEntity {
        &self.cars[PLAYER_ID]
    }

    pub fn opponents(&self) -> impl Iterator<Item = &CarEntity> {
        self.cars.iter().filter(|car| !car.is_player())
    }

    pub fn phase(&self) -> GamePhase {
        self.countdown.phase()
    }

    pub fn has_ended(&self) -> bool {
        self.game_ended
    }

    pub fn result(&self) -> Option<&RaceResult> {
        self.result.as_ref()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn start_countdown(&mut self, now_ms: f64) -> Result<()> {
        self.countdown.start(now_ms)?;
        info!("countdown started");
        Ok(())
    }

    // Poll the countdown. The poll that hands over to the race seeds the
    // frame timer, so a frame stepped at that same instant has dt 0.
    pub fn poll_countdown(&mut self, now_ms: f64) -> GamePhase {
        let before = self.countdown.phase();
        let after = self.countdown.advance(now_ms);

        if before != after {
            debug!(?after, "countdown moved on");
            if after == GamePhase::Racing && !self.timer.is_seeded() {
                self.timer.seed(now_ms);
                info!("race started");
            }
        }
        after
    }

    /* Run one frame of the race. Order matters: cars move, the road follows
     * the player, then laps are checked car by car (player first) and the
     * standings recomputed from the result. */
    pub fn step(&mut self, timestamp_ms: f64, inputs: PlayerInputs) -> Result<FrameReport> {
        if self.game_ended {
            return Err(RaceError::RaceOver);
        }
        if self.countdown.phase() != GamePhase::Racing {
            return Err(RaceError::RaceNotStarted);
        }

        let time_step = self.timer.tick(timestamp_ms);
        self.frame_count += 1;

        for car in self.cars.iter_mut() {
            car.do_physics_step(time_step, &inputs, &mut self.rng);
        }

        let player_speed = self.cars[PLAYER_ID].speed;
        self.track.update(time_step, player_speed, &mut self.rng);

        // the standings are frozen the moment the first car finishes, before
        // anyone later in the order gets their laps counted
        let mut events = Vec::new();
        for id in 0..self.cars.len() {
            for event in self.circuit.update_laps(&mut self.cars[id], &mut self.game_ended) {
                match event {
                    LapEvent::CheckpointCrossed(checkpoint) => {
                        trace!(car = id, checkpoint, "checkpoint crossed")
                    }
                    LapEvent::LapCompleted(lap) => debug!(car = id, lap, "lap completed"),
                    LapEvent::RaceFinished => {
                        info!(car = id, "chequered flag");
                        self.finish_race(rank_of(&self.cars, PLAYER_ID));
                    }
                }
                events.push((id, event));
            }
        }

        let player_rank = match &self.result {
            Some(result) => result.final_rank,
            None => rank_of(&self.cars, PLAYER_ID),
        };

        Ok(FrameReport {
            time_step,
            events,
            player_rank,
            race_ended: self.game_ended,
        })
    }

    fn finish_race(&mut self, player_rank: Placement) {
        let result = RaceResult::new(player_rank, standings(&self.cars));
        info!(
            rank = %result.rank_label,
            won = result.won,
            frames = self.frame_count,
            "race finished"
        );
        self.result = Some(result);
    }

    pub fn hud(&self) -> HudSnapshot {
        let player = self.player();
        let rank = rank_of(&self.cars, PLAYER_ID);
        HudSnapshot {
            speed: player.speed_display(),
            rank,
            rank_label: ordinal_label(rank),
            lap_label: player.lap_info.lap_label(),
            countdown: self.countdown.overlay(),
        }
    }

    pub fn render(&self) -> Frame {
        render_frame(
            &self.projector,
            &self.track,
            &self.cars,
            self.countdown.overlay(),
        )
    }
}
