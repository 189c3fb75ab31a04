use serde::Serialize;

use roadrush_core::error::{RaceError, Result};
use roadrush_core::player::choices::Color;

pub const COUNTDOWN_FROM: i8 = 3;
pub const COUNTDOWN_TICK_MS: f64 = 1000.0;
// pause between the countdown interval ending and the race actually starting
pub const GO_GRACE_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    // players are choosing their car; nothing is moving
    Idle,
    // the lights are counting down; the number is what's shown
    Counting(u8),
    // "GO!" is on screen but the frame loop hasn't been handed over yet
    Go,
    // the frame loop owns the race from here until someone finishes
    Racing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LightState {
    Dark,
    Lit,
    Spent,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountdownOverlay {
    pub text: String,
    pub color: Color,
    pub red_lights: [LightState; 3],
    pub green_light: bool,
}

const COUNTING_COLOR: Color = Color::new(0xff, 0xff, 0x00);
const GO_COLOR: Color = Color::new(0x00, 0xff, 0x00);

/*
 * The pre-race countdown. It runs off whatever clock it's given rather than
 * its own timer: every `advance` recomputes the phase from the time since
 * `start`, so it doesn't matter how often (or how irregularly) it's polled.
 */
pub struct Countdown {
    phase: GamePhase,
    // the number on the lights; dips to -1 for the
    // grace period after "GO!"
    number: i8,
    started_at_ms: Option<f64>,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            number: COUNTDOWN_FROM,
            started_at_ms: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn start(&mut self, now_ms: f64) -> Result<()> {
        if self.phase != GamePhase::Idle {
            return Err(RaceError::CountdownAlreadyStarted);
        }
        self.started_at_ms = Some(now_ms);
        self.number = COUNTDOWN_FROM;
        self.phase = GamePhase::Counting(COUNTDOWN_FROM as u8);
        Ok(())
    }

    // instant at which the race is handed to the frame loop
    pub fn race_start_ms(&self) -> Option<f64> {
        self.started_at_ms
            .map(|start| start + (COUNTDOWN_FROM as f64 + 1.0) * COUNTDOWN_TICK_MS + GO_GRACE_MS)
    }

    pub fn advance(&mut self, now_ms: f64) -> GamePhase {
        let (started_at, race_start) = match (self.started_at_ms, self.race_start_ms()) {
            (Some(started_at), Some(race_start)) => (started_at, race_start),
            _ => return self.phase,
        };
        if self.phase == GamePhase::Racing {
            return self.phase;
        }

        let ticks = ((now_ms - started_at) / COUNTDOWN_TICK_MS).floor().max(0.0);
        self.number = (COUNTDOWN_FROM as f64 - ticks).max(-1.0) as i8;

        self.phase = if now_ms >= race_start {
            GamePhase::Racing
        } else if self.number > 0 {
            GamePhase::Counting(self.number as u8)
        } else {
            GamePhase::Go
        };
        self.phase
    }

    pub fn overlay(&self) -> Option<CountdownOverlay> {
        match self.phase {
            GamePhase::Counting(_) | GamePhase::Go => {}
            GamePhase::Idle | GamePhase::Racing => return None,
        }

        let (text, color) = if self.number > 0 {
            (self.number.to_string(), COUNTING_COLOR)
        } else {
            ("GO!".to_string(), GO_COLOR)
        };

        // light i belongs to number 3 - i: on while that number shows,
        // spent once the count has gone past it
        let red_lights = [0, 1, 2].map(|i| {
            let light_number = COUNTDOWN_FROM - i;
            if self.number == light_number {
                LightState::Lit
            } else if self.number < light_number {
                LightState::Spent
            } else {
                LightState::Dark
            }
        });

        Some(CountdownOverlay {
            text,
            color,
            red_lights,
            green_light: self.number == 0,
        })
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
