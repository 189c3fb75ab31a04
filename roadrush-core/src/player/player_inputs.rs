use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Accelerate(bool),
    Brake(bool),
    SteerLeft(bool),
    SteerRight(bool),
}

// PlayerInputs is written by whatever owns the keyboard/touch handlers and read
// once per frame by the simulation; only the latest state matters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInputs {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl PlayerInputs {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Accelerate(held) => self.accelerate = held,
            InputEvent::Brake(held) => self.brake = held,
            InputEvent::SteerLeft(held) => self.steer_left = held,
            InputEvent::SteerRight(held) => self.steer_right = held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_state_wins() {
        let mut inputs = PlayerInputs::default();
        inputs.apply(InputEvent::Accelerate(true));
        inputs.apply(InputEvent::SteerLeft(true));
        inputs.apply(InputEvent::Accelerate(false));
        inputs.apply(InputEvent::Accelerate(true));
        assert_eq!(
            inputs,
            PlayerInputs {
                accelerate: true,
                brake: false,
                steer_left: true,
                steer_right: false,
            }
        );
    }
}
