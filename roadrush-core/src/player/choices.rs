use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RaceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // lighten (positive) or darken (negative) every channel by a percentage
    // of full scale, saturating at both ends
    pub fn shade(&self, percent: f64) -> Color {
        let amount = (2.55 * percent).round() as i32;
        let channel = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Color::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarStats {
    pub max_speed: f64,
    pub acceleration: f64,
    pub turn_speed: f64,
    pub friction: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    Speedster,
    Balanced,
    Accelerator,
    Handler,
}

impl CarType {
    // catalogue order; recolouring opponents walks the alternatives in this order
    pub const ALL: [CarType; 4] = [
        CarType::Speedster,
        CarType::Balanced,
        CarType::Accelerator,
        CarType::Handler,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CarType::Speedster => "speedster",
            CarType::Balanced => "balanced",
            CarType::Accelerator => "accelerator",
            CarType::Handler => "handler",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CarType::Speedster => "Speedster",
            CarType::Balanced => "All-Rounder",
            CarType::Accelerator => "Rocket",
            CarType::Handler => "Drifter",
        }
    }

    pub fn advantage(&self) -> &'static str {
        match self {
            CarType::Speedster => "Highest top speed for long straightaways",
            CarType::Balanced => "Well-balanced for all situations",
            CarType::Accelerator => "Quick off the line, great for overtaking",
            CarType::Handler => "Superior control for tight maneuvering",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            CarType::Speedster => Color::new(0xff, 0x00, 0x00),
            CarType::Balanced => Color::new(0x00, 0xaa, 0x00),
            CarType::Accelerator => Color::new(0xff, 0xdd, 0x00),
            CarType::Handler => Color::new(0x00, 0x66, 0xff),
        }
    }

    pub fn stats(&self) -> CarStats {
        match self {
            CarType::Speedster => CarStats {
                max_speed: 14.0,
                acceleration: 0.25,
                turn_speed: 3.5,
                friction: 0.04,
            },
            CarType::Balanced => CarStats {
                max_speed: 11.0,
                acceleration: 0.3,
                turn_speed: 4.5,
                friction: 0.05,
            },
            CarType::Accelerator => CarStats {
                max_speed: 10.0,
                acceleration: 0.45,
                turn_speed: 4.0,
                friction: 0.06,
            },
            CarType::Handler => CarStats {
                max_speed: 11.0,
                acceleration: 0.28,
                turn_speed: 6.0,
                friction: 0.055,
            },
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// accepts either the catalogue key ("handler") or the display name ("Drifter")
impl FromStr for CarType {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CarType::ALL
            .into_iter()
            .find(|car| {
                car.key().eq_ignore_ascii_case(wanted) || car.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| RaceError::UnknownCarType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_key_and_name() {
        assert_eq!("speedster".parse::<CarType>(), Ok(CarType::Speedster));
        assert_eq!("All-Rounder".parse::<CarType>(), Ok(CarType::Balanced));
        assert_eq!(" rocket ".parse::<CarType>(), Ok(CarType::Accelerator));
        assert_eq!("DRIFTER".parse::<CarType>(), Ok(CarType::Handler));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "tractor".parse::<CarType>(),
            Err(RaceError::UnknownCarType("tractor".to_string()))
        );
    }

    #[test]
    fn test_shade_saturates() {
        let red = CarType::Speedster.color();
        assert_eq!(red.shade(-40.0), Color::new(153, 0, 0));
        // 2.55 * 50 lands just under 127.5, so the step rounds down to 127
        assert_eq!(red.shade(50.0), Color::new(0xff, 0x7f, 0x7f));
        assert_eq!(red.to_string(), "#ff0000");
    }
}
