use serde::{Deserialize, Serialize};

use super::choices::CarType;
use super::lap_info::LapNumber;
use crate::CarID;

pub type Placement = usize;

const SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

// 1 -> "1st", 2 -> "2nd", 3 -> "3rd", anything past that -> "th"
pub fn ordinal_label(rank: Placement) -> String {
    let suffix_index = usize::min(rank.saturating_sub(1), SUFFIXES.len() - 1);
    format!("{}{}", rank, SUFFIXES[suffix_index])
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Standing {
    pub rank: Placement,
    pub car: CarID,
    pub car_type: CarType,
    pub laps: LapNumber,
    pub track_position: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RaceResult {
    pub final_rank: Placement,
    pub rank_label: String,
    pub won: bool,
    pub standings: Vec<Standing>,
}

impl RaceResult {
    pub fn new(final_rank: Placement, standings: Vec<Standing>) -> Self {
        Self {
            final_rank,
            rank_label: ordinal_label(final_rank),
            won: final_rank == 1,
            standings,
        }
    }

    pub fn headline(&self) -> &'static str {
        if self.won {
            "YOU WIN!"
        } else {
            "Race Complete!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_labels() {
        assert_eq!(ordinal_label(1), "1st");
        assert_eq!(ordinal_label(2), "2nd");
        assert_eq!(ordinal_label(3), "3rd");
        assert_eq!(ordinal_label(4), "4th");
        assert_eq!(ordinal_label(11), "11th");
    }

    #[test]
    fn test_win_only_in_first() {
        assert!(RaceResult::new(1, vec![]).won);
        let second = RaceResult::new(2, vec![]);
        assert!(!second.won);
        assert_eq!(second.rank_label, "2nd");
        assert_eq!(second.headline(), "Race Complete!");
    }
}
