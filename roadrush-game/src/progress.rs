use std::cmp::Ordering;

use roadrush_core::player::{
    lap_info::LapNumber,
    placement::{Placement, Standing},
};
use roadrush_core::CarID;

use crate::physics::car_entity::CarEntity;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaceProgress {
    pub laps: LapNumber,
    pub track_position: f64,
}

impl RaceProgress {
    pub fn of(car: &CarEntity) -> Self {
        Self {
            laps: car.lap_info.laps,
            track_position: car.track_position,
        }
    }

    // Less means further ahead: more laps first, then further along the
    // (unwrapped) track. Anything else is a tie.
    pub fn cmp(&self, other: &Self) -> Ordering {
        if self.laps != other.laps {
            self.laps.cmp(&other.laps).reverse()
        } else {
            self.track_position.total_cmp(&other.track_position).reverse()
        }
    }
}

// car ids ordered leader first; ties keep their car order
pub fn running_order(cars: &[CarEntity]) -> Vec<CarID> {
    let mut order: Vec<CarID> = (0..cars.len()).collect();
    order.sort_by(|&a, &b| RaceProgress::of(&cars[a]).cmp(&RaceProgress::of(&cars[b])));
    order
}

pub fn rank_of(cars: &[CarEntity], car: CarID) -> Placement {
    running_order(cars)
        .iter()
        .position(|&id| id == car)
        .map_or(cars.len(), |index| index + 1)
}

pub fn standings(cars: &[CarEntity]) -> Vec<Standing> {
    running_order(cars)
        .into_iter()
        .enumerate()
        .map(|(index, id)| Standing {
            rank: index + 1,
            car: id,
            car_type: cars[id].car_type,
            laps: cars[id].lap_info.laps,
            track_position: cars[id].track_position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use roadrush_core::player::choices::CarType;

    use super::*;

    fn car_at(laps: LapNumber, track_position: f64) -> CarEntity {
        let mut car = CarEntity::new_opponent(CarType::Balanced, 0.0, 9.0, track_position);
        car.lap_info.laps = laps;
        car
    }

    #[test]
    fn test_position_breaks_equal_laps() {
        let cars = vec![car_at(1, 7000.0), car_at(1, 7500.0)];
        assert_eq!(running_order(&cars), vec![1, 0]);
        assert_eq!(rank_of(&cars, 0), 2);
    }

    #[test]
    fn test_laps_dominate_position() {
        // the car with more laps leads even though it is behind on raw distance
        let cars = vec![car_at(1, 9000.0), car_at(2, 8000.0)];
        assert_eq!(running_order(&cars), vec![1, 0]);
    }

    #[test]
    fn test_ties_keep_car_order() {
        let cars = vec![car_at(0, 100.0), car_at(0, 100.0), car_at(0, 100.0)];
        assert_eq!(running_order(&cars), vec![0, 1, 2]);
        assert_eq!(rank_of(&cars, 0), 1);
    }

    #[test]
    fn test_standings_are_ranked() {
        let cars = vec![car_at(0, 10.0), car_at(0, 30.0), car_at(0, 20.0)];
        let ranks: Vec<(Placement, CarID)> = standings(&cars)
            .iter()
            .map(|standing| (standing.rank, standing.car))
            .collect();
        assert_eq!(ranks, vec![(1, 1), (2, 2), (3, 0)]);
    }
}
