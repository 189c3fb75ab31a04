use crate::checkpoints::LapEvent;
use crate::physics::car_entity::CarEntity;

// anything on the track that reacts to a car driving through it
pub trait TriggerEntity {
    // did the car pass this trigger during its most recent step?
    fn is_crossed_by(&self, car: &CarEntity) -> bool;

    fn trigger(&self, car: &mut CarEntity) -> Option<LapEvent>;
}
