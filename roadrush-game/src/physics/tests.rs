use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use roadrush_core::player::choices::CarType;
use roadrush_core::player::player_inputs::PlayerInputs;

use crate::physics::car_entity::{CarEntity, CarRole, OpponentBrain};
use crate::physics::constants::LANE_LIMIT;

fn get_starting_player() -> CarEntity {
    CarEntity::new_player(CarType::Balanced)
}

fn accelerating() -> PlayerInputs {
    PlayerInputs {
        accelerate: true,
        ..PlayerInputs::default()
    }
}

fn braking() -> PlayerInputs {
    PlayerInputs {
        brake: true,
        ..PlayerInputs::default()
    }
}

// the player never touches the random source
fn no_rng() -> StepRng {
    StepRng::new(0, 0)
}

#[test]
fn test_accelerating() {
    let mut car = get_starting_player();
    car.track_position = 100.0;
    car.do_physics_step(1.0, &accelerating(), &mut no_rng());

    assert!((car.speed - 0.3).abs() < 1e-12);
    // moved by the new speed, remembering where it came from
    assert_eq!(car.last_track_position, 100.0);
    assert!((car.track_position - 100.3).abs() < 1e-12);
}

#[test]
fn test_speed_never_exceeds_max() {
    let mut car = get_starting_player();
    for _ in 0..500 {
        car.do_physics_step(3.0, &accelerating(), &mut no_rng());
        assert!(car.speed <= car.stats.max_speed);
    }
    // at top speed the throttle stops pulling, so friction gets one frame in
    // before the next acceleration tops it up again
    let floor = car.stats.max_speed - car.stats.friction * 3.0;
    assert!(car.speed >= floor && car.speed <= car.stats.max_speed);

    car.do_physics_step(3.0, &accelerating(), &mut no_rng());
    car.do_physics_step(3.0, &accelerating(), &mut no_rng());
    assert!(car.speed >= floor && car.speed <= car.stats.max_speed);
}

#[test]
fn test_top_speed_alternates_with_friction() {
    let mut car = get_starting_player();
    car.speed = car.stats.max_speed;
    car.do_physics_step(3.0, &accelerating(), &mut no_rng());
    let coasted = car.stats.max_speed - car.stats.friction * 3.0;
    assert!((car.speed - coasted).abs() < 1e-12);

    car.do_physics_step(3.0, &accelerating(), &mut no_rng());
    assert_eq!(car.speed, car.stats.max_speed);
}

#[test]
fn test_braking_into_reverse_is_limited() {
    let mut car = get_starting_player();
    car.speed = 2.0;
    car.do_physics_step(1.0, &braking(), &mut no_rng());
    assert!((car.speed - (2.0 - 0.45)).abs() < 1e-12);

    for _ in 0..500 {
        car.do_physics_step(3.0, &braking(), &mut no_rng());
        assert!(car.speed >= -car.stats.max_speed / 2.0);
    }
    let reverse_limit = -car.stats.max_speed / 2.0;
    assert!(car.speed <= reverse_limit + car.stats.friction * 3.0);
    // reversing means going backwards along the track
    assert!(car.track_position < car.last_track_position);
}

#[test]
fn test_accelerate_wins_over_brake() {
    let mut car = get_starting_player();
    let both = PlayerInputs {
        accelerate: true,
        brake: true,
        ..PlayerInputs::default()
    };
    car.do_physics_step(1.0, &both, &mut no_rng());
    assert!(car.speed > 0.0);
}

#[test]
fn test_friction_does_not_overshoot() {
    let mut car = get_starting_player();
    car.speed = 0.01;
    car.do_physics_step(1.0, &PlayerInputs::default(), &mut no_rng());
    assert_eq!(car.speed, 0.0);

    car.speed = -0.01;
    car.do_physics_step(1.0, &PlayerInputs::default(), &mut no_rng());
    assert_eq!(car.speed, 0.0);

    car.speed = 5.0;
    car.do_physics_step(2.0, &PlayerInputs::default(), &mut no_rng());
    assert!((car.speed - (5.0 - 0.1)).abs() < 1e-12);
}

#[test]
fn test_lane_stays_on_road() {
    let mut car = get_starting_player();
    let left = PlayerInputs {
        steer_left: true,
        ..PlayerInputs::default()
    };
    let right = PlayerInputs {
        steer_right: true,
        ..PlayerInputs::default()
    };

    for _ in 0..1000 {
        car.do_physics_step(3.0, &left, &mut no_rng());
        assert!(car.lane >= -LANE_LIMIT && car.lane <= LANE_LIMIT);
    }
    assert_eq!(car.lane, -LANE_LIMIT);

    for _ in 0..1000 {
        car.do_physics_step(3.0, &right, &mut no_rng());
        assert!(car.lane >= -LANE_LIMIT && car.lane <= LANE_LIMIT);
    }
    assert_eq!(car.lane, LANE_LIMIT);
}

#[test]
fn test_steering_rate() {
    let mut car = get_starting_player();
    let right = PlayerInputs {
        steer_right: true,
        ..PlayerInputs::default()
    };
    car.do_physics_step(2.0, &right, &mut no_rng());
    assert!((car.lane - 4.5 * 0.015 * 2.0).abs() < 1e-12);
}

#[test]
fn test_opponent_speed_band() {
    let mut rng = StdRng::seed_from_u64(42);
    for car_type in CarType::ALL {
        let mut car = CarEntity::new_opponent(car_type, 0.0, 0.0, 0.0);
        let (min_speed, max_speed) = car.opponent_speed_band();

        for frame in 0..5_000 {
            let dt = if frame % 7 == 0 { 3.0 } else { 1.0 };
            car.do_physics_step(dt, &accelerating(), &mut rng);
            assert!(car.speed >= min_speed && car.speed <= max_speed);
            assert!(car.lane >= -LANE_LIMIT && car.lane <= LANE_LIMIT);
            assert!(car.track_position > car.last_track_position);
        }
    }
}

#[test]
fn test_opponent_ignores_inputs() {
    let mut a = CarEntity::new_opponent(CarType::Speedster, 1.0, 11.0, 300.0);
    let mut b = a.clone();
    a.do_physics_step(1.0, &accelerating(), &mut StdRng::seed_from_u64(3));
    b.do_physics_step(1.0, &braking(), &mut StdRng::seed_from_u64(3));
    assert_eq!(a.speed, b.speed);
    assert_eq!(a.lane, b.lane);
}

#[test]
fn test_opponent_seeks_and_snaps_to_target_lane() {
    // an rng stuck near 1.0 never asks for a lane change
    let mut rng = StepRng::new(u64::MAX, 0);
    let mut car = CarEntity::new_opponent(CarType::Accelerator, 0.0, 9.0, 450.0);
    car.role = CarRole::Opponent(OpponentBrain { target_lane: 1.0 });

    car.do_physics_step(1.0, &PlayerInputs::default(), &mut rng);
    assert!((car.lane - 0.03).abs() < 1e-12);

    for _ in 0..100 {
        car.do_physics_step(1.0, &PlayerInputs::default(), &mut rng);
    }
    assert_eq!(car.lane, 1.0);
}

#[test]
fn test_handler_changes_lane_faster() {
    let mut rng = StepRng::new(u64::MAX, 0);
    let mut drifter = CarEntity::new_opponent(CarType::Handler, 0.0, 9.0, 150.0);
    drifter.role = CarRole::Opponent(OpponentBrain { target_lane: -1.0 });

    drifter.do_physics_step(1.0, &PlayerInputs::default(), &mut rng);
    assert!((drifter.lane + 0.05).abs() < 1e-12);
}

#[test]
fn test_opponent_screen_position_follows_gap() {
    let mut player = get_starting_player();
    player.track_position = 1000.0;
    let ahead = CarEntity::new_opponent(CarType::Handler, -1.0, 9.5, 1150.0);
    let behind = CarEntity::new_opponent(CarType::Handler, -1.0, 9.5, 900.0);

    assert_eq!(ahead.screen_y_relative_to(&player, 520.0), 370.0);
    assert_eq!(behind.screen_y_relative_to(&player, 520.0), 620.0);
}

#[test]
fn test_speed_display() {
    let mut car = get_starting_player();
    car.speed = -3.26;
    assert_eq!(car.speed_display(), 33);
}
