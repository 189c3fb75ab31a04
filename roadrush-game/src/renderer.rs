use glam::DVec2;
use serde::Serialize;

use roadrush_core::player::choices::Color;
use roadrush_core::CarID;

use crate::game::phase::CountdownOverlay;
use crate::physics::car_entity::CarEntity;
use crate::physics::constants::PLAYER_SCREEN_OFFSET;
use crate::track::{Projector, TrackState};

const SKY_TOP: Color = Color::new(0x87, 0xce, 0xeb);
const SKY_BOTTOM: Color = Color::new(0xe0, 0xf6, 0xff);
const GRASS: Color = Color::new(0x2d, 0x50, 0x16);
const ROAD: Color = Color::new(0x40, 0x40, 0x40);
const LINE: Color = Color::new(0xff, 0xff, 0xff);
const RUMBLE: Color = Color::new(0xcc, 0x22, 0x22);
const HILLS: Color = Color::new(0x4a, 0x7c, 0x4e);

const ROW_STEP: f64 = 2.0;
const HILL_SPACING: f64 = 50.0;
const HILL_HEIGHT: f64 = 30.0;
const POST_HEIGHT: f64 = 40.0;

pub const CAR_SIZE: DVec2 = glam::const_dvec2!([40.0, 70.0]);
// cars near the horizon still get a few pixels
const MIN_CAR_SCALE: f64 = 0.15;

// The renderer doesn't draw; it lists what to draw, back to front, for
// whichever surface is hosting the game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DrawItem {
    Sky {
        height: f64,
        top: Color,
        bottom: Color,
    },
    Grass {
        top: f64,
        color: Color,
    },
    RoadSlice {
        y: f64,
        height: f64,
        center_x: f64,
        half_width: f64,
        road: Color,
        grass: Color,
        rumble: Color,
        lane_dash: bool,
    },
    RoadsidePost {
        base: DVec2,
        height: f64,
    },
    Hills {
        points: Vec<DVec2>,
        color: Color,
    },
    Car {
        car: CarID,
        center: DVec2,
        size: DVec2,
        color: Color,
    },
    Hood {
        color: Color,
        side_color: Color,
        shadow_color: Color,
    },
    Countdown(CountdownOverlay),
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Frame {
    pub items: Vec<DrawItem>,
}

pub fn player_screen_y(projector: &Projector) -> f64 {
    projector.screen_height - PLAYER_SCREEN_OFFSET
}

pub fn render_frame(
    projector: &Projector,
    track: &TrackState,
    cars: &[CarEntity],
    overlay: Option<CountdownOverlay>,
) -> Frame {
    let mut items = vec![
        DrawItem::Sky {
            height: projector.horizon_y,
            top: SKY_TOP,
            bottom: SKY_BOTTOM,
        },
        DrawItem::Grass {
            top: projector.horizon_y,
            color: GRASS,
        },
    ];

    draw_road(projector, track, &mut items);
    items.push(draw_hills(projector, track));

    if let Some(player) = cars.iter().find(|car| car.is_player()) {
        draw_opponents(projector, track, cars, player, &mut items);
        items.push(DrawItem::Hood {
            color: player.color,
            side_color: player.color.shade(-50.0),
            shadow_color: player.color.shade(-40.0),
        });
    }

    if let Some(overlay) = overlay {
        items.push(DrawItem::Countdown(overlay));
    }

    Frame { items }
}

// horizon first so nearer slices paint over farther ones
fn draw_road(projector: &Projector, track: &TrackState, items: &mut Vec<DrawItem>) {
    let mut last_segment = None;
    let mut y = projector.horizon_y.floor() + 1.0;

    while y < projector.screen_height {
        if let Some(row) = projector.project_row(y, track) {
            let grass = if row.segment == 0 {
                GRASS
            } else {
                GRASS.shade(5.0)
            };
            let rumble = if row.segment == 0 { LINE } else { RUMBLE };

            items.push(DrawItem::RoadSlice {
                y: row.y,
                height: ROW_STEP,
                center_x: row.center_x,
                half_width: row.half_width,
                road: ROAD,
                grass,
                rumble,
                lane_dash: row.segment == 0,
            });

            // a pair of posts wherever a band starts
            if last_segment.map_or(false, |segment| segment != row.segment) {
                let height = POST_HEIGHT * row.progress;
                let offset = row.half_width * 1.1;
                items.push(DrawItem::RoadsidePost {
                    base: DVec2::new(row.center_x - offset, row.y),
                    height,
                });
                items.push(DrawItem::RoadsidePost {
                    base: DVec2::new(row.center_x + offset, row.y),
                    height,
                });
            }
            last_segment = Some(row.segment);
        }
        y += ROW_STEP;
    }
}

fn draw_hills(projector: &Projector, track: &TrackState) -> DrawItem {
    let mut points = Vec::new();
    let mut x = 0.0;
    while x < projector.screen_width {
        let height = (x * 0.01 + track.track_offset * 0.001).sin() * HILL_HEIGHT;
        points.push(DVec2::new(x, projector.horizon_y + height));
        x += HILL_SPACING;
    }
    DrawItem::Hills {
        points,
        color: HILLS,
    }
}

fn draw_opponents(
    projector: &Projector,
    track: &TrackState,
    cars: &[CarEntity],
    player: &CarEntity,
    items: &mut Vec<DrawItem>,
) {
    let player_y = player_screen_y(projector);

    let mut visible: Vec<(CarID, f64)> = cars
        .iter()
        .enumerate()
        .filter(|(_, car)| !car.is_player())
        .map(|(id, car)| (id, car.screen_y_relative_to(player, player_y)))
        .filter(|&(_, y)| y >= -CAR_SIZE.y && y <= projector.screen_height + CAR_SIZE.y)
        .collect();
    // farthest (highest on screen) first
    visible.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    for (id, y) in visible {
        let car = &cars[id];
        let scale = projector.progress_at(y).clamp(MIN_CAR_SCALE, 1.0);
        let (center_x, half_width) = projector.road_at(y, track);
        let lane_offset = car.lane * (half_width * 2.0 / 3.0);

        items.push(DrawItem::Car {
            car: id,
            center: DVec2::new(center_x + lane_offset, y),
            size: CAR_SIZE * scale,
            color: car.color,
        });
    }
}
