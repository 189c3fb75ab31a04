use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roadrush_core::player::placement::RaceResult;
use roadrush_core::GLOBAL_CONFIG;

use game::clock::{Clock, ManualClock, SystemClock};
use game::host::{autopilot, RaceHost};
use game::RaceSession;
use track::Projector;

mod checkpoints;
mod game;
mod physics;
mod progress;
mod renderer;
mod timing;
mod track;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roadrush_game=info".parse()?))
        .init();

    info!(seed = ?GLOBAL_CONFIG.rng_seed, realtime = GLOBAL_CONFIG.realtime, "starting race");
    let rng = match GLOBAL_CONFIG.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let projector = Projector::new(GLOBAL_CONFIG.screen_width, GLOBAL_CONFIG.screen_height);
    let session = RaceSession::from_selection(GLOBAL_CONFIG.player_car.as_deref(), projector, rng)
        .context("no race without a car")?;

    // without a display to pace us, the race runs as fast as it can
    let result = if GLOBAL_CONFIG.realtime {
        run_race(session, &SystemClock::new())?
    } else {
        run_race(session, &ManualClock::new(0.0))?
    };

    match result {
        Some(result) => {
            info!("{}", result.headline());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        None => warn!(
            max_frames = GLOBAL_CONFIG.max_race_frames,
            "nobody finished the race"
        ),
    }
    Ok(())
}

fn run_race<C: Clock>(session: RaceSession<StdRng>, clock: &C) -> Result<Option<RaceResult>> {
    let mut host = RaceHost::new(
        session,
        clock,
        GLOBAL_CONFIG.frame_interval_ms as f64,
        GLOBAL_CONFIG.max_race_frames,
    );
    let result = host.run(autopilot)?;
    info!(frames = host.session().frame_count(), "race loop stopped");
    Ok(result)
}
