use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub frame_interval_ms: u64,
    pub realtime: bool,
    pub player_car: Option<String>,
    pub rng_seed: Option<u64>,
    pub screen_width: f64,
    pub screen_height: f64,
    pub max_race_frames: u64,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("frame_interval_ms", 16)?
            .set_default("realtime", true)?
            .set_default("screen_width", 800.0)?
            .set_default("screen_height", 600.0)?
            .set_default("max_race_frames", 100_000)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
