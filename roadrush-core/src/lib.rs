pub mod error;
pub mod player;
mod settings;

pub use settings::{Settings, GLOBAL_CONFIG};

// index into a race session's car list; the player is always 0
pub type CarID = usize;
