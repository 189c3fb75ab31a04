pub mod choices;
pub mod lap_info;
pub mod placement;
pub mod player_inputs;
