mod helpers;
mod player_handler;

pub use helpers::*;
pub use player_handler::*;
