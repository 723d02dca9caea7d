pub mod errors;
pub mod filter;
pub mod player;
pub mod stats;

pub use errors::Result;
