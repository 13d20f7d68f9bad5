//! Core game state, constants, and the tick pipeline.

pub mod constants;
pub mod game_state;
pub mod offline;
pub mod scrap;
pub mod tick;

pub use constants::*;
pub use game_state::{GameState, PetTier, Populations};
pub use offline::{process_offline_progression, OfflineReport};
pub use tick::{game_tick, TickEvent};
