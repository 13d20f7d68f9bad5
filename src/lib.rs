//! Menagerie - Tiered pet population and economy engine.
//!
//! AI Pets are fed into existence, passively generate scrap, and
//! probabilistically ascend through the singularity chain:
//! AI Pet -> Big Pet -> Singularity Pet. Shop upgrades stack additive
//! bonuses onto generation and progression, and population milestones
//! permanently unlock toggleable skills.
//!
//! Every operation is a pure transition over a [`GameState`] snapshot;
//! [`session::GameSession`] owns the single live snapshot and
//! [`driver::TickDriver`] advances it once per second.

pub mod core;
pub mod driver;
pub mod events;
pub mod progression;
pub mod save_manager;
pub mod session;
pub mod simulator;
pub mod skills;
pub mod upgrades;

pub use crate::core::constants::TICK_INTERVAL_MS;
pub use crate::core::game_state::{GameState, PetTier, Populations};
pub use crate::core::tick::{game_tick, TickEvent};
