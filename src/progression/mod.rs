//! Pet tier progression: probabilistic ticks, manual combines, feeding.

pub mod combination;
pub mod engine;
pub mod feeding;

pub use combination::{can_combine, combine_pets, CombineError};
pub use engine::{process_promotion_tick, TickPromotions};
pub use feeding::{feed, FeedBoost, FeedResult};
