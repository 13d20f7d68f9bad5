//! Probabilistic per-tick tier promotion.
//!
//! Each tick, every pet independently rolls against its tier's transition
//! probability. Both edges (AI→Big, Big→Singularity) roll against the
//! pre-tick counts, so a pet can climb at most one tier per tick.

use crate::core::constants::{BASE_AI_PET_SINGULARITY_RATE, BASE_BIG_PET_SINGULARITY_RATE};
use crate::core::game_state::GameState;
use rand::Rng;

/// How many pets crossed each edge in a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickPromotions {
    pub ai_to_big: u64,
    pub big_to_singularity: u64,
}

impl TickPromotions {
    pub fn any(&self) -> bool {
        self.ai_to_big > 0 || self.big_to_singularity > 0
    }
}

/// Applies the rate multiplier from upgrades: `base * (1 + multiplier)`.
pub fn effective_rate(base_rate: f64, rate_multiplier: f64) -> f64 {
    base_rate * (1.0 + rate_multiplier)
}

/// Rolls `count` independent Bernoulli trials at `probability`.
///
/// A probability at or above 1.0 promotes everything; at or below 0.0
/// nothing. No clamping is needed because `rng.gen::<f64>()` is in [0, 1).
pub fn roll_promotions(count: u64, probability: f64, rng: &mut impl Rng) -> u64 {
    if count == 0 || probability <= 0.0 {
        return 0;
    }
    let mut promoted = 0;
    for _ in 0..count {
        if rng.gen::<f64>() < probability {
            promoted += 1;
        }
    }
    promoted
}

/// Processes singularity transitions for one tick.
///
/// `delta_seconds = 0` yields zero promotions; the function cannot fail.
/// Deterministic given a fixed RNG, which is how the tests drive it.
pub fn process_promotion_tick(
    state: &GameState,
    delta_seconds: f64,
    rate_multiplier: f64,
    rng: &mut impl Rng,
) -> (GameState, TickPromotions) {
    let ai_probability =
        effective_rate(BASE_AI_PET_SINGULARITY_RATE, rate_multiplier) * delta_seconds;
    let big_probability =
        effective_rate(BASE_BIG_PET_SINGULARITY_RATE, rate_multiplier) * delta_seconds;

    // Both edges roll against the pre-tick counts
    let promotions = TickPromotions {
        ai_to_big: roll_promotions(state.populations.ai_pets, ai_probability, rng),
        big_to_singularity: roll_promotions(state.populations.big_pets, big_probability, rng),
    };

    let mut next = state.clone();
    next.populations.ai_pets -= promotions.ai_to_big;
    next.populations.big_pets =
        next.populations.big_pets + promotions.ai_to_big - promotions.big_to_singularity;
    next.populations.singularity_pets += promotions.big_to_singularity;

    (next, promotions)
}
