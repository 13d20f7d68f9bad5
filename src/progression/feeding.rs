//! The feed action: the primary manual input.
//!
//! Every feed adds AI Pets (one plus any flat upgrade bonus) and then
//! rolls a small chance to instantly promote one pet, rewarding active
//! play over pure idling. The increment and the boost fold into a single
//! returned snapshot.

use crate::core::constants::FEED_BOOST_CHANCE;
use crate::core::game_state::{GameState, PetTier};
use rand::Rng;

/// Which promotion, if any, a feed's boost roll produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedBoost {
    #[default]
    None,
    AiToBig,
    BigToSingularity,
}

/// Outcome of one feed action.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedResult {
    pub state: GameState,
    /// AI Pets gained: 1 plus the aggregated PetBonus total.
    pub pets_gained: u64,
    pub boost: FeedBoost,
}

/// Feeds the pets: `ai_pets += 1 + pet_bonus`, then a boost roll.
///
/// The boost picks the source tier weighted by current population among
/// the promotable tiers (Singularity Pets are terminal). An empty chosen
/// tier falls through to the other; if both are empty no boost occurs.
pub fn feed(state: &GameState, pet_bonus: u64, rng: &mut impl Rng) -> FeedResult {
    let pets_gained = 1 + pet_bonus;
    let mut next = state.clone();
    next.populations.ai_pets = next.populations.ai_pets.saturating_add(pets_gained);

    let boost = if rng.gen::<f64>() < FEED_BOOST_CHANCE {
        roll_boost(&mut next, rng)
    } else {
        FeedBoost::None
    };

    FeedResult {
        state: next,
        pets_gained,
        boost,
    }
}

/// Promotes one pet from a population-weighted promotable tier.
///
/// Weighted against the post-increment counts, matching the order the
/// action composes in: increment first, boost second.
fn roll_boost(state: &mut GameState, rng: &mut impl Rng) -> FeedBoost {
    let pops = &mut state.populations;
    let promotable = pops.promotable_total();
    if promotable == 0 {
        return FeedBoost::None;
    }

    let ai_threshold = pops.ai_pets as f64 / promotable as f64;
    if rng.gen::<f64>() < ai_threshold && pops.ai_pets > 0 {
        pops.ai_pets -= 1;
        pops.big_pets += 1;
        FeedBoost::AiToBig
    } else if pops.big_pets > 0 {
        pops.big_pets -= 1;
        pops.singularity_pets += 1;
        FeedBoost::BigToSingularity
    } else {
        // Weighted pick landed on Big Pets but the tier is empty:
        // fall through to the AI Pet edge.
        pops.ai_pets -= 1;
        pops.big_pets += 1;
        FeedBoost::AiToBig
    }
}

impl FeedBoost {
    /// The edge the boost promoted across, if any.
    pub fn edge(self) -> Option<(PetTier, PetTier)> {
        match self {
            FeedBoost::None => None,
            FeedBoost::AiToBig => Some((PetTier::AiPet, PetTier::BigPet)),
            FeedBoost::BigToSingularity => Some((PetTier::BigPet, PetTier::SingularityPet)),
        }
    }
}
