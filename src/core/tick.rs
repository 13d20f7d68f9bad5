//! The per-tick orchestration pipeline.
//!
//! One call advances the whole simulation by `delta_seconds`: singularity
//! promotions roll first, scrap is credited from the freshly promoted
//! populations, play time accrues, and finally skill unlock predicates
//! are re-evaluated against the new snapshot. The returned [`TickEvent`]s
//! let a presentation layer narrate what happened without the core
//! depending on any UI types.

use crate::core::game_state::{GameState, PetTier};
use crate::core::scrap::credit_scrap;
use crate::progression::engine::process_promotion_tick;
use crate::skills::engine::check_and_unlock;
use crate::upgrades::aggregate_bonuses;
use rand::Rng;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// Pets crossed a tier edge this tick.
    PetsPromoted {
        from: PetTier,
        to: PetTier,
        count: u64,
    },

    /// Passive scrap was credited.
    ScrapCredited { amount: u64, new_balance: u64 },

    /// A skill milestone was reached and the skill auto-activated.
    SkillUnlocked { skill_id: &'static str },
}

/// Processes one game tick and returns the replacement snapshot.
///
/// Pure given its RNG: the periodic driver calls this with a thread RNG,
/// tests with a seeded one. A zero `delta_seconds` is a no-op apart from
/// skill re-evaluation.
pub fn game_tick(
    state: &GameState,
    delta_seconds: f64,
    rng: &mut impl Rng,
) -> (GameState, Vec<TickEvent>) {
    let bonuses = aggregate_bonuses(&state.purchased_upgrades);
    let mut events = Vec::new();

    // 1. Probabilistic tier promotions
    let (mut next, promotions) =
        process_promotion_tick(state, delta_seconds, bonuses.singularity_rate_multiplier, rng);
    if promotions.ai_to_big > 0 {
        events.push(TickEvent::PetsPromoted {
            from: PetTier::AiPet,
            to: PetTier::BigPet,
            count: promotions.ai_to_big,
        });
    }
    if promotions.big_to_singularity > 0 {
        events.push(TickEvent::PetsPromoted {
            from: PetTier::BigPet,
            to: PetTier::SingularityPet,
            count: promotions.big_to_singularity,
        });
    }

    // 2. Scrap generation from the post-promotion populations
    let new_balance = credit_scrap(
        next.scrap,
        &next.populations,
        bonuses.scrap_multiplier,
        delta_seconds,
    );
    if new_balance > next.scrap {
        events.push(TickEvent::ScrapCredited {
            amount: new_balance - next.scrap,
            new_balance,
        });
    }
    next.scrap = new_balance;

    // 3. Play time accrual (whole seconds; the driver ticks at 1s)
    next.play_time_seconds += delta_seconds as u64;

    // 4. Skill unlock check against the freshly computed snapshot
    let (next, newly_unlocked) = check_and_unlock(&next);
    for skill_id in newly_unlocked {
        events.push(TickEvent::SkillUnlocked { skill_id });
    }

    (next, events)
}
