//! Offline progression.
//!
//! When the game resumes after an absence, the elapsed time is settled as
//! a deterministic expected-value catch-up at reduced efficiency, rather
//! than replaying thousands of probabilistic ticks. Capped at eight
//! hours; absences under a minute are ignored.

use crate::core::constants::{
    BASE_AI_PET_SINGULARITY_RATE, BASE_BIG_PET_SINGULARITY_RATE, MAX_OFFLINE_SECONDS,
    MIN_OFFLINE_SECONDS, OFFLINE_EFFICIENCY,
};
use crate::core::game_state::GameState;
use crate::core::scrap::generation_rate;
use crate::progression::engine::effective_rate;
use crate::skills::engine::check_and_unlock;
use crate::upgrades::aggregate_bonuses;

/// Report of offline progression results, for the welcome-back screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OfflineReport {
    pub elapsed_seconds: i64,
    /// Elapsed time actually settled, after the cap.
    pub capped_seconds: i64,
    pub scrap_gained: u64,
    pub ai_pets_promoted: u64,
    pub big_pets_promoted: u64,
}

/// Expected promotions for one edge over the capped window, floored.
///
/// Linear approximation of the per-tick Bernoulli process, clamped so a
/// long absence can never promote more pets than the tier holds.
fn expected_promotions(count: u64, rate_per_second: f64, seconds: i64) -> u64 {
    let per_pet = (rate_per_second * seconds as f64 * OFFLINE_EFFICIENCY).min(1.0);
    (count as f64 * per_pet).floor() as u64
}

/// Settles the time since `last_save_time` and stamps it to `now`.
///
/// Deterministic: no RNG, so the same snapshot and clock always settle
/// identically. Skill predicates are re-checked afterwards since the
/// catch-up may cross a milestone.
pub fn process_offline_progression(state: &GameState, now: i64) -> (GameState, OfflineReport) {
    let elapsed_seconds = now - state.last_save_time;
    if elapsed_seconds < MIN_OFFLINE_SECONDS {
        return (state.clone(), OfflineReport::default());
    }
    let capped_seconds = elapsed_seconds.min(MAX_OFFLINE_SECONDS);

    let bonuses = aggregate_bonuses(&state.purchased_upgrades);

    // Both edges settle against the pre-offline counts, same as a tick
    let ai_rate = effective_rate(
        BASE_AI_PET_SINGULARITY_RATE,
        bonuses.singularity_rate_multiplier,
    );
    let big_rate = effective_rate(
        BASE_BIG_PET_SINGULARITY_RATE,
        bonuses.singularity_rate_multiplier,
    );
    let ai_pets_promoted = expected_promotions(state.populations.ai_pets, ai_rate, capped_seconds);
    let big_pets_promoted =
        expected_promotions(state.populations.big_pets, big_rate, capped_seconds);

    // Scrap accrues from the pre-offline populations at reduced efficiency
    let scrap_gained = (generation_rate(&state.populations, bonuses.scrap_multiplier)
        * capped_seconds as f64
        * OFFLINE_EFFICIENCY)
        .floor() as u64;

    let mut next = state.clone();
    next.populations.ai_pets -= ai_pets_promoted;
    next.populations.big_pets = next.populations.big_pets + ai_pets_promoted - big_pets_promoted;
    next.populations.singularity_pets += big_pets_promoted;
    next.scrap = next.scrap.saturating_add(scrap_gained);
    next.play_time_seconds += capped_seconds as u64;
    next.last_save_time = now;

    let (next, _) = check_and_unlock(&next);

    (
        next,
        OfflineReport {
            elapsed_seconds,
            capped_seconds,
            scrap_gained,
            ai_pets_promoted,
            big_pets_promoted,
        },
    )
}
