//! Passive scrap generation.
//!
//! Each tick credits `Σ count(tier) · rate(tier) · (1 + multiplier)`,
//! floored to whole scrap. Floor is the single rounding policy for every
//! generation path; fractional remainders below one scrap per tick are
//! forfeit rather than inflated upward.

use crate::core::constants::{
    AI_PET_SCRAP_RATE, BIG_PET_SCRAP_RATE, MAX_SAFE_COUNT, SINGULARITY_PET_SCRAP_RATE,
};
use crate::core::game_state::{PetTier, Populations};

/// Scrap generated per pet per second for a tier.
pub fn scrap_rate(tier: PetTier) -> f64 {
    match tier {
        PetTier::AiPet => AI_PET_SCRAP_RATE,
        PetTier::BigPet => BIG_PET_SCRAP_RATE,
        PetTier::SingularityPet => SINGULARITY_PET_SCRAP_RATE,
    }
}

/// Unmodified yield of the whole menagerie, in scrap per second.
pub fn base_yield_per_second(populations: &Populations) -> f64 {
    PetTier::all()
        .iter()
        .map(|&tier| populations.get(tier) as f64 * scrap_rate(tier))
        .sum()
}

/// Displayed generation rate including the upgrade multiplier.
pub fn generation_rate(populations: &Populations, scrap_multiplier: f64) -> f64 {
    base_yield_per_second(populations) * (1.0 + scrap_multiplier)
}

/// Credits one tick's worth of scrap onto `balance`.
///
/// Inputs are non-negative so the balance can only grow; the result is
/// clamped to the safe-count ceiling.
pub fn credit_scrap(
    balance: u64,
    populations: &Populations,
    scrap_multiplier: f64,
    delta_seconds: f64,
) -> u64 {
    let credited = (generation_rate(populations, scrap_multiplier) * delta_seconds).floor() as u64;
    balance.saturating_add(credited).min(MAX_SAFE_COUNT)
}
