//! Pure reduction from purchased upgrade ids to per-effect-kind totals.
//!
//! Stacking is additive within each kind: two scrap multipliers of +10%
//! and +15% yield +25%, not a compounded +26.5%.

use super::catalog::UPGRADES;
use super::types::UpgradeEffect;
use std::collections::BTreeSet;

/// Aggregated effect totals for a set of purchased upgrades.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UpgradeBonuses {
    /// Sum of fractional scrap generation bonuses.
    pub scrap_multiplier: f64,
    /// Sum of flat extra pets per feed.
    pub pet_bonus: u64,
    /// Sum of fractional singularity rate bonuses.
    pub singularity_rate_multiplier: f64,
    /// True iff any purchased upgrade unlocks the combine action.
    pub combination_unlocked: bool,
}

/// Folds the owned subset of the catalog into per-kind totals.
///
/// Unknown ids are ignored; they cannot occur in a sanitized state but a
/// caller-assembled set gets the same lenient treatment.
pub fn aggregate_bonuses(purchased: &BTreeSet<String>) -> UpgradeBonuses {
    let mut bonuses = UpgradeBonuses::default();

    for upgrade in UPGRADES.iter().filter(|u| purchased.contains(u.id)) {
        match upgrade.effect {
            UpgradeEffect::ScrapMultiplier => bonuses.scrap_multiplier += upgrade.effect_value,
            UpgradeEffect::PetBonus => bonuses.pet_bonus += upgrade.effect_value as u64,
            UpgradeEffect::SingularityRateMultiplier => {
                bonuses.singularity_rate_multiplier += upgrade.effect_value
            }
            UpgradeEffect::UnlockCombination => bonuses.combination_unlocked = true,
        }
    }

    bonuses
}
