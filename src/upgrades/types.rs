/// What a purchased upgrade does. Effects of the same kind stack
/// additively; kinds never interact with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeEffect {
    /// Fractional bonus to passive scrap generation (0.1 = +10%).
    ScrapMultiplier,
    /// Flat extra AI Pets gained per feed action.
    PetBonus,
    /// Fractional bonus to both singularity transition rates.
    SingularityRateMultiplier,
    /// Unlocks the manual combine action. Carries no magnitude.
    UnlockCombination,
}

/// An immutable shop catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Upgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Cost in scrap.
    pub cost: u64,
    pub effect: UpgradeEffect,
    /// Magnitude of the effect. Ignored for `UnlockCombination`.
    pub effect_value: f64,
}
