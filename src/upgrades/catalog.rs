//! The static shop catalog.
//!
//! Centralized data source so balancing changes stay in one place.
//! Ordered by cost, which is also the order shops display them in.

use super::types::{Upgrade, UpgradeEffect};

pub const UPGRADES: &[Upgrade] = &[
    Upgrade {
        id: "scrap-boost-1",
        name: "Scrap Finder",
        description: "+10% scrap generation",
        cost: 100,
        effect: UpgradeEffect::ScrapMultiplier,
        effect_value: 0.1,
    },
    Upgrade {
        id: "pet-boost-1",
        name: "Extra Feed",
        description: "+1 AI Pet per feed",
        cost: 200,
        effect: UpgradeEffect::PetBonus,
        effect_value: 1.0,
    },
    Upgrade {
        id: "scrap-boost-2",
        name: "Scrap Magnet",
        description: "+15% scrap generation",
        cost: 500,
        effect: UpgradeEffect::ScrapMultiplier,
        effect_value: 0.15,
    },
    Upgrade {
        id: "pet-boost-2",
        name: "Double Feed",
        description: "+2 AI Pets per feed",
        cost: 1000,
        effect: UpgradeEffect::PetBonus,
        effect_value: 2.0,
    },
    Upgrade {
        id: "combine-unlock",
        name: "Fusion Chamber",
        description: "Unlock combining 10 AI Pets into a Big Pet",
        cost: 1500,
        effect: UpgradeEffect::UnlockCombination,
        effect_value: 0.0,
    },
    Upgrade {
        id: "scrap-boost-3",
        name: "Scrap Amplifier",
        description: "+25% scrap generation",
        cost: 2000,
        effect: UpgradeEffect::ScrapMultiplier,
        effect_value: 0.25,
    },
    Upgrade {
        id: "singularity-boost-1",
        name: "Neural Accelerator",
        description: "+50% singularity transition rate",
        cost: 3000,
        effect: UpgradeEffect::SingularityRateMultiplier,
        effect_value: 0.5,
    },
    Upgrade {
        id: "singularity-boost-2",
        name: "Quantum Core",
        description: "+100% singularity transition rate",
        cost: 8000,
        effect: UpgradeEffect::SingularityRateMultiplier,
        effect_value: 1.0,
    },
];

/// Looks up a catalog entry by id.
pub fn get_upgrade(upgrade_id: &str) -> Option<&'static Upgrade> {
    UPGRADES.iter().find(|u| u.id == upgrade_id)
}
