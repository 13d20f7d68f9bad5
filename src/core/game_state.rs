use crate::core::constants::MAX_SAFE_COUNT;
use crate::skills;
use crate::upgrades::catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Pet tiers in ascending order of the promotion chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetTier {
    AiPet,
    BigPet,
    SingularityPet,
}

impl PetTier {
    pub fn all() -> [PetTier; 3] {
        [PetTier::AiPet, PetTier::BigPet, PetTier::SingularityPet]
    }

    /// The tier a pet promotes into. `None` for the terminal tier.
    pub fn promotes_to(self) -> Option<PetTier> {
        match self {
            PetTier::AiPet => Some(PetTier::BigPet),
            PetTier::BigPet => Some(PetTier::SingularityPet),
            PetTier::SingularityPet => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PetTier::AiPet => "AI Pet",
            PetTier::BigPet => "Big Pet",
            PetTier::SingularityPet => "Singularity Pet",
        }
    }
}

/// Per-tier pet counts. Pets only ever flow upward through the chain,
/// so the Singularity count is monotonically non-decreasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Populations {
    pub ai_pets: u64,
    pub big_pets: u64,
    pub singularity_pets: u64,
}

impl Populations {
    pub fn get(&self, tier: PetTier) -> u64 {
        match tier {
            PetTier::AiPet => self.ai_pets,
            PetTier::BigPet => self.big_pets,
            PetTier::SingularityPet => self.singularity_pets,
        }
    }

    pub fn total(&self) -> u64 {
        self.ai_pets
            .saturating_add(self.big_pets)
            .saturating_add(self.singularity_pets)
    }

    /// Pets that still have a tier above them (Singularity Pets are terminal).
    pub fn promotable_total(&self) -> u64 {
        self.ai_pets.saturating_add(self.big_pets)
    }
}

/// Main game state containing all player progress.
///
/// Every transition in the crate takes a `&GameState` and returns a fresh
/// replacement value; nothing mutates a shared snapshot in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub save_id: String,
    #[serde(default)]
    pub populations: Populations,
    #[serde(default)]
    pub scrap: u64,
    /// IDs of purchased shop upgrades. Append-only: no refunds.
    #[serde(default)]
    pub purchased_upgrades: BTreeSet<String>,
    /// Skills whose unlock requirement has been met. Never shrinks.
    #[serde(default)]
    pub unlocked_skills: BTreeSet<String>,
    /// Toggleable subset of `unlocked_skills`.
    #[serde(default)]
    pub active_skills: BTreeSet<String>,
    pub last_save_time: i64,
    #[serde(default)]
    pub play_time_seconds: u64,
}

impl GameState {
    /// Creates a fresh game state with default values.
    pub fn new(current_time: i64) -> Self {
        use uuid::Uuid;

        Self {
            save_id: Uuid::new_v4().to_string(),
            populations: Populations::default(),
            scrap: 0,
            purchased_upgrades: BTreeSet::new(),
            unlocked_skills: BTreeSet::new(),
            active_skills: BTreeSet::new(),
            last_save_time: current_time,
            play_time_seconds: 0,
        }
    }

    /// Clamps counts and repairs set invariants after deserializing an
    /// untrusted snapshot. Persisted saves pass through here on load so a
    /// drifted or hand-edited blob cannot poison the aggregate.
    pub fn sanitize(mut self) -> Self {
        self.populations.ai_pets = self.populations.ai_pets.min(MAX_SAFE_COUNT);
        self.populations.big_pets = self.populations.big_pets.min(MAX_SAFE_COUNT);
        self.populations.singularity_pets = self.populations.singularity_pets.min(MAX_SAFE_COUNT);
        self.scrap = self.scrap.min(MAX_SAFE_COUNT);

        let before = self.purchased_upgrades.len();
        self.purchased_upgrades
            .retain(|id| catalog::get_upgrade(id).is_some());
        if self.purchased_upgrades.len() < before {
            tracing::warn!(
                dropped = before - self.purchased_upgrades.len(),
                "discarded purchased upgrade ids not present in the catalog"
            );
        }

        self.unlocked_skills
            .retain(|id| skills::definitions::get_skill(id).is_some());
        // active ⊆ unlocked
        let unlocked = self.unlocked_skills.clone();
        self.active_skills.retain(|id| unlocked.contains(id));

        self
    }
}
