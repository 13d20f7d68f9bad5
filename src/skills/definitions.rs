//! The static skill catalog.

use super::types::{Skill, SkillEffect, SkillRequirement};

pub const SKILLS: &[Skill] = &[
    Skill {
        id: "painting",
        name: "Painting",
        description: "Colorful visual trails when feeding the Singularity Pet",
        requirement: SkillRequirement::SingularityPets(1),
        effect: SkillEffect::VisualTrail,
    },
    Skill {
        id: "swarm-chorus",
        name: "Swarm Chorus",
        description: "Your pets hum together once the menagerie is large enough",
        requirement: SkillRequirement::TotalPets(100),
        effect: SkillEffect::SwarmChorus,
    },
    Skill {
        id: "fusion-resonance",
        name: "Fusion Resonance",
        description: "Combines produce a resonant flash",
        requirement: SkillRequirement::UpgradeOwned("combine-unlock"),
        effect: SkillEffect::FusionFlash,
    },
    Skill {
        id: "elder-memory",
        name: "Elder Memory",
        description: "A journal of the menagerie's first day",
        // Play-time requirements always evaluate unmet for now
        requirement: SkillRequirement::PlayTime(24 * 60 * 60),
        effect: SkillEffect::MemoryJournal,
    },
];

/// Looks up a skill by id.
pub fn get_skill(skill_id: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.id == skill_id)
}
