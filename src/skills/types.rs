/// Milestone predicate that permanently unlocks a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillRequirement {
    /// Minimum number of Singularity Pets.
    SingularityPets(u64),
    /// Minimum total population across all tiers.
    TotalPets(u64),
    /// A specific shop upgrade must be owned.
    UpgradeOwned(&'static str),
    /// Minimum play time in seconds. Not implemented: evaluates to
    /// permanently unmet until the semantics are specified.
    PlayTime(u64),
}

/// Behavioral toggle a skill enables. The presentation layer interprets
/// these; they never feed back into progression math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillEffect {
    /// Colorful trails when feeding.
    VisualTrail,
    /// Ambient chirping from the pet swarm.
    SwarmChorus,
    /// Flash effect on successful combines.
    FusionFlash,
    /// Reserved for the elder pet memory journal.
    MemoryJournal,
}

/// An optional, player-toggleable behavior unlocked at a milestone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: SkillRequirement,
    pub effect: SkillEffect,
}
