//! Milestone-unlocked, player-toggleable skills.

pub mod definitions;
pub mod engine;
pub mod types;

pub use engine::{check_and_unlock, is_skill_active, is_skill_unlocked, toggle_skill};
pub use types::{Skill, SkillEffect, SkillRequirement};
