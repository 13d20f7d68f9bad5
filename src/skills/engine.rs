//! Skill unlock and toggle state machine.
//!
//! Per skill: Locked → Unlocked(Active), one-way, then Active ⇄ Inactive
//! under player control. Nothing ever re-locks. Newly unlocked skills are
//! auto-activated so milestones give immediate feedback.

use super::definitions::SKILLS;
use super::types::{Skill, SkillRequirement};
use crate::core::game_state::GameState;

pub fn is_skill_unlocked(state: &GameState, skill_id: &str) -> bool {
    state.unlocked_skills.contains(skill_id)
}

pub fn is_skill_active(state: &GameState, skill_id: &str) -> bool {
    state.active_skills.contains(skill_id)
}

/// Evaluates a skill's unlock predicate against the current aggregate.
///
/// Play-time requirements fail closed: they are not implemented and log a
/// warning rather than guessing at semantics.
pub fn requirement_met(state: &GameState, skill: &Skill) -> bool {
    match skill.requirement {
        SkillRequirement::SingularityPets(min) => state.populations.singularity_pets >= min,
        SkillRequirement::TotalPets(min) => state.populations.total() >= min,
        SkillRequirement::UpgradeOwned(upgrade_id) => {
            state.purchased_upgrades.contains(upgrade_id)
        }
        SkillRequirement::PlayTime(_) => {
            tracing::warn!(
                skill_id = skill.id,
                "play-time skill requirements are not implemented; treating as unmet"
            );
            false
        }
    }
}

/// Unlocks (and activates) every still-locked skill whose requirement is
/// now met, as one batched update. Returns the ids unlocked this call.
pub fn check_and_unlock(state: &GameState) -> (GameState, Vec<&'static str>) {
    let newly_unlocked: Vec<&'static str> = SKILLS
        .iter()
        .filter(|skill| !state.unlocked_skills.contains(skill.id))
        .filter(|skill| requirement_met(state, skill))
        .map(|skill| skill.id)
        .collect();

    if newly_unlocked.is_empty() {
        return (state.clone(), newly_unlocked);
    }

    let mut next = state.clone();
    for id in &newly_unlocked {
        next.unlocked_skills.insert(id.to_string());
        next.active_skills.insert(id.to_string());
    }
    (next, newly_unlocked)
}

/// Toggles a skill on or off.
///
/// Activating a locked skill is a silent no-op: a UI may race a toggle
/// against an unlock check, and that must not blow up. Deactivating
/// removes the skill from the active set unconditionally.
pub fn toggle_skill(state: &GameState, skill_id: &str, active: bool) -> GameState {
    let mut next = state.clone();
    if active {
        if next.unlocked_skills.contains(skill_id) {
            next.active_skills.insert(skill_id.to_string());
        }
    } else {
        next.active_skills.remove(skill_id);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_singularity_pet_unlocks_painting() {
        let mut state = GameState::new(0);
        state.populations.singularity_pets = 1;

        let (next, unlocked) = check_and_unlock(&state);
        assert_eq!(unlocked, vec!["painting"]);
        assert!(is_skill_unlocked(&next, "painting"));
        assert!(is_skill_active(&next, "painting"), "unlock auto-activates");
    }

    #[test]
    fn test_no_unlocks_leaves_state_unchanged() {
        let state = GameState::new(0);
        let (next, unlocked) = check_and_unlock(&state);

        assert!(unlocked.is_empty());
        assert_eq!(next, state);
    }

    #[test]
    fn test_multiple_unlocks_are_batched() {
        let mut state = GameState::new(0);
        state.populations.ai_pets = 99;
        state.populations.singularity_pets = 1;

        let (next, unlocked) = check_and_unlock(&state);
        assert_eq!(unlocked.len(), 2);
        assert!(is_skill_unlocked(&next, "painting"));
        assert!(is_skill_unlocked(&next, "swarm-chorus"));
    }

    #[test]
    fn test_unlocks_are_monotonic() {
        let mut state = GameState::new(0);
        state.populations.singularity_pets = 1;
        let (state, _) = check_and_unlock(&state);

        // Requirement no longer met, skill stays unlocked
        let mut regressed = state.clone();
        regressed.populations.singularity_pets = 0;
        let (next, unlocked) = check_and_unlock(&regressed);

        assert!(unlocked.is_empty());
        assert!(is_skill_unlocked(&next, "painting"));
    }

    #[test]
    fn test_upgrade_owned_requirement() {
        let mut state = GameState::new(0);
        state.purchased_upgrades.insert("combine-unlock".to_string());

        let (next, unlocked) = check_and_unlock(&state);
        assert_eq!(unlocked, vec!["fusion-resonance"]);
        assert!(is_skill_active(&next, "fusion-resonance"));
    }

    #[test]
    fn test_play_time_requirement_never_unlocks() {
        let mut state = GameState::new(0);
        state.play_time_seconds = u64::MAX;

        let (_, unlocked) = check_and_unlock(&state);
        assert!(!unlocked.contains(&"elder-memory"));
    }

    #[test]
    fn test_toggle_off_and_on() {
        let mut state = GameState::new(0);
        state.populations.singularity_pets = 1;
        let (state, _) = check_and_unlock(&state);

        let state = toggle_skill(&state, "painting", false);
        assert!(!is_skill_active(&state, "painting"));
        assert!(is_skill_unlocked(&state, "painting"));

        let state = toggle_skill(&state, "painting", true);
        assert!(is_skill_active(&state, "painting"));
    }

    #[test]
    fn test_activating_locked_skill_is_a_noop() {
        let state = GameState::new(0);
        let next = toggle_skill(&state, "painting", true);

        assert_eq!(next, state);
        assert!(!is_skill_active(&next, "painting"));
    }

    #[test]
    fn test_deactivating_locked_skill_is_harmless() {
        let state = GameState::new(0);
        let next = toggle_skill(&state, "painting", false);
        assert_eq!(next, state);
    }
}
