//! Manual pet combination: trade AI Pets for a Big Pet.
//!
//! The deterministic alternative to waiting on singularity rolls. Gated
//! behind the Fusion Chamber upgrade, and all-or-nothing: either the full
//! cost is deducted and one Big Pet appears, or nothing changes.

use crate::core::constants::COMBINE_COST;
use crate::core::game_state::GameState;
use crate::upgrades::aggregate_bonuses;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombineError {
    #[error("combining requires the Fusion Chamber upgrade")]
    NotUnlocked,
    #[error("insufficient AI Pets to combine: need {needed}, have {have}")]
    InsufficientPets { needed: u64, have: u64 },
}

/// The number of AI Pets one combine consumes.
pub fn combine_cost() -> u64 {
    COMBINE_COST
}

/// True when the unlock upgrade is owned and enough AI Pets are available.
/// Callers should guard with this before invoking [`combine_pets`].
pub fn can_combine(state: &GameState) -> bool {
    aggregate_bonuses(&state.purchased_upgrades).combination_unlocked
        && state.populations.ai_pets >= COMBINE_COST
}

/// Converts `COMBINE_COST` AI Pets into one Big Pet.
///
/// Returns a typed error instead of silently no-opping so callers are
/// forced to pre-check with [`can_combine`]; the input state is untouched
/// on failure.
pub fn combine_pets(state: &GameState) -> Result<GameState, CombineError> {
    if !aggregate_bonuses(&state.purchased_upgrades).combination_unlocked {
        return Err(CombineError::NotUnlocked);
    }
    if state.populations.ai_pets < COMBINE_COST {
        return Err(CombineError::InsufficientPets {
            needed: COMBINE_COST,
            have: state.populations.ai_pets,
        });
    }

    let mut next = state.clone();
    next.populations.ai_pets -= COMBINE_COST;
    next.populations.big_pets += 1;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked_state(ai_pets: u64) -> GameState {
        let mut state = GameState::new(0);
        state.purchased_upgrades.insert("combine-unlock".to_string());
        state.populations.ai_pets = ai_pets;
        state
    }

    #[test]
    fn test_combine_exchanges_exactly_ten_for_one() {
        let state = unlocked_state(10);
        let next = combine_pets(&state).unwrap();

        assert_eq!(next.populations.ai_pets, 0);
        assert_eq!(next.populations.big_pets, 1);

        // Every other field is untouched
        assert_eq!(next.scrap, state.scrap);
        assert_eq!(next.purchased_upgrades, state.purchased_upgrades);
        assert_eq!(next.unlocked_skills, state.unlocked_skills);
        assert_eq!(next.active_skills, state.active_skills);
        assert_eq!(next.populations.singularity_pets, 0);
    }

    #[test]
    fn test_combine_without_unlock_fails() {
        let mut state = GameState::new(0);
        state.populations.ai_pets = 100;

        assert!(!can_combine(&state));
        assert_eq!(combine_pets(&state), Err(CombineError::NotUnlocked));
    }

    #[test]
    fn test_combine_with_insufficient_pets_fails() {
        let state = unlocked_state(5);

        assert!(!can_combine(&state));
        assert_eq!(
            combine_pets(&state),
            Err(CombineError::InsufficientPets { needed: 10, have: 5 })
        );
    }

    #[test]
    fn test_three_combines_then_failure() {
        let mut state = unlocked_state(30);
        for expected_big in 1..=3u64 {
            state = combine_pets(&state).unwrap();
            assert_eq!(state.populations.big_pets, expected_big);
        }
        assert_eq!(state.populations.ai_pets, 0);

        let before = state.clone();
        assert!(combine_pets(&state).is_err());
        assert_eq!(state, before);
    }
}
