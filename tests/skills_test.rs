//! Integration test: skill milestones through real play
//!
//! Inline unit tests cover the unlock predicates directly; these tests
//! drive unlocks through the tick pipeline and the purchase flow, the way
//! a real session reaches them.

use menagerie::skills::definitions::{get_skill, SKILLS};
use menagerie::skills::engine::{is_skill_active, is_skill_unlocked, toggle_skill};
use menagerie::upgrades::purchase::purchase_upgrade;
use menagerie::{game_tick, GameState, TickEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_population_milestone_unlocks_during_tick() {
    let mut state = GameState::new(0);
    state.populations.ai_pets = 100;
    let mut rng = ChaCha8Rng::seed_from_u64(20);

    let (next, events) = game_tick(&state, 1.0, &mut rng);

    assert!(is_skill_unlocked(&next, "swarm-chorus"));
    assert!(is_skill_active(&next, "swarm-chorus"));
    assert!(events
        .iter()
        .any(|e| matches!(e, TickEvent::SkillUnlocked { skill_id } if *skill_id == "swarm-chorus")));
}

#[test]
fn test_purchase_then_tick_unlocks_upgrade_gated_skill() {
    let mut state = GameState::new(0);
    state.scrap = 2000;

    let (state, outcome) = purchase_upgrade(&state, "combine-unlock");
    assert!(outcome.is_purchased());
    // The unlock lands on the next tick, not at purchase time
    assert!(!is_skill_unlocked(&state, "fusion-resonance"));

    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let (next, _) = game_tick(&state, 1.0, &mut rng);
    assert!(is_skill_unlocked(&next, "fusion-resonance"));
}

#[test]
fn test_unlocks_survive_population_decline() {
    let mut state = GameState::new(0);
    state.populations.ai_pets = 100;
    let mut rng = ChaCha8Rng::seed_from_u64(22);

    let (mut state, _) = game_tick(&state, 1.0, &mut rng);
    assert!(is_skill_unlocked(&state, "swarm-chorus"));

    // Drop below the milestone; the skill must stay unlocked forever after
    state.populations.ai_pets = 1;
    for _ in 0..10 {
        let (next, _) = game_tick(&state, 1.0, &mut rng);
        assert!(is_skill_unlocked(&next, "swarm-chorus"));
        state = next;
    }
}

#[test]
fn test_deactivated_skill_is_not_reactivated_by_ticks() {
    let mut state = GameState::new(0);
    state.populations.ai_pets = 100;
    let mut rng = ChaCha8Rng::seed_from_u64(23);

    let (state, _) = game_tick(&state, 1.0, &mut rng);
    let mut state = toggle_skill(&state, "swarm-chorus", false);
    assert!(!is_skill_active(&state, "swarm-chorus"));

    // Requirement is still met, but the unlock already happened: the
    // player's toggle wins
    for _ in 0..10 {
        let (next, _) = game_tick(&state, 1.0, &mut rng);
        assert!(!is_skill_active(&next, "swarm-chorus"));
        state = next;
    }
}

#[test]
fn test_active_skills_are_a_subset_of_unlocked() {
    let mut state = GameState::new(0);
    state.populations.ai_pets = 150;
    state.populations.singularity_pets = 1;
    state.scrap = 5000;
    let mut rng = ChaCha8Rng::seed_from_u64(24);

    let (state, _) = purchase_upgrade(&state, "combine-unlock");
    let mut state = state;
    for _ in 0..20 {
        let (next, _) = game_tick(&state, 1.0, &mut rng);
        assert!(next.active_skills.is_subset(&next.unlocked_skills));
        state = next;
    }
    assert_eq!(state.unlocked_skills.len(), 3);
}

#[test]
fn test_every_skill_id_resolves() {
    for skill in SKILLS {
        assert!(get_skill(skill.id).is_some());
    }
    assert!(get_skill("not-a-skill").is_none());
}
