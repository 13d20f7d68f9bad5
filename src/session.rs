//! The composition root: one owned [`GameState`] behind a mutex.
//!
//! Every operation follows the same discipline: take the lock, read the
//! current snapshot, run a pure transition, publish the replacement, drop
//! the lock. Concurrent callers serialize at the single replacement
//! point, so no caller ever observes a half-applied transition. The
//! debounced save and the subscriber bus ride along on each publish.

use crate::core::game_state::GameState;
use crate::core::offline::{process_offline_progression, OfflineReport};
use crate::core::tick::{game_tick, TickEvent};
use crate::events::{StateBus, Subscriber};
use crate::progression::combination::{can_combine, combine_pets, CombineError};
use crate::progression::feeding::{feed, FeedBoost};
use crate::skills::engine::toggle_skill;
use crate::upgrades::bonuses::aggregate_bonuses;
use crate::upgrades::purchase::{purchase_upgrade, PurchaseOutcome};
use rand::Rng;
use std::sync::Mutex;

/// What a feed action did, minus the snapshot (read it via [`GameSession::snapshot`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    pub pets_gained: u64,
    pub boost: FeedBoost,
}

pub struct GameSession {
    state: Mutex<GameState>,
    bus: Mutex<StateBus>,
    saver: Mutex<Option<crate::save_manager::DebouncedSave>>,
}

impl GameSession {
    pub fn new(state: GameState) -> Self {
        Self {
            state: Mutex::new(state),
            bus: Mutex::new(StateBus::new()),
            saver: Mutex::new(None),
        }
    }

    /// Attaches a debounced persistence collaborator. Saves are
    /// fire-and-forget: failures are logged inside the saver and ignored.
    pub fn with_saver(state: GameState, saver: crate::save_manager::DebouncedSave) -> Self {
        Self {
            state: Mutex::new(state),
            bus: Mutex::new(StateBus::new()),
            saver: Mutex::new(Some(saver)),
        }
    }

    pub fn subscribe(&self, subscriber: Subscriber) {
        self.bus.lock().unwrap().subscribe(subscriber);
    }

    /// A full copy of the current snapshot.
    pub fn snapshot(&self) -> GameState {
        self.state.lock().unwrap().clone()
    }

    /// Runs the tick pipeline once. Invoked by the periodic driver.
    pub fn tick(&self, delta_seconds: f64, rng: &mut impl Rng) -> Vec<TickEvent> {
        let mut guard = self.state.lock().unwrap();
        let (next, events) = game_tick(&guard, delta_seconds, rng);
        *guard = next.clone();
        self.publish(&next);
        events
    }

    /// The primary manual action.
    pub fn feed(&self, rng: &mut impl Rng) -> FeedSummary {
        let mut guard = self.state.lock().unwrap();
        let pet_bonus = aggregate_bonuses(&guard.purchased_upgrades).pet_bonus;
        let result = feed(&guard, pet_bonus, rng);
        *guard = result.state.clone();
        self.publish(&result.state);
        FeedSummary {
            pets_gained: result.pets_gained,
            boost: result.boost,
        }
    }

    pub fn purchase(&self, upgrade_id: &str) -> PurchaseOutcome {
        let mut guard = self.state.lock().unwrap();
        let (next, outcome) = purchase_upgrade(&guard, upgrade_id);
        if outcome.is_purchased() {
            *guard = next.clone();
            self.publish(&next);
        }
        outcome
    }

    pub fn can_combine(&self) -> bool {
        can_combine(&self.state.lock().unwrap())
    }

    pub fn combine(&self) -> Result<(), CombineError> {
        let mut guard = self.state.lock().unwrap();
        let next = combine_pets(&guard)?;
        *guard = next.clone();
        self.publish(&next);
        Ok(())
    }

    pub fn toggle_skill(&self, skill_id: &str, active: bool) {
        let mut guard = self.state.lock().unwrap();
        let next = toggle_skill(&guard, skill_id, active);
        let changed = *guard != next;
        *guard = next.clone();
        if changed {
            self.publish(&next);
        }
    }

    /// Settles offline time against the current wall clock. The real
    /// resume path; tests inject a clock via [`settle_offline`].
    ///
    /// [`settle_offline`]: GameSession::settle_offline
    pub fn settle_offline_now(&self) -> OfflineReport {
        self.settle_offline(chrono::Utc::now().timestamp())
    }

    pub fn settle_offline(&self, now: i64) -> OfflineReport {
        let mut guard = self.state.lock().unwrap();
        let (next, report) = process_offline_progression(&guard, now);
        *guard = next.clone();
        self.publish(&next);
        report
    }

    /// Writes the current snapshot regardless of the debounce window.
    /// The driver calls this on teardown.
    pub fn flush_save(&self) {
        let snapshot = self.snapshot();
        if let Some(saver) = self.saver.lock().unwrap().as_mut() {
            saver.flush(&snapshot);
        }
    }

    /// Called with the state lock held, so publishes happen in replace
    /// order: a snapshot can never be announced after a newer one. Lock
    /// order is state, then bus, then saver, everywhere.
    fn publish(&self, state: &GameState) {
        self.bus.lock().unwrap().notify(state);
        if let Some(saver) = self.saver.lock().unwrap().as_mut() {
            saver.request_save(state);
        }
    }
}
