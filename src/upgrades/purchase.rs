//! Shop purchase flow.
//!
//! Purchases fail routinely during normal play (browsing an unaffordable
//! shop), so rejections are plain values rather than errors. The returned
//! state is the unchanged input snapshot on any rejection.

use super::catalog::get_upgrade;
use crate::core::game_state::GameState;

/// Result of attempting to purchase an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    UnknownUpgrade,
    AlreadyPurchased,
    InsufficientScrap,
}

impl PurchaseOutcome {
    pub fn is_purchased(self) -> bool {
        self == PurchaseOutcome::Purchased
    }
}

/// True if the upgrade exists and the current balance covers its cost.
/// Does not consider ownership; use [`is_purchased`] for that.
pub fn can_afford(state: &GameState, upgrade_id: &str) -> bool {
    match get_upgrade(upgrade_id) {
        Some(upgrade) => state.scrap >= upgrade.cost,
        None => false,
    }
}

pub fn is_purchased(state: &GameState, upgrade_id: &str) -> bool {
    state.purchased_upgrades.contains(upgrade_id)
}

/// Attempts to purchase an upgrade, deducting its cost and recording
/// ownership in one step. Idempotent: buying an owned upgrade is rejected
/// with `AlreadyPurchased` and deducts nothing.
pub fn purchase_upgrade(state: &GameState, upgrade_id: &str) -> (GameState, PurchaseOutcome) {
    let upgrade = match get_upgrade(upgrade_id) {
        Some(u) => u,
        None => return (state.clone(), PurchaseOutcome::UnknownUpgrade),
    };

    if state.purchased_upgrades.contains(upgrade_id) {
        return (state.clone(), PurchaseOutcome::AlreadyPurchased);
    }

    if state.scrap < upgrade.cost {
        return (state.clone(), PurchaseOutcome::InsufficientScrap);
    }

    let mut next = state.clone();
    next.scrap -= upgrade.cost;
    next.purchased_upgrades.insert(upgrade_id.to_string());
    (next, PurchaseOutcome::Purchased)
}
