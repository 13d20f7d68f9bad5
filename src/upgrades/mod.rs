//! Shop upgrades: static catalog, bonus aggregation, and the purchase flow.

pub mod bonuses;
pub mod catalog;
pub mod purchase;
pub mod types;

pub use bonuses::{aggregate_bonuses, UpgradeBonuses};
pub use purchase::{purchase_upgrade, PurchaseOutcome};
pub use types::{Upgrade, UpgradeEffect};
