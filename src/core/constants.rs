// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const TICK_DELTA_SECONDS: f64 = TICK_INTERVAL_MS as f64 / 1000.0;

// Singularity progression rates (per pet, per second)
pub const BASE_AI_PET_SINGULARITY_RATE: f64 = 0.0001;
pub const BASE_BIG_PET_SINGULARITY_RATE: f64 = 0.01;

// Scrap generation rates (per pet, per second)
pub const AI_PET_SCRAP_RATE: f64 = 1.0;
pub const BIG_PET_SCRAP_RATE: f64 = 0.5;
// Singularity Pets generate no scrap
pub const SINGULARITY_PET_SCRAP_RATE: f64 = 0.0;

// Manual actions
pub const COMBINE_COST: u64 = 10;
pub const FEED_BOOST_CHANCE: f64 = 0.01;

// Offline progression
pub const OFFLINE_EFFICIENCY: f64 = 0.25;
pub const MAX_OFFLINE_SECONDS: i64 = 8 * 60 * 60;
pub const MIN_OFFLINE_SECONDS: i64 = 60;

// Save system
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 1000;
pub const SAVE_VERSION_MAGIC: u64 = 0x4D454E4147455200; // "MENAGER\0"
// Real saves are a few KiB; a larger claimed length is a corrupt or
// hostile file, rejected before any allocation
pub const MAX_SAVE_PAYLOAD_BYTES: u32 = 16 * 1024 * 1024;

// Counts and balances are clamped to 2^53 so saves survive a round-trip
// through JSON tooling that parses numbers as f64
pub const MAX_SAFE_COUNT: u64 = 1 << 53;
