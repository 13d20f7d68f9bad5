//! Balance simulator for Monte Carlo analysis.
//!
//! Runs seeded headless playthroughs of the tick pipeline with a simple
//! player model (feed every tick, buy the cheapest affordable upgrade,
//! combine whenever possible) and reports progression pacing: time to the
//! first Big Pet and first Singularity Pet, and the end-state economy.

use crate::core::game_state::GameState;
use crate::core::tick::game_tick;
use crate::progression::combination::{can_combine, combine_pets};
use crate::progression::feeding::feed;
use crate::upgrades::bonuses::aggregate_bonuses;
use crate::upgrades::catalog::UPGRADES;
use crate::upgrades::purchase::purchase_upgrade;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated playthroughs.
    pub num_runs: u32,
    /// Simulated seconds per playthrough (one tick per second).
    pub seconds_per_run: u64,
    /// Random seed for reproducibility (None = random).
    pub seed: Option<u64>,
    /// Whether the simulated player feeds every tick.
    pub feed_each_tick: bool,
    /// Whether the simulated player buys upgrades greedily.
    pub buy_upgrades: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seconds_per_run: 4 * 60 * 60,
            seed: None,
            feed_each_tick: true,
            buy_upgrades: true,
        }
    }
}

/// Statistics from a single playthrough.
#[derive(Debug, Clone, Default)]
struct RunStats {
    first_big_pet_second: Option<u64>,
    first_singularity_second: Option<u64>,
    final_ai_pets: u64,
    final_big_pets: u64,
    final_singularity_pets: u64,
    final_scrap: u64,
    upgrades_bought: usize,
    combines_performed: u64,
}

/// Aggregated report across all runs.
#[derive(Debug, Clone, Default)]
pub struct SimReport {
    pub num_runs: u32,
    pub seconds_per_run: u64,
    pub runs_reaching_big_pet: u32,
    pub runs_reaching_singularity: u32,
    pub avg_first_big_pet_second: f64,
    pub avg_first_singularity_second: f64,
    pub avg_final_ai_pets: f64,
    pub avg_final_big_pets: f64,
    pub avg_final_singularity_pets: f64,
    pub avg_final_scrap: f64,
    pub avg_upgrades_bought: f64,
    pub avg_combines: f64,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Runs: {} x {}s simulated\n",
            self.num_runs, self.seconds_per_run
        ));
        out.push_str(&format!(
            "Reached Big Pet:        {}/{} (avg at {:.0}s)\n",
            self.runs_reaching_big_pet, self.num_runs, self.avg_first_big_pet_second
        ));
        out.push_str(&format!(
            "Reached Singularity:    {}/{} (avg at {:.0}s)\n",
            self.runs_reaching_singularity, self.num_runs, self.avg_first_singularity_second
        ));
        out.push_str(&format!(
            "Final menagerie (avg):  {:.1} AI / {:.1} Big / {:.2} Singularity\n",
            self.avg_final_ai_pets, self.avg_final_big_pets, self.avg_final_singularity_pets
        ));
        out.push_str(&format!(
            "Final scrap (avg):      {:.0}\n",
            self.avg_final_scrap
        ));
        out.push_str(&format!(
            "Upgrades bought (avg):  {:.1}   Combines (avg): {:.1}\n",
            self.avg_upgrades_bought, self.avg_combines
        ));
        out
    }
}

/// Runs the configured number of simulations and aggregates the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut stats = Vec::with_capacity(config.num_runs as usize);
    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };
        stats.push(simulate_single_run(config, &mut rng));
    }
    aggregate_report(config, &stats)
}

fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut state = GameState::new(0);
    let mut stats = RunStats::default();

    for second in 0..config.seconds_per_run {
        if config.feed_each_tick {
            let pet_bonus = aggregate_bonuses(&state.purchased_upgrades).pet_bonus;
            state = feed(&state, pet_bonus, rng).state;
        }

        let (next, _) = game_tick(&state, 1.0, rng);
        state = next;

        if config.buy_upgrades {
            // Greedy: cheapest unowned upgrade first (catalog is cost-ordered)
            for upgrade in UPGRADES {
                if !state.purchased_upgrades.contains(upgrade.id) && state.scrap >= upgrade.cost {
                    let (next, outcome) = purchase_upgrade(&state, upgrade.id);
                    if outcome.is_purchased() {
                        state = next;
                        stats.upgrades_bought += 1;
                    }
                    break;
                }
            }
        }

        while can_combine(&state) {
            match combine_pets(&state) {
                Ok(next) => {
                    state = next;
                    stats.combines_performed += 1;
                }
                Err(_) => break,
            }
        }

        if stats.first_big_pet_second.is_none() && state.populations.big_pets > 0 {
            stats.first_big_pet_second = Some(second);
        }
        if stats.first_singularity_second.is_none() && state.populations.singularity_pets > 0 {
            stats.first_singularity_second = Some(second);
        }
    }

    stats.final_ai_pets = state.populations.ai_pets;
    stats.final_big_pets = state.populations.big_pets;
    stats.final_singularity_pets = state.populations.singularity_pets;
    stats.final_scrap = state.scrap;
    stats
}

fn aggregate_report(config: &SimConfig, stats: &[RunStats]) -> SimReport {
    let n = stats.len().max(1) as f64;
    let avg_opt = |values: Vec<u64>| -> f64 {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<u64>() as f64 / values.len() as f64
        }
    };

    SimReport {
        num_runs: config.num_runs,
        seconds_per_run: config.seconds_per_run,
        runs_reaching_big_pet: stats
            .iter()
            .filter(|s| s.first_big_pet_second.is_some())
            .count() as u32,
        runs_reaching_singularity: stats
            .iter()
            .filter(|s| s.first_singularity_second.is_some())
            .count() as u32,
        avg_first_big_pet_second: avg_opt(
            stats.iter().filter_map(|s| s.first_big_pet_second).collect(),
        ),
        avg_first_singularity_second: avg_opt(
            stats
                .iter()
                .filter_map(|s| s.first_singularity_second)
                .collect(),
        ),
        avg_final_ai_pets: stats.iter().map(|s| s.final_ai_pets).sum::<u64>() as f64 / n,
        avg_final_big_pets: stats.iter().map(|s| s.final_big_pets).sum::<u64>() as f64 / n,
        avg_final_singularity_pets: stats.iter().map(|s| s.final_singularity_pets).sum::<u64>()
            as f64
            / n,
        avg_final_scrap: stats.iter().map(|s| s.final_scrap).sum::<u64>() as f64 / n,
        avg_upgrades_bought: stats.iter().map(|s| s.upgrades_bought).sum::<usize>() as f64 / n,
        avg_combines: stats.iter().map(|s| s.combines_performed).sum::<u64>() as f64 / n,
    }
}
