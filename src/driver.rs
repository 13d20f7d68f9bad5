//! Periodic tick driver.
//!
//! A background thread invokes the session's tick pipeline at a fixed
//! interval. Ticks never overlap: each one runs to completion on the
//! driver thread before the next sleep begins. `stop()` joins the thread,
//! so after it returns no further tick can fire and no tick is left
//! half-applied; a final save is flushed on the way out.

use crate::core::constants::TICK_INTERVAL_MS;
use crate::session::GameSession;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

pub struct TickDriver {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Starts ticking at the default one-second cadence.
    pub fn start(session: Arc<GameSession>) -> Self {
        Self::start_with_interval(session, Duration::from_millis(TICK_INTERVAL_MS))
    }

    pub fn start_with_interval(session: Arc<GameSession>, interval: Duration) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let delta_seconds = interval.as_secs_f64();

        let handle = std::thread::spawn(move || {
            let mut rng = rand::thread_rng();
            while flag.load(Ordering::SeqCst) {
                std::thread::sleep(interval);
                if !flag.load(Ordering::SeqCst) {
                    break;
                }
                session.tick(delta_seconds, &mut rng);
            }
            session.flush_save();
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stops the driver and waits for the thread to finish its current
    /// tick. Idempotent.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("tick driver thread panicked during shutdown");
            }
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::GameState;

    #[test]
    fn test_driver_ticks_and_stops() {
        let mut state = GameState::new(0);
        state.populations.ai_pets = 100;
        let session = Arc::new(GameSession::new(state));

        let mut driver =
            TickDriver::start_with_interval(Arc::clone(&session), Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(120));
        driver.stop();
        assert!(!driver.is_running());

        let scrap_at_stop = session.snapshot().scrap;
        assert!(scrap_at_stop > 0, "driver should have credited scrap");

        // No further ticks after stop
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(session.snapshot().scrap, scrap_at_stop);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let session = Arc::new(GameSession::new(GameState::new(0)));
        let mut driver =
            TickDriver::start_with_interval(Arc::clone(&session), Duration::from_millis(10));
        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
    }
}
