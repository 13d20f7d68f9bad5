//! Snapshot publish/subscribe.
//!
//! Subscribers register a callback and are invoked once per snapshot
//! replacement with a reference to the new state. There is no slicing or
//! diffing here: interested parties compare against whatever they cached.

use crate::core::game_state::GameState;

pub type Subscriber = Box<dyn Fn(&GameState) + Send>;

/// A plain list of snapshot observers.
#[derive(Default)]
pub struct StateBus {
    subscribers: Vec<Subscriber>,
}

impl StateBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Notifies every subscriber of a freshly published snapshot.
    pub fn notify(&self, state: &GameState) {
        for subscriber in &self.subscribers {
            subscriber(state);
        }
    }
}
