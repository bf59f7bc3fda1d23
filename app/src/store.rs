//! Owner of the current view state.
//!
//! Subscribers run only when a dispatch produces a state that
//! `ViewState::differs_from` the previous one.

use crate::state::{Action, ViewState};

type Subscriber = Box<dyn FnMut(&ViewState) + Send>;

/// Holds the current view state and tells subscribers when it changes.
#[derive(Default)]
pub struct Store {
    state: ViewState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&ViewState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `action`. Returns whether the state changed (and subscribers ran).
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.state.reduce(action);
        if !next.differs_from(&self.state) {
            return false;
        }
        self.state = next;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        true
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
