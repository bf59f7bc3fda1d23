//! The top-level view: local state, the mount-time fetch, and rendering.
//!
//! # Design
//! `App` owns a `Store` and a `Transport`. Mounting dispatches
//! `FetchStarted`, runs one request for the hardcoded user id, and always
//! dispatches `FetchSettled`, so `loading` is true exactly while the fetch
//! is in flight. Fetch failures are logged and otherwise ignored.

use user_core::{User, UserClient};

use crate::compute::{expensive_value, Memo};
use crate::render::render;
use crate::state::{Action, NewUser, ViewState};
use crate::store::Store;
use crate::transport::Transport;

/// The user fetched on mount.
pub const INITIAL_USER_ID: u64 = 1;

pub struct App<T> {
    client: UserClient,
    transport: T,
    store: Store,
    iterations: u64,
    memo: Memo<u64, u64>,
}

impl<T: Transport> App<T> {
    pub fn new(client: UserClient, transport: T, iterations: u64) -> Self {
        Self {
            client,
            transport,
            store: Store::default(),
            iterations,
            memo: Memo::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn mount(&mut self) {
        self.store.dispatch(Action::FetchStarted);
        let users = self.fetch_initial().map(|user| vec![user]);
        self.store.dispatch(Action::FetchSettled(users));
    }

    fn fetch_initial(&self) -> Option<User> {
        let request = self.client.build_get_user(INITIAL_USER_ID);
        let response = match self.transport.execute(request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("fetching user {INITIAL_USER_ID} failed: {e}");
                return None;
            }
        };
        match self.client.parse_get_user(response) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("fetching user {INITIAL_USER_ID} failed: {e}");
                None
            }
        }
    }

    pub fn increment(&mut self) {
        self.store.dispatch(Action::Increment);
    }

    /// Appends a user to the local list only.
    pub fn add_user(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.store.dispatch(Action::AddUser(NewUser {
            name: name.into(),
            email: email.into(),
        }));
    }

    pub fn expensive_value(&mut self) -> u64 {
        self.memo.get_or_compute(self.iterations, |&n| expensive_value(n))
    }

    pub fn render(&mut self) -> String {
        let expensive = self.expensive_value();
        render(self.store.state(), expensive)
    }
}
