//! View state and the reducer that produces the next state from an action.
//!
//! # Design
//! States are values. `reduce` never mutates the list it was given: adding a
//! user copies the current list, appends, and wraps the result in a fresh
//! `Arc`. Change detection compares scalars by value and the list by
//! allocation, so a new list is always seen as a change and an untouched one
//! never is.

use std::sync::Arc;

use user_core::User;

/// A user entered locally. Never sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub enum Action {
    Increment,
    FetchStarted,
    /// `None` means the fetch failed; the list is left as it was.
    FetchSettled(Option<Vec<User>>),
    AddUser(NewUser),
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub count: u64,
    pub users: Arc<Vec<User>>,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            count: 0,
            users: Arc::new(Vec::new()),
            loading: false,
        }
    }
}

impl ViewState {
    pub fn reduce(&self, action: Action) -> ViewState {
        match action {
            Action::Increment => ViewState {
                count: self.count + 1,
                ..self.clone()
            },
            Action::FetchStarted => ViewState {
                loading: true,
                ..self.clone()
            },
            Action::FetchSettled(users) => ViewState {
                loading: false,
                users: users.map_or_else(|| Arc::clone(&self.users), Arc::new),
                ..self.clone()
            },
            Action::AddUser(new_user) => match self.with_appended(new_user) {
                Some(users) => ViewState {
                    users: Arc::new(users),
                    ..self.clone()
                },
                None => {
                    tracing::warn!("local user ids exhausted, user not added");
                    self.clone()
                }
            },
        }
    }

    /// Copy of the current list with `new_user` appended under the next local id,
    /// or `None` when the highest id leaves no room for another.
    fn with_appended(&self, new_user: NewUser) -> Option<Vec<User>> {
        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0).checked_add(1)?;
        let mut users = Vec::with_capacity(self.users.len() + 1);
        users.extend(self.users.iter().cloned());
        users.push(User {
            id,
            name: new_user.name,
            email: new_user.email,
            password: String::new(),
        });
        Some(users)
    }

    /// Whether a subscriber needs to hear about `other`.
    pub fn differs_from(&self, other: &ViewState) -> bool {
        self.count != other.count
            || self.loading != other.loading
            || !Arc::ptr_eq(&self.users, &other.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "pw".to_string(),
        }
    }

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn increment_bumps_count_and_shares_list() {
        let state = ViewState::default();
        let next = state.reduce(Action::Increment);
        assert_eq!(next.count, 1);
        assert!(Arc::ptr_eq(&state.users, &next.users));
        assert!(next.differs_from(&state));
    }

    #[test]
    fn add_user_builds_a_new_list() {
        let state = ViewState::default().reduce(Action::FetchSettled(Some(vec![user(1, "John")])));
        let before = Arc::clone(&state.users);

        let next = state.reduce(Action::AddUser(new_user("Local")));

        assert!(!Arc::ptr_eq(&before, &next.users));
        assert_eq!(before.len(), 1, "old list was mutated");
        assert_eq!(next.users.len(), 2);
        assert_eq!(next.users[0], before[0]);
        assert_eq!(next.users[1].id, 2);
        assert_eq!(next.users[1].name, "Local");
        assert!(next.differs_from(&state));
    }

    #[test]
    fn add_user_to_empty_list_starts_at_one() {
        let next = ViewState::default().reduce(Action::AddUser(new_user("First")));
        assert_eq!(next.users.len(), 1);
        assert_eq!(next.users[0].id, 1);
    }

    #[test]
    fn fetch_lifecycle_toggles_loading() {
        let started = ViewState::default().reduce(Action::FetchStarted);
        assert!(started.loading);

        let settled = started.reduce(Action::FetchSettled(Some(vec![user(1, "John")])));
        assert!(!settled.loading);
        assert_eq!(settled.users.len(), 1);
    }

    #[test]
    fn failed_fetch_keeps_list_and_clears_loading() {
        let state = ViewState::default().reduce(Action::AddUser(new_user("Kept")));
        let started = state.reduce(Action::FetchStarted);
        let settled = started.reduce(Action::FetchSettled(None));

        assert!(!settled.loading);
        assert!(Arc::ptr_eq(&state.users, &settled.users));
    }

    #[test]
    fn add_user_after_max_id_is_a_no_op() {
        let state = ViewState::default().reduce(Action::FetchSettled(Some(vec![user(u64::MAX, "Max")])));

        let next = state.reduce(Action::AddUser(new_user("Overflow")));

        assert!(Arc::ptr_eq(&state.users, &next.users));
        assert!(!next.differs_from(&state));
    }

    #[test]
    fn identical_state_does_not_differ() {
        let state = ViewState::default();
        assert!(!state.clone().differs_from(&state));
    }
}
