//! In-memory user collection.
//!
//! # Design
//! Users live in an insertion-ordered `Vec` and are found by linear scan.
//! The id counter sits behind the same lock as the collection, so two
//! concurrent creates can never observe the same next id. Ids never depend on
//! the collection length.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{Result, ServerError};

/// A stored user record. The password is kept and returned as plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/users`. Every field is required.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    /// `None` once the id space is used up.
    next_id: Option<u64>,
}

/// Shared handle to the user collection. Cloning shares the same data.
#[derive(Clone, Debug)]
pub struct UserStore {
    inner: Arc<RwLock<Inner>>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0).checked_add(1);
        Self {
            inner: Arc::new(RwLock::new(Inner { users, next_id })),
        }
    }

    /// The two records the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                password: "password123".to_string(),
            },
            User {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                password: "password456".to_string(),
            },
        ])
    }

    pub async fn get(&self, id: u64) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    pub async fn all(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn insert(&self, input: CreateUser) -> Result<User> {
        let mut inner = self.inner.write().await;
        let id = inner
            .next_id
            .ok_or_else(|| ServerError::Internal("user id space exhausted".to_string()))?;
        let user = User {
            id,
            name: input.name,
            email: input.email,
            password: input.password,
        };
        inner.next_id = id.checked_add(1);
        inner.users.push(user.clone());
        Ok(user)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded()
    }
}
