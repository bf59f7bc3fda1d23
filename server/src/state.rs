//! Shared handler state and the coin behind the async operation.

use std::{fmt, path::PathBuf, sync::Arc, time::Duration};

use crate::{config::Config, store::UserStore};

/// Source of the coin flip behind `/api/async-operation`.
pub trait Coin: Send + Sync {
    /// `true` means the operation succeeds.
    fn flip(&self) -> bool;
}

/// Fair coin backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCoin;

impl Coin for RandomCoin {
    fn flip(&self) -> bool {
        rand::random::<bool>()
    }
}

/// Coin that always lands the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedCoin(pub bool);

impl Coin for FixedCoin {
    fn flip(&self) -> bool {
        self.0
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub files_dir: Arc<PathBuf>,
    pub async_delay: Duration,
    pub coin: Arc<dyn Coin>,
}

impl AppState {
    pub fn new(files_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: UserStore::seeded(),
            files_dir: Arc::new(files_dir.into()),
            async_delay: Duration::ZERO,
            coin: Arc::new(RandomCoin),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.files_dir.clone()).with_async_delay(config.async_delay)
    }

    pub fn with_store(mut self, store: UserStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_async_delay(mut self, delay: Duration) -> Self {
        self.async_delay = delay;
        self
    }

    pub fn with_coin(mut self, coin: impl Coin + 'static) -> Self {
        self.coin = Arc::new(coin);
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("files_dir", &self.files_dir)
            .field("async_delay", &self.async_delay)
            .finish_non_exhaustive()
    }
}
