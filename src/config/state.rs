// Application state module
// Shared process-wide state, immutable after startup

use std::time::Duration;

use super::types::Config;
use crate::store::EntryStore;

/// Application state
pub struct AppState {
    pub config: Config,
    pub store: EntryStore,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: EntryStore::new(Duration::from_millis(config.store.lock_timeout_ms)),
            config: config.clone(),
        }
    }
}
