//! Per-file store locking
//!
//! A process-wide registry of async mutexes keyed by entries-file path.
//! `acquire` waits a bounded time for the exclusive lock and gives up with
//! `None` on timeout; dropping the returned guard releases the lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Duration;

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>> = OnceLock::new();

fn lock_for(filename: &str) -> Arc<AsyncMutex<()>> {
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = registry.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(
        map.entry(filename.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
    )
}

/// Acquire the exclusive lock for `filename`, waiting at most `timeout`.
pub async fn acquire(filename: &str, timeout: Duration) -> Option<OwnedMutexGuard<()>> {
    let lock = lock_for(filename);
    tokio::time::timeout(timeout, lock.lock_owned()).await.ok()
}
