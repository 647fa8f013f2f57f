//! Process-wide store instances, one per preferences file.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use once_cell::sync::Lazy;
use tracing::debug;

use super::NotificationStore;
use crate::utils::clock::{Clock, SystemClock};

pub type SharedStore = Arc<Mutex<NotificationStore>>;

static STORES: Lazy<Mutex<HashMap<PathBuf, SharedStore>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn stores() -> MutexGuard<'static, HashMap<PathBuf, SharedStore>> {
    STORES.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the shared store for `path`, opening it with the system clock on
/// first access.
pub fn shared(path: impl Into<PathBuf>) -> SharedStore {
    shared_with_clock(path, Arc::new(SystemClock))
}

/// Like [`shared`]; `clock` is only used when the store is created here.
pub fn shared_with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> SharedStore {
    let path = path.into();
    let mut stores = stores();
    if let Some(existing) = stores.get(&path) {
        return Arc::clone(existing);
    }
    debug!(path = %path.display(), "opening shared notification store");
    let store = Arc::new(Mutex::new(NotificationStore::open_with_clock(
        path.clone(),
        clock,
    )));
    stores.insert(path, Arc::clone(&store));
    store
}

/// Forgets every cached store so the next access reloads from disk.
pub fn reset() {
    stores().clear();
}

/// Locks a shared store, recovering the guard if a previous holder panicked.
pub fn lock(store: &SharedStore) -> MutexGuard<'_, NotificationStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
