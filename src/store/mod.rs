mod model;
mod persistence;
mod views;

pub(crate) use model::{AppState, FontSpec};

use crate::storage::Storage;
use persistence::{PersistedState, STORE_KEY, load_state, save_state};

/// Owns the state record and mirrors the persisted subset to storage.
///
/// The store is constructed once at startup and passed to whoever needs it;
/// there is no global instance. Every mutation goes through [`Store::update`],
/// which rewrites the full allow-listed snapshot whenever it changed. Writes
/// are synchronous and unbatched.
pub(crate) struct Store<S: Storage> {
    state: AppState,
    storage: S,
    last_persisted: PersistedState,
}

impl<S: Storage> Store<S> {
    /// Opens the store, rehydrating from `storage` when a blob is present.
    pub(crate) fn new(storage: S) -> Self {
        let state = load_state(&storage);
        let last_persisted = PersistedState::snapshot(&state);
        Self {
            state,
            storage,
            last_persisted,
        }
    }

    /// Shared view of the state record.
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutates the state, then mirrors the persisted subset if it changed.
    ///
    /// Mutations that only touch non-persisted fields write nothing.
    pub(crate) fn update<R>(&mut self, mutate: impl FnOnce(&mut AppState) -> R) -> R {
        let out = mutate(&mut self.state);
        let snapshot = PersistedState::snapshot(&self.state);
        if snapshot != self.last_persisted {
            save_state(&mut self.storage, &snapshot);
            self.last_persisted = snapshot;
        }
        out
    }

    /// Restores the defaults and removes the stored blob.
    pub(crate) fn reset(&mut self) {
        self.state = AppState::default();
        self.last_persisted = PersistedState::snapshot(&self.state);
        self.storage.remove(STORE_KEY);
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store_roundtrip.rs"]
mod tests;
