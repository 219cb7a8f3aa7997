use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{AppState, FontSpec};
use crate::storage::Storage;

/// Key the state blob is stored under.
pub(crate) const STORE_KEY: &str = "form";

/// The persisted field subset, with the wire names the blob is written in.
///
/// This struct is the allow-list: fields added to `AppState` stay out of the
/// blob unless they are added here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PersistedState {
    pub(crate) fonts: Vec<FontSpec>,
    pub(crate) sample_text: String,
    pub(crate) font_size: f32,
    pub(crate) is_italic: bool,
    pub(crate) user_style: String,
    pub(crate) sidebar_tab_active: String,
    pub(crate) preview_tab_active: String,
    pub(crate) panel_size: BTreeMap<String, Value>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self::snapshot(&AppState::default())
    }
}

impl PersistedState {
    /// Captures the persisted subset of `state`.
    pub(crate) fn snapshot(state: &AppState) -> Self {
        Self {
            fonts: state.fonts.clone(),
            sample_text: state.sample_text.clone(),
            font_size: state.font_size,
            is_italic: state.is_italic,
            user_style: state.user_style.clone(),
            sidebar_tab_active: state.sidebar_tab_active.clone(),
            preview_tab_active: state.preview_tab_active.clone(),
            panel_size: state.panel_size.clone(),
        }
    }

    /// Overlays this snapshot onto `state`, field by field.
    pub(crate) fn apply(self, state: &mut AppState) {
        state.fonts = self.fonts;
        state.sample_text = self.sample_text;
        state.font_size = self.font_size;
        state.is_italic = self.is_italic;
        state.user_style = self.user_style;
        state.sidebar_tab_active = self.sidebar_tab_active;
        state.preview_tab_active = self.preview_tab_active;
        state.panel_size = self.panel_size;
    }
}

/// Rehydrates a state record from `storage`.
///
/// An absent, unreadable, or unparseable blob falls back to the defaults;
/// nothing is surfaced to the caller.
pub(crate) fn load_state(storage: &dyn Storage) -> AppState {
    let mut state = AppState::default();
    let Some(raw) = storage.get(STORE_KEY) else {
        return state;
    };
    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(persisted) => persisted.apply(&mut state),
        Err(err) => debug!("stored state unreadable, using defaults: {err}"),
    }
    state
}

/// Writes the snapshot under the store key. Errors are silently ignored.
pub(crate) fn save_state(storage: &mut dyn Storage, snapshot: &PersistedState) {
    let Ok(json) = serde_json::to_string(snapshot) else {
        return;
    };
    storage.set(STORE_KEY, &json);
}
