use super::persistence::{PersistedState, STORE_KEY};
use super::*;
use crate::storage::{MemoryStorage, Storage};

#[test]
fn fresh_store_starts_at_defaults_without_writing() {
    let store = Store::new(MemoryStorage::default());
    assert_eq!(store.state().font_size, 30.0);
    assert_eq!(store.storage().writes, 0);
}

#[test]
fn persisted_fields_round_trip_through_storage() {
    let mut store = Store::new(MemoryStorage::default());
    store.update(|state| {
        state.font_size = 18.5;
        state.is_italic = true;
        state.sample_text = "mixed 123 text".to_string();
        state.user_style = ".preview { letter-spacing: 1px; }".to_string();
        state.sidebar_tab_active = "User Style".to_string();
        state.preview_tab_active = "Debug".to_string();
        state
            .panel_size
            .insert("sidebar".to_string(), serde_json::json!(280));
        state.fonts.push(FontSpec {
            fontface_name: "Body".to_string(),
            local_font_name: "Helvetica".to_string(),
            ..FontSpec::default()
        });
    });

    let rehydrated = Store::new(store.storage().clone());
    assert_eq!(
        PersistedState::snapshot(rehydrated.state()),
        PersistedState::snapshot(store.state())
    );
    assert_eq!(rehydrated.state().fonts.len(), 3);
    // Non-persisted fields stay at their defaults.
    assert!(rehydrated.state().option_style.is_empty());
    assert!(rehydrated.state().share_func.is_empty());
}

#[test]
fn rehydration_is_idempotent() {
    let mut store = Store::new(MemoryStorage::default());
    store.update(|state| {
        state.font_size = 42.0;
        state.preview_tab_active = "Code Preview".to_string();
    });

    let first = Store::new(store.storage().clone());
    let second = Store::new(store.storage().clone());
    assert_eq!(
        PersistedState::snapshot(first.state()),
        PersistedState::snapshot(second.state())
    );
}

#[test]
fn non_persisted_mutations_write_nothing() {
    let mut store = Store::new(MemoryStorage::default());
    store.update(|state| {
        state.option_style = ".preview { font-family: sans-serif; }".to_string();
        state.share_func.register("refreshPreview", std::rc::Rc::new(|| {}));
    });
    assert_eq!(store.storage().writes, 0);
    assert_eq!(store.storage().get(STORE_KEY), None);
}

#[test]
fn every_persisted_change_triggers_a_write() {
    let mut store = Store::new(MemoryStorage::default());
    store.update(|state| state.font_size = 31.0);
    store.update(|state| state.font_size = 32.0);
    // No change, no write.
    store.update(|state| state.font_size = 32.0);
    assert_eq!(store.storage().writes, 2);
}

#[test]
fn rehydrated_scenario_keeps_defaults_for_untouched_fields() {
    let mut store = Store::new(MemoryStorage::default());
    store.update(|state| {
        state.font_size = 42.0;
        state.is_italic = true;
    });

    let rehydrated = Store::new(store.storage().clone());
    assert_eq!(rehydrated.state().font_size, 42.0);
    assert!(rehydrated.state().is_italic);
    assert_eq!(rehydrated.state().fonts, AppState::default().fonts);
    assert_eq!(rehydrated.state().option_style, "");
}

#[test]
fn missing_or_malformed_blob_yields_defaults() {
    let missing = Store::new(MemoryStorage::default());
    assert_eq!(
        PersistedState::snapshot(missing.state()),
        PersistedState::default()
    );

    let mut storage = MemoryStorage::default();
    storage.set(STORE_KEY, "][ definitely not json");
    let malformed = Store::new(storage);
    assert_eq!(
        PersistedState::snapshot(malformed.state()),
        PersistedState::default()
    );
}

#[test]
fn reset_restores_defaults_and_clears_storage() {
    let mut store = Store::new(MemoryStorage::default());
    store.update(|state| state.sample_text = "custom".to_string());
    assert!(store.storage().get(STORE_KEY).is_some());

    store.reset();
    assert_eq!(store.state().sample_text, AppState::default().sample_text);
    assert_eq!(store.storage().get(STORE_KEY), None);

    // A later mutation still persists normally.
    store.update(|state| state.font_size = 12.0);
    assert!(store.storage().get(STORE_KEY).is_some());
}
