use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::model::AppState;

/// The safe-to-dump subset of the state, in stable declaration order.
///
/// `AppState::debug` serializes this view instead of filtering the full
/// record, so the font rules and the CSS bodies can never leak into the dump.
/// New state fields stay hidden unless added here.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DebugView<'a> {
    sidebar_tabs: &'a [String],
    sidebar_tab_active: &'a str,
    preview_tabs: &'a [String],
    preview_tab_active: &'a str,
    panel_size: &'a BTreeMap<String, Value>,
    sample_text: &'a str,
    font_size: f32,
    is_italic: bool,
    share_func: Vec<&'a str>,
}

impl AppState {
    /// Compact JSON rendering of the font rules, shown in the code preview.
    pub(crate) fn options(&self) -> String {
        serde_json::to_string(&self.fonts).unwrap_or_default()
    }

    /// Pretty-printed dump of the safe-to-show fields for the debug pane.
    pub(crate) fn debug(&self) -> String {
        let view = DebugView {
            sidebar_tabs: &self.sidebar_tabs,
            sidebar_tab_active: &self.sidebar_tab_active,
            preview_tabs: &self.preview_tabs,
            preview_tab_active: &self.preview_tab_active,
            panel_size: &self.panel_size,
            sample_text: &self.sample_text,
            font_size: self.font_size,
            is_italic: self.is_italic,
            share_func: self.share_func.names(),
        };
        serde_json::to_string_pretty(&view).unwrap_or_default()
    }
}
