use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sidebar tab labels, in display order.
pub(crate) const SIDEBAR_TABS: [&str; 2] = ["Options", "User Style"];

/// Preview tab labels, in display order.
pub(crate) const PREVIEW_TABS: [&str; 3] = ["Code Preview", "Font Preview", "Debug"];

/// One font-substitution rule.
///
/// `characters` selects the codepoints the rule applies to, either as CSS
/// `U+XXXX-YYYY` tokens or as a literal run of characters. Rules earlier in
/// the list win when ranges overlap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct FontSpec {
    pub fontface_name: String,
    pub local_font_name: String,
    pub google_font_name: String,
    pub font_weight_bias: String,
    pub characters: String,
}

/// Callback slots shared across UI panels, keyed by slot name.
#[derive(Clone, Default)]
pub(crate) struct SharedFuncs {
    slots: BTreeMap<String, Rc<dyn Fn()>>,
}

#[cfg_attr(not(test), allow(dead_code))]
impl SharedFuncs {
    /// Registers (or replaces) the callback under `name`.
    pub(crate) fn register(&mut self, name: impl Into<String>, func: Rc<dyn Fn()>) {
        self.slots.insert(name.into(), func);
    }

    /// Returns the callback registered under `name`.
    pub(crate) fn get(&self, name: &str) -> Option<Rc<dyn Fn()>> {
        self.slots.get(name).cloned()
    }

    /// Invokes the callback under `name`. Returns `false` when no slot exists.
    pub(crate) fn call(&self, name: &str) -> bool {
        match self.slots.get(name) {
            Some(func) => {
                func();
                true
            }
            None => false,
        }
    }

    /// Registered slot names, in sorted order.
    pub(crate) fn names(&self) -> Vec<&str> {
        self.slots.keys().map(String::as_str).collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for SharedFuncs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.slots.keys()).finish()
    }
}

/// The single long-lived application state record.
///
/// Constructed once at startup (optionally rehydrated from storage), mutated
/// in place through `Store::update` for the process lifetime. All fields are
/// freely settable; nothing here validates tab names or character sets.
#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub sidebar_tabs: Vec<String>,
    pub sidebar_tab_active: String,
    pub preview_tabs: Vec<String>,
    pub preview_tab_active: String,
    pub panel_size: BTreeMap<String, Value>,

    pub fonts: Vec<FontSpec>,

    pub sample_text: String,
    pub font_size: f32,
    pub is_italic: bool,

    pub option_style: String,
    pub user_style: String,

    pub share_func: SharedFuncs,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sidebar_tabs: SIDEBAR_TABS.iter().map(|tab| tab.to_string()).collect(),
            sidebar_tab_active: SIDEBAR_TABS[0].to_string(),
            preview_tabs: PREVIEW_TABS.iter().map(|tab| tab.to_string()).collect(),
            preview_tab_active: PREVIEW_TABS[1].to_string(),
            panel_size: BTreeMap::new(),
            fonts: default_fonts(),
            sample_text: "1-23,45全聚/感ABC@abc+67.890%".to_string(),
            font_size: 30.0,
            is_italic: false,
            option_style: String::new(),
            user_style: String::new(),
            share_func: SharedFuncs::default(),
        }
    }
}

/// Built-in font rules: emoji glyphs from local system fonts, digits and
/// arithmetic punctuation from Google `Barlow` one weight step bolder.
fn default_fonts() -> Vec<FontSpec> {
    vec![
        FontSpec {
            fontface_name: "Emoji".to_string(),
            local_font_name: "AppleColorEmoji, Segoe UI Emoji, Noto Color Emoji".to_string(),
            google_font_name: String::new(),
            font_weight_bias: String::new(),
            characters: "U+1F300-1F5FF, U+1F600-1F64F, U+1F680-1F6FF, U+2600-26FF, \
                         U+2700-27BF, U+1F1E6-1F1FF, U+1F900-1F9FF, U+1FA70-1FAFF"
                .to_string(),
        },
        FontSpec {
            fontface_name: "Number".to_string(),
            local_font_name: String::new(),
            google_font_name: "Barlow".to_string(),
            font_weight_bias: "1".to_string(),
            characters: "1234567890,.+-%/\\@".to_string(),
        },
    ]
}
