//! Builds the generated stylesheet (the `option_style` text) from the font
//! rules and preview options.

pub(crate) mod ranges;

use crate::store::{AppState, FontSpec};

const GOOGLE_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";

/// CSS weight a weight bias of zero maps to. Each bias step moves one
/// hundred-weight, clamped to the valid 100..=900 span.
const BASE_WEIGHT: i32 = 400;
const WEIGHT_STEP: i32 = 100;

/// Generates the full stylesheet for the current rules and preview options.
///
/// Emits the Google `@import` lines, one `@font-face` block per usable rule,
/// and the `.preview` rule whose family stack realizes first-match-wins
/// priority across overlapping character ranges.
pub(crate) fn stylesheet(state: &AppState) -> String {
    let mut css = String::new();
    for import in google_imports(&state.fonts) {
        css.push_str(&import);
        css.push('\n');
    }
    for rule in &state.fonts {
        if let Some(block) = font_face(rule) {
            css.push_str(&block);
        }
    }
    css.push_str(&preview_rule(state));
    css
}

/// `@import` lines for every distinct Google family, in rule order.
fn google_imports(fonts: &[FontSpec]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut imports = Vec::new();
    for rule in fonts {
        let family = rule.google_font_name.trim();
        if family.is_empty() || seen.contains(&family) {
            continue;
        }
        seen.push(family);
        let mut query = format!("family={}", family.replace(' ', "+"));
        if let Some(weight) = css_weight(&rule.font_weight_bias) {
            query.push_str(&format!(":wght@{weight}"));
        }
        imports.push(format!(
            "@import url(\"{GOOGLE_FONTS_CSS_URL}?{query}&display=swap\");"
        ));
    }
    imports
}

/// One `@font-face` block, or `None` when the rule has no name or no source.
fn font_face(rule: &FontSpec) -> Option<String> {
    let family = rule.fontface_name.trim();
    if family.is_empty() {
        return None;
    }
    let sources = font_sources(rule);
    if sources.is_empty() {
        return None;
    }

    let mut block = format!(
        "@font-face {{\n  font-family: \"{family}\";\n  src: {};\n",
        sources.join(", ")
    );
    if let Some(range) = ranges::normalize(&rule.characters) {
        block.push_str(&format!("  unicode-range: {range};\n"));
    }
    if let Some(weight) = css_weight(&rule.font_weight_bias) {
        block.push_str(&format!("  font-weight: {weight};\n"));
    }
    block.push_str("}\n");
    Some(block)
}

/// `local()` sources: each comma-separated local name, then the Google family.
fn font_sources(rule: &FontSpec) -> Vec<String> {
    let mut sources: Vec<String> = rule
        .local_font_name
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!("local(\"{name}\")"))
        .collect();
    let google = rule.google_font_name.trim();
    if !google.is_empty() {
        sources.push(format!("local(\"{google}\")"));
    }
    sources
}

/// The `.preview` rule: fontface stack in rule order, then `sans-serif`.
fn preview_rule(state: &AppState) -> String {
    let mut stack: Vec<String> = state
        .fonts
        .iter()
        .map(|rule| rule.fontface_name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| format!("\"{name}\""))
        .collect();
    stack.push("sans-serif".to_string());

    let font_style = if state.is_italic { "italic" } else { "normal" };
    format!(
        ".preview {{\n  font-family: {};\n  font-size: {}px;\n  font-style: {font_style};\n}}\n",
        stack.join(", "),
        state.font_size,
    )
}

/// Maps a weight-bias expression to a CSS weight, or `None` when unset.
fn css_weight(bias: &str) -> Option<i32> {
    let steps: i32 = bias.trim().parse().ok()?;
    Some((BASE_WEIGHT + steps * WEIGHT_STEP).clamp(100, 900))
}

#[cfg(test)]
#[path = "../../tests/unit/style_stylesheet.rs"]
mod tests;
