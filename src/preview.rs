//! Assembles the standalone preview document written by the CLI.

use crate::store::AppState;

/// Renders the preview page: generated stylesheet, user stylesheet, and the
/// escaped sample text under the `.preview` class.
pub(crate) fn document(state: &AppState) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>fontmix preview</title>\n\
         <style>\n{option_style}</style>\n\
         <style>\n{user_style}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"preview\">{sample}</div>\n\
         </body>\n\
         </html>\n",
        option_style = state.option_style,
        user_style = state.user_style,
        sample = escape_html(&state.sample_text),
    )
}

/// Minimal HTML escaping for text nodes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
