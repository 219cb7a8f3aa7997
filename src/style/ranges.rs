//! Character-set expressions and their CSS `unicode-range` form.
//!
//! An expression is either a list of `U+XXXX` / `U+XXXX-YYYY` tokens
//! (trailing `?` wildcards allowed) or a literal run of characters.

/// Inclusive codepoint range.
pub(crate) type CodepointRange = (u32, u32);

/// Parses `expr` into sorted, merged codepoint ranges.
///
/// Unparseable `U+` tokens are skipped silently; an expression without any
/// `U+` token is read as a literal character set.
pub(crate) fn parse(expr: &str) -> Vec<CodepointRange> {
    let ranges: Vec<CodepointRange> = if has_unicode_token(expr) {
        split_tokens(expr).filter_map(parse_token).collect()
    } else {
        expr.chars().map(|ch| (ch as u32, ch as u32)).collect()
    };
    merge(ranges)
}

/// Renders ranges as a CSS `unicode-range` value.
pub(crate) fn format(ranges: &[CodepointRange]) -> String {
    let tokens: Vec<String> = ranges
        .iter()
        .map(|&(start, end)| {
            if start == end {
                format!("U+{start:X}")
            } else {
                format!("U+{start:X}-{end:X}")
            }
        })
        .collect();
    tokens.join(", ")
}

/// Normalizes `expr` into canonical `U+` tokens, or `None` when nothing parses.
pub(crate) fn normalize(expr: &str) -> Option<String> {
    let ranges = parse(expr);
    (!ranges.is_empty()).then(|| format(&ranges))
}

fn split_tokens(expr: &str) -> impl Iterator<Item = &str> {
    expr.split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn has_unicode_token(expr: &str) -> bool {
    split_tokens(expr).any(|token| {
        token.len() > 2
            && token
                .get(..2)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("u+"))
    })
}

fn parse_token(token: &str) -> Option<CodepointRange> {
    let body = token
        .strip_prefix("U+")
        .or_else(|| token.strip_prefix("u+"))?;
    if let Some((start, end)) = body.split_once('-') {
        let range = (parse_hex(start)?, parse_hex(end)?);
        (range.0 <= range.1).then_some(range)
    } else if body.contains('?') {
        let start = parse_hex(&body.replace('?', "0"))?;
        let end = parse_hex(&body.replace('?', "F"))?;
        Some((start, end))
    } else {
        let codepoint = parse_hex(body)?;
        Some((codepoint, codepoint))
    }
}

fn parse_hex(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > 6 {
        return None;
    }
    u32::from_str_radix(digits, 16)
        .ok()
        .filter(|&codepoint| codepoint <= 0x10FFFF)
}

fn merge(mut ranges: Vec<CodepointRange>) -> Vec<CodepointRange> {
    ranges.sort_unstable();
    let mut merged: Vec<CodepointRange> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, last_end)) if start <= last_end.saturating_add(1) => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}
