//! Template-name normalization.
//!
//! Talk-page authors write the same template name many ways:
//! `Constraint:One of`, `constraint_one_of`, `  Constraint : One of  `.
//! Normalization maps all lexical variants to one canonical form before the
//! dispatcher does any prefix or suffix matching.

/// The normalized prefix every constraint template name starts with,
/// including its trailing separator.
pub const CONSTRAINT_PREFIX: &str = "constraint ";

/// Normalizes a template name: trims, folds case, and treats underscores,
/// colons, and whitespace runs as a single space.
///
/// ```
/// use wdc_parser::normalize::normalize;
///
/// assert_eq!(normalize("Constraint:One of"), "constraint one of");
/// assert_eq!(normalize("constraint_one_of"), "constraint one of");
/// assert_eq!(normalize("  Constraint : One of  "), "constraint one of");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let folded: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ':' { ' ' } else { c })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a normalized constraint-template name into its kind suffix.
/// Returns `None` if the name does not start with the constraint prefix.
#[must_use]
pub fn constraint_suffix(normalized: &str) -> Option<&str> {
    normalized.strip_prefix(CONSTRAINT_PREFIX)
}
