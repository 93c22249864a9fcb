//! Wiki-template invocation records.

/// A parsed wiki-template invocation from a property-talk page.
///
/// Immutable after construction: parsers read it, nothing mutates it. The
/// `page` is the subject property the surrounding talk page belongs to, and
/// `raw` preserves the original wikitext for annotation comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    page: Option<String>,
    params: Vec<(String, String)>,
    raw: String,
}

impl Template {
    /// Creates a template record. Parameter keys are expected unique; a later
    /// duplicate key is ignored on lookup.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        page: Option<String>,
        params: Vec<(String, String)>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            page,
            params,
            raw: raw.into(),
        }
    }

    /// The template name as written in the source, e.g. `Constraint:One of`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subject property id of the enclosing talk page, if known.
    #[must_use]
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    /// Looks up a parameter value by key (case as given). First match wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All parameters in source order.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// The original wikitext of the invocation.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns a copy of this template with the subject property set.
    #[must_use]
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_lookup_is_first_match() {
        let t = Template::new(
            "Constraint:One of",
            Some("P31".to_owned()),
            vec![
                ("values".to_owned(), "{{Q|5}}".to_owned()),
                ("values".to_owned(), "shadowed".to_owned()),
            ],
            "{{Constraint:One of|values={{Q|5}}}}",
        );
        assert_eq!(t.get("values"), Some("{{Q|5}}"));
        assert_eq!(t.get("pattern"), None);
        assert_eq!(t.page(), Some("P31"));
    }
}
