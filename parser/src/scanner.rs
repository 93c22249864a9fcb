//! Wikitext template scanner.
//!
//! Extracts top-level `{{...}}` invocations from raw talk-page text. Nested
//! invocations (`{{Q|5}}` inside a `values` parameter) stay embedded in their
//! parameter value; parameter splitting only happens at brace and link depth
//! zero, so pipes inside `{{...}}` and `[[...|...]]` never split a value.
//! Malformed spans (unbalanced braces) are skipped, never an error.

use wdc_model::Template;

/// Scans raw wikitext and returns every top-level template invocation in
/// source order. Templates carry no subject; callers attach the talk page's
/// property id via [`Template::with_page`].
#[must_use]
pub fn scan_templates(text: &str) -> Vec<Template> {
    let mut templates = Vec::new();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if &bytes[i..i + 2] == b"{{" {
            match template_end(bytes, i) {
                Some(end) => {
                    let raw = &text[i..end];
                    if let Some(template) = parse_invocation(raw) {
                        templates.push(template);
                    }
                    i = end;
                }
                // Unbalanced open: nothing after this point can close it.
                None => break,
            }
        } else {
            i += 1;
        }
    }
    templates
}

/// Finds the exclusive end index of the template opening at `start`,
/// tracking nested `{{`/`}}` pairs. Returns `None` if unbalanced.
fn template_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        if i + 1 < bytes.len() && &bytes[i..i + 2] == b"{{" {
            depth += 1;
            i += 2;
        } else if i + 1 < bytes.len() && &bytes[i..i + 2] == b"}}" {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return Some(i);
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Parses one `{{...}}` slice into a [`Template`]. Returns `None` for an
/// empty invocation (`{{}}` or all-whitespace name).
fn parse_invocation(raw: &str) -> Option<Template> {
    let inner = &raw[2..raw.len() - 2];
    let segments = split_top_level(inner);
    let mut iter = segments.into_iter();
    let name = iter.next()?.trim();
    if name.is_empty() {
        return None;
    }
    let mut params = Vec::new();
    let mut position = 0usize;
    for segment in iter {
        match split_key_value(segment) {
            Some((key, value)) => params.push((key.trim().to_owned(), value.to_owned())),
            None => {
                position += 1;
                params.push((position.to_string(), segment.to_owned()));
            }
        }
    }
    Some(Template::new(name, None, params, raw))
}

/// Splits on `|` at brace depth zero and link depth zero.
fn split_top_level(inner: &str) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut segments = Vec::new();
    let mut brace_depth = 0usize;
    let mut link_depth = 0usize;
    let mut seg_start = 0;
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
        } else if bytes[i] == b'|' && brace_depth == 0 && link_depth == 0 {
            segments.push(&inner[seg_start..i]);
            i += 1;
            seg_start = i;
        } else {
            i += 1;
        }
    }
    segments.push(&inner[seg_start..]);
    segments
}

/// Splits `key=value` at the first `=` outside braces and links.
fn split_key_value(segment: &str) -> Option<(&str, &str)> {
    let bytes = segment.as_bytes();
    let mut brace_depth = 0usize;
    let mut link_depth = 0usize;
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
        } else if bytes[i] == b'=' && brace_depth == 0 && link_depth == 0 {
            return Some((&segment[..i], &segment[i + 1..]));
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_simple_template() {
        let templates = scan_templates("before {{Constraint:Single value}} after");
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name(), "Constraint:Single value");
        assert!(templates[0].params().is_empty());
    }

    #[test]
    fn nested_invocations_stay_inside_parameter_values() {
        let text = "{{Constraint:One of|values={{Q|5}}, {{Q|6}}}}";
        let templates = scan_templates(text);
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name(), "Constraint:One of");
        assert_eq!(templates[0].get("values"), Some("{{Q|5}}, {{Q|6}}"));
        assert_eq!(templates[0].raw(), text);
    }

    #[test]
    fn link_pipes_do_not_split_parameters() {
        let templates = scan_templates("{{Constraint:One of|values=[[Q5|human]]}}");
        assert_eq!(templates[0].get("values"), Some("[[Q5|human]]"));
    }

    #[test]
    fn positional_parameters_get_numeric_keys() {
        let templates = scan_templates("{{Q|5}}");
        assert_eq!(templates[0].name(), "Q");
        assert_eq!(templates[0].get("1"), Some("5"));
    }

    #[test]
    fn unbalanced_braces_are_skipped() {
        assert!(scan_templates("{{Constraint:One of|values=Q5").is_empty());
        let templates = scan_templates("{{A}} {{broken");
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name(), "A");
    }

    #[test]
    fn multiple_templates_in_source_order() {
        let templates = scan_templates("{{Constraint:Format|pattern=\\d+}}\n{{Constraint:Single value}}");
        let names: Vec<_> = templates.iter().map(Template::name).collect();
        assert_eq!(names, ["Constraint:Format", "Constraint:Single value"]);
    }
}
