//! YAML frontmatter parsing.
//!
//! Documents may open with a header block:
//!
//! ```markdown
//! ---
//! name: deploy-service
//! description: How to deploy a service
//! ---
//! body text
//! ```
//!
//! Parsing never fails: a document without a well-formed header is a
//! document without metadata, and its content is returned untouched.

use serde_yml::Mapping;

/// Split a document into its decoded header and its body.
///
/// Returns an empty mapping and the input unchanged when there is no
/// opening delimiter, no closing delimiter, or the header does not
/// decode as a YAML mapping. On success the body is the content after
/// the closing delimiter, trimmed.
pub fn parse(raw: &str) -> (Mapping, String) {
    let lines: Vec<&str> = raw.split('\n').collect();

    if lines.first().map(|l| l.trim()) != Some("---") {
        return (Mapping::new(), raw.to_string());
    }

    let Some(close) = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == "---")
        .map(|(i, _)| i)
    else {
        return (Mapping::new(), raw.to_string());
    };

    let header = lines[1..close]
        .iter()
        .map(|line| line.trim_end_matches('\r'))
        .collect::<Vec<_>>()
        .join("\n");
    let body = lines[close + 1..].join("\n").trim().to_string();

    if header.trim().is_empty() {
        return (Mapping::new(), body);
    }

    match serde_yml::from_str::<Mapping>(&header) {
        Ok(mapping) => (mapping, body),
        // Malformed header: no metadata, and nothing hidden from a
        // direct read.
        Err(_) => (Mapping::new(), raw.to_string()),
    }
}
