//! Structural queries over the UI tree.
//!
//! A [`Locator`] is a path query the backend evaluates against the current
//! UI tree. This module only ever produces two match modes — attribute
//! equality and substring containment — over the two conventional
//! attributes, `text` and `label`, plus a raw passthrough for callers that
//! bring their own query.
//!
//! Literal values are escaped into XPath string-literal form before being
//! embedded in a query, so texts containing quote characters (`O'Brien`,
//! `say "hi"`) produce well-formed queries instead of breaking out of the
//! delimiter.

use std::fmt;

/// A structural query identifying zero or more elements in the UI tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    query: String,
}

impl Locator {
    /// A raw path query, passed to the backend verbatim.
    pub fn xpath(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Matches elements whose `text` or `label` attribute equals `text`.
    pub fn text(text: &str) -> Self {
        let lit = xpath_literal(text);
        Self {
            query: format!("//*[@text={lit}]|//*[@label={lit}]"),
        }
    }

    /// Matches elements whose `label` attribute equals `label`.
    pub fn label(label: &str) -> Self {
        let lit = xpath_literal(label);
        Self {
            query: format!("//*[@label={lit}]"),
        }
    }

    /// Matches elements whose `text` attribute contains `text`.
    pub fn text_containing(text: &str) -> Self {
        let lit = xpath_literal(text);
        Self {
            query: format!("//*[contains(@text,{lit})]"),
        }
    }

    /// The rendered query string consumed by the backend.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

/// Renders `value` as an XPath string literal.
///
/// Picks whichever quote kind does not appear in the value; when both do,
/// falls back to the `concat()` form with the single quotes spliced in as
/// `"'"` segments.
fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }

    let parts: Vec<String> = value.split('\'').map(|p| format!("'{p}'")).collect();
    format!("concat({})", parts.join(", \"'\", "))
}
