//! The element handle reported by an automation backend.
//!
//! A matched element is a small serde value rather than a live remote
//! object: the backend resolves a [`crate::locator::Locator`] and hands
//! back whatever identity and attributes it knows, and later verbs pass
//! the handle straight back to the backend.

use serde::{Deserialize, Serialize};

/// A UI element resolved by [`crate::driver::MobileDriver::find_element`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// The backend-assigned element id, passed back verbatim on
    /// click/type/clear.
    pub id: String,

    /// The element's visible text, if the backend reports one.
    #[serde(default)]
    pub text: Option<String>,

    /// The element's accessibility label, if the backend reports one.
    #[serde(default)]
    pub label: Option<String>,

    /// Whether the element is currently displayed. Backends that do not
    /// report visibility leave this unset, and waits treat the element as
    /// usable.
    #[serde(default)]
    pub displayed: Option<bool>,
}

impl Element {
    /// A handle carrying only an id, with no reported attributes.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: None,
            label: None,
            displayed: None,
        }
    }

    /// True unless the backend explicitly reported the element as hidden.
    pub fn is_displayed(&self) -> bool {
        self.displayed != Some(false)
    }
}
