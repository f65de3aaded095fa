//! Driver trait for backend-agnostic mobile UI automation.
//!
//! This module defines the [`MobileDriver`] trait, the seam between the
//! high-level verbs in [`crate::actions`] and whatever automation backend
//! actually talks to the device (a local Appium server, a cloud device
//! farm, or a test double). Consumers hold the driver as
//! `Arc<dyn MobileDriver>` and never see the transport.
//!
//! The trait surface is deliberately small: element lookup by [`Locator`],
//! the three element verbs (click / send keys / clear), a generic
//! "execute named command with a parameter map" entrypoint used for touch
//! gestures, Android key-event dispatch, and URL navigation. Everything
//! richer is composed on top by [`crate::actions::Actions`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commands::ScriptParams;
use crate::element::Element;
use crate::locator::Locator;

/// Errors that can occur inside an automation backend.
///
/// This enum unifies backend failures behind a single type so the action
/// layer can handle them uniformly regardless of transport.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A command or operation failed with the given message.
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// The backend is not available or not connected.
    #[error("not connected to automation backend")]
    NotConnected,

    /// The connection to the backend was lost mid-session.
    #[error("connection lost: {0}")]
    ConnectionLost(String),

    /// A backend operation timed out.
    #[error("operation timed out")]
    Timeout,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend returned a payload that could not be parsed.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// The platform family a driver session targets.
///
/// Used by [`crate::actions::Actions::go_home`] to pick between an Android
/// key event and the generic press-button command, and by
/// [`crate::capabilities::Capabilities`] for the `platformName` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Android devices and emulators.
    Android,
    /// iOS devices and simulators.
    #[serde(rename = "iOS")]
    Ios,
}

impl Platform {
    /// The capability value the driver factory expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }

    /// True for Android-family targets.
    pub fn is_android(self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(format!("unknown platform '{other}'")),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Android hardware key events dispatched via [`MobileDriver::press_key`].
///
/// Carries the numeric Android keycode the backend puts on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AndroidKey {
    /// The home button (keycode 3).
    Home,
    /// The back button (keycode 4).
    Back,
    /// The enter key (keycode 66).
    Enter,
    /// The recent-apps switcher (keycode 187).
    AppSwitch,
}

impl AndroidKey {
    /// The Android keycode for this key.
    pub fn code(self) -> u16 {
        match self {
            AndroidKey::Home => 3,
            AndroidKey::Back => 4,
            AndroidKey::Enter => 66,
            AndroidKey::AppSwitch => 187,
        }
    }
}

/// Trait for backend-agnostic mobile UI automation.
///
/// Implementors provide the raw device operations using their specific
/// transport. All device-touching methods are async; the trait is
/// object-safe and consumed as `Arc<dyn MobileDriver>` by
/// [`crate::actions::Actions`].
///
/// Lookup semantics: [`find_element`](Self::find_element) inspects the
/// current UI tree exactly once and returns `Ok(None)` when nothing
/// matches — it never polls. Polling lives in [`crate::wait::Wait`].
#[async_trait]
pub trait MobileDriver: Send + Sync {
    /// The platform family of the connected device.
    fn platform(&self) -> Platform;

    /// Look up a single element matching `locator` in the current UI tree.
    ///
    /// Returns `Ok(None)` when no element matches. A returned element may
    /// still be reported as not displayed; visibility filtering is the
    /// caller's concern.
    async fn find_element(&self, locator: &Locator) -> Result<Option<Element>, DriverError>;

    /// Click (tap) a previously resolved element.
    async fn click(&self, element: &Element) -> Result<(), DriverError>;

    /// Type text into a previously resolved element.
    async fn send_keys(&self, element: &Element, text: &str) -> Result<(), DriverError>;

    /// Clear the content of a previously resolved element.
    async fn clear(&self, element: &Element) -> Result<(), DriverError>;

    /// Execute a named backend command with a string-keyed parameter map.
    ///
    /// Used for the touch-gesture and press-button commands in
    /// [`crate::commands`]. The returned value is whatever the backend
    /// reports; most commands return null.
    async fn execute(
        &self,
        command: &str,
        params: ScriptParams,
    ) -> Result<serde_json::Value, DriverError>;

    /// Dispatch an Android hardware key event.
    ///
    /// Only meaningful when [`platform`](Self::platform) is Android; other
    /// backends may reject it with [`DriverError::CommandFailed`].
    async fn press_key(&self, key: AndroidKey) -> Result<(), DriverError>;

    /// Navigate the device browser (or webview) to a URL.
    async fn goto_url(&self, url: &str) -> Result<(), DriverError>;
}
