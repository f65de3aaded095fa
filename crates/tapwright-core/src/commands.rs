//! Named backend commands and their parameter maps.
//!
//! Touch gestures and button presses are not first-class driver methods;
//! they go through the generic
//! [`execute`](crate::driver::MobileDriver::execute) entrypoint as a
//! command name plus a string-keyed parameter map. This module is the
//! vocabulary: the command-name constants and builders for the parameter
//! maps each command expects.
//!
//! Coordinates are strings, either absolute pixels (`"120,480"`) or
//! percentage-of-screen (`"80%,50%"`), and are passed through to the
//! backend verbatim — no coordinate math happens on this side. The
//! percentage form is the one to prefer, since it survives resolution
//! differences between devices.

use std::time::Duration;

use serde_json::{Map, Value};

/// String-keyed parameter map for [`crate::driver::MobileDriver::execute`].
pub type ScriptParams = Map<String, Value>;

/// Touch gesture commands.
pub mod touch {
    /// Two-point drag. Params: `start`, `end`, `duration`.
    pub const SWIPE: &str = "mobile:touch:swipe";

    /// Single-point touch. Params: `location`, optional `duration` for a
    /// long-press.
    pub const TAP: &str = "mobile:touch:tap";
}

/// Device button commands.
pub mod button {
    /// Press a named device button. Params: `name`.
    pub const PRESS: &str = "mobile:pressButton";
}

/// Formats absolute pixel coordinates in the `"x,y"` form the touch
/// commands expect.
pub fn coords(x: u32, y: u32) -> String {
    format!("{x},{y}")
}

/// Parameters for [`touch::SWIPE`].
///
/// `start` and `end` are `"x,y"` or `"x%,y%"` coordinate strings;
/// `duration_secs` is the drag duration in seconds (1–10 recommended).
pub fn swipe_params(start: &str, end: &str, duration_secs: u64) -> ScriptParams {
    let mut params = ScriptParams::new();
    params.insert("start".to_string(), Value::from(start));
    params.insert("end".to_string(), Value::from(end));
    params.insert("duration".to_string(), Value::from(duration_secs));
    params
}

/// Parameters for [`touch::TAP`] without a hold duration.
pub fn tap_params(location: &str) -> ScriptParams {
    let mut params = ScriptParams::new();
    params.insert("location".to_string(), Value::from(location));
    params
}

/// Parameters for [`touch::TAP`] held for `duration` (a long-press).
///
/// The backend takes whole seconds; sub-second durations truncate.
pub fn tap_params_held(location: &str, duration: Duration) -> ScriptParams {
    let mut params = tap_params(location);
    params.insert("duration".to_string(), Value::from(duration.as_secs()));
    params
}

/// Parameters for [`button::PRESS`].
pub fn press_button_params(name: &str) -> ScriptParams {
    let mut params = ScriptParams::new();
    params.insert("name".to_string(), Value::from(name));
    params
}
