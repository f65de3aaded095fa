//! # tapwright-core
//!
//! Convenience layer for mobile UI automation: high-level user actions
//! (wait-then-click, wait-then-type, swipe gestures, coordinate taps,
//! navigation) over an injected driver, plus capability building for
//! sessions against local devices or cloud device farms.
//!
//! The driver itself — the thing that actually speaks to the device — is
//! behind the [`driver::MobileDriver`] trait and is supplied by the
//! caller. This crate owns what sits on top: bounded visibility waits,
//! the strict/best-effort verb pairs, locator construction, and the
//! options object handed to the driver factory at session start.
//!
//! ## Modules
//!
//! - [`actions`] - User-action facade with strict and `try_` verb tiers
//! - [`capabilities`] - Capability builder for local and cloud sessions
//! - [`driver`] - The automation backend trait and its error type
//! - [`locator`] - Structural queries over the `text`/`label` attributes
//! - [`commands`] - Named backend commands and parameter-map builders
//! - [`wait`] - Bounded element-visibility polling
//! - [`element`] - The element handle backends report
//! - [`config`] - Per-user defaults in `~/.tapwright/config.json`
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tapwright_core::actions::Actions;
//! use tapwright_core::capabilities::Capabilities;
//! use tapwright_core::driver::{MobileDriver, Platform};
//! use tapwright_core::locator::Locator;
//!
//! # async fn example(driver: Arc<dyn MobileDriver>) -> Result<(), tapwright_core::actions::ActionError> {
//! // Options for the session factory.
//! let mut caps = Capabilities::with_token("demo.device-farm.io", "s3cret");
//! caps.set_platform(Platform::Android);
//! let _options = caps.to_options();
//!
//! // Drive the UI.
//! let actions = Actions::new(driver);
//! actions.wait_for_and_click(&Locator::text("Log in")).await?;
//! actions.swipe_up().await?;
//! actions.go_home().await?;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod capabilities;
pub mod commands;
pub mod config;
pub mod driver;
pub mod element;
pub mod locator;
pub mod wait;
