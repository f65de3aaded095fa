//! High-level user actions over a [`MobileDriver`].
//!
//! [`Actions`] translates test-script verbs (wait-then-click,
//! wait-then-type, swipe, tap, navigate) into short sequences of driver
//! calls. One instance serves one sequential test flow.
//!
//! Every fallible verb comes in two tiers:
//!
//! - the **strict** form returns `Result<_, ActionError>` and propagates
//!   the first failure with its discriminated kind;
//! - the **`try_` form** catches every failure, logs a single `warn!`
//!   line, and returns a sentinel (`false` for boolean verbs, `None` for
//!   element-returning verbs) so a missing element does not abort the
//!   surrounding flow.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tapwright_core::actions::Actions;
//! use tapwright_core::driver::MobileDriver;
//! use tapwright_core::locator::Locator;
//!
//! # async fn example(driver: Arc<dyn MobileDriver>) -> Result<(), tapwright_core::actions::ActionError> {
//! let actions = Actions::new(driver);
//!
//! actions.wait_for_and_click(&Locator::text("Log in")).await?;
//! actions.wait_for_and_type(&Locator::label("Email"), "qa@example.com").await?;
//! actions.swipe_up().await?;
//!
//! // Best-effort: a missing banner must not fail the test.
//! actions.try_wait_for_and_click(&Locator::text("Dismiss")).await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::commands;
use crate::driver::{AndroidKey, DriverError, MobileDriver};
use crate::element::Element;
use crate::locator::Locator;
use crate::wait::Wait;

/// Duration used by the canned directional swipes.
const SWIPE_DURATION_SECS: u64 = 1;

/// Errors surfaced by the strict action verbs.
///
/// The kinds are deliberately discriminated — timeout, no match, backend
/// failure, bad input — so strict callers can branch on what went wrong.
/// The `try_` verbs flatten all of them into their sentinel.
#[derive(Error, Debug)]
pub enum ActionError {
    /// A visibility wait reached its bound.
    #[error("timed out after {waited:?} waiting for {locator}")]
    Timeout {
        /// The query that never became visible.
        locator: Locator,
        /// The bound that elapsed.
        waited: Duration,
    },

    /// A single lookup matched nothing in the current UI tree.
    #[error("no element matches {0}")]
    NotFound(Locator),

    /// The automation backend failed.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// A caller-supplied argument was unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// User-action facade over an automation driver.
///
/// Holds the driver handle and the default visibility wait. Methods take
/// `&self`; nothing is cached between calls.
pub struct Actions {
    driver: Arc<dyn MobileDriver>,
    wait: Wait,
}

impl Actions {
    /// Creates a facade with the default 15-second visibility wait.
    pub fn new(driver: Arc<dyn MobileDriver>) -> Self {
        Self {
            driver,
            wait: Wait::default(),
        }
    }

    /// Creates a facade with a custom default wait bound.
    pub fn with_timeout(
        driver: Arc<dyn MobileDriver>,
        timeout: Duration,
    ) -> Result<Self, ActionError> {
        Ok(Self {
            driver,
            wait: Wait::new(timeout)?,
        })
    }

    /// Replaces the default wait bound used by the waiting verbs.
    pub fn set_default_wait(&mut self, timeout: Duration) -> Result<(), ActionError> {
        self.wait = Wait::new(timeout)?;
        Ok(())
    }

    /// The current default wait bound.
    pub fn default_timeout(&self) -> Duration {
        self.wait.timeout()
    }

    /// The underlying driver handle.
    pub fn driver(&self) -> &Arc<dyn MobileDriver> {
        &self.driver
    }

    // -----------------------------------------------------------------
    // Find / wait
    // -----------------------------------------------------------------

    /// Looks up an element once, without polling.
    pub async fn find_element(&self, locator: &Locator) -> Result<Element, ActionError> {
        debug!(%locator, "finding element");
        match self.driver.find_element(locator).await? {
            Some(element) => Ok(element),
            None => Err(ActionError::NotFound(locator.clone())),
        }
    }

    /// Best-effort [`find_element`](Self::find_element).
    pub async fn try_find_element(&self, locator: &Locator) -> Option<Element> {
        match self.find_element(locator).await {
            Ok(element) => Some(element),
            Err(err) => {
                warn!(%locator, %err, "find failed");
                None
            }
        }
    }

    /// Polls until an element matching `locator` is displayed, bounded by
    /// the default wait.
    pub async fn wait_for(&self, locator: &Locator) -> Result<Element, ActionError> {
        self.wait.until_visible(self.driver.as_ref(), locator).await
    }

    /// Like [`wait_for`](Self::wait_for) with a per-call bound; the
    /// default wait is left untouched.
    pub async fn wait_for_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<Element, ActionError> {
        Wait::new(timeout)?
            .until_visible(self.driver.as_ref(), locator)
            .await
    }

    /// Best-effort [`wait_for`](Self::wait_for).
    pub async fn try_wait_for(&self, locator: &Locator) -> Option<Element> {
        match self.wait_for(locator).await {
            Ok(element) => Some(element),
            Err(err) => {
                warn!(%locator, %err, "wait failed");
                None
            }
        }
    }

    /// Best-effort [`wait_for_within`](Self::wait_for_within).
    pub async fn try_wait_for_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Option<Element> {
        match self.wait_for_within(locator, timeout).await {
            Ok(element) => Some(element),
            Err(err) => {
                warn!(%locator, %err, "wait failed");
                None
            }
        }
    }

    /// Waits for an element whose `text` or `label` equals `text`.
    pub async fn wait_for_text(&self, text: &str) -> Result<Element, ActionError> {
        self.wait_for(&Locator::text(text)).await
    }

    // -----------------------------------------------------------------
    // Click
    // -----------------------------------------------------------------

    /// Finds (no polling) and clicks.
    pub async fn click_on(&self, locator: &Locator) -> Result<(), ActionError> {
        let element = self.find_element(locator).await?;
        self.click_on_element(&element).await
    }

    /// Clicks a previously resolved element.
    pub async fn click_on_element(&self, element: &Element) -> Result<(), ActionError> {
        debug!(element = %element.id, "clicking");
        self.driver.click(element).await?;
        Ok(())
    }

    /// Waits for the element, then clicks it.
    pub async fn wait_for_and_click(&self, locator: &Locator) -> Result<(), ActionError> {
        let element = self.wait_for(locator).await?;
        self.click_on_element(&element).await
    }

    /// [`wait_for_and_click`](Self::wait_for_and_click) with a per-call
    /// wait bound.
    pub async fn wait_for_and_click_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> Result<(), ActionError> {
        let element = self.wait_for_within(locator, timeout).await?;
        self.click_on_element(&element).await
    }

    /// Best-effort [`click_on`](Self::click_on).
    pub async fn try_click_on(&self, locator: &Locator) -> bool {
        match self.click_on(locator).await {
            Ok(()) => true,
            Err(err) => {
                warn!(%locator, %err, "click failed");
                false
            }
        }
    }

    /// Best-effort [`click_on_element`](Self::click_on_element).
    pub async fn try_click_on_element(&self, element: &Element) -> bool {
        match self.click_on_element(element).await {
            Ok(()) => true,
            Err(err) => {
                warn!(element = %element.id, %err, "click failed");
                false
            }
        }
    }

    /// Best-effort [`wait_for_and_click`](Self::wait_for_and_click).
    pub async fn try_wait_for_and_click(&self, locator: &Locator) -> bool {
        match self.wait_for_and_click(locator).await {
            Ok(()) => true,
            Err(err) => {
                warn!(%locator, %err, "wait-and-click failed");
                false
            }
        }
    }

    /// Best-effort
    /// [`wait_for_and_click_within`](Self::wait_for_and_click_within).
    pub async fn try_wait_for_and_click_within(
        &self,
        locator: &Locator,
        timeout: Duration,
    ) -> bool {
        match self.wait_for_and_click_within(locator, timeout).await {
            Ok(()) => true,
            Err(err) => {
                warn!(%locator, %err, "wait-and-click failed");
                false
            }
        }
    }

    // -----------------------------------------------------------------
    // Text conveniences
    // -----------------------------------------------------------------

    /// Waits for an element with the given text or label, then clicks it.
    pub async fn wait_for_and_click_text(&self, text: &str) -> Result<(), ActionError> {
        self.wait_for_and_click(&Locator::text(text)).await
    }

    /// Waits for an element whose text contains `text`, then clicks it.
    pub async fn wait_for_and_click_text_containing(
        &self,
        text: &str,
    ) -> Result<(), ActionError> {
        self.wait_for_and_click(&Locator::text_containing(text)).await
    }

    /// Finds an element by text or label (no polling) and clicks it.
    pub async fn click_on_text(&self, text: &str) -> Result<(), ActionError> {
        self.click_on(&Locator::text(text)).await
    }

    /// Finds an element by label (no polling) and clicks it.
    pub async fn click_on_label(&self, label: &str) -> Result<(), ActionError> {
        self.click_on(&Locator::label(label)).await
    }

    /// Best-effort [`click_on_text`](Self::click_on_text).
    pub async fn try_click_on_text(&self, text: &str) -> bool {
        self.try_click_on(&Locator::text(text)).await
    }

    /// Best-effort [`wait_for_and_click_text`](Self::wait_for_and_click_text).
    pub async fn try_wait_for_and_click_text(&self, text: &str) -> bool {
        self.try_wait_for_and_click(&Locator::text(text)).await
    }

    /// Best-effort
    /// [`wait_for_and_click_text_containing`](Self::wait_for_and_click_text_containing).
    pub async fn try_wait_for_and_click_text_containing(&self, text: &str) -> bool {
        self.try_wait_for_and_click(&Locator::text_containing(text)).await
    }

    // -----------------------------------------------------------------
    // Type / clear
    // -----------------------------------------------------------------

    /// Types into a previously resolved element.
    pub async fn type_in_element(
        &self,
        element: &Element,
        text: &str,
    ) -> Result<(), ActionError> {
        debug!(element = %element.id, text, "typing");
        self.driver.send_keys(element, text).await?;
        Ok(())
    }

    /// Clears the content of a previously resolved element.
    pub async fn clear_element(&self, element: &Element) -> Result<(), ActionError> {
        debug!(element = %element.id, "clearing");
        self.driver.clear(element).await?;
        Ok(())
    }

    /// Finds (no polling) and types.
    pub async fn find_and_type(&self, locator: &Locator, text: &str) -> Result<(), ActionError> {
        let element = self.find_element(locator).await?;
        self.type_in_element(&element, text).await
    }

    /// Waits for the element, types into it, and returns it.
    pub async fn wait_for_and_type(
        &self,
        locator: &Locator,
        text: &str,
    ) -> Result<Element, ActionError> {
        let element = self.wait_for(locator).await?;
        self.type_in_element(&element, text).await?;
        Ok(element)
    }

    /// [`wait_for_and_type`](Self::wait_for_and_type) with a per-call wait
    /// bound.
    pub async fn wait_for_and_type_within(
        &self,
        locator: &Locator,
        text: &str,
        timeout: Duration,
    ) -> Result<Element, ActionError> {
        let element = self.wait_for_within(locator, timeout).await?;
        self.type_in_element(&element, text).await?;
        Ok(element)
    }

    /// Waits for the element, clears it, then types into it.
    pub async fn wait_for_and_type_cleared(
        &self,
        locator: &Locator,
        text: &str,
    ) -> Result<Element, ActionError> {
        let element = self.wait_for(locator).await?;
        self.clear_element(&element).await?;
        self.type_in_element(&element, text).await?;
        Ok(element)
    }

    /// Best-effort [`type_in_element`](Self::type_in_element).
    pub async fn try_type_in_element(&self, element: &Element, text: &str) -> bool {
        match self.type_in_element(element, text).await {
            Ok(()) => true,
            Err(err) => {
                warn!(element = %element.id, %err, "typing failed");
                false
            }
        }
    }

    /// Best-effort [`wait_for_and_type`](Self::wait_for_and_type).
    pub async fn try_wait_for_and_type(&self, locator: &Locator, text: &str) -> Option<Element> {
        match self.wait_for_and_type(locator, text).await {
            Ok(element) => Some(element),
            Err(err) => {
                warn!(%locator, %err, "wait-and-type failed");
                None
            }
        }
    }

    /// Best-effort
    /// [`wait_for_and_type_within`](Self::wait_for_and_type_within).
    pub async fn try_wait_for_and_type_within(
        &self,
        locator: &Locator,
        text: &str,
        timeout: Duration,
    ) -> Option<Element> {
        match self.wait_for_and_type_within(locator, text, timeout).await {
            Ok(element) => Some(element),
            Err(err) => {
                warn!(%locator, %err, "wait-and-type failed");
                None
            }
        }
    }

    // -----------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------

    /// Issues a two-point drag.
    ///
    /// `start` and `end` are `"x,y"` or `"x%,y%"` coordinate strings,
    /// passed to the backend verbatim. `duration_secs` is the drag
    /// duration (1–10 recommended).
    pub async fn swipe(
        &self,
        start: &str,
        end: &str,
        duration_secs: u64,
    ) -> Result<(), ActionError> {
        debug!(start, end, duration_secs, "swiping");
        self.driver
            .execute(
                commands::touch::SWIPE,
                commands::swipe_params(start, end, duration_secs),
            )
            .await?;
        Ok(())
    }

    /// Swipes from 80% to 20% of the screen width at mid-height.
    pub async fn swipe_left(&self) -> Result<(), ActionError> {
        self.swipe("80%,50%", "20%,50%", SWIPE_DURATION_SECS).await
    }

    /// Swipes from 20% to 80% of the screen width at mid-height.
    pub async fn swipe_right(&self) -> Result<(), ActionError> {
        self.swipe("20%,50%", "80%,50%", SWIPE_DURATION_SECS).await
    }

    /// Swipes from 80% to 20% of the screen height at mid-width.
    pub async fn swipe_up(&self) -> Result<(), ActionError> {
        self.swipe("50%,80%", "50%,20%", SWIPE_DURATION_SECS).await
    }

    /// Swipes from 20% to 80% of the screen height at mid-width.
    pub async fn swipe_down(&self) -> Result<(), ActionError> {
        self.swipe("50%,20%", "50%,80%", SWIPE_DURATION_SECS).await
    }

    /// Issues a single-point touch at `location` (`"x,y"` or `"x%,y%"`,
    /// or the four-value region form).
    pub async fn tap(&self, location: &str) -> Result<(), ActionError> {
        debug!(location, "tapping");
        self.driver
            .execute(commands::touch::TAP, commands::tap_params(location))
            .await?;
        Ok(())
    }

    /// Like [`tap`](Self::tap), held for `duration` to emulate a
    /// long-press.
    pub async fn tap_held(&self, location: &str, duration: Duration) -> Result<(), ActionError> {
        debug!(location, ?duration, "tapping (held)");
        self.driver
            .execute(
                commands::touch::TAP,
                commands::tap_params_held(location, duration),
            )
            .await?;
        Ok(())
    }

    /// Taps at absolute pixel coordinates.
    pub async fn tap_at(&self, x: u32, y: u32) -> Result<(), ActionError> {
        self.tap(&commands::coords(x, y)).await
    }

    /// Long-presses at absolute pixel coordinates.
    pub async fn tap_at_held(
        &self,
        x: u32,
        y: u32,
        duration: Duration,
    ) -> Result<(), ActionError> {
        self.tap_held(&commands::coords(x, y), duration).await
    }

    // -----------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------

    /// Navigates the device browser to `url`.
    pub async fn visit_url(&self, url: &str) -> Result<(), ActionError> {
        debug!(url, "visiting url");
        self.driver.goto_url(url).await?;
        Ok(())
    }

    /// Best-effort [`visit_url`](Self::visit_url).
    pub async fn try_visit_url(&self, url: &str) -> bool {
        match self.visit_url(url).await {
            Ok(()) => true,
            Err(err) => {
                warn!(url, %err, "visit failed");
                false
            }
        }
    }

    /// Returns to the device home screen.
    ///
    /// Android gets a hardware key event; every other platform gets the
    /// generic press-button command.
    pub async fn go_home(&self) -> Result<(), ActionError> {
        debug!("going to home screen");
        if self.driver.platform().is_android() {
            self.driver.press_key(AndroidKey::Home).await?;
        } else {
            self.driver
                .execute(commands::button::PRESS, commands::press_button_params("home"))
                .await?;
        }
        Ok(())
    }

    /// Best-effort [`go_home`](Self::go_home).
    pub async fn try_go_home(&self) -> bool {
        match self.go_home().await {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "go-home failed");
                false
            }
        }
    }

    // -----------------------------------------------------------------
    // Pause
    // -----------------------------------------------------------------

    /// Suspends the flow for `duration`.
    pub async fn pause(&self, duration: Duration) {
        debug!(?duration, "pausing");
        tokio::time::sleep(duration).await;
    }
}
