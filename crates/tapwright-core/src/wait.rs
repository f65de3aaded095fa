//! Bounded visibility polling.
//!
//! A [`Wait`] polls [`find_element`](crate::driver::MobileDriver::find_element)
//! at a fixed interval until a matching element is displayed or the bound
//! elapses. There is no backoff and no jitter: the bound either is reached
//! (timeout) or the element shows up first.
//!
//! [`Actions`](crate::actions::Actions) keeps one `Wait` for its default
//! timeout; per-call overrides build a transient one.

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::actions::ActionError;
use crate::driver::MobileDriver;
use crate::element::Element;
use crate::locator::Locator;

/// Default bound for visibility waits.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Interval between lookups while a wait is pending.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A bounded poller for element visibility.
#[derive(Debug, Clone, Copy)]
pub struct Wait {
    timeout: Duration,
    interval: Duration,
}

impl Wait {
    /// A wait with the given bound and the standard poll interval.
    ///
    /// A zero bound is rejected: it would turn every wait into an
    /// immediate timeout.
    pub fn new(timeout: Duration) -> Result<Self, ActionError> {
        Self::with_interval(timeout, POLL_INTERVAL)
    }

    /// A wait with an explicit poll interval.
    pub fn with_interval(timeout: Duration, interval: Duration) -> Result<Self, ActionError> {
        if timeout.is_zero() {
            return Err(ActionError::InvalidArgument(
                "wait timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self { timeout, interval })
    }

    /// The configured bound.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Polls until an element matching `locator` is reported displayed.
    ///
    /// "No match yet" and "matched but hidden" keep polling; a backend
    /// failure aborts the wait immediately with [`ActionError::Driver`].
    /// When the bound elapses first the result is [`ActionError::Timeout`]
    /// carrying the locator and the bound.
    pub async fn until_visible(
        &self,
        driver: &dyn MobileDriver,
        locator: &Locator,
    ) -> Result<Element, ActionError> {
        debug!(%locator, timeout = ?self.timeout, "waiting for element");
        let start = Instant::now();

        loop {
            if let Some(element) = driver.find_element(locator).await? {
                if element.is_displayed() {
                    return Ok(element);
                }
            }

            if start.elapsed() >= self.timeout {
                return Err(ActionError::Timeout {
                    locator: locator.clone(),
                    waited: self.timeout,
                });
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: POLL_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Wait::new(Duration::ZERO).unwrap_err();
        assert!(matches!(err, ActionError::InvalidArgument(_)));
    }

    #[test]
    fn default_wait_uses_fifteen_seconds() {
        assert_eq!(Wait::default().timeout(), Duration::from_secs(15));
    }
}
