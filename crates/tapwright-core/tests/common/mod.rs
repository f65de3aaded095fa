//! Shared test helpers for tapwright-core integration tests.
//!
//! Provides [`MockDriver`], a programmable [`MobileDriver`] double:
//! element lookups are scripted per call, side-effecting verbs can be made
//! to fail, and every invocation is recorded for call-sequence assertions.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use tapwright_core::commands::ScriptParams;
use tapwright_core::driver::{AndroidKey, DriverError, MobileDriver, Platform};
use tapwright_core::element::Element;
use tapwright_core::locator::Locator;

/// Opt-in test logging: honors `RUST_LOG`, safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Scripted outcome for a single `find_element` call.
///
/// Once the script is exhausted, further lookups report `Missing` (so a
/// pending wait keeps polling until its bound).
pub enum MockFind {
    /// `Ok(None)` — nothing matches.
    Missing,
    /// `Ok(Some(element))`.
    Found(Element),
    /// `Err(DriverError::CommandFailed)`.
    Fail(String),
}

/// A recorded driver invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// `find_element` with the rendered query.
    Find(String),
    /// `click` with the element id.
    Click(String),
    /// `send_keys` with the element id and text.
    SendKeys(String, String),
    /// `clear` with the element id.
    Clear(String),
    /// `execute` with the command name and parameter map.
    Execute(String, Value),
    /// `press_key` with the keycode.
    PressKey(u16),
    /// `goto_url` with the url.
    GotoUrl(String),
}

/// Programmable mock automation backend.
pub struct MockDriver {
    platform: Platform,
    finds: Mutex<VecDeque<MockFind>>,
    failure: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl MockDriver {
    /// A mock for the given platform: all lookups miss, all verbs succeed.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            finds: Mutex::new(VecDeque::new()),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Scripts the outcomes of successive `find_element` calls.
    pub fn with_finds(mut self, finds: Vec<MockFind>) -> Self {
        self.finds = Mutex::new(finds.into());
        self
    }

    /// Makes every side-effecting verb fail with the given message.
    /// Lookups still follow their script.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Snapshot of the recorded invocations.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// How many `find_element` calls were made.
    pub fn find_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Find(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self) -> Result<(), DriverError> {
        match &self.failure {
            Some(message) => Err(DriverError::CommandFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MobileDriver for MockDriver {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn find_element(&self, locator: &Locator) -> Result<Option<Element>, DriverError> {
        self.record(Call::Find(locator.query().to_string()));
        match self.finds.lock().unwrap().pop_front() {
            None | Some(MockFind::Missing) => Ok(None),
            Some(MockFind::Found(element)) => Ok(Some(element)),
            Some(MockFind::Fail(message)) => Err(DriverError::CommandFailed(message)),
        }
    }

    async fn click(&self, element: &Element) -> Result<(), DriverError> {
        self.record(Call::Click(element.id.clone()));
        self.check_failure()
    }

    async fn send_keys(&self, element: &Element, text: &str) -> Result<(), DriverError> {
        self.record(Call::SendKeys(element.id.clone(), text.to_string()));
        self.check_failure()
    }

    async fn clear(&self, element: &Element) -> Result<(), DriverError> {
        self.record(Call::Clear(element.id.clone()));
        self.check_failure()
    }

    async fn execute(
        &self,
        command: &str,
        params: ScriptParams,
    ) -> Result<Value, DriverError> {
        self.record(Call::Execute(command.to_string(), Value::Object(params)));
        self.check_failure()?;
        Ok(Value::Null)
    }

    async fn press_key(&self, key: AndroidKey) -> Result<(), DriverError> {
        self.record(Call::PressKey(key.code()));
        self.check_failure()
    }

    async fn goto_url(&self, url: &str) -> Result<(), DriverError> {
        self.record(Call::GotoUrl(url.to_string()));
        self.check_failure()
    }
}

/// An element the backend reports as displayed.
pub fn visible(id: &str) -> Element {
    Element {
        id: id.to_string(),
        text: None,
        label: None,
        displayed: Some(true),
    }
}

/// An element the backend reports as present but hidden.
pub fn hidden(id: &str) -> Element {
    Element {
        id: id.to_string(),
        text: None,
        label: None,
        displayed: Some(false),
    }
}
