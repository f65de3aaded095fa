//! Best-effort (`try_`) verb semantics.
//!
//! The contract under test: a failure inside a `try_` verb never
//! propagates past the verb boundary — it yields the documented sentinel
//! (`false` or `None`) and the surrounding flow keeps executing.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{visible, Call, MockDriver, MockFind};

use tapwright_core::actions::{ActionError, Actions};
use tapwright_core::driver::Platform;
use tapwright_core::element::Element;
use tapwright_core::locator::Locator;

// ---------------------------------------------------------------------------
// 1. Sentinels instead of errors
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn try_wait_for_and_click_returns_false_on_timeout() {
    common::init_tracing();
    let driver = Arc::new(MockDriver::new(Platform::Android));
    let actions = Actions::new(driver.clone());

    assert!(!actions.try_wait_for_and_click(&Locator::text("Missing")).await);
    // Nothing was clicked.
    assert!(driver.calls().iter().all(|c| matches!(c, Call::Find(_))));
}

#[tokio::test(start_paused = true)]
async fn try_wait_for_returns_none_on_timeout() {
    let driver = Arc::new(MockDriver::new(Platform::Android));
    let actions = Actions::new(driver.clone());

    assert!(actions.try_wait_for(&Locator::text("Missing")).await.is_none());
}

#[tokio::test]
async fn try_find_element_returns_none_when_absent() {
    let driver = Arc::new(MockDriver::new(Platform::Android));
    let actions = Actions::new(driver.clone());

    assert!(actions.try_find_element(&Locator::label("Ghost")).await.is_none());
}

#[tokio::test]
async fn try_click_on_returns_false_when_the_click_fails() {
    // Lookup succeeds; the click itself is rejected by the backend.
    let driver = Arc::new(
        MockDriver::new(Platform::Android)
            .with_finds(vec![MockFind::Found(visible("stale"))])
            .failing("element is stale"),
    );
    let actions = Actions::new(driver.clone());

    assert!(!actions.try_click_on(&Locator::text("Stale")).await);
    assert_eq!(driver.calls().len(), 2);
}

#[tokio::test]
async fn try_type_in_element_returns_false_on_backend_failure() {
    let driver = Arc::new(MockDriver::new(Platform::Android).failing("keyboard not shown"));
    let actions = Actions::new(driver.clone());

    let element = Element::with_id("field");
    assert!(!actions.try_type_in_element(&element, "text").await);
}

#[tokio::test(start_paused = true)]
async fn try_wait_for_and_type_returns_none_on_timeout() {
    let driver = Arc::new(MockDriver::new(Platform::Android));
    let actions = Actions::new(driver.clone());

    let result = actions
        .try_wait_for_and_type_within(&Locator::label("Email"), "x", Duration::from_millis(200))
        .await;
    assert!(result.is_none());
}

#[tokio::test]
async fn try_visit_url_and_try_go_home_flatten_failures() {
    let driver = Arc::new(MockDriver::new(Platform::Android).failing("session gone"));
    let actions = Actions::new(driver.clone());

    assert!(!actions.try_visit_url("https://example.com").await);
    assert!(!actions.try_go_home().await);
}

// ---------------------------------------------------------------------------
// 2. Strict verbs keep the discriminated kind
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn strict_wait_reports_timeout_not_notfound() {
    let driver = Arc::new(MockDriver::new(Platform::Android));
    let actions = Actions::new(driver.clone());

    let err = actions
        .wait_for_within(&Locator::text("Missing"), Duration::from_millis(200))
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::Timeout { .. }));

    let err = actions.find_element(&Locator::text("Missing")).await.unwrap_err();
    assert!(matches!(err, ActionError::NotFound(_)));
}

#[tokio::test]
async fn strict_verbs_surface_driver_failures() {
    let driver = Arc::new(MockDriver::new(Platform::Ios).failing("agent crashed"));
    let actions = Actions::new(driver.clone());

    let err = actions.visit_url("https://example.com").await.unwrap_err();
    match err {
        ActionError::Driver(inner) => assert!(inner.to_string().contains("agent crashed")),
        other => panic!("expected Driver, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 3. The flow continues after a swallowed failure
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn flow_continues_after_best_effort_failures() {
    // A dismissible banner that never shows up, followed by real work.
    let driver = Arc::new(MockDriver::new(Platform::Android).with_finds(vec![
        // try_wait_for_and_click_within polls at 0 ms and 100 ms, then the
        // bound elapses.
        MockFind::Missing,
        MockFind::Missing,
        // wait_for_and_click: the real element.
        MockFind::Found(visible("continue")),
    ]));
    let actions = Actions::new(driver.clone());

    let dismissed = actions
        .try_wait_for_and_click_within(&Locator::text("Dismiss"), Duration::from_millis(100))
        .await;
    assert!(!dismissed);

    actions
        .wait_for_and_click(&Locator::text("Continue"))
        .await
        .unwrap();

    let calls = driver.calls();
    assert_eq!(calls.last(), Some(&Call::Click("continue".to_string())));
}
