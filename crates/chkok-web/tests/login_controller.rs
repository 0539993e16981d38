//! Login controller against a mock admin API

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use chkok_client::ErrorKind;
use chkok_core::{Credentials, messages};
use chkok_web::controllers::{LoginController, LoginOutcome, LoginPhase, ToastLevel, routes};
use common::{Harness, login_body};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller(harness: &Harness) -> LoginController {
    LoginController::new(
        harness.client.clone(),
        harness.notifier(),
        harness.navigator(),
    )
}

fn admin() -> Credentials {
    Credentials::new("admin@example.com", "hunter2")
}

#[tokio::test]
async fn test_successful_login_stores_session_and_navigates_home() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "email": "admin@example.com",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("fresh-token")))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new(&server);
    let controller = controller(&harness);

    let outcome = controller.submit(admin()).await;

    assert_eq!(outcome, LoginOutcome::Succeeded);
    assert_eq!(controller.phase(), LoginPhase::Succeeded);
    assert_eq!(harness.session.token().as_deref(), Some("fresh-token"));
    assert_eq!(harness.notifier.messages(), vec![messages::LOGIN_SUCCESS]);
    assert_eq!(harness.navigator.visited(), vec![routes::HOME]);
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(login_body("once"))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new(&server);
    let phases = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&phases);
    let controller =
        controller(&harness).with_phase_listener(move |phase| recorded.lock().push(phase));

    let (first, second) = tokio::join!(controller.submit(admin()), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(controller.is_submitting());
        controller.submit(admin()).await
    });

    assert_eq!(first, LoginOutcome::Succeeded);
    assert_eq!(second, LoginOutcome::Busy);
    assert_eq!(
        *phases.lock(),
        vec![LoginPhase::Submitting, LoginPhase::Succeeded]
    );
    assert_eq!(harness.navigator.visited(), vec![routes::HOME]);
}

#[rstest]
#[case(400, ErrorKind::Validation, messages::LOGIN_BAD_REQUEST)]
#[case(401, ErrorKind::AuthExpired, messages::SESSION_EXPIRED)]
#[case(403, ErrorKind::Forbidden, messages::LOGIN_FORBIDDEN)]
#[case(429, ErrorKind::RateLimited, messages::LOGIN_RATE_LIMITED)]
#[case(500, ErrorKind::Server, messages::LOGIN_SERVER_ERROR)]
#[tokio::test]
async fn test_rejected_login_shows_message_and_reenables_form(
    #[case] status: u16,
    #[case] kind: ErrorKind,
    #[case] message: &str,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new(&server);
    let controller = controller(&harness);

    let outcome = controller.submit(admin()).await;

    assert_eq!(outcome, LoginOutcome::Failed(kind));
    assert_eq!(controller.phase(), LoginPhase::Idle);
    assert!(!controller.is_submitting());
    assert!(!harness.session.is_authenticated());

    let toasts = harness.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, message);

    let expected_nav: Vec<&str> = if status == 401 {
        vec![routes::LOGIN]
    } else {
        Vec::new()
    };
    assert_eq!(harness.navigator.visited(), expected_nav);
}

#[tokio::test]
async fn test_unmapped_status_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let harness = Harness::new(&server);
    let outcome = controller(&harness).submit(admin()).await;

    assert_eq!(outcome, LoginOutcome::Failed(ErrorKind::Unmapped(502)));
    assert_eq!(
        harness.notifier.messages(),
        vec![messages::unexpected_status(502)]
    );
}

#[tokio::test]
async fn test_unreachable_server_reports_network_error() {
    let harness = Harness::unreachable();

    let outcome = controller(&harness).submit(admin()).await;

    assert_eq!(outcome, LoginOutcome::Failed(ErrorKind::Network));
    assert_eq!(harness.notifier.messages(), vec![messages::NETWORK_ERROR]);
}

#[rstest]
#[case("", "hunter2")]
#[case("admin@example.com", "   ")]
#[tokio::test]
async fn test_blank_fields_are_rejected_locally(#[case] email: &str, #[case] password: &str) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("never")))
        .expect(0)
        .mount(&server)
        .await;

    let harness = Harness::new(&server);
    let controller = controller(&harness);

    let outcome = controller.submit(Credentials::new(email, password)).await;

    assert_eq!(outcome, LoginOutcome::MissingFields);
    assert_eq!(controller.phase(), LoginPhase::Idle);
    let toasts = harness.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Warning);
}

#[tokio::test]
async fn test_teardown_discards_pending_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(login_body("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let harness = Harness::new(&server);
    let phases = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&phases);
    let controller =
        controller(&harness).with_phase_listener(move |phase| recorded.lock().push(phase));

    let (outcome, ()) = tokio::join!(controller.submit(admin()), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.teardown();
    });

    assert_eq!(outcome, LoginOutcome::Cancelled);
    assert_eq!(controller.phase(), LoginPhase::Idle);
    assert!(!controller.is_submitting());
    assert_eq!(*phases.lock(), vec![LoginPhase::Submitting, LoginPhase::Idle]);
    assert!(!harness.session.is_authenticated());
    assert!(harness.notifier.toasts().is_empty());
    assert!(harness.navigator.visited().is_empty());
}
