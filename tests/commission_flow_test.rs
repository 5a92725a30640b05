//! Intake flow tests through the real HTTP handlers.
//!
//! Covers:
//! - Successful submission: 303 redirect to the checkout URL, with the
//!   checkout request keyed by the created commission id
//! - Client-side validation blocking the flow before any remote call
//! - Server-reported failures surfaced on the re-rendered form

mod common;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::http::StatusCode;
use actix_web::{cookie::Key, test, web, App};
use common::*;
use halcyon::backend::client::BackendClient;
use halcyon::handlers::commission_handlers;

fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[7u8; 64]))
        .cookie_secure(false)
        .build()
}

macro_rules! intake_app {
    ($server:expr) => {
        test::init_service(
            App::new()
                .wrap(session_middleware())
                .app_data(web::Data::new(BackendClient::new(base_url(&$server))))
                .route("/commissions", web::get().to(commission_handlers::form_page))
                .route("/commissions", web::post().to(commission_handlers::submit)),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_submit_redirects_to_checkout_url() {
    let (server, recorded) = start_stub(StubConfig::default());
    let app = intake_app!(server);

    let req = test::TestRequest::post()
        .uri("/commissions")
        .set_form([
            ("name", "Ada"),
            ("email", "a@x.com"),
            ("discord", "ada#1"),
            ("type", "banner"),
            ("tier", "standard"),
            ("details", "Space banner"),
            ("refs", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("Location")
        .expect("Location header")
        .to_str()
        .expect("ascii");
    assert_eq!(location, "https://pay.example/session/42");

    let creates = recorded.creates();
    assert_eq!(creates.len(), 1);
    let create_body: serde_json::Value = serde_json::from_str(&creates[0]).expect("json");
    assert_eq!(create_body["type"], "banner");
    assert_eq!(create_body["status"], "queued");

    let checkouts = recorded.checkouts();
    assert_eq!(checkouts.len(), 1);
    let checkout_body: serde_json::Value = serde_json::from_str(&checkouts[0]).expect("json");
    assert_eq!(checkout_body["CommissionID"], "42");
}

#[actix_rt::test]
async fn test_validation_failure_blocks_without_remote_call() {
    let (server, recorded) = start_stub(StubConfig::default());
    let app = intake_app!(server);

    let req = test::TestRequest::post()
        .uri("/commissions")
        .set_form([
            ("name", ""),
            ("email", "not-an-email"),
            ("discord", "ada#1"),
            ("type", "banner"),
            ("tier", "standard"),
            ("details", "Space banner"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Name is required"), "missing name error");
    assert!(html.contains("Email must be a valid address"), "email error");

    assert!(recorded.creates().is_empty(), "no commission POST on validation failure");
    assert!(recorded.checkouts().is_empty());
}

#[actix_rt::test]
async fn test_server_rejection_rerenders_with_message() {
    let (server, recorded) = start_stub(StubConfig {
        fail_create: true,
        ..StubConfig::default()
    });
    let app = intake_app!(server);

    let req = test::TestRequest::post()
        .uri("/commissions")
        .set_form([
            ("name", "Ada"),
            ("email", "a@x.com"),
            ("discord", "ada#1"),
            ("type", "banner"),
            ("tier", "standard"),
            ("details", "Space banner"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(
        html.contains("Create rejected by stub"),
        "server message surfaced verbatim"
    );
    // Submitted values survive the re-render.
    assert!(html.contains("Space banner"));
    assert!(recorded.checkouts().is_empty());
}

#[actix_rt::test]
async fn test_form_page_renders() {
    let (server, _recorded) = start_stub(StubConfig::default());
    let app = intake_app!(server);

    let req = test::TestRequest::get().uri("/commissions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Commission Enquiry"));
    assert!(html.contains("Profile Picture"), "project types listed");
}
