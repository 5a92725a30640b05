//! Shared test infrastructure.
//!
//! Provides commission fixtures, a pre-seeded cache helper, and a stub
//! backend server (real HTTP on an ephemeral port) whose behavior per
//! endpoint is switched through [`StubConfig`] and whose incoming requests
//! are captured in [`Recorded`].

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::{web, App, HttpResponse};
use serde_json::json;

use halcyon::models::commission::store::CommissionCache;
use halcyon::models::commission::types::{Commission, Status};

pub const ADMIN_TOKEN: &str = "studio-secret";

// ============================================================================
// FIXTURES
// ============================================================================

pub fn commission(id: &str, name: &str, status: Status) -> Commission {
    Commission {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        discord: format!("{}#1", name.to_lowercase()),
        details: "Test commission details".to_string(),
        kind: "Banner".to_string(),
        status,
        created_at: "2026-08-01".to_string(),
        designers: None,
    }
}

/// A cache populated as if a refresh had just run over `list`.
pub fn seeded_cache(list: Vec<Commission>) -> CommissionCache {
    let cache = CommissionCache::new();
    cache.with(|store| store.replace_all(list));
    cache
}

pub fn revision_of(cache: &CommissionCache, id: &str) -> u64 {
    cache.with(|store| {
        store
            .get(id)
            .map(|cached| cached.revision)
            .expect("record not in cache")
    })
}

pub fn status_of(cache: &CommissionCache, id: &str) -> Option<Status> {
    cache.with(|store| store.get(id).map(|cached| cached.commission.status))
}

// ============================================================================
// STUB BACKEND
// ============================================================================

/// Behavior switches for the stub backend server.
#[derive(Debug, Clone)]
pub struct StubConfig {
    /// JSON array returned by `GET /commissions`.
    pub list_body: String,
    /// JSON object returned by a successful `POST /commissions`.
    pub create_response: String,
    /// URL returned by a successful checkout-session call.
    pub checkout_url: String,
    pub fail_create: bool,
    pub fail_patch: bool,
    pub fail_delete: bool,
    pub fail_checkout: bool,
}

impl Default for StubConfig {
    fn default() -> StubConfig {
        StubConfig {
            list_body: "[]".to_string(),
            create_response: json!({
                "id": "42",
                "name": "Ada",
                "email": "a@x.com",
                "discord": "ada#1",
                "details": "Space banner",
                "type": "banner",
                "status": "queued",
                "created_at": "2026-08-07",
                "designers": null
            })
            .to_string(),
            checkout_url: "https://pay.example/session/42".to_string(),
            fail_create: false,
            fail_patch: false,
            fail_delete: false,
            fail_checkout: false,
        }
    }
}

/// Requests the stub backend has seen, raw bodies included.
#[derive(Debug, Default)]
pub struct Recorded {
    pub creates: Mutex<Vec<String>>,
    pub patches: Mutex<Vec<(String, String)>>,
    pub deletes: Mutex<Vec<String>>,
    pub checkouts: Mutex<Vec<String>>,
}

impl Recorded {
    pub fn creates(&self) -> Vec<String> {
        self.creates.lock().expect("lock").clone()
    }

    pub fn patches(&self) -> Vec<(String, String)> {
        self.patches.lock().expect("lock").clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().expect("lock").clone()
    }

    pub fn checkouts(&self) -> Vec<String> {
        self.checkouts.lock().expect("lock").clone()
    }
}

/// Start the stub backend on an ephemeral port. Point a `BackendClient` at
/// `base_url(&server)` to talk to it.
pub fn start_stub(config: StubConfig) -> (actix_test::TestServer, Arc<Recorded>) {
    let recorded = Arc::new(Recorded::default());
    let captured = recorded.clone();

    let server = actix_test::start(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::from(captured.clone()))
            .route("/commissions", web::get().to(stub_list))
            .route("/commissions", web::post().to(stub_create))
            .route("/commissions/{id}", web::patch().to(stub_patch))
            .route("/commissions/{id}", web::delete().to(stub_delete))
            .route("/payments/createCheckoutSession", web::post().to(stub_checkout))
    });

    (server, recorded)
}

pub fn base_url(server: &actix_test::TestServer) -> String {
    format!("http://{}", server.addr())
}

async fn stub_list(config: web::Data<StubConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(config.list_body.clone())
}

async fn stub_create(
    config: web::Data<StubConfig>,
    recorded: web::Data<Recorded>,
    body: String,
) -> HttpResponse {
    recorded.creates.lock().expect("lock").push(body);
    if config.fail_create {
        return HttpResponse::InternalServerError().json(json!({
            "message": "Create rejected by stub"
        }));
    }
    HttpResponse::Created()
        .content_type("application/json")
        .body(config.create_response.clone())
}

async fn stub_patch(
    path: web::Path<String>,
    config: web::Data<StubConfig>,
    recorded: web::Data<Recorded>,
    body: String,
) -> HttpResponse {
    recorded
        .patches
        .lock()
        .expect("lock")
        .push((path.into_inner(), body));
    if config.fail_patch {
        return HttpResponse::InternalServerError().json(json!({
            "message": "Patch rejected by stub"
        }));
    }
    HttpResponse::Ok().json(json!({ "ok": true }))
}

async fn stub_delete(
    path: web::Path<String>,
    config: web::Data<StubConfig>,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    recorded.deletes.lock().expect("lock").push(path.into_inner());
    if config.fail_delete {
        return HttpResponse::InternalServerError().json(json!({
            "message": "Delete rejected by stub"
        }));
    }
    HttpResponse::Ok().json(json!({ "ok": true }))
}

async fn stub_checkout(
    config: web::Data<StubConfig>,
    recorded: web::Data<Recorded>,
    body: String,
) -> HttpResponse {
    recorded.checkouts.lock().expect("lock").push(body);
    if config.fail_checkout {
        return HttpResponse::InternalServerError().json(json!({
            "message": "Payment initiation failed"
        }));
    }
    HttpResponse::Ok().json(json!({ "url": config.checkout_url }))
}
