use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use halcyon::auth;
use halcyon::backend::client::BackendClient;
use halcyon::config::Config;
use halcyon::handlers::{admin_handlers, auth_handlers, commission_handlers, pages};
use halcyon::models::commission::store::CommissionCache;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();

    let client = web::Data::new(BackendClient::new(config.backend_url.clone()));
    let cache = web::Data::new(CommissionCache::new());
    let config = web::Data::new(config);

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(client.clone())
            .app_data(cache.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public pages
            .route("/", web::get().to(pages::home))
            .route("/designs", web::get().to(pages::designs))
            .route("/pricing", web::get().to(pages::pricing))
            .route("/shop", web::get().to(pages::shop))
            .route("/commissions", web::get().to(commission_handlers::form_page))
            .route("/commissions", web::post().to(commission_handlers::submit))
            .route("/payments/success", web::get().to(pages::payment_success))
            .route("/payments/cancel", web::get().to(pages::payment_cancel))
            // Admin login — registered BEFORE the guarded scope so it stays reachable
            .route("/admin/login", web::get().to(auth_handlers::login_page))
            .route("/admin/login", web::post().to(auth_handlers::login_submit))
            // Guarded admin panel
            .service(
                web::scope("/admin")
                    .wrap(middleware::from_fn(auth::middleware::require_admin))
                    .route("", web::get().to(admin_handlers::dashboard))
                    .route("/refresh", web::post().to(admin_handlers::refresh))
                    .route("/commissions", web::post().to(admin_handlers::create))
                    .route("/commissions/{id}/status", web::post().to(admin_handlers::update_status))
                    .route("/commissions/{id}/delete", web::post().to(admin_handlers::delete))
                    .route("/logout", web::post().to(auth_handlers::logout)),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
