use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{grant_admin, is_admin, set_flash, token_matches};
use crate::config::Config;
use crate::errors::{render, AppError};
use crate::templates_structs::{AdminLoginTemplate, PageContext};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// GET /admin/login — token form; already-authenticated sessions go straight
/// to the dashboard.
pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if is_admin(&session) {
        return Ok(to_dashboard());
    }
    let ctx = PageContext::build(&session);
    render(AdminLoginTemplate { ctx, error: None })
}

/// POST /admin/login — verbatim, constant-time comparison against the
/// ADMIN_TOKEN environment value. A match writes the admin flag into the
/// server-side session.
pub async fn login_submit(
    session: Session,
    config: web::Data<Config>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    if form.token.trim().is_empty() {
        return login_error(&session, "Please enter your access token.");
    }

    let Some(expected) = config.admin_token.as_deref() else {
        log::error!("admin login attempted but ADMIN_TOKEN is not configured");
        return login_error(&session, "Admin access is not configured on this server.");
    };

    if !token_matches(&form.token, expected) {
        return login_error(&session, "Invalid token.");
    }

    grant_admin(&session);
    set_flash(&session, "Logged in as admin");
    Ok(to_dashboard())
}

/// POST /admin/logout — drop the whole session.
pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/login"))
        .finish())
}

fn login_error(session: &Session, message: &str) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session);
    render(AdminLoginTemplate {
        ctx,
        error: Some(message.to_string()),
    })
}

fn to_dashboard() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin"))
        .finish()
}
