use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::auth::validate::validate_required;
use crate::backend::client::BackendClient;
use crate::errors::{render, AppError};
use crate::models::catalog::products::ADMIN_PRODUCTS;
use crate::models::commission::store::{CachedCommission, CommissionCache};
use crate::models::commission::sync::{self, NewCommissionInput};
use crate::models::commission::types::{ProjectType, Status};
use crate::templates_structs::{
    AdminDashboardTemplate, CommissionRow, PageContext, SelectOption,
};

// ---------------------------------------------------------------------------
// Form Structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SectionQuery {
    pub section: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RefreshForm {
    pub csrf_token: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    /// Display label from the select control, e.g. "In Progress".
    pub status: String,
    pub revision: u64,
    pub csrf_token: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub revision: u64,
    pub csrf_token: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub discord: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub details: String,
    pub csrf_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin — overview, commissions, or products section. The first visit
/// pulls the commission list from the backend; a fetch failure renders the
/// dashboard anyway with an error banner.
pub async fn dashboard(
    session: Session,
    client: web::Data<BackendClient>,
    cache: web::Data<CommissionCache>,
    query: web::Query<SectionQuery>,
) -> Result<HttpResponse, AppError> {
    let fetch_error = match sync::ensure_loaded(&client, &cache).await {
        Ok(()) => None,
        Err(err) => {
            log::error!("initial commission fetch failed: {err}");
            Some(err.user_message())
        }
    };

    let mut ctx = PageContext::build(&session);
    if ctx.flash.is_none() {
        ctx.flash = fetch_error;
    }

    let section = match query.section.as_deref() {
        Some("commissions") => "commissions",
        Some("products") => "products",
        _ => "overview",
    };

    let rows: Vec<CommissionRow> = cache.with(|store| store.records().iter().map(row).collect());
    let counts = cache.with(|store| store.counts());
    let latest = rows.iter().take(3).cloned().collect();

    let type_options = ProjectType::ALL
        .iter()
        .map(|t| SelectOption {
            value: t.as_str(),
            label: t.label(),
            selected: *t == ProjectType::Banner,
        })
        .collect();

    render(AdminDashboardTemplate {
        ctx,
        section,
        counts,
        latest,
        rows,
        products: ADMIN_PRODUCTS,
        type_options,
        csrf_token: csrf::get_or_create_token(&session),
    })
}

/// POST /admin/refresh — replace the cached list with the server's.
pub async fn refresh(
    session: Session,
    client: web::Data<BackendClient>,
    cache: web::Data<CommissionCache>,
    form: web::Form<RefreshForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match sync::refresh(&client, &cache).await {
        Ok(_) => set_flash(&session, "Commissions updated"),
        Err(err) => set_flash(&session, err.user_message()),
    }
    Ok(to_commissions())
}

/// POST /admin/commissions/{id}/status — optimistic status change.
pub async fn update_status(
    session: Session,
    client: web::Data<BackendClient>,
    cache: web::Data<CommissionCache>,
    path: web::Path<String>,
    form: web::Form<StatusForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    let Some(status) = Status::from_label(&form.status) else {
        set_flash(&session, "Unknown status");
        return Ok(to_commissions());
    };

    match sync::update_status(&client, &cache, &id, form.revision, status).await {
        Ok(()) => set_flash(&session, "Status updated"),
        Err(err) => set_flash(&session, failure_flash("update status", &err)),
    }
    Ok(to_commissions())
}

/// POST /admin/commissions/{id}/delete — optimistic delete.
pub async fn delete(
    session: Session,
    client: web::Data<BackendClient>,
    cache: web::Data<CommissionCache>,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    match sync::delete(&client, &cache, &id, form.revision).await {
        Ok(()) => set_flash(&session, "Commission deleted"),
        Err(err) => set_flash(&session, failure_flash("delete commission", &err)),
    }
    Ok(to_commissions())
}

/// POST /admin/commissions — optimistic create with a placeholder record.
pub async fn create(
    session: Session,
    client: web::Data<BackendClient>,
    cache: web::Data<CommissionCache>,
    form: web::Form<CreateForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(e) = validate_required(&form.name, "Name", 100) {
        set_flash(&session, e);
        return Ok(to_commissions());
    }
    let Some(kind) = ProjectType::from_machine(&form.kind) else {
        set_flash(&session, "Choose a valid project type");
        return Ok(to_commissions());
    };

    let input = NewCommissionInput {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        discord: form.discord.trim().to_string(),
        kind,
        details: form.details.trim().to_string(),
    };

    match sync::create(&client, &cache, input).await {
        Ok(_) => set_flash(&session, "Commission created"),
        Err(err) => set_flash(&session, failure_flash("create commission", &err)),
    }
    Ok(to_commissions())
}

fn row(cached: &CachedCommission) -> CommissionRow {
    let current = cached.commission.status;
    let status_options = Status::ALL
        .iter()
        .map(|s| SelectOption {
            value: s.label(),
            label: s.label().to_string(),
            selected: *s == current,
        })
        .collect();
    CommissionRow {
        id: cached.commission.id.clone(),
        name: cached.commission.name.clone(),
        discord: cached.commission.discord.clone(),
        kind: cached.commission.kind.clone(),
        status_label: current.label(),
        status_options,
        created_at: cached.commission.created_at.clone(),
        assigned: cached.commission.assigned_label().to_string(),
        revision: cached.revision,
    }
}

fn to_commissions() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin?section=commissions"))
        .finish()
}

/// Transport failures read as "offline"; server-reported messages surface
/// verbatim.
fn failure_flash(op: &str, err: &AppError) -> String {
    match err {
        AppError::Http(_) => format!("Failed to {op} (offline)"),
        other => other.user_message(),
    }
}
