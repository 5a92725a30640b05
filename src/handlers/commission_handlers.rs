use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::session::set_flash;
use crate::auth::validate::{validate_email, validate_optional, validate_required};
use crate::backend::client::BackendClient;
use crate::errors::{render, AppError};
use crate::models::commission::sync::{self, IntakeRequest};
use crate::models::commission::types::{ProjectType, Tier};
use crate::templates_structs::{
    CommissionFormTemplate, CommissionFormValues, PageContext, SelectOption,
};

// ---------------------------------------------------------------------------
// Form Structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CommissionForm {
    pub name: String,
    pub email: String,
    pub discord: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tier: String,
    pub details: String,
    #[serde(default)]
    pub refs: String,
}

impl CommissionForm {
    fn values(&self) -> CommissionFormValues {
        CommissionFormValues {
            name: self.name.clone(),
            email: self.email.clone(),
            discord: self.discord.clone(),
            kind: self.kind.clone(),
            tier: self.tier.clone(),
            details: self.details.clone(),
            refs: self.refs.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /commissions — the intake form.
pub async fn form_page(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    render(form_template(ctx, Vec::new(), CommissionFormValues::default()))
}

/// POST /commissions — validate, create the commission, open a checkout
/// session, and send the browser to the payment page. No remote call is made
/// while validation fails, and a checkout failure compensates by deleting
/// the freshly created record.
pub async fn submit(
    session: Session,
    client: web::Data<BackendClient>,
    form: web::Form<CommissionForm>,
) -> Result<HttpResponse, AppError> {
    let mut errors = Vec::new();
    if let Some(e) = validate_required(&form.name, "Name", 100) {
        errors.push(e);
    }
    if let Some(e) = validate_email(&form.email) {
        errors.push(e);
    }
    if let Some(e) = validate_required(&form.discord, "Discord username", 100) {
        errors.push(e);
    }
    let kind = ProjectType::from_machine(&form.kind);
    if kind.is_none() {
        errors.push("Project type is required".to_string());
    }
    let tier = Tier::from_machine(&form.tier);
    if tier.is_none() {
        errors.push("Tier is required".to_string());
    }
    if let Some(e) = validate_required(&form.details, "Details", 4000) {
        errors.push(e);
    }
    if let Some(e) = validate_optional(&form.refs, "Reference links", 1000) {
        errors.push(e);
    }

    let (kind, tier) = match (kind, tier) {
        (Some(kind), Some(tier)) if errors.is_empty() => (kind, tier),
        _ => {
            let ctx = PageContext::build(&session);
            return render(form_template(ctx, errors, form.values()));
        }
    };

    // Reference links ride along in the details text; the API has no
    // dedicated field for them.
    let mut details = form.details.trim().to_string();
    let refs = form.refs.trim();
    if !refs.is_empty() {
        details.push_str("\n\nReferences: ");
        details.push_str(refs);
    }

    let intake = IntakeRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        discord: form.discord.trim().to_string(),
        kind,
        tier,
        details,
    };

    match sync::submit_intake(&client, &intake).await {
        Ok(payment_url) => {
            set_flash(&session, "Commission submitted!");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", payment_url))
                .finish())
        }
        Err(err) => {
            log::error!("commission intake failed: {err}");
            let ctx = PageContext::build(&session);
            render(form_template(ctx, vec![err.user_message()], form.values()))
        }
    }
}

fn form_template(
    ctx: PageContext,
    errors: Vec<String>,
    form: CommissionFormValues,
) -> CommissionFormTemplate {
    let package_note = ProjectType::from_machine(&form.kind)
        .map(ProjectType::is_package)
        .unwrap_or(false);
    let type_options = ProjectType::ALL
        .iter()
        .map(|t| SelectOption {
            value: t.as_str(),
            label: t.label(),
            selected: form.kind == t.as_str(),
        })
        .collect();
    let tier_options = Tier::ALL
        .iter()
        .map(|t| SelectOption {
            value: t.as_str(),
            label: t.label(),
            selected: form.tier == t.as_str(),
        })
        .collect();

    CommissionFormTemplate {
        ctx,
        errors,
        form,
        type_options,
        tier_options,
        package_note,
    }
}
