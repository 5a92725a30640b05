//! One askama struct per screen, plus the small display structs the
//! handlers prepare for them. Templates stay dumb: hrefs, labels, and counts
//! are computed in the handlers.

use actix_session::Session;
use askama::Template;

use crate::auth::session::{is_admin, take_flash};
use crate::config::APP_NAME;
use crate::models::catalog::designers::Slide;
use crate::models::catalog::pricing::PricingCategory;
use crate::models::catalog::products::{AdminProduct, Product};
use crate::models::catalog::Project;
use crate::models::commission::store::StatusCounts;

/// Shared chrome data: site name, admin flag for the nav, pending flash.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub app_name: &'static str,
    pub is_admin: bool,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session) -> PageContext {
        PageContext {
            app_name: APP_NAME,
            is_admin: is_admin(session),
            flash: take_flash(session),
        }
    }
}

// ---------- Public site ----------

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub featured: Vec<ProductView>,
}

/// A shop product with its "from" price precomputed.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product: Product,
    pub price_from: u32,
}

#[derive(Debug, Clone)]
pub struct CarouselView {
    pub slides: &'static [Slide],
    pub current: usize,
    pub total: usize,
    pub offset_percent: i64,
    pub prev_href: String,
    pub next_href: String,
    /// One (href, active) pair per thumbnail.
    pub thumbs: Vec<ThumbLink>,
}

#[derive(Debug, Clone)]
pub struct ThumbLink {
    pub href: String,
    pub title: &'static str,
    pub src: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct CategoryTab {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub project: Project,
    pub service_label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct DesignerPanel {
    pub id: &'static str,
    pub name: &'static str,
    pub role: Option<&'static str>,
    pub specialties: &'static [&'static str],
    pub tabs: Vec<CategoryTab>,
    pub active_label: &'static str,
    pub cards: Vec<ProjectCard>,
}

#[derive(Debug, Clone)]
pub struct ShowcaseSection {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub panels: Vec<DesignerPanel>,
}

#[derive(Debug, Clone)]
pub struct LightboxView {
    pub item: Project,
    pub position: usize,
    pub total: usize,
    pub prev_href: String,
    pub next_href: String,
    pub close_href: String,
}

#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Template)]
#[template(path = "designs.html")]
pub struct DesignsTemplate {
    pub ctx: PageContext,
    pub carousel: CarouselView,
    pub sections: Vec<ShowcaseSection>,
    pub lightbox: Option<LightboxView>,
    pub service_cards: Vec<ServiceCard>,
}

#[derive(Debug, Clone)]
pub struct PricingTab {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub ctx: PageContext,
    pub tabs: Vec<PricingTab>,
    pub active: &'static PricingCategory,
}

#[derive(Debug, Clone)]
pub struct TagLink {
    pub tag: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub ctx: PageContext,
    pub products: Vec<ProductView>,
    pub query: String,
    pub sort: &'static str,
    pub tag_links: Vec<TagLink>,
}

// ---------- Commission intake ----------

/// Raw form values, echoed back on validation failure.
#[derive(Debug, Clone, Default)]
pub struct CommissionFormValues {
    pub name: String,
    pub email: String,
    pub discord: String,
    pub kind: String,
    pub tier: String,
    pub details: String,
    pub refs: String,
}

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "commission.html")]
pub struct CommissionFormTemplate {
    pub ctx: PageContext,
    pub errors: Vec<String>,
    pub form: CommissionFormValues,
    pub type_options: Vec<SelectOption>,
    pub tier_options: Vec<SelectOption>,
    pub package_note: bool,
}

#[derive(Template)]
#[template(path = "payments/success.html")]
pub struct PaymentSuccessTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "payments/cancel.html")]
pub struct PaymentCancelTemplate {
    pub ctx: PageContext,
}

// ---------- Admin ----------

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
}

/// One commission row, display-ready, with its status select precomputed.
#[derive(Debug, Clone)]
pub struct CommissionRow {
    pub id: String,
    pub name: String,
    pub discord: String,
    pub kind: String,
    pub status_label: &'static str,
    pub status_options: Vec<SelectOption>,
    pub created_at: String,
    pub assigned: String,
    pub revision: u64,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub ctx: PageContext,
    pub section: &'static str,
    pub counts: StatusCounts,
    pub latest: Vec<CommissionRow>,
    pub rows: Vec<CommissionRow>,
    pub products: &'static [AdminProduct],
    pub type_options: Vec<SelectOption>,
    pub csrf_token: String,
}
