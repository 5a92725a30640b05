//! Wire shapes for the remote commission/payment API. Tokens stay in their
//! machine form here; display mapping happens in the models layer.

use serde::{Deserialize, Serialize};

/// A commission as `GET /commissions` returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub discord: String,
    #[serde(default)]
    pub details: String,
    /// Machine token, e.g. `banner`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Machine token, e.g. `in_progress`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub designers: Option<String>,
}

/// Body for `POST /commissions`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCommissionBody {
    pub name: String,
    pub email: String,
    pub discord: String,
    pub details: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

/// Body for `PATCH /commissions/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch {
    pub status: String,
}

/// Body for `POST /payments/createCheckoutSession`. The field casing is the
/// payment service's, not ours.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub item: String,
    pub tier: String,
    pub amount: u32,
    #[serde(rename = "CommissionID")]
    pub commission_id: String,
}

/// Response from the checkout endpoint: the hosted payment page to send the
/// browser to.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}
