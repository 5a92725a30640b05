//! HTTP client for the remote commission/payment API.
//!
//! [`BackendClient`] holds a pooled `reqwest::Client` plus the API base URL.
//! Non-2xx responses are mined for a `message` field and surfaced as
//! [`AppError::Api`]; transport and JSON-parse failures map to
//! [`AppError::Http`].

use serde::de::DeserializeOwned;

use crate::errors::AppError;

use super::types::{CheckoutRequest, CheckoutSession, CommissionRecord, NewCommissionBody, StatusPatch};

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> BackendClient {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        BackendClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /commissions` — the full list, machine tokens and all.
    pub async fn list_commissions(&self) -> Result<Vec<CommissionRecord>, AppError> {
        let resp = self.http.get(self.url("/commissions")).send().await?;
        Self::parse_json(resp).await
    }

    /// `POST /commissions` — create a record, returning the server's copy.
    pub async fn create_commission(
        &self,
        body: &NewCommissionBody,
    ) -> Result<CommissionRecord, AppError> {
        let resp = self
            .http
            .post(self.url("/commissions"))
            .json(body)
            .send()
            .await?;
        Self::parse_json(resp).await
    }

    /// `PATCH /commissions/:id` with a machine status token.
    pub async fn update_status(&self, id: &str, status: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .patch(self.url(&format!("/commissions/{id}")))
            .json(&StatusPatch {
                status: status.to_string(),
            })
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    /// `DELETE /commissions/:id`.
    pub async fn delete_commission(&self, id: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .delete(self.url(&format!("/commissions/{id}")))
            .send()
            .await?;
        Self::expect_success(resp).await
    }

    /// `POST /payments/createCheckoutSession` — returns the hosted checkout
    /// URL for the given commission.
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        let resp = self
            .http
            .post(self.url("/payments/createCheckoutSession"))
            .json(request)
            .send()
            .await?;
        Self::parse_json(resp).await
    }

    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    async fn expect_success(resp: reqwest::Response) -> Result<(), AppError> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    /// Prefer the body's `message` field; fall back to a generic line with
    /// the status code when the body is missing or not JSON.
    async fn api_error(resp: reqwest::Response) -> AppError {
        let status = resp.status().as_u16();
        let message = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Server error: {status}"));
        AppError::Api { status, message }
    }
}
