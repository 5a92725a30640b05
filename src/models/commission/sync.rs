//! Orchestration between the commission cache and the remote API.
//!
//! Every mutating operation applies its optimistic update first, then runs
//! the network call, and compensates the cache if the call fails: a failed
//! status PATCH reverts, a failed DELETE reinserts, a failed create POST
//! drops the placeholder. A revision mismatch on the optimistic step means
//! the record changed since it was rendered — the list is re-fetched and the
//! operation reported as stale instead of written blind.

use crate::backend::client::BackendClient;
use crate::backend::types::{CheckoutRequest, NewCommissionBody};
use crate::errors::AppError;
use crate::models::commission::store::{temp_id, CommissionCache, StoreError};
use crate::models::commission::types::{Commission, ProjectType, Status, Tier};

/// Fields for an admin-created commission. Email, Discord and details are
/// optional on this path; the intake form is stricter.
#[derive(Debug, Clone)]
pub struct NewCommissionInput {
    pub name: String,
    pub email: String,
    pub discord: String,
    pub kind: ProjectType,
    pub details: String,
}

/// A validated intake-form submission, ready for the create-then-pay flow.
#[derive(Debug, Clone)]
pub struct IntakeRequest {
    pub name: String,
    pub email: String,
    pub discord: String,
    pub kind: ProjectType,
    pub tier: Tier,
    pub details: String,
}

/// Replace the cache with the server's current list.
pub async fn refresh(client: &BackendClient, cache: &CommissionCache) -> Result<usize, AppError> {
    let records = client.list_commissions().await?;
    let list: Vec<Commission> = records.into_iter().map(Commission::from_record).collect();
    let count = list.len();
    cache.with(|store| store.replace_all(list));
    log::info!("commission list refreshed, {count} records");
    Ok(count)
}

/// Fetch the list once if the cache has never been populated.
pub async fn ensure_loaded(client: &BackendClient, cache: &CommissionCache) -> Result<(), AppError> {
    if !cache.with(|store| store.is_loaded()) {
        refresh(client, cache).await?;
    }
    Ok(())
}

/// Optimistically rewrite a record's status, then PATCH the server.
pub async fn update_status(
    client: &BackendClient,
    cache: &CommissionCache,
    id: &str,
    expected_revision: u64,
    status: Status,
) -> Result<(), AppError> {
    let change = match cache.with(|store| store.set_status(id, expected_revision, status)) {
        Ok(change) => change,
        Err(StoreError::UnknownId) => return Err(AppError::NotFound),
        Err(StoreError::RevisionMismatch) => {
            refresh(client, cache).await?;
            return Err(AppError::Stale);
        }
    };

    if let Err(err) = client.update_status(id, status.as_str()).await {
        log::warn!("status update for commission {id} failed, reverting: {err}");
        let _ = cache.with(|store| store.set_status(id, change.revision, change.previous));
        return Err(err);
    }
    Ok(())
}

/// Optimistically drop a record, then DELETE it on the server.
pub async fn delete(
    client: &BackendClient,
    cache: &CommissionCache,
    id: &str,
    expected_revision: u64,
) -> Result<(), AppError> {
    let removed = match cache.with(|store| store.remove(id, expected_revision)) {
        Ok(removed) => removed,
        Err(StoreError::UnknownId) => return Err(AppError::NotFound),
        Err(StoreError::RevisionMismatch) => {
            refresh(client, cache).await?;
            return Err(AppError::Stale);
        }
    };

    if let Err(err) = client.delete_commission(id).await {
        log::warn!("delete for commission {id} failed, reinserting: {err}");
        cache.with(|store| store.reinsert(removed));
        return Err(err);
    }
    Ok(())
}

/// Insert a placeholder record at the head of the list, POST the real one,
/// then swap the placeholder for the server-confirmed record. On failure the
/// placeholder is removed again. Returns the confirmed server id.
pub async fn create(
    client: &BackendClient,
    cache: &CommissionCache,
    input: NewCommissionInput,
) -> Result<String, AppError> {
    let placeholder_id = temp_id();
    let optimistic = Commission {
        id: placeholder_id.clone(),
        name: input.name.clone(),
        email: input.email.clone(),
        discord: input.discord.clone(),
        details: input.details.clone(),
        kind: input.kind.label(),
        status: Status::Queued,
        created_at: today(),
        designers: None,
    };
    cache.with(|store| store.insert_head(optimistic));

    let body = NewCommissionBody {
        name: input.name,
        email: input.email,
        discord: input.discord,
        details: input.details,
        kind: input.kind.as_str().to_string(),
        status: Status::Queued.as_str().to_string(),
    };

    match client.create_commission(&body).await {
        Ok(record) => {
            let confirmed = Commission::from_record(record);
            let id = confirmed.id.clone();
            if cache.with(|store| store.confirm(&placeholder_id, confirmed)).is_err() {
                // Placeholder vanished under us (e.g. a refresh raced the
                // POST); the next refresh will show the server record.
                log::warn!("placeholder {placeholder_id} missing at confirm time");
            }
            Ok(id)
        }
        Err(err) => {
            cache.with(|store| store.discard(&placeholder_id));
            Err(err)
        }
    }
}

/// The public intake flow: create the commission, open a checkout session
/// for it, and hand back the payment URL to redirect to.
///
/// A checkout failure compensates with a best-effort delete of the record
/// created in step one, so no orphaned `queued` commission lingers without a
/// payment attached.
pub async fn submit_intake(client: &BackendClient, intake: &IntakeRequest) -> Result<String, AppError> {
    let body = NewCommissionBody {
        name: intake.name.clone(),
        email: intake.email.clone(),
        discord: intake.discord.clone(),
        details: intake.details.clone(),
        kind: intake.kind.as_str().to_string(),
        status: Status::Queued.as_str().to_string(),
    };
    let record = client.create_commission(&body).await?;

    let checkout = CheckoutRequest {
        item: intake.kind.as_str().to_string(),
        tier: intake.tier.as_str().to_string(),
        amount: 1,
        commission_id: record.id.clone(),
    };
    match client.create_checkout_session(&checkout).await {
        Ok(session) => Ok(session.url),
        Err(err) => {
            match client.delete_commission(&record.id).await {
                Ok(()) => log::warn!(
                    "checkout failed, compensating delete removed commission {}",
                    record.id
                ),
                Err(cleanup) => log::error!(
                    "checkout failed and compensating delete for commission {} also failed: {cleanup}",
                    record.id
                ),
            }
            Err(err)
        }
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
