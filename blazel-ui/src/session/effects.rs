//! Async effects: data loading and the training poll loop.
//!
//! Each function takes the signals it writes, so components stay thin and
//! the fetch/update flow lives in one place.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use shared_types::{Adapter, Customer, Draft, TrainingData};

use crate::api;
use crate::session::state::{self, PollOutcome};
use crate::session::AppState;

/// Poll cadence while a training job is live.
const TRAINING_POLL_MS: u32 = 5_000;

/// Probe the backend health endpoint and surface the indicator label.
pub async fn probe_health(mut health: Signal<String>) {
    let label = state::health_label(&api::check_health().await);
    health.set(label.to_string());
}

/// Load the customer roster and auto-select the first customer when
/// nothing is selected yet.
pub async fn load_customers(
    mut customers: Signal<Vec<Customer>>,
    mut selected_customer: Signal<String>,
    mut status: Signal<String>,
) {
    match api::fetch_customers().await {
        Ok(resp) => {
            if selected_customer.read().is_empty() {
                if let Some(first) = resp.first() {
                    selected_customer.set(first.customer_id.clone());
                }
            }
            customers.set(resp);
        }
        Err(e) => status.set(format!("Error loading customers: {e}")),
    }
}

/// Load the draft list, scoped to one customer when a filter is given.
pub async fn load_drafts(
    customer_filter: Option<String>,
    mut drafts: Signal<Vec<Draft>>,
    mut loading: Signal<bool>,
    mut status: Signal<String>,
) {
    loading.set(true);
    let result = match customer_filter.as_deref() {
        Some(customer_id) => api::fetch_drafts_for_customer(customer_id).await,
        None => api::fetch_drafts().await,
    };
    match result {
        Ok(resp) => drafts.set(resp),
        Err(e) => status.set(format!("Error loading drafts: {e}")),
    }
    loading.set(false);
}

/// Fetch one draft and seed the edit form from it. Inline comments always
/// start empty: saved ones come back flattened inside `comments`.
pub async fn open_draft(draft_id: String, mut app: AppState) {
    app.busy.set(true);
    match api::fetch_draft(&draft_id).await {
        Ok(detail) => {
            let seed = state::seed_edit_state(&detail);
            app.edited_text.set(seed.edited_text.clone());
            app.editor_seed.set(seed.edited_text);
            app.general_comments.set(seed.comments);
            app.new_comment.set(String::new());
            app.inline_comments.set(Vec::new());
            app.rating.set(seed.rating);
            app.show_diff.set(seed.show_diff);
            app.selected_draft.set(Some(detail));
            app.show_new_draft.set(false);
            app.editor_epoch.with_mut(|e| *e += 1);
        }
        Err(e) => app.status.set(format!("Error loading draft: {e}")),
    }
    app.busy.set(false);
}

/// Load the adapter list for a customer, newest version first.
pub async fn load_adapters(
    customer_id: String,
    mut adapters: Signal<Vec<Adapter>>,
    mut loading: Signal<bool>,
    mut status: Signal<String>,
) {
    loading.set(true);
    match api::fetch_adapters(&customer_id).await {
        Ok(resp) => adapters.set(state::sort_adapters(resp)),
        Err(e) => status.set(format!("Error loading adapters: {e}")),
    }
    loading.set(false);
}

/// Load everything the training panel shows: the usable sample count, the
/// trained adapters, the active adapter, and a short preview of recent
/// feedback.
pub async fn load_training_panel(
    customer_id: String,
    mut samples: Signal<Option<TrainingData>>,
    mut adapters: Signal<Vec<Adapter>>,
    mut active_adapter: Signal<Option<Adapter>>,
    mut recent_feedback: Signal<Vec<String>>,
    mut error: Signal<Option<String>>,
) {
    let (data, list, active, listing) = futures_util::join!(
        api::fetch_training_data(&customer_id),
        api::fetch_adapters(&customer_id),
        api::fetch_active_adapter(&customer_id),
        api::fetch_customer_feedback(&customer_id),
    );

    match data {
        Ok(d) => samples.set(Some(d)),
        Err(e) => error.set(Some(e)),
    }
    match list {
        Ok(resp) => adapters.set(state::sort_adapters(resp)),
        Err(e) => error.set(Some(e)),
    }
    match active {
        Ok(a) => active_adapter.set(a),
        Err(e) => tracing::warn!("Failed to load active adapter: {}", e),
    }
    match listing {
        Ok(rows) => recent_feedback.set(state::feedback_snippets(&rows, 3)),
        Err(e) => tracing::warn!("Failed to load feedback list: {}", e),
    }
}

/// Poll one training job until it reaches a terminal state or tracking
/// moves to a different job. Transient fetch errors are logged and the
/// next tick retries.
pub async fn poll_training_job(
    job_id: String,
    mut training_job: Signal<Option<String>>,
    mut training_customer: Signal<Option<String>>,
    mut training_progress: Signal<String>,
    mut status: Signal<String>,
) {
    loop {
        TimeoutFuture::new(TRAINING_POLL_MS).await;

        // Tracking moved on (job cleared or replaced) while we slept.
        if training_job.read().as_deref() != Some(job_id.as_str()) {
            break;
        }

        match api::fetch_training_job(&job_id).await {
            Ok(job) => match state::poll_outcome(&job) {
                PollOutcome::Continue(progress) => training_progress.set(progress),
                PollOutcome::Finish(message) => {
                    training_job.set(None);
                    training_customer.set(None);
                    training_progress.set(String::new());
                    status.set(message);
                    break;
                }
            },
            Err(e) => tracing::warn!("Training status check failed: {}", e),
        }
    }
}
