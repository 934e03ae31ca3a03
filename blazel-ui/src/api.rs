use gloo_net::http::{Request, RequestBuilder};
use shared_types::{
    ActiveAdapterResponse, Adapter, AdapterActionResponse, AdaptersResponse, Customer,
    CustomersResponse, DeleteDraftResponse, Draft, DraftDetail, DraftsResponse, FeedbackRequest,
    FeedbackResponse, GenerateRequest, GenerateResponse, HealthResponse, TrainAdapterRequest,
    TrainAdapterResponse, TrainRequest, TrainResponse, TrainingData, TrainingJob,
    MIN_TRAINING_SAMPLES,
};
use std::sync::OnceLock;

use crate::auth::stored_token;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 8000
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

pub(crate) async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(detail) = json.get("detail").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({detail})");
        }
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

/// Attach the bearer token when a session exists
fn authorize(request: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

// ============================================================================
// Health
// ============================================================================

/// Health probe for the header indicator. Parses the body regardless of
/// status so a degraded-but-responding backend still reports its state.
pub async fn check_health() -> Result<HealthResponse, String> {
    let url = format!("{}/health", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

// ============================================================================
// Generation
// ============================================================================

pub async fn generate_post(request: &GenerateRequest) -> Result<GenerateResponse, String> {
    let url = format!("{}/generate", api_base());

    let response = authorize(Request::post(&url))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

// ============================================================================
// Drafts
// ============================================================================

pub async fn fetch_drafts() -> Result<Vec<Draft>, String> {
    let url = format!("{}/drafts", api_base());

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: DraftsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.drafts)
}

pub async fn fetch_drafts_for_customer(customer_id: &str) -> Result<Vec<Draft>, String> {
    let encoded = js_sys::encode_uri_component(customer_id)
        .as_string()
        .unwrap_or_else(|| customer_id.to_string());
    let url = format!("{}/drafts?customer_id={}", api_base(), encoded);

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: DraftsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.drafts)
}

pub async fn fetch_draft(draft_id: &str) -> Result<DraftDetail, String> {
    let url = format!("{}/drafts/{}", api_base(), draft_id);

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Delete a draft and any feedback attached to it
pub async fn delete_draft(draft_id: &str) -> Result<DeleteDraftResponse, String> {
    let url = format!("{}/drafts/{}", api_base(), draft_id);

    let response = authorize(Request::delete(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

// ============================================================================
// Feedback
// ============================================================================

pub async fn submit_feedback(request: &FeedbackRequest) -> Result<FeedbackResponse, String> {
    let url = format!("{}/feedback", api_base());

    let response = authorize(Request::post(&url))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

/// Raw feedback rows for a customer, shape owned by the backend
pub async fn fetch_customer_feedback(customer_id: &str) -> Result<serde_json::Value, String> {
    let url = format!("{}/feedback/{}", api_base(), customer_id);

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

// ============================================================================
// Customers
// ============================================================================

pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let url = format!("{}/customers", api_base());

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: CustomersResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.customers)
}

// ============================================================================
// Training
// ============================================================================

/// Single-tenant training trigger; the backend enforces the same floor
pub async fn trigger_training() -> Result<TrainResponse, String> {
    let url = format!("{}/train", api_base());
    let request = TrainRequest {
        min_samples: MIN_TRAINING_SAMPLES,
    };

    let response = authorize(Request::post(&url))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn train_adapter(request: &TrainAdapterRequest) -> Result<TrainAdapterResponse, String> {
    let url = format!("{}/adapters/train", api_base());

    let response = authorize(Request::post(&url))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn fetch_training_job(job_id: &str) -> Result<TrainingJob, String> {
    let url = format!("{}/training-jobs/{}", api_base(), job_id);

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn fetch_training_data(customer_id: &str) -> Result<TrainingData, String> {
    let url = format!("{}/adapters/training-data/{}", api_base(), customer_id);

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

// ============================================================================
// Adapters
// ============================================================================

pub async fn fetch_adapters(customer_id: &str) -> Result<Vec<Adapter>, String> {
    let encoded = js_sys::encode_uri_component(customer_id)
        .as_string()
        .unwrap_or_else(|| customer_id.to_string());
    let url = format!("{}/adapters?customer_id={}", api_base(), encoded);

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: AdaptersResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.adapters)
}

pub async fn fetch_active_adapter(customer_id: &str) -> Result<Option<Adapter>, String> {
    let url = format!("{}/adapters/active/{}", api_base(), customer_id);

    let response = authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ActiveAdapterResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.adapter)
}

pub async fn activate_adapter(adapter_id: &str) -> Result<AdapterActionResponse, String> {
    let url = format!("{}/adapters/{}/activate", api_base(), adapter_id);

    let response = authorize(Request::put(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn deactivate_adapter(adapter_id: &str) -> Result<AdapterActionResponse, String> {
    let url = format!("{}/adapters/{}/deactivate", api_base(), adapter_id);

    let response = authorize(Request::put(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}
