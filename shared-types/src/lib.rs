//! Shared types between the web client and the API backend
//!
//! These types are used by both:
//! - the API backend (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP/SSE

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Users & Customers
// ============================================================================

/// Authenticated user, as returned by the session probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Tenant the user's drafts belong to (absent for pure admin accounts)
    pub customer_id: Option<String>,
    pub is_admin: bool,
}

/// Customer summary for admin navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub customer_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub draft_count: u32,
}

// ============================================================================
// Drafts & Feedback
// ============================================================================

/// Generated post draft as listed in the sidebar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    pub id: String,
    pub customer_id: String,
    pub topic: String,
    /// Generated text; immutable once created
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub has_feedback: bool,
    /// Sampling temperature used for this variation
    pub temperature: Option<f32>,
}

/// Reviewer verdict on a draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackRating {
    Like,
    Dislike,
}

/// Stored feedback attached to a draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftFeedback {
    /// Reviewer's edited version of the text
    pub edited: String,
    pub comments: Vec<String>,
    pub rating: Option<FeedbackRating>,
}

/// Full draft record, fetched per-draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftDetail {
    pub id: String,
    pub customer_id: String,
    pub topic: String,
    /// Extra context supplied at generation time
    pub context: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub has_feedback: bool,
    pub temperature: Option<f32>,
    pub feedback: Option<DraftFeedback>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftsResponse {
    pub drafts: Vec<Draft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteDraftResponse {
    /// Number of feedback rows removed along with the draft
    pub feedback_deleted: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomersResponse {
    pub customers: Vec<Customer>,
}

/// Feedback submission for one draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRequest {
    pub draft_id: String,
    /// Text as generated, for preference-pair construction
    pub original: String,
    pub edited: String,
    pub comments: Vec<String>,
    pub rating: Option<FeedbackRating>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackResponse {
    pub feedback_id: String,
    pub message: String,
}

// ============================================================================
// Generation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub topic: String,
    pub context: Option<String>,
    /// Variation count; the backend spreads temperatures across it
    pub variations: u32,
    /// Target customer (admin flows only; defaults to the caller's own)
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDraft {
    pub draft_id: String,
    pub text: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub drafts: Vec<GeneratedDraft>,
}

/// One finished variation delivered over the generation stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamedDraft {
    pub draft_id: String,
    pub text: String,
    pub temperature: Option<f32>,
    /// Zero-based position within the run, when the backend reports one
    pub index: Option<u32>,
    pub total: Option<u32>,
}

/// One SSE payload from `GET /generate/stream`, tagged by its `event` field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum StreamEvent {
    /// One finished variation
    Draft(StreamedDraft),

    /// Generation failed server-side
    Error { error: Option<String> },

    /// All variations delivered
    Done,
}

// ============================================================================
// Training & Adapters
// ============================================================================

/// Feedback samples required before a fine-tuning run is allowed
pub const MIN_TRAINING_SAMPLES: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Fine-tuning job, polled until terminal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingJob {
    pub id: String,
    pub customer_id: String,
    pub status: JobStatus,
    /// Human-readable progress line (e.g. "Epoch 2/3")
    pub progress: Option<String>,
    /// Where the resulting adapter was stored, once completed
    pub adapter_path: Option<String>,
    pub error: Option<String>,
}

/// Single-tenant training trigger (`POST /train`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainRequest {
    pub min_samples: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

/// Customer-scoped training trigger (`POST /adapters/train`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainAdapterRequest {
    pub customer_id: String,
    pub epochs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainAdapterResponse {
    pub job_id: String,
    /// Samples the run was started with
    pub feedback_count: u32,
}

/// Versioned LoRA adapter; at most one active per customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Adapter {
    pub id: String,
    pub customer_id: String,
    pub version: u32,
    pub path: String,
    pub is_active: bool,
    pub epochs: u32,
    pub training_samples: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdaptersResponse {
    pub adapters: Vec<Adapter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveAdapterResponse {
    pub adapter: Option<Adapter>,
}

/// Outcome of an activate/deactivate call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdapterActionResponse {
    pub message: String,
}

/// Feedback available for training, per customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingData {
    pub customer_id: String,
    pub count: u32,
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_event_wire_format() {
        let draft: StreamEvent = serde_json::from_str(
            r#"{"event":"draft","draft_id":"d1","text":"Hello","temperature":0.7,"index":0,"total":3}"#,
        )
        .unwrap();
        assert_eq!(
            draft,
            StreamEvent::Draft(StreamedDraft {
                draft_id: "d1".to_string(),
                text: "Hello".to_string(),
                temperature: Some(0.7),
                index: Some(0),
                total: Some(3),
            })
        );

        let error: StreamEvent =
            serde_json::from_str(r#"{"event":"error","error":"model offline"}"#).unwrap();
        assert_eq!(
            error,
            StreamEvent::Error {
                error: Some("model offline".to_string())
            }
        );

        let done: StreamEvent = serde_json::from_str(r#"{"event":"done"}"#).unwrap();
        assert_eq!(done, StreamEvent::Done);
    }

    #[test]
    fn test_stream_event_tolerates_sparse_fields() {
        // index/total/temperature are hints; only draft_id and text are required
        let draft: StreamEvent =
            serde_json::from_str(r#"{"event":"draft","draft_id":"d2","text":"Hi"}"#).unwrap();
        match draft {
            StreamEvent::Draft(draft) => {
                assert_eq!(draft.temperature, None);
                assert_eq!(draft.index, None);
            }
            other => panic!("expected draft event, got {other:?}"),
        }

        let error: StreamEvent = serde_json::from_str(r#"{"event":"error"}"#).unwrap();
        assert_eq!(error, StreamEvent::Error { error: None });

        // A draft event without text is not usable
        assert!(serde_json::from_str::<StreamEvent>(r#"{"event":"draft","draft_id":"d3"}"#).is_err());
    }

    #[test]
    fn test_job_status_serialization() {
        assert_eq!(serde_json::to_string(&JobStatus::Running).unwrap(), "\"running\"");
        let status: JobStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, JobStatus::Completed);
    }

    #[test]
    fn test_job_status_terminality() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn test_rating_wire_format() {
        assert_eq!(serde_json::to_string(&FeedbackRating::Like).unwrap(), "\"like\"");
        let rating: FeedbackRating = serde_json::from_str("\"dislike\"").unwrap();
        assert_eq!(rating, FeedbackRating::Dislike);
    }

    #[test]
    fn test_draft_detail_feedback_optional() {
        let bare: DraftDetail = serde_json::from_str(
            r#"{
                "id": "d1",
                "customer_id": "c1",
                "topic": "Leadership",
                "text": "Original text",
                "created_at": "2025-06-01T12:00:00Z",
                "has_feedback": false
            }"#,
        )
        .unwrap();
        assert_eq!(bare.context, None);
        assert_eq!(bare.feedback, None);

        let reviewed: DraftDetail = serde_json::from_str(
            r#"{
                "id": "d1",
                "customer_id": "c1",
                "topic": "Leadership",
                "context": "200 employees",
                "text": "Original text",
                "created_at": "2025-06-01T12:00:00Z",
                "has_feedback": true,
                "temperature": 0.3,
                "feedback": {
                    "edited": "Edited text",
                    "comments": ["shorter"],
                    "rating": "like"
                }
            }"#,
        )
        .unwrap();
        let feedback = reviewed.feedback.unwrap();
        assert_eq!(feedback.edited, "Edited text");
        assert_eq!(feedback.rating, Some(FeedbackRating::Like));
    }

    #[test]
    fn test_user_optional_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","email":"admin@blazel.io","is_admin":true}"#,
        )
        .unwrap();
        assert_eq!(user.first_name, None);
        assert_eq!(user.customer_id, None);
        assert!(user.is_admin);
    }

    #[test]
    fn test_feedback_request_serialization() {
        let req = FeedbackRequest {
            draft_id: "d1".to_string(),
            original: "a".to_string(),
            edited: "b".to_string(),
            comments: vec!["[On \"a\"]: tighten".to_string()],
            rating: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: FeedbackRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }
}
