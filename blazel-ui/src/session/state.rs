//! Session pure logic — no RSX, no signals

use chrono::{DateTime, Utc};
use shared_types::{
    Adapter, Customer, Draft, DraftDetail, FeedbackRating, HealthResponse, JobStatus,
    StreamedDraft, TrainingJob, User,
};

// ── View state ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Drafts,
    Training,
    Adapters,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Drafts => "Drafts",
            Tab::Training => "Training",
            Tab::Adapters => "Adapters",
        }
    }
}

/// Comment anchored to a quoted selection; exists only while editing,
/// flattened into plain comment strings on submit
#[derive(Debug, Clone, PartialEq)]
pub struct InlineComment {
    pub id: String,
    pub text: String,
    pub comment: String,
}

impl InlineComment {
    pub fn new(text: String, comment: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            comment,
        }
    }
}

// ── Form parsing ──────────────────────────────────────────────────────────────

/// Parse the variations field: non-numeric input falls back to 1, values
/// outside [1, 10] clamp to the bounds
pub fn clamp_variations(input: &str) -> u32 {
    input.trim().parse::<u32>().unwrap_or(1).clamp(1, 10)
}

/// Parse the epochs field: zero and non-numeric input fall back to the
/// default of 3, bounds [1, 10]
pub fn clamp_epochs(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => 3,
        Ok(n) => n.clamp(1, 10),
    }
}

// ── Status banner ─────────────────────────────────────────────────────────────

/// Banner color class, derived by substring matching on the message text
pub fn status_banner_class(message: &str) -> &'static str {
    if message.contains("Error") {
        "status-error"
    } else if message.contains("submitted")
        || message.contains("Generated")
        || message.contains("completed")
        || message.contains("deleted")
    {
        "status-success"
    } else {
        "status-info"
    }
}

// ── Feedback editing ──────────────────────────────────────────────────────────

/// Edit form state seeded when a draft is opened
#[derive(Debug, Clone, PartialEq)]
pub struct EditSeed {
    pub edited_text: String,
    pub comments: Vec<String>,
    pub rating: Option<FeedbackRating>,
    pub show_diff: bool,
}

/// Saved feedback, when present, is the source of truth for the form;
/// the diff starts visible only if that feedback changed the text.
pub fn seed_edit_state(detail: &DraftDetail) -> EditSeed {
    match &detail.feedback {
        Some(feedback) => EditSeed {
            edited_text: if feedback.edited.is_empty() {
                detail.text.clone()
            } else {
                feedback.edited.clone()
            },
            comments: feedback.comments.clone(),
            rating: feedback.rating.clone(),
            show_diff: !feedback.edited.is_empty() && feedback.edited != detail.text,
        },
        None => EditSeed {
            edited_text: detail.text.clone(),
            comments: Vec::new(),
            rating: None,
            show_diff: false,
        },
    }
}

/// Feedback must carry something: an edit, a comment, or a rating
pub fn feedback_submit_allowed(
    original: &str,
    edited: &str,
    comments: &[String],
    inline: &[InlineComment],
    rating: Option<&FeedbackRating>,
) -> bool {
    edited != original || !comments.is_empty() || !inline.is_empty() || rating.is_some()
}

/// Flat comment list for submission: general comments first, then each
/// inline comment as `[On "<quoted>"]: <comment>`
pub fn flatten_comments(general: &[String], inline: &[InlineComment]) -> Vec<String> {
    let mut all = general.to_vec();
    all.extend(
        inline
            .iter()
            .map(|ic| format!("[On \"{}\"]: {}", ic.text, ic.comment)),
    );
    all
}

// ── Draft list ────────────────────────────────────────────────────────────────

/// List entry for a draft that just arrived over the generation stream
pub fn draft_from_stream(streamed: &StreamedDraft, topic: &str, customer_id: &str) -> Draft {
    Draft {
        id: streamed.draft_id.clone(),
        customer_id: customer_id.to_string(),
        topic: topic.to_string(),
        text: streamed.text.clone(),
        created_at: Utc::now(),
        has_feedback: false,
        temperature: streamed.temperature,
    }
}

/// Streamed drafts splice in ahead of the pre-existing list: the nth
/// arrival lands at index n, so variations keep their arrival order. The
/// index clamps in case the list shrank underneath the stream.
pub fn insert_streamed(drafts: &mut Vec<Draft>, draft: Draft, arrived: usize) {
    let at = arrived.min(drafts.len());
    drafts.insert(at, draft);
}

pub fn remove_draft(drafts: &mut Vec<Draft>, draft_id: &str) {
    drafts.retain(|d| d.id != draft_id);
}

/// Deletion status line, acknowledging cascaded feedback removal
pub fn delete_status(feedback_deleted: u32) -> String {
    if feedback_deleted > 0 {
        format!("Draft deleted ({feedback_deleted} feedback removed)")
    } else {
        "Draft deleted".to_string()
    }
}

// ── Training jobs ─────────────────────────────────────────────────────────────

/// What a poll tick does to job tracking
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Keep polling; show the given progress line
    Continue(String),
    /// Stop tracking and announce the terminal message
    Finish(String),
}

/// Progress text falls back to the status name while the job is live.
pub fn poll_outcome(job: &TrainingJob) -> PollOutcome {
    match job.status {
        JobStatus::Completed => {
            PollOutcome::Finish("Training completed! Adapter saved.".to_string())
        }
        JobStatus::Failed => PollOutcome::Finish(format!(
            "Training failed: {}",
            job.error.as_deref().unwrap_or("Unknown error")
        )),
        JobStatus::Pending | JobStatus::Running => PollOutcome::Continue(
            job.progress
                .clone()
                .unwrap_or_else(|| job_status_label(&job.status).to_string()),
        ),
    }
}

pub fn job_status_label(status: &JobStatus) -> &'static str {
    match status {
        JobStatus::Pending => "pending",
        JobStatus::Running => "running",
        JobStatus::Completed => "completed",
        JobStatus::Failed => "failed",
    }
}

/// Snippets of recent feedback rows for the pre-training review list.
/// The listing's shape is backend-owned, so extraction is lenient: rows
/// live either at the top level or under `feedback`, and a row's text is
/// its `edited` field.
pub fn feedback_snippets(listing: &serde_json::Value, limit: usize) -> Vec<String> {
    let rows = listing
        .as_array()
        .or_else(|| listing.get("feedback").and_then(|v| v.as_array()));
    let Some(rows) = rows else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| row.get("edited").and_then(|v| v.as_str()))
        .map(|text| truncate_chars(text, 80))
        .take(limit)
        .collect()
}

// ── Adapters ──────────────────────────────────────────────────────────────────

/// Adapter list ordered newest version first
pub fn sort_adapters(mut adapters: Vec<Adapter>) -> Vec<Adapter> {
    adapters.sort_by(|a, b| b.version.cmp(&a.version));
    adapters
}

// ── Display labels ────────────────────────────────────────────────────────────

/// Header identity line: full name when known, else just the email
pub fn user_display_name(user: &User) -> String {
    match (&user.first_name, &user.last_name) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.clone(),
        _ => user.email.clone(),
    }
}

/// Name a customer the way the admin views do: first name, else email,
/// else a truncated id
pub fn customer_display_name(customer: &Customer) -> String {
    customer
        .first_name
        .clone()
        .or_else(|| customer.email.clone())
        .unwrap_or_else(|| truncate_chars(&customer.customer_id, 12))
}

/// Dropdown label with full name, email, and draft count
pub fn customer_option_label(customer: &Customer) -> String {
    let name = match &customer.first_name {
        Some(first) => {
            let mut name = first.clone();
            if let Some(last) = &customer.last_name {
                name.push(' ');
                name.push_str(last);
            }
            if let Some(email) = &customer.email {
                name.push_str(&format!(" ({email})"));
            }
            name
        }
        None => truncate_chars(&customer.customer_id, 12),
    };
    format!("{name} ({} drafts)", customer.draft_count)
}

/// Short owner label on admin draft cards
pub fn customer_short_label(customers: &[Customer], customer_id: &str) -> String {
    customers
        .iter()
        .find(|c| c.customer_id == customer_id)
        .and_then(|c| c.first_name.clone().or_else(|| c.email.clone()))
        .unwrap_or_else(|| truncate_chars(customer_id, 12))
}

/// Header indicator text for the health probe result
pub fn health_label(result: &Result<HealthResponse, String>) -> &'static str {
    match result {
        Ok(health) if health.status == "healthy" => "Connected",
        Ok(_) => "Error",
        Err(_) => "Disconnected",
    }
}

/// Card timestamp, date only
pub fn format_draft_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y").to_string()
}

/// Selected-draft timestamp with time of day
pub fn format_draft_datetime(created_at: &DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y %H:%M").to_string()
}

pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max).collect();
        format!("{prefix}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::DraftFeedback;

    fn sample_detail(feedback: Option<DraftFeedback>) -> DraftDetail {
        DraftDetail {
            id: "d1".to_string(),
            customer_id: "c1".to_string(),
            topic: "Leadership".to_string(),
            context: None,
            text: "Original text".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            has_feedback: feedback.is_some(),
            temperature: Some(0.7),
            feedback,
        }
    }

    fn sample_draft(id: &str) -> Draft {
        Draft {
            id: id.to_string(),
            customer_id: "c1".to_string(),
            topic: "Leadership".to_string(),
            text: "Body".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            has_feedback: false,
            temperature: None,
        }
    }

    #[test]
    fn variations_clamp_to_bounds() {
        assert_eq!(clamp_variations("0"), 1);
        assert_eq!(clamp_variations("-2"), 1);
        assert_eq!(clamp_variations("11"), 10);
        assert_eq!(clamp_variations("5"), 5);
    }

    #[test]
    fn non_numeric_variations_normalize_to_one() {
        assert_eq!(clamp_variations(""), 1);
        assert_eq!(clamp_variations("abc"), 1);
        assert_eq!(clamp_variations("3.7"), 1);
    }

    #[test]
    fn epochs_fall_back_to_default() {
        assert_eq!(clamp_epochs(""), 3);
        assert_eq!(clamp_epochs("0"), 3);
        assert_eq!(clamp_epochs("12"), 10);
        assert_eq!(clamp_epochs("4"), 4);
    }

    #[test]
    fn empty_feedback_is_rejected() {
        let original = "Original text";
        assert!(!feedback_submit_allowed(original, original, &[], &[], None));
    }

    #[test]
    fn any_single_feedback_signal_permits_submission() {
        let original = "Original text";
        assert!(feedback_submit_allowed(
            original,
            "Edited text",
            &[],
            &[],
            None
        ));
        assert!(feedback_submit_allowed(
            original,
            original,
            &["tighter".to_string()],
            &[],
            None
        ));
        assert!(feedback_submit_allowed(
            original,
            original,
            &[],
            &[InlineComment::new("hook".to_string(), "stronger".to_string())],
            None
        ));
        assert!(feedback_submit_allowed(
            original,
            original,
            &[],
            &[],
            Some(&FeedbackRating::Like)
        ));
    }

    #[test]
    fn inline_comments_flatten_after_general_ones() {
        let general = vec!["More conversational".to_string()];
        let inline = vec![
            InlineComment::new("my startup".to_string(), "name the company".to_string()),
            InlineComment::new("10x".to_string(), "drop the buzzword".to_string()),
        ];

        let all = flatten_comments(&general, &inline);
        assert_eq!(
            all,
            vec![
                "More conversational".to_string(),
                "[On \"my startup\"]: name the company".to_string(),
                "[On \"10x\"]: drop the buzzword".to_string(),
            ]
        );
    }

    #[test]
    fn unreviewed_draft_seeds_from_generated_text() {
        let seed = seed_edit_state(&sample_detail(None));
        assert_eq!(seed.edited_text, "Original text");
        assert!(seed.comments.is_empty());
        assert_eq!(seed.rating, None);
        assert!(!seed.show_diff);
    }

    #[test]
    fn changed_feedback_seeds_form_and_shows_diff() {
        let seed = seed_edit_state(&sample_detail(Some(DraftFeedback {
            edited: "Edited text".to_string(),
            comments: vec!["shorter".to_string()],
            rating: Some(FeedbackRating::Dislike),
        })));
        assert_eq!(seed.edited_text, "Edited text");
        assert_eq!(seed.comments, vec!["shorter".to_string()]);
        assert_eq!(seed.rating, Some(FeedbackRating::Dislike));
        assert!(seed.show_diff);
    }

    #[test]
    fn unchanged_feedback_hides_diff_by_default() {
        let seed = seed_edit_state(&sample_detail(Some(DraftFeedback {
            edited: "Original text".to_string(),
            comments: vec!["liked as-is".to_string()],
            rating: Some(FeedbackRating::Like),
        })));
        assert!(!seed.show_diff);
    }

    #[test]
    fn comment_only_feedback_seeds_generated_text_without_diff() {
        let seed = seed_edit_state(&sample_detail(Some(DraftFeedback {
            edited: String::new(),
            comments: vec!["punchier opening".to_string()],
            rating: None,
        })));
        assert_eq!(seed.edited_text, "Original text");
        assert!(!seed.show_diff);
    }

    #[test]
    fn streamed_drafts_splice_in_ahead_of_existing_in_arrival_order() {
        let mut drafts = vec![sample_draft("old-1"), sample_draft("old-2")];
        for (i, t) in [0.3_f32, 0.65, 1.0].iter().enumerate() {
            let draft = draft_from_stream(
                &StreamedDraft {
                    draft_id: format!("new-{i}"),
                    text: format!("Variation {i}"),
                    temperature: Some(*t),
                    index: Some(i as u32),
                    total: Some(3),
                },
                "Leadership",
                "c1",
            );
            insert_streamed(&mut drafts, draft, i);
        }

        let ids: Vec<_> = drafts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["new-0", "new-1", "new-2", "old-1", "old-2"]);

        // The first arrival is the one that gets auto-selected
        assert_eq!(drafts[0].temperature, Some(0.3));
        assert!(!drafts[0].has_feedback);
        assert_ne!(drafts[0].temperature, drafts[1].temperature);
    }

    #[test]
    fn arrival_index_clamps_when_the_list_shrank() {
        let mut drafts = Vec::new();
        insert_streamed(&mut drafts, sample_draft("n1"), 5);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, "n1");
    }

    #[test]
    fn deleting_a_draft_removes_only_that_draft() {
        let mut drafts = vec![sample_draft("d1"), sample_draft("d2")];
        remove_draft(&mut drafts, "d1");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, "d2");
    }

    #[test]
    fn delete_status_reports_cascaded_feedback() {
        assert_eq!(delete_status(0), "Draft deleted");
        assert_eq!(delete_status(2), "Draft deleted (2 feedback removed)");
    }

    #[test]
    fn live_jobs_continue_with_progress_text() {
        let mut job = TrainingJob {
            id: "j1".to_string(),
            customer_id: "c1".to_string(),
            status: JobStatus::Running,
            progress: Some("Epoch 2/3".to_string()),
            adapter_path: None,
            error: None,
        };
        assert_eq!(
            poll_outcome(&job),
            PollOutcome::Continue("Epoch 2/3".to_string())
        );

        job.progress = None;
        assert_eq!(
            poll_outcome(&job),
            PollOutcome::Continue("running".to_string())
        );
    }

    #[test]
    fn terminal_jobs_finish_with_their_message() {
        let completed = TrainingJob {
            id: "j1".to_string(),
            customer_id: "c1".to_string(),
            status: JobStatus::Completed,
            progress: None,
            adapter_path: Some("/adapters/c1/v2".to_string()),
            error: None,
        };
        assert_eq!(
            poll_outcome(&completed),
            PollOutcome::Finish("Training completed! Adapter saved.".to_string())
        );

        let failed = TrainingJob {
            status: JobStatus::Failed,
            error: Some("out of memory".to_string()),
            ..completed.clone()
        };
        assert_eq!(
            poll_outcome(&failed),
            PollOutcome::Finish("Training failed: out of memory".to_string())
        );

        let failed_blind = TrainingJob {
            error: None,
            ..failed
        };
        assert_eq!(
            poll_outcome(&failed_blind),
            PollOutcome::Finish("Training failed: Unknown error".to_string())
        );
    }

    #[test]
    fn banner_class_matches_message_substrings() {
        assert_eq!(status_banner_class("Error loading drafts: boom"), "status-error");
        assert_eq!(status_banner_class("Feedback submitted!"), "status-success");
        assert_eq!(status_banner_class("Generated 3 drafts!"), "status-success");
        assert_eq!(status_banner_class("Draft deleted (2 feedback removed)"), "status-success");
        assert_eq!(
            status_banner_class("Training completed! Adapter saved."),
            "status-success"
        );
        assert_eq!(status_banner_class("Generating 3 variation(s)..."), "status-info");
    }

    #[test]
    fn customer_labels_fall_back_in_order() {
        let full = Customer {
            customer_id: "cust-0123456789ab".to_string(),
            email: Some("maria@example.com".to_string()),
            first_name: Some("Maria".to_string()),
            last_name: Some("Silva".to_string()),
            draft_count: 4,
        };
        assert_eq!(customer_display_name(&full), "Maria");
        assert_eq!(
            customer_option_label(&full),
            "Maria Silva (maria@example.com) (4 drafts)"
        );

        let email_only = Customer {
            first_name: None,
            last_name: None,
            ..full.clone()
        };
        assert_eq!(customer_display_name(&email_only), "maria@example.com");
        assert_eq!(
            customer_option_label(&email_only),
            "cust-0123456... (4 drafts)"
        );

        let bare = Customer {
            email: None,
            ..email_only
        };
        assert_eq!(customer_display_name(&bare), "cust-0123456...");
    }

    #[test]
    fn short_label_resolves_known_customers() {
        let customers = vec![Customer {
            customer_id: "c1".to_string(),
            email: Some("lee@example.com".to_string()),
            first_name: None,
            last_name: None,
            draft_count: 1,
        }];
        assert_eq!(customer_short_label(&customers, "c1"), "lee@example.com");
        assert_eq!(customer_short_label(&customers, "c2"), "c2");
    }

    #[test]
    fn user_display_name_prefers_full_name() {
        let mut user = User {
            id: "u1".to_string(),
            email: "sam@blazel.io".to_string(),
            first_name: Some("Sam".to_string()),
            last_name: Some("Reyes".to_string()),
            customer_id: None,
            is_admin: false,
        };
        assert_eq!(user_display_name(&user), "Sam Reyes");

        user.last_name = None;
        assert_eq!(user_display_name(&user), "Sam");

        user.first_name = None;
        assert_eq!(user_display_name(&user), "sam@blazel.io");
    }

    #[test]
    fn health_label_distinguishes_degraded_from_unreachable() {
        let healthy = Ok(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
        });
        assert_eq!(health_label(&healthy), "Connected");

        let degraded = Ok(HealthResponse {
            status: "unhealthy".to_string(),
            database: "down".to_string(),
        });
        assert_eq!(health_label(&degraded), "Error");

        let unreachable = Err("Request failed: timeout".to_string());
        assert_eq!(health_label(&unreachable), "Disconnected");
    }

    #[test]
    fn adapters_sort_newest_version_first() {
        let adapter = |version: u32| Adapter {
            id: format!("a{version}"),
            customer_id: "c1".to_string(),
            version,
            path: format!("/adapters/c1/v{version}"),
            is_active: false,
            epochs: 3,
            training_samples: 5,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        };
        let sorted = sort_adapters(vec![adapter(1), adapter(3), adapter(2)]);
        let versions: Vec<_> = sorted.iter().map(|a| a.version).collect();
        assert_eq!(versions, vec![3, 2, 1]);
    }

    #[test]
    fn feedback_snippets_tolerate_shape_drift() {
        let wrapped = serde_json::json!({
            "feedback": [
                { "edited": "First edited post", "comments": [] },
                { "edited": "Second edited post" },
                { "comments": ["no edited field"] },
            ]
        });
        assert_eq!(
            feedback_snippets(&wrapped, 3),
            vec!["First edited post".to_string(), "Second edited post".to_string()]
        );

        let bare = serde_json::json!([{ "edited": "Top-level row" }]);
        assert_eq!(feedback_snippets(&bare, 3), vec!["Top-level row".to_string()]);

        let unknown = serde_json::json!({ "rows": 3 });
        assert!(feedback_snippets(&unknown, 3).is_empty());
    }

    #[test]
    fn timestamps_render_without_padding() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap();
        assert_eq!(format_draft_date(&at), "Jun 1, 2025");
        assert_eq!(format_draft_datetime(&at), "Jun 1, 2025 09:05");
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ABCDEFGHIJKLMNOP", 4), "ABCD...");
        assert_eq!(truncate_chars("καφέςκαφές", 4), "καφέ...");
    }

    #[test]
    fn tab_labels_match_navigation() {
        assert_eq!(Tab::Drafts.label(), "Drafts");
        assert_eq!(Tab::Training.label(), "Training");
        assert_eq!(Tab::Adapters.label(), "Adapters");
    }
}
