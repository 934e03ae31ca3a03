//! Signed-in application shell: the authentication gate, header, status
//! banners, and tab routing.
//!
//! All cross-tab state lives here so switching tabs never loses a draft
//! selection, a generation stream, or a running training job.

pub mod effects;
pub mod state;

use dioxus::prelude::*;

use shared_types::{Customer, Draft, DraftDetail, FeedbackRating, User};

use self::state::{status_banner_class, user_display_name, InlineComment, Tab};
use crate::auth::{self, AuthState};
use crate::components::{AdaptersTab, DraftsTab, Landing, TrainingTab};
use crate::stream::StreamHandle;

/// Every signal the signed-in views share, provided as a context so tab
/// components can reach the pieces they need without prop threading.
#[derive(Clone, Copy)]
pub struct AppState {
    // Customers (admin)
    pub customers: Signal<Vec<Customer>>,
    pub selected_customer: Signal<String>,

    // Draft list
    pub drafts: Signal<Vec<Draft>>,
    pub drafts_loading: Signal<bool>,

    // Selected draft and its edit form
    pub selected_draft: Signal<Option<DraftDetail>>,
    pub editor_seed: Signal<String>,
    pub editor_epoch: Signal<u64>,
    pub edited_text: Signal<String>,
    pub general_comments: Signal<Vec<String>>,
    pub new_comment: Signal<String>,
    pub inline_comments: Signal<Vec<InlineComment>>,
    pub rating: Signal<Option<FeedbackRating>>,
    pub show_diff: Signal<bool>,

    // New draft form
    pub show_new_draft: Signal<bool>,
    pub topic: Signal<String>,
    pub context_input: Signal<String>,
    pub variations_input: Signal<String>,

    // Generation stream bookkeeping
    pub stream: Signal<Option<StreamHandle>>,
    pub stream_arrived: Signal<usize>,
    pub first_streamed: Signal<Option<String>>,
    pub pending_select: Signal<Option<String>>,

    // Shared UI state
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub health: Signal<String>,
    pub active_tab: Signal<Tab>,

    // Training job tracking, lifted here so it survives tab switches
    pub training_job: Signal<Option<String>>,
    pub training_progress: Signal<String>,
    pub training_customer: Signal<Option<String>>,
}

impl AppState {
    fn new() -> Self {
        Self {
            customers: Signal::new(Vec::new()),
            selected_customer: Signal::new(String::new()),
            drafts: Signal::new(Vec::new()),
            drafts_loading: Signal::new(false),
            selected_draft: Signal::new(None),
            editor_seed: Signal::new(String::new()),
            editor_epoch: Signal::new(0),
            edited_text: Signal::new(String::new()),
            general_comments: Signal::new(Vec::new()),
            new_comment: Signal::new(String::new()),
            inline_comments: Signal::new(Vec::new()),
            rating: Signal::new(None),
            show_diff: Signal::new(false),
            show_new_draft: Signal::new(false),
            topic: Signal::new(String::new()),
            context_input: Signal::new(String::new()),
            variations_input: Signal::new("1".to_string()),
            stream: Signal::new(None),
            stream_arrived: Signal::new(0),
            first_streamed: Signal::new(None),
            pending_select: Signal::new(None),
            busy: Signal::new(false),
            status: Signal::new(String::new()),
            health: Signal::new("checking...".to_string()),
            active_tab: Signal::new(Tab::Drafts),
            training_job: Signal::new(None),
            training_progress: Signal::new(String::new()),
            training_customer: Signal::new(None),
        }
    }

    /// Close the selected draft and drop its edit state.
    pub fn close_draft(&mut self) {
        self.selected_draft.set(None);
        self.edited_text.set(String::new());
        self.editor_seed.set(String::new());
        self.general_comments.set(Vec::new());
        self.new_comment.set(String::new());
        self.inline_comments.set(Vec::new());
        self.rating.set(None);
        self.show_diff.set(false);
        self.status.set(String::new());
    }

    /// Clear the generation form after a successful run.
    pub fn reset_new_draft_form(&mut self) {
        self.topic.set(String::new());
        self.context_input.set(String::new());
        self.variations_input.set("1".to_string());
        self.show_new_draft.set(false);
    }

    /// The customer whose data the signed-in user is working with:
    /// admins act on the selected customer, everyone else on their own.
    pub fn target_customer(&self, user: &User) -> Option<String> {
        if user.is_admin {
            let selected = self.selected_customer.read().clone();
            (!selected.is_empty()).then_some(selected)
        } else {
            user.customer_id.clone()
        }
    }
}

/// Root of the UI: resolves the session, then shows the landing page or
/// the workspace.
#[component]
pub fn Session() -> Element {
    let auth = use_signal(AuthState::default);
    let mut login_error = use_signal(|| Option::<String>::None);
    use_context_provider(AppState::new);

    use_effect(move || {
        if let Some(message) = auth::consume_auth_redirect() {
            login_error.set(Some(message));
        }
        spawn(auth::probe_session(auth));
    });

    match auth() {
        AuthState::Unknown => rsx! {
            main { class: "auth-loading", "Loading..." }
        },
        AuthState::Unauthenticated => rsx! {
            Landing { error: login_error() }
        },
        AuthState::Authenticated(user) => rsx! {
            Workspace { user }
        },
    }
}

#[component]
fn Workspace(user: User) -> Element {
    let app = use_context::<AppState>();
    let is_admin = user.is_admin;

    use_effect(move || {
        spawn(effects::probe_health(app.health));
        if is_admin {
            spawn(effects::load_customers(
                app.customers,
                app.selected_customer,
                app.status,
            ));
        } else {
            spawn(effects::load_drafts(
                None,
                app.drafts,
                app.drafts_loading,
                app.status,
            ));
        }
    });

    // Admin draft lists follow the customer selection.
    use_effect(move || {
        let selected = app.selected_customer.read().clone();
        if is_admin && !selected.is_empty() {
            spawn(effects::load_drafts(
                Some(selected),
                app.drafts,
                app.drafts_loading,
                app.status,
            ));
        }
    });

    // One poll loop per started job; a loop exits on its own once the job
    // it was started for is no longer the tracked one.
    use_effect(move || {
        if let Some(job_id) = app.training_job.read().clone() {
            spawn(effects::poll_training_job(
                job_id,
                app.training_job,
                app.training_customer,
                app.training_progress,
                app.status,
            ));
        }
    });

    // Abort any in-flight generation stream when the workspace unmounts.
    use_drop(move || {
        if let Some(handle) = app.stream.peek().clone() {
            handle.abort();
        }
    });

    let status_text = app.status.read().clone();
    let banner_class = format!("status-banner {}", status_banner_class(&status_text));
    let training_active = app.training_job.read().is_some();
    let current_tab = *app.active_tab.read();

    rsx! {
        main { class: "app",
            Header { user: user.clone() }

            if training_active {
                TrainingBanner {}
            }

            if !status_text.is_empty() {
                div { class: banner_class, "{status_text}" }
            }

            TabBar {}

            match current_tab {
                Tab::Drafts => rsx! {
                    DraftsTab { user: user.clone() }
                },
                Tab::Training => rsx! {
                    TrainingTab { user: user.clone() }
                },
                Tab::Adapters => rsx! {
                    AdaptersTab { user: user.clone() }
                },
            }
        }
    }
}

#[component]
fn Header(user: User) -> Element {
    let app = use_context::<AppState>();

    let name = user_display_name(&user);
    let identity = if name == user.email {
        name
    } else {
        format!("{name} ({})", user.email)
    };

    let health = app.health.read().clone();
    let health_class = if health == "Connected" {
        "health-line health-ok"
    } else {
        "health-line health-bad"
    };

    rsx! {
        header { class: "app-header",
            div {
                h1 { class: "app-title", "Blazel" }
                p { class: "app-tagline", "LinkedIn Post Generator with Feedback Loop" }
            }
            div { class: "header-meta",
                div { class: "user-line",
                    span { "{identity}" }
                    if user.is_admin {
                        span { class: "admin-badge", "Admin" }
                    }
                    button {
                        class: "link-button",
                        onclick: move |_| auth::logout(),
                        "Logout"
                    }
                }
                div { class: health_class, "API: {health}" }
            }
        }
    }
}

/// Strip shown while a training job is live, visible on every tab.
#[component]
fn TrainingBanner() -> Element {
    let app = use_context::<AppState>();
    let mut active_tab = app.active_tab;

    let progress = app.training_progress.read().clone();
    let detail = if progress.is_empty() {
        "Starting...".to_string()
    } else {
        progress
    };

    rsx! {
        div { class: "training-banner",
            div { class: "training-banner-info",
                span { class: "spinner" }
                div {
                    div { class: "training-banner-title", "Training in Progress" }
                    div { class: "training-banner-detail", "{detail}" }
                }
            }
            button {
                class: "link-button",
                onclick: move |_| active_tab.set(Tab::Training),
                "View Details"
            }
        }
    }
}

#[component]
fn TabBar() -> Element {
    let app = use_context::<AppState>();
    let mut active_tab = app.active_tab;
    let current = *active_tab.read();

    rsx! {
        nav { class: "tab-bar",
            for tab in [Tab::Drafts, Tab::Training, Tab::Adapters] {
                button {
                    class: if tab == current { "tab-button active" } else { "tab-button" },
                    onclick: move |_| active_tab.set(tab),
                    {tab.label()}
                }
            }
        }
    }
}
