//! Training tab: sample counts, LoRA training runs, and the per-customer
//! adapter history.

use dioxus::prelude::*;

use shared_types::{Adapter, TrainAdapterRequest, TrainingData, User, MIN_TRAINING_SAMPLES};

use crate::api;
use crate::components::customers::CustomerPicker;
use crate::session::effects;
use crate::session::state::{clamp_epochs, customer_display_name, format_draft_date};
use crate::session::AppState;

#[component]
pub fn TrainingTab(user: User) -> Element {
    let app = use_context::<AppState>();
    let mut selected_customer = app.selected_customer;
    let customers = app.customers.read().clone();
    let is_admin = user.is_admin;

    let target = app.target_customer(&user);
    let customer_name = if is_admin {
        let selected = selected_customer.read().clone();
        customers
            .iter()
            .find(|c| c.customer_id == selected)
            .map(customer_display_name)
    } else {
        user.first_name.clone()
    };

    rsx! {
        div { class: if is_admin { "tab-grid two-col" } else { "tab-grid" },
            if is_admin {
                CustomerPicker {
                    customers: customers.clone(),
                    selected: selected_customer.read().clone(),
                    show_draft_count: true,
                    on_select: move |id| selected_customer.set(id),
                }
            }
            if let Some(customer_id) = target {
                TrainingPanel {
                    key: "{customer_id}",
                    customer_id: customer_id.clone(),
                    customer_name,
                }
            } else {
                div { class: "panel placeholder-panel",
                    p { class: "muted",
                        if is_admin {
                            "Select a customer to view training options"
                        } else {
                            "Loading..."
                        }
                    }
                }
            }
        }
    }
}

/// Keyed by customer upstream, so a selection change remounts the panel
/// and reloads its data.
#[component]
fn TrainingPanel(customer_id: String, customer_name: Option<String>) -> Element {
    let app = use_context::<AppState>();
    let mut status = app.status;
    let mut training_job = app.training_job;
    let mut training_progress = app.training_progress;
    let mut training_customer = app.training_customer;

    let samples = use_signal(|| Option::<TrainingData>::None);
    let adapters = use_signal(Vec::<Adapter>::new);
    let active_adapter = use_signal(|| Option::<Adapter>::None);
    let recent_feedback = use_signal(Vec::<String>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut starting = use_signal(|| false);
    let mut epochs = use_signal(|| 3u32);
    let mut show_advanced = use_signal(|| false);

    {
        let customer_id = customer_id.clone();
        use_effect(move || {
            spawn(effects::load_training_panel(
                customer_id.clone(),
                samples,
                adapters,
                active_adapter,
                recent_feedback,
                error,
            ));
        });
    }

    // Reload once a tracked job finishes, so the new adapter shows up.
    {
        let customer_id = customer_id.clone();
        let mut last_job = use_signal(|| Option::<String>::None);
        use_effect(move || {
            let current = training_job.read().clone();
            let previous = last_job.peek().clone();
            if previous.is_some() && current.is_none() {
                spawn(effects::load_training_panel(
                    customer_id.clone(),
                    samples,
                    adapters,
                    active_adapter,
                    recent_feedback,
                    error,
                ));
            }
            last_job.set(current);
        });
    }

    let sample_count = samples.read().as_ref().map(|d| d.count);
    let count_label = sample_count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "...".to_string());
    let trainable = sample_count.is_some_and(|c| c >= MIN_TRAINING_SAMPLES);
    let threshold = MIN_TRAINING_SAMPLES;
    let job_running = training_job.read().is_some();

    let heading = match &customer_name {
        Some(name) => format!("Training for {name}"),
        None => "Training".to_string(),
    };

    let progress = training_progress.read().clone();
    let progress_label = if progress.is_empty() {
        "Starting...".to_string()
    } else {
        progress
    };

    let active_label = match active_adapter.read().as_ref() {
        Some(adapter) => format!("Version {}", adapter.version),
        None => "None (base model)".to_string(),
    };

    let train_label = if starting() {
        "Starting..."
    } else if job_running {
        "Training..."
    } else {
        "Train LoRA Adapter"
    };

    let handle_train = {
        let customer_id = customer_id.clone();
        move |_| {
            if !trainable || starting() || job_running {
                return;
            }
            let customer_id = customer_id.clone();
            spawn(async move {
                starting.set(true);
                error.set(None);
                let request = TrainAdapterRequest {
                    customer_id: customer_id.clone(),
                    epochs: *epochs.peek(),
                };
                match api::train_adapter(&request).await {
                    Ok(resp) => {
                        training_job.set(Some(resp.job_id));
                        training_progress.set("Training started...".to_string());
                        training_customer.set(Some(customer_id));
                        status.set(format!(
                            "Training started with {} samples",
                            resp.feedback_count
                        ));
                    }
                    Err(e) => {
                        error.set(Some(e.clone()));
                        status.set(e);
                    }
                }
                starting.set(false);
            });
        }
    };

    let adapter_list = adapters.read().clone();
    let has_adapters = !adapter_list.is_empty();
    let adapter_rows = adapter_list.into_iter().map(|adapter| {
        let date = format_draft_date(&adapter.created_at);
        let adapter_id = adapter.id.clone();
        let customer_id = customer_id.clone();
        rsx! {
            div {
                key: "{adapter.id}",
                class: if adapter.is_active { "adapter-row active" } else { "adapter-row" },
                div { class: "adapter-row-main",
                    div { class: "adapter-version",
                        "Version {adapter.version}"
                        if adapter.is_active {
                            span { class: "active-badge", "Active" }
                        }
                    }
                    div { class: "adapter-meta", "{adapter.training_samples} samples, {adapter.epochs} epochs" }
                    div { class: "adapter-date", "{date}" }
                }
                if !adapter.is_active {
                    button {
                        class: "activate-button",
                        onclick: move |_| {
                            let adapter_id = adapter_id.clone();
                            let customer_id = customer_id.clone();
                            spawn(async move {
                                let mut status = status;
                                let mut error = error;
                                match api::activate_adapter(&adapter_id).await {
                                    Ok(resp) => {
                                        status.set(resp.message);
                                        effects::load_training_panel(
                                            customer_id,
                                            samples,
                                            adapters,
                                            active_adapter,
                                            recent_feedback,
                                            error,
                                        )
                                        .await;
                                    }
                                    Err(e) => error.set(Some(e)),
                                }
                            });
                        },
                        "Activate"
                    }
                }
            }
        }
    });

    let snippets = recent_feedback.read().clone();

    rsx! {
        div { class: "panel",
            h3 { class: "panel-title", "{heading}" }

            if let Some(message) = error() {
                div { class: "train-error",
                    span { "{message}" }
                    button { class: "dismiss-button", onclick: move |_| error.set(None), "x" }
                }
            }

            div { class: "training-stats",
                div { class: "stat-line",
                    span { class: "stat-label", "Available feedback:" }
                    span { class: "stat-value", "{count_label} samples" }
                }
                if sample_count.is_some() && !trainable {
                    p { class: "threshold-notice", "Need at least {threshold} feedback samples to train" }
                }
                div { class: "stat-line",
                    span { class: "stat-label", "Active adapter:" }
                    span { class: "stat-value", "{active_label}" }
                }
            }

            if !snippets.is_empty() {
                div { class: "recent-feedback",
                    h4 { "Recent Feedback" }
                    for snippet in snippets {
                        p { class: "feedback-snippet", "\"{snippet}\"" }
                    }
                }
            }

            if trainable {
                div { class: "advanced-options",
                    button {
                        class: "link-button",
                        onclick: move |_| show_advanced.set(!show_advanced()),
                        if show_advanced() {
                            "Hide training options"
                        } else {
                            "Show training options"
                        }
                    }
                    if show_advanced() {
                        div { class: "advanced-fields",
                            label { class: "form-label", "Epochs" }
                            input {
                                class: "form-input epochs-input",
                                r#type: "number",
                                min: "1",
                                max: "10",
                                value: "{epochs}",
                                oninput: move |e| epochs.set(clamp_epochs(&e.value())),
                            }
                        }
                    }
                }
            }

            if job_running {
                div { class: "training-progress",
                    span { class: "spinner" }
                    "{progress_label}"
                }
            }

            button {
                class: "train-button",
                disabled: starting() || job_running || !trainable,
                onclick: handle_train,
                "{train_label}"
            }

            div { class: "adapter-history",
                h4 { "Trained Adapters" }
                if has_adapters {
                    div { class: "adapter-list", {adapter_rows} }
                } else {
                    p { class: "muted", "No adapters trained yet" }
                }
            }
        }
    }
}
