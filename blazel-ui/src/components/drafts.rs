//! Drafts tab: the draft list sidebar, the generation form, and the
//! feedback editor for the selected draft.

use dioxus::prelude::*;

use shared_types::{FeedbackRating, FeedbackRequest, GenerateRequest, StreamedDraft, User};

use crate::api;
use crate::components::editor::EditorPane;
use crate::diff::DiffView;
use crate::session::effects;
use crate::session::state::{self, InlineComment};
use crate::session::AppState;
use crate::stream;

const DELETE_CONFIRM: &str =
    "Are you sure you want to delete this draft? This will also delete any associated feedback.";

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn DraftsTab(user: User) -> Element {
    let app = use_context::<AppState>();

    // Streams finish outside the runtime, so the reader parks the draft id
    // in pending_select and we open it from here.
    use_effect(move || {
        let pending = app.pending_select.read().clone();
        if let Some(draft_id) = pending {
            let mut pending_select = app.pending_select;
            pending_select.set(None);
            spawn(effects::open_draft(draft_id, app));
        }
    });

    let showing_form = *app.show_new_draft.read();
    let has_selection = app.selected_draft.read().is_some();

    rsx! {
        div { class: "drafts-layout",
            DraftSidebar { user: user.clone() }
            main { class: "draft-panel",
                if showing_form {
                    NewDraftForm { user: user.clone() }
                } else if has_selection {
                    DraftDetailPanel { user }
                } else {
                    EmptyState {}
                }
            }
        }
    }
}

#[component]
fn DraftSidebar(user: User) -> Element {
    let app = use_context::<AppState>();
    let mut selected_customer = app.selected_customer;
    let mut show_new_draft = app.show_new_draft;
    let mut selected_draft = app.selected_draft;
    let is_admin = user.is_admin;

    let customers = app.customers.read().clone();
    let selected = selected_customer.read().clone();
    let draft_list = app.drafts.read().clone();
    let loading = *app.drafts_loading.read();
    let selected_id = app.selected_draft.read().as_ref().map(|d| d.id.clone());

    let heading = if is_admin { "Customer Drafts" } else { "Your Drafts" };
    let no_drafts = draft_list.is_empty();

    let cards = draft_list.into_iter().map(|draft| {
        let card_class = if selected_id.as_deref() == Some(draft.id.as_str()) {
            "draft-card selected"
        } else {
            "draft-card"
        };
        let preview = state::truncate_chars(&draft.text, 100);
        let date = state::format_draft_date(&draft.created_at);
        let customer_label =
            is_admin.then(|| state::customer_short_label(&customers, &draft.customer_id));
        let temp_chip = draft.temperature.map(|t| format!("T:{t:.1}"));
        let open_id = draft.id.clone();
        let delete_id = draft.id.clone();
        rsx! {
            div {
                key: "{draft.id}",
                class: card_class,
                onclick: move |_| {
                    spawn(effects::open_draft(open_id.clone(), app));
                },
                div { class: "draft-card-top",
                    span { class: "draft-topic", "{draft.topic}" }
                    button {
                        class: "draft-delete",
                        title: "Delete draft",
                        onclick: move |e| {
                            e.stop_propagation();
                            if !confirm(DELETE_CONFIRM) {
                                return;
                            }
                            let draft_id = delete_id.clone();
                            spawn(async move {
                                let mut app = app;
                                match api::delete_draft(&draft_id).await {
                                    Ok(resp) => {
                                        app.drafts.with_mut(|list| state::remove_draft(list, &draft_id));
                                        let was_selected = app
                                            .selected_draft
                                            .peek()
                                            .as_ref()
                                            .is_some_and(|d| d.id == draft_id);
                                        if was_selected {
                                            app.close_draft();
                                        }
                                        app.status.set(state::delete_status(resp.feedback_deleted));
                                    }
                                    Err(e) => app.status.set(format!("Error deleting draft: {e}")),
                                }
                            });
                        },
                        "×"
                    }
                }
                if let Some(label) = customer_label {
                    div { class: "draft-customer", "Customer: {label}" }
                }
                p { class: "draft-preview", "{preview}" }
                div { class: "draft-meta",
                    span { class: "draft-date", "{date}" }
                    if let Some(chip) = temp_chip {
                        span { class: "temp-chip", "{chip}" }
                    }
                    if draft.has_feedback {
                        span { class: "reviewed-badge", "Reviewed" }
                    }
                }
            }
        }
    });

    rsx! {
        aside { class: "drafts-sidebar",
            if is_admin {
                div { class: "sidebar-filter",
                    label { class: "form-label", "Customer" }
                    select {
                        class: "form-input",
                        value: "{selected}",
                        onchange: move |e| selected_customer.set(e.value()),
                        for customer in customers.clone() {
                            option {
                                value: "{customer.customer_id}",
                                selected: customer.customer_id == selected,
                                {state::customer_option_label(&customer)}
                            }
                        }
                    }
                }
            }
            div { class: "sidebar-header",
                h2 { "{heading}" }
                button {
                    class: "new-draft-button",
                    onclick: move |_| {
                        selected_draft.set(None);
                        show_new_draft.set(true);
                    },
                    "+ New"
                }
            }
            if loading {
                p { class: "muted", "Loading drafts..." }
            } else if no_drafts {
                p { class: "muted", "No drafts yet. Create your first one!" }
            } else {
                div { class: "draft-list", {cards} }
            }
        }
    }
}

#[component]
fn NewDraftForm(user: User) -> Element {
    let app = use_context::<AppState>();
    let mut selected_customer = app.selected_customer;
    let mut show_new_draft = app.show_new_draft;
    let mut topic = app.topic;
    let mut context_input = app.context_input;
    let mut variations_input = app.variations_input;
    let mut status = app.status;
    let mut busy = app.busy;
    let mut stream_handle = app.stream;
    let mut stream_arrived = app.stream_arrived;
    let mut first_streamed = app.first_streamed;
    let is_admin = user.is_admin;

    let customers = app.customers.read().clone();
    let selected = selected_customer.read().clone();
    let topic_value = topic.read().clone();
    let context_value = context_input.read().clone();
    let variations_value = variations_input.read().clone();
    let is_busy = *busy.read();

    let variation_count = state::clamp_variations(&variations_value);
    let suffix = if variation_count > 1 { "s" } else { "" };
    let generate_label = if is_busy {
        format!("Generating {variation_count} variation{suffix}...")
    } else {
        format!("Generate {variation_count} Draft{suffix}")
    };
    let can_generate = !is_busy && !topic_value.trim().is_empty();

    let handle_generate = {
        let user = user.clone();
        move |_| {
            let topic_text = topic.peek().trim().to_string();
            if topic_text.is_empty() {
                status.set("Please enter a topic".to_string());
                return;
            }
            let variations = state::clamp_variations(&variations_input.peek());
            let context_text = context_input.peek().trim().to_string();
            let context_opt = (!context_text.is_empty()).then_some(context_text);
            let suffix = if variations > 1 { "s" } else { "" };

            if user.is_admin {
                let customer_id = selected_customer.peek().clone();
                if customer_id.is_empty() {
                    status.set("Please select a customer first".to_string());
                    return;
                }
                status.set(format!("Generating {variations} variation{suffix}..."));
                busy.set(true);
                stream_arrived.set(0);
                first_streamed.set(None);

                let draft_topic = topic_text.clone();
                let draft_customer = customer_id.clone();
                let on_draft = move |streamed: StreamedDraft| {
                    let mut drafts = app.drafts;
                    let mut stream_arrived = stream_arrived;
                    let mut first_streamed = first_streamed;
                    let draft =
                        state::draft_from_stream(&streamed, &draft_topic, &draft_customer);
                    let draft_id = draft.id.clone();
                    let arrived = *stream_arrived.peek();
                    drafts.with_mut(|list| state::insert_streamed(list, draft, arrived));
                    if arrived == 0 {
                        first_streamed.set(Some(draft_id));
                    }
                    stream_arrived.set(arrived + 1);
                };
                let on_error = move |message: String| {
                    let mut status = status;
                    let mut busy = busy;
                    let mut stream_handle = stream_handle;
                    status.set(format!("Error: {message}"));
                    busy.set(false);
                    stream_handle.set(None);
                };
                let on_done = move || {
                    let mut app = app;
                    let arrived = *stream_arrived.peek();
                    let suffix = if arrived == 1 { "" } else { "s" };
                    app.status.set(format!("Generated {arrived} draft{suffix}!"));
                    app.reset_new_draft_form();
                    app.busy.set(false);
                    app.stream.set(None);
                    if let Some(draft_id) = first_streamed.peek().clone() {
                        app.pending_select.set(Some(draft_id));
                    }
                };

                match stream::start_generate_stream(
                    &topic_text,
                    context_opt.as_deref(),
                    variations,
                    Some(&customer_id),
                    on_draft,
                    on_error,
                    on_done,
                ) {
                    Ok(handle) => stream_handle.set(Some(handle)),
                    Err(e) => {
                        status.set(format!("Error: {e}"));
                        busy.set(false);
                    }
                }
            } else {
                status.set(format!("Generating {variations} variation{suffix}..."));
                busy.set(true);
                let request = GenerateRequest {
                    topic: topic_text,
                    context: context_opt,
                    variations,
                    customer_id: None,
                };
                spawn(async move {
                    let mut app = app;
                    match api::generate_post(&request).await {
                        Ok(resp) => {
                            let n = resp.drafts.len();
                            let suffix = if n == 1 { "" } else { "s" };
                            app.status.set(format!("Generated {n} draft{suffix}!"));
                            app.reset_new_draft_form();
                            effects::load_drafts(None, app.drafts, app.drafts_loading, app.status)
                                .await;
                            if let Some(first) = resp.drafts.first() {
                                effects::open_draft(first.draft_id.clone(), app).await;
                            }
                        }
                        Err(e) => app.status.set(format!("Error: {e}")),
                    }
                    app.busy.set(false);
                });
            }
        }
    };

    rsx! {
        section { class: "panel new-draft",
            div { class: "panel-head",
                h2 { class: "panel-title", "New Draft" }
                button {
                    class: "link-button",
                    onclick: move |_| show_new_draft.set(false),
                    "Cancel"
                }
            }
            if is_admin {
                div { class: "form-field",
                    label { class: "form-label", "Create for Customer *" }
                    select {
                        class: "form-input",
                        value: "{selected}",
                        onchange: move |e| selected_customer.set(e.value()),
                        for customer in customers {
                            option {
                                value: "{customer.customer_id}",
                                selected: customer.customer_id == selected,
                                {state::customer_option_label(&customer)}
                            }
                        }
                    }
                    p { class: "form-hint", "Select which customer this draft is for" }
                }
            }
            div { class: "form-field",
                label { class: "form-label", "Topic *" }
                input {
                    class: "form-input",
                    placeholder: "e.g., Leadership lessons from my startup journey",
                    value: "{topic_value}",
                    oninput: move |e| topic.set(e.value()),
                }
            }
            div { class: "form-field",
                label { class: "form-label", "Context (optional)" }
                textarea {
                    class: "form-input",
                    rows: "4",
                    placeholder: "Additional context or key points to include...",
                    value: "{context_value}",
                    oninput: move |e| context_input.set(e.value()),
                }
            }
            div { class: "form-field",
                label { class: "form-label", "Variations" }
                input {
                    class: "form-input variations-input",
                    r#type: "number",
                    min: "1",
                    max: "10",
                    value: "{variations_value}",
                    oninput: move |e| variations_input.set(e.value()),
                    onblur: move |_| {
                        let normalized = state::clamp_variations(&variations_input.peek()).to_string();
                        variations_input.set(normalized);
                    },
                }
                p { class: "form-hint",
                    "1-10 variations with different temperatures (0.3 conservative → 1.0 creative)"
                }
            }
            button {
                class: "primary-button generate-button",
                disabled: !can_generate,
                onclick: handle_generate,
                "{generate_label}"
            }
        }
    }
}

#[component]
fn DraftDetailPanel(user: User) -> Element {
    let mut app = use_context::<AppState>();
    let mut edited_text = app.edited_text;
    let mut general_comments = app.general_comments;
    let mut new_comment = app.new_comment;
    let mut inline_comments = app.inline_comments;
    let mut rating = app.rating;
    let mut show_diff = app.show_diff;
    let mut status = app.status;

    let Some(detail) = app.selected_draft.read().clone() else {
        return rsx! {};
    };

    let epoch = *app.editor_epoch.read();
    let seed = app.editor_seed.read().clone();
    let edited = edited_text.read().clone();
    let comments = general_comments.read().clone();
    let inline = inline_comments.read().clone();
    let rating_value = rating.read().clone();
    let diff_open = *show_diff.read();
    let is_busy = *app.busy.read();
    let new_comment_value = new_comment.read().clone();

    let text_changed = edited != detail.text;
    let created = state::format_draft_datetime(&detail.created_at);
    let submit_label = if is_busy {
        "Submitting..."
    } else if detail.feedback.is_some() {
        "Update Feedback"
    } else {
        "Submit Feedback"
    };
    let like_active = rating_value == Some(FeedbackRating::Like);
    let dislike_active = rating_value == Some(FeedbackRating::Dislike);

    let mut add_comment = move || {
        let text = new_comment.peek().trim().to_string();
        if text.is_empty() {
            return;
        }
        general_comments.with_mut(|list| list.push(text));
        new_comment.set(String::new());
    };

    let handle_submit = {
        let user = user.clone();
        let detail = detail.clone();
        move |_| {
            let edited = edited_text.peek().clone();
            let comments = general_comments.peek().clone();
            let inline = inline_comments.peek().clone();
            let rating_value = rating.peek().clone();
            if !state::feedback_submit_allowed(
                &detail.text,
                &edited,
                &comments,
                &inline,
                rating_value.as_ref(),
            ) {
                status.set(
                    "Please provide feedback: edit text, add comments, or rate the draft."
                        .to_string(),
                );
                return;
            }
            let request = FeedbackRequest {
                draft_id: detail.id.clone(),
                original: detail.text.clone(),
                edited,
                comments: state::flatten_comments(&comments, &inline),
                rating: rating_value,
            };
            let filter = if user.is_admin {
                let selected = app.selected_customer.peek().clone();
                (!selected.is_empty()).then_some(selected)
            } else {
                None
            };
            spawn(async move {
                let mut app = app;
                app.busy.set(true);
                app.status.set("Submitting feedback...".to_string());
                match api::submit_feedback(&request).await {
                    Ok(_) => {
                        app.status.set("Feedback submitted!".to_string());
                        app.show_diff.set(true);
                        effects::load_drafts(filter, app.drafts, app.drafts_loading, app.status)
                            .await;
                    }
                    Err(e) => app.status.set(format!("Error submitting feedback: {e}")),
                }
                app.busy.set(false);
            });
        }
    };

    let comment_chips = comments.iter().cloned().enumerate().map(|(index, comment)| {
        rsx! {
            span { key: "{index}", class: "comment-chip",
                "{comment}"
                button {
                    class: "chip-remove",
                    onclick: move |_| {
                        general_comments.with_mut(|list| {
                            if index < list.len() {
                                list.remove(index);
                            }
                        });
                    },
                    "×"
                }
            }
        }
    });

    rsx! {
        section { class: "panel draft-detail",
            div { class: "panel-head",
                div {
                    h2 { class: "panel-title", "{detail.topic}" }
                    p { class: "draft-timestamp", "{created}" }
                }
                button {
                    class: "link-button",
                    onclick: move |_| app.close_draft(),
                    "Close"
                }
            }

            div { class: "form-field",
                label { class: "form-label", "Edit the post" }
                EditorPane {
                    key: "{epoch}",
                    content: seed,
                    current_text: edited.clone(),
                    inline_comments: inline.clone(),
                    on_change: move |text| edited_text.set(text),
                    on_add_inline_comment: move |(text, comment): (String, String)| {
                        inline_comments.with_mut(|list| list.push(InlineComment::new(text, comment)));
                    },
                    on_remove_inline_comment: move |id: String| {
                        inline_comments.with_mut(|list| list.retain(|c| c.id != id));
                    },
                }
            }

            if text_changed {
                button {
                    class: "link-button diff-toggle",
                    onclick: move |_| {
                        let open = *show_diff.peek();
                        show_diff.set(!open);
                    },
                    if diff_open {
                        "Hide Changes"
                    } else {
                        "Show Changes"
                    }
                }
            }
            if diff_open && text_changed {
                div { class: "diff-box",
                    DiffView { original: detail.text.clone(), edited: edited.clone() }
                }
            }

            div { class: "form-field",
                label { class: "form-label", "Feedback Comments" }
                div { class: "comment-input-row",
                    input {
                        class: "form-input",
                        placeholder: "e.g., Make it more conversational",
                        value: "{new_comment_value}",
                        oninput: move |e| new_comment.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                add_comment();
                            }
                        },
                    }
                    button {
                        class: "add-comment-button",
                        onclick: move |_| add_comment(),
                        "Add"
                    }
                }
                if !comments.is_empty() {
                    div { class: "comment-chips", {comment_chips} }
                }
            }

            div { class: "form-field",
                label { class: "form-label", "Rate this draft" }
                div { class: "rating-row",
                    button {
                        class: if like_active { "rating-button like active" } else { "rating-button like" },
                        onclick: move |_| {
                            let next = match rating.peek().clone() {
                                Some(FeedbackRating::Like) => None,
                                _ => Some(FeedbackRating::Like),
                            };
                            rating.set(next);
                        },
                        "👍 Like"
                    }
                    button {
                        class: if dislike_active { "rating-button dislike active" } else { "rating-button dislike" },
                        onclick: move |_| {
                            let next = match rating.peek().clone() {
                                Some(FeedbackRating::Dislike) => None,
                                _ => Some(FeedbackRating::Dislike),
                            };
                            rating.set(next);
                        },
                        "👎 Dislike"
                    }
                }
            }

            button {
                class: "primary-button submit-feedback",
                disabled: is_busy,
                onclick: handle_submit,
                "{submit_label}"
            }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    let app = use_context::<AppState>();
    let mut show_new_draft = app.show_new_draft;

    rsx! {
        div { class: "empty-state",
            span { class: "empty-icon", "📄" }
            h3 { "Select a draft or create a new one" }
            p { class: "muted", "Click on a draft from the list or create a new one to get started" }
            button {
                class: "primary-button",
                onclick: move |_| show_new_draft.set(true),
                "Create New Draft"
            }
        }
    }
}
