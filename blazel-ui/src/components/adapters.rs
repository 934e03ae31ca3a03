//! Adapters tab: pick which trained LoRA adapter serves inference, or fall
//! back to the base model.

use dioxus::prelude::*;

use shared_types::{Adapter, User};

use crate::api;
use crate::components::customers::CustomerPicker;
use crate::session::effects;
use crate::session::state::format_draft_date;
use crate::session::AppState;

#[component]
pub fn AdaptersTab(user: User) -> Element {
    let app = use_context::<AppState>();
    let mut selected_customer = app.selected_customer;
    let customers = app.customers.read().clone();
    let is_admin = user.is_admin;

    let target = app.target_customer(&user);

    rsx! {
        div { class: if is_admin { "tab-grid two-col" } else { "tab-grid" },
            if is_admin {
                CustomerPicker {
                    customers: customers.clone(),
                    selected: selected_customer.read().clone(),
                    on_select: move |id| selected_customer.set(id),
                }
            }
            if let Some(customer_id) = target {
                AdapterPanel {
                    key: "{customer_id}",
                    customer_id: customer_id.clone(),
                    is_admin,
                }
            } else {
                div { class: "panel placeholder-panel",
                    p { class: "muted",
                        if is_admin {
                            "Select a customer to view adapters"
                        } else {
                            "Loading..."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdapterPanel(customer_id: String, is_admin: bool) -> Element {
    let app = use_context::<AppState>();
    let mut status = app.status;

    let adapters = use_signal(Vec::<Adapter>::new);
    let loading = use_signal(|| false);

    {
        let customer_id = customer_id.clone();
        use_effect(move || {
            spawn(effects::load_adapters(
                customer_id.clone(),
                adapters,
                loading,
                status,
            ));
        });
    }

    let title = if is_admin { "Customer Adapters" } else { "Your Adapters" };
    let adapter_list = adapters.read().clone();
    let active_id = adapter_list
        .iter()
        .find(|a| a.is_active)
        .map(|a| a.id.clone());
    let any_active = active_id.is_some();

    let deactivate = {
        let customer_id = customer_id.clone();
        move |_| {
            let Some(adapter_id) = active_id.clone() else {
                return;
            };
            let customer_id = customer_id.clone();
            spawn(async move {
                let mut status = status;
                match api::deactivate_adapter(&adapter_id).await {
                    Ok(resp) => {
                        status.set(resp.message);
                        effects::load_adapters(customer_id, adapters, loading, status).await;
                    }
                    Err(e) => status.set(format!("Error: {e}")),
                }
            });
        }
    };

    let rows = adapter_list.iter().cloned().map(|adapter| {
        let date = format_draft_date(&adapter.created_at);
        let adapter_id = adapter.id.clone();
        let customer_id = customer_id.clone();
        let is_active = adapter.is_active;
        rsx! {
            div {
                key: "{adapter.id}",
                class: if is_active { "adapter-option selected" } else { "adapter-option" },
                onclick: move |_| {
                    if is_active {
                        return;
                    }
                    let adapter_id = adapter_id.clone();
                    let customer_id = customer_id.clone();
                    spawn(async move {
                        let mut status = status;
                        match api::activate_adapter(&adapter_id).await {
                            Ok(resp) => {
                                status.set(resp.message);
                                effects::load_adapters(customer_id, adapters, loading, status)
                                    .await;
                            }
                            Err(e) => status.set(format!("Error: {e}")),
                        }
                    });
                },
                span { class: if is_active { "radio-dot checked" } else { "radio-dot" } }
                div { class: "adapter-option-body",
                    div { class: "adapter-option-title", "Version {adapter.version}" }
                    div { class: "adapter-option-meta",
                        "{adapter.training_samples} samples, {adapter.epochs} epochs • {date}"
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "panel",
            h2 { class: "panel-title", "{title}" }
            p { class: "panel-sub",
                "Select which adapter to use for inference, or choose \"None\" to use the base model only."
            }
            if loading() {
                p { class: "muted", "Loading adapters..." }
            } else if adapter_list.is_empty() {
                div { class: "adapter-empty",
                    p { "No adapters trained yet" }
                    p { class: "muted", "Go to the Training tab to train a LoRA adapter from your feedback" }
                }
            } else {
                div { class: "adapter-options",
                    {rows}
                    div {
                        class: if any_active { "adapter-option" } else { "adapter-option selected" },
                        onclick: deactivate,
                        span { class: if any_active { "radio-dot" } else { "radio-dot checked" } }
                        div { class: "adapter-option-body",
                            div { class: "adapter-option-title", "None (Base Model)" }
                            div { class: "adapter-option-meta",
                                "Use the default model without any LoRA adapter"
                            }
                        }
                    }
                }
            }
        }
    }
}
