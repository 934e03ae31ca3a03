//! Admin customer picker cards shared by the training and adapters tabs

use dioxus::prelude::*;

use shared_types::Customer;

#[component]
pub fn CustomerPicker(
    customers: Vec<Customer>,
    selected: String,
    #[props(default)] show_draft_count: bool,
    on_select: EventHandler<String>,
) -> Element {
    let cards = customers.iter().cloned().map(|customer| {
        let name = match (&customer.first_name, &customer.last_name) {
            (None, None) => "Unknown".to_string(),
            (first, last) => format!(
                "{} {}",
                first.clone().unwrap_or_default(),
                last.clone().unwrap_or_default()
            )
            .trim()
            .to_string(),
        };
        let email = customer
            .email
            .clone()
            .unwrap_or_else(|| "No email".to_string());
        let draft_count = customer.draft_count;
        let is_selected = customer.customer_id == selected;
        let customer_id = customer.customer_id.clone();

        rsx! {
            div {
                key: "{customer.customer_id}",
                class: if is_selected { "customer-card selected" } else { "customer-card" },
                onclick: move |_| on_select.call(customer_id.clone()),
                div { class: "customer-card-name", "{name}" }
                div { class: "customer-card-email", "{email}" }
                if show_draft_count {
                    div { class: "customer-card-drafts", "{draft_count} drafts" }
                }
            }
        }
    });

    rsx! {
        div { class: "panel",
            h2 { class: "panel-title", "Select Customer" }
            if customers.is_empty() {
                p { class: "muted", "No customers found" }
            } else {
                div { class: "customer-card-list", {cards} }
            }
        }
    }
}
