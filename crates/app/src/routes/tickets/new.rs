use dioxus::prelude::*;
use shared_types::{AppError, PRODUCTS};
use shared_ui::{
    use_toast, Card, CardContent, CardHeader, CardTitle, FormSelect, Input, PageHeader, PageTitle,
    Textarea,
};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::routes::Route;

/// Form for opening a new support ticket.
#[component]
pub fn TicketNewPage() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut product = use_signal(|| PRODUCTS[0].to_string());
    let mut description = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);

    let (user_name, user_email) = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| (u.name.clone(), u.email.clone()))
        .unwrap_or_default();

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        submitting.set(true);
        field_errors.set(HashMap::new());

        match server::api::create_ticket(product(), description()).await {
            Ok(_) => {
                toast.success("Ticket created");
                navigator().push(Route::TicketListPage {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    toast.error(AppError::friendly_message(&err_str));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        submitting.set(false);
    };

    rsx! {
        PageHeader {
            PageTitle { "Create New Ticket" }
        }

        Card {
            CardHeader {
                CardTitle { "Please fill out the form below" }
            }
            CardContent {
                div { class: "ticket-form-identity",
                    Input { label: "Customer Name", value: user_name, disabled: true }
                    Input { label: "Customer Email", value: user_email, disabled: true }
                }

                form { onsubmit: handle_submit,
                    FormSelect {
                        label: "Product",
                        value: product(),
                        onchange: move |e: Event<FormData>| product.set(e.value()),
                        for p in PRODUCTS {
                            option { value: *p, "{p}" }
                        }
                    }

                    Textarea {
                        label: "Description of the issue",
                        placeholder: "Describe what went wrong",
                        value: description(),
                        on_input: move |e: FormEvent| description.set(e.value()),
                    }
                    if let Some(err) = field_errors().get("description") {
                        div { class: "form-field-error", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        class: "button ticket-form-submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit" }
                    }
                }
            }
        }
    }
}
