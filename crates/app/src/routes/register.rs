use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Input};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::routes::Route;

/// Account creation page.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() {
        navigator().push(Route::TicketListPage {});
    }

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();

        if password() != confirm() {
            error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }

        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::register(name(), email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::TicketListPage {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Account" }
                    p { class: "auth-description", "Register to open support tickets" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_register,
                        div { class: "auth-field",
                            Input {
                                label: "Name",
                                placeholder: "Your name",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("name") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "email",
                                label: "Email",
                                placeholder: "user@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                label: "Password",
                                placeholder: "At least 6 characters",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                label: "Confirm Password",
                                placeholder: "Repeat your password",
                                value: confirm(),
                                on_input: move |e: FormEvent| confirm.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }

                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
