//! Sign in / register toggle.

use super::{INPUT_STYLE, PRIMARY_BUTTON};
use dioxus::prelude::*;
use overhang_core::models::{LoginCredentials, RegisterCredentials};
use overhang_ui::components::ErrorDisplay;
use overhang_ui::state::{AppState, View};

#[component]
pub fn AuthView() -> Element {
    let mut state = use_context::<AppState>();
    let mut registering = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let api = state.client();
        let register = registering();
        let name = username().trim().to_string();
        let pass = password();
        let mail = email().trim().to_string();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = if register {
                let creds = RegisterCredentials {
                    username: name,
                    email: (!mail.is_empty()).then_some(mail),
                    password: pass,
                    home_location_id: None,
                };
                api.register(&creds)
                    .await
                    .map_err(|e| e.user_message("Registration failed"))
            } else {
                let creds = LoginCredentials {
                    username: name,
                    password: pass,
                };
                api.login(&creds)
                    .await
                    .map_err(|e| e.user_message("Invalid credentials"))
            };
            submitting.set(false);
            match result {
                Ok(_) => {
                    password.set(String::new());
                    state.authenticated.set(true);
                    state.navigate(View::Dashboard);
                }
                Err(message) => {
                    log::warn!("authentication failed: {}", message);
                    error.set(Some(message));
                }
            }
        });
    };

    let title = if registering() { "Create an account" } else { "Sign in" };
    let submit_label = match (registering(), submitting()) {
        (_, true) => "Please wait...",
        (true, false) => "Register",
        (false, false) => "Sign in",
    };
    let toggle_label = if registering() {
        "Already have an account? Sign in"
    } else {
        "New here? Create an account"
    };

    rsx! {
        div {
            style: "max-width: 360px; margin: 48px auto;",
            h2 { "{title}" }
            if let Some(message) = error() {
                ErrorDisplay { message }
            }
            form {
                style: "display: flex; flex-direction: column; gap: 10px;",
                onsubmit: on_submit,
                input {
                    style: INPUT_STYLE,
                    placeholder: "Username",
                    required: true,
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                if registering() {
                    input {
                        style: INPUT_STYLE,
                        r#type: "email",
                        placeholder: "Email (optional)",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                input {
                    style: INPUT_STYLE,
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    style: PRIMARY_BUTTON,
                    disabled: submitting(),
                    "{submit_label}"
                }
            }
            button {
                r#type: "button",
                style: "margin-top: 12px; background: none; border: none; color: #2563EB; cursor: pointer; padding: 0;",
                onclick: move |_| {
                    error.set(None);
                    registering.toggle();
                },
                "{toggle_label}"
            }
        }
    }
}
