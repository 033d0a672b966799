//! Home location and default grade.

use super::PRIMARY_BUTTON;
use dioxus::prelude::*;
use overhang_core::grade::Grade;
use overhang_core::models::UserUpdate;
use overhang_ui::components::{ErrorDisplay, GradePicker, LocationSelector};
use overhang_ui::state::AppState;

#[component]
pub fn SettingsView() -> Element {
    let mut state = use_context::<AppState>();
    let mut home = use_signal(|| None::<i64>);
    let mut grade = use_signal(|| None::<Grade>);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Seed the form from the user once it is loaded.
    use_effect(move || {
        if let Some(user) = state.user.read().as_ref() {
            home.set(user.home_location_id);
            grade.set(user.default_grade);
        }
    });

    let on_save = move |_| {
        let update = UserUpdate {
            home_location_id: home(),
            default_grade: grade(),
        };
        let api = state.client();
        saving.set(true);
        success.set(false);
        error.set(None);
        spawn(async move {
            match api.update_user(&update).await {
                Ok(user) => {
                    log::info!("settings saved for {}", user.username);
                    state.user.set(Some(user));
                    success.set(true);
                }
                Err(e) => {
                    log::error!("settings update failed: {}", e);
                    error.set(Some(e.user_message("Failed to update settings")));
                }
            }
            saving.set(false);
        });
    };

    let username = state
        .user
        .read()
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    rsx! {
        h2 { "Settings" }
        p { style: "color: #6B7280;", "Signed in as {username}" }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        if success() {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #DCFCE7; color: #166534; border-radius: 4px;",
                "Settings updated successfully!"
            }
        }
        LocationSelector {
            id: "home-location".to_string(),
            value: home(),
            onchange: move |id| {
                success.set(false);
                home.set(id);
            },
        }
        div {
            style: "margin: 12px 0;",
            p { style: "font-weight: bold; margin: 0 0 6px 0;", "Default grade" }
            GradePicker {
                value: grade().unwrap_or(Grade::V0),
                onchange: move |g| {
                    success.set(false);
                    grade.set(Some(g));
                },
            }
        }
        button {
            r#type: "button",
            style: PRIMARY_BUTTON,
            disabled: saving(),
            onclick: on_save,
            if saving() { "Saving..." } else { "Save settings" }
        }
    }
}
