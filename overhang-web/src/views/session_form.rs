//! Log a new session.

use super::{INPUT_STYLE, PRIMARY_BUTTON};
use dioxus::prelude::*;
use overhang_core::grade::Grade;
use overhang_core::session_form::{SessionForm, RATINGS};
use overhang_core::OverhangError;
use overhang_ui::components::{ErrorDisplay, GradePicker, LocationSelector, NumberStepper};
use overhang_ui::state::{AppState, View};
use overhang_utils::dates::{format_date, parse_date, today};

#[component]
pub fn SessionFormView() -> Element {
    let mut state = use_context::<AppState>();
    let mut form = use_signal(|| SessionForm::new(today()));
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Preselect a location once the user and location list are known.
    use_effect(move || {
        let user = state.user.read().clone();
        let locations = state.locations.read().clone();
        if form.peek().location_id == 0 {
            form.write().apply_defaults(user.as_ref(), &locations);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        // validated before anything touches the network
        let body = match form.read().validate() {
            Ok(body) => body,
            Err(e) => {
                error.set(Some(OverhangError::from(e).user_message("Failed to create session")));
                return;
            }
        };
        let api = state.client();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = api.create_session(&body).await;
            submitting.set(false);
            match result {
                Ok(session) => {
                    log::info!("logged session {}", session.id);
                    form.set(SessionForm::new(today()));
                    state.navigate(View::Sessions);
                }
                Err(e) => {
                    log::error!("create session failed: {}", e);
                    error.set(Some(e.user_message("Failed to create session")));
                }
            }
        });
    };

    let default_grade = state
        .user
        .read()
        .as_ref()
        .and_then(|u| u.default_grade)
        .unwrap_or(Grade::V0);
    let snapshot = form.read().clone();
    let date = format_date(&snapshot.date);
    let can_remove = snapshot.can_remove();

    rsx! {
        h2 { "Log a session" }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        form {
            style: "display: flex; flex-direction: column; gap: 12px;",
            onsubmit: on_submit,
            LocationSelector {
                id: "session-location".to_string(),
                value: (snapshot.location_id != 0).then_some(snapshot.location_id),
                onchange: move |id: Option<i64>| form.write().location_id = id.unwrap_or(0),
            }
            label {
                style: "font-weight: bold;",
                "Date: "
                input {
                    style: INPUT_STYLE,
                    r#type: "date",
                    value: "{date}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(date) = parse_date(&evt.value()) {
                            form.write().date = date;
                        }
                    },
                }
            }
            div {
                h3 { style: "margin: 8px 0;", "Grades" }
                for (index, entry) in snapshot.grades.iter().copied().enumerate() {
                    div {
                        key: "{index}",
                        style: "display: flex; gap: 12px; align-items: center; padding: 8px 0; border-bottom: 1px solid #F3F4F6; flex-wrap: wrap;",
                        GradePicker {
                            value: entry.grade,
                            onchange: move |grade| form.write().set_grade(index, grade),
                        }
                        span { "Attempts" }
                        NumberStepper {
                            value: entry.attempts,
                            label: "Attempts".to_string(),
                            onchange: move |n| form.write().set_attempts(index, n),
                        }
                        span { "Sends" }
                        NumberStepper {
                            value: entry.completed,
                            label: "Sends".to_string(),
                            onchange: move |n| form.write().set_completed(index, n),
                        }
                        button {
                            r#type: "button",
                            disabled: !can_remove,
                            onclick: move |_| form.write().remove_entry(index),
                            "Remove"
                        }
                    }
                }
                button {
                    r#type: "button",
                    style: "margin-top: 8px;",
                    onclick: move |_| form.write().add_entry(default_grade),
                    "+ Add grade"
                }
            }
            label {
                style: "font-weight: bold;",
                "Rating: "
                select {
                    style: INPUT_STYLE,
                    onchange: move |evt: Event<FormData>| form.write().rating = evt.value().parse::<u8>().ok(),
                    option { value: "", selected: snapshot.rating.is_none(), "No rating" }
                    for rating in RATINGS {
                        option {
                            key: "{rating}",
                            value: "{rating}",
                            selected: snapshot.rating == Some(rating),
                            "{rating}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold; display: flex; flex-direction: column; gap: 4px;",
                "Notes"
                textarea {
                    style: INPUT_STYLE,
                    rows: "3",
                    value: "{snapshot.notes}",
                    oninput: move |evt: Event<FormData>| form.write().notes = evt.value(),
                }
            }
            button {
                r#type: "submit",
                style: PRIMARY_BUTTON,
                disabled: submitting(),
                if submitting() { "Saving..." } else { "Save session" }
            }
        }
    }
}
