//! Logged sessions, newest as the backend returns them, with a summary row.

use dioxus::prelude::*;
use overhang_core::models::Session;
use overhang_data::summarize_sessions;
use overhang_ui::components::{ErrorDisplay, LoadingSpinner};
use overhang_ui::js_bridge;
use overhang_ui::state::{AppState, View};
use overhang_utils::dates::format_date;

#[component]
pub fn SessionList() -> Element {
    let state = use_context::<AppState>();
    let mut sessions = use_signal(Vec::<Session>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let api = state.client();
        spawn(async move {
            match api.sessions().await {
                Ok(list) => sessions.set(list),
                Err(e) => {
                    log::error!("sessions fetch failed: {}", e);
                    error.set(Some(e.user_message("Failed to load sessions")));
                }
            }
            loading.set(false);
        });
    });

    let on_delete = move |session_id: i64| {
        if !js_bridge::confirm("Delete this session? This cannot be undone.") {
            return;
        }
        let api = state.client();
        spawn(async move {
            match api.delete_session(session_id).await {
                Ok(()) => {
                    sessions.write().retain(|s| s.id != session_id);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("delete session {} failed: {}", session_id, e);
                    error.set(Some(e.user_message("Failed to delete session")));
                }
            }
        });
    };

    let list = sessions.read().clone();
    let summary = summarize_sessions(&list);
    let average = summary
        .average_rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        h2 { "Your sessions" }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        if loading() {
            LoadingSpinner {}
        } else if list.is_empty() {
            p { style: "color: #6B7280;", "No sessions logged yet." }
        } else {
            div {
                style: "display: flex; gap: 24px; padding: 12px; background: #F9FAFB; border-radius: 6px; margin-bottom: 12px;",
                Stat { label: "Sessions", value: summary.sessions.to_string() }
                Stat { label: "Attempts", value: summary.attempts.to_string() }
                Stat { label: "Sends", value: summary.sends.to_string() }
                Stat { label: "Avg rating", value: average }
            }
            for session in list {
                SessionRow {
                    key: "{session.id}",
                    session,
                    ondelete: on_delete,
                }
            }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            div { style: "font-size: 12px; color: #6B7280;", "{label}" }
            div { style: "font-size: 20px; font-weight: bold;", "{value}" }
        }
    }
}

#[component]
fn SessionRow(session: Session, ondelete: EventHandler<i64>) -> Element {
    let mut state = use_context::<AppState>();
    let slug = state
        .locations
        .read()
        .iter()
        .find(|l| l.id == session.location_id)
        .map(|l| l.slug.clone());
    let date = format_date(&session.date);
    let id = session.id;
    let name = session.location_name.clone();
    let location = match slug {
        Some(slug) => rsx! {
            a {
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    state.navigate(View::Location(slug.clone()));
                },
                "{name}"
            }
        },
        None => rsx! { span { "{name}" } },
    };

    rsx! {
        div {
            style: "padding: 12px 0; border-bottom: 1px solid #E5E7EB;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    strong { "{date}" }
                    " at "
                    {location}
                    if let Some(rating) = session.rating {
                        span { style: "margin-left: 8px; color: #6B7280;", "rating {rating}/10" }
                    }
                }
                button {
                    r#type: "button",
                    style: "color: #B91C1C; background: none; border: 1px solid #FCA5A5; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| ondelete.call(id),
                    "Delete"
                }
            }
            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap; margin-top: 6px;",
                for (i, entry) in session.grades.iter().enumerate() {
                    span {
                        key: "{i}",
                        style: "font-size: 12px; padding: 2px 6px; border-radius: 4px; border: 1px solid {entry.grade.border_color()}; background: {entry.grade.color()}; color: {entry.grade.text_color()};",
                        "{entry.grade}: {entry.completed}/{entry.attempts}"
                    }
                }
            }
            if let Some(notes) = session.notes.as_ref().filter(|n| !n.is_empty()) {
                p { style: "margin: 6px 0 0 0; color: #374151; font-size: 13px;", "{notes}" }
            }
        }
    }
}
