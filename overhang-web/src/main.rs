//! Overhang climbing progress tracker
//!
//! Single-page Dioxus client for logging bouldering sessions and charting
//! progress, personally or across the whole gym network.
//!
//! Data flow:
//! 1. On mount: load the Chart.js glue and the location list, plus the
//!    signed-in user when a token is stored.
//! 2. Each view fetches what it draws on mount and whenever the shared
//!    filter changes; superseded responses are dropped by ticket.
//! 3. Responses are reshaped by `overhang-data` and handed to Chart.js.

mod views;

use dioxus::prelude::*;
use overhang_ui::components::ErrorDisplay;
use overhang_ui::js_bridge;
use overhang_ui::state::{AppState, View};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("overhang-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: chart scripts, once ───
    use_effect(move || {
        js_bridge::init_charts();
    });

    // ─── Effect 2: location list, public ───
    use_effect(move || {
        let api = state.client();
        spawn(async move {
            match api.locations().await {
                Ok(locations) => state.locations.set(locations),
                Err(e) => {
                    log::error!("failed to load locations: {}", e);
                    state
                        .error_msg
                        .set(Some(e.user_message("Failed to load locations")));
                }
            }
        });
    });

    // ─── Effect 3: signed-in user whenever auth flips ───
    use_effect(move || {
        if !(state.authenticated)() {
            state.user.set(None);
            state.loading.set(false);
            return;
        }
        let api = state.client();
        state.loading.set(true);
        spawn(async move {
            match api.current_user().await {
                Ok(user) => state.user.set(Some(user)),
                Err(e) if e.is_unauthorized() => {
                    log::warn!("stored token rejected: {}", e);
                    state.sign_out();
                }
                Err(e) => log::error!("failed to load user: {}", e),
            }
            state.loading.set(false);
        });
    });

    let view = state.effective_view();
    let body = match view.clone() {
        View::Home => rsx! { views::Home {} },
        View::Auth => rsx! { views::AuthView {} },
        View::Dashboard => rsx! { views::Dashboard {} },
        View::LogSession => rsx! { views::SessionFormView {} },
        View::Sessions => rsx! { views::SessionList {} },
        View::Settings => rsx! { views::SettingsView {} },
        View::Location(slug) => rsx! { views::LocationDetail { slug } },
        View::Network => rsx! { views::NetworkActivity {} },
    };

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            NavBar { current: view.clone() }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            {body}
        }
    }
}

const NAV_ACTION: &str =
    "border: 1px solid #D1D5DB; background: #FFFFFF; border-radius: 4px; cursor: pointer;";

#[component]
fn NavBar(current: View) -> Element {
    let mut state = use_context::<AppState>();
    let signed_in = (state.authenticated)();
    let username = state
        .user
        .read()
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();
    let links = if signed_in {
        vec![
            View::Dashboard,
            View::LogSession,
            View::Sessions,
            View::Network,
            View::Settings,
        ]
    } else {
        vec![View::Home, View::Network]
    };

    rsx! {
        nav {
            style: "display: flex; gap: 8px; align-items: center; padding: 8px 0; border-bottom: 1px solid #E5E7EB; margin-bottom: 12px;",
            strong { style: "margin-right: 12px;", "Overhang" }
            for link in links {
                button {
                    key: "{link.title()}",
                    r#type: "button",
                    style: if link == current { "font-weight: bold; border: none; background: none; cursor: pointer;" } else { "border: none; background: none; cursor: pointer; color: #4B5563;" },
                    onclick: {
                        let link = link.clone();
                        move |_| state.navigate(link.clone())
                    },
                    "{link.title()}"
                }
            }
            span { style: "margin-left: auto; color: #6B7280; font-size: 13px;", "{username}" }
            if signed_in {
                button {
                    r#type: "button",
                    style: NAV_ACTION,
                    onclick: move |_| state.sign_out(),
                    "Sign out"
                }
            } else if current != View::Auth {
                button {
                    r#type: "button",
                    style: NAV_ACTION,
                    onclick: move |_| state.navigate(View::Auth),
                    "Sign in"
                }
            }
        }
    }
}
