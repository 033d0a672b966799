//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::storage::{page_origin, LocalStorageTokenStore};
use dioxus::prelude::*;
use overhang_core::api::{ApiClient, ApiConfig};
use overhang_core::filter::FilterState;
use overhang_core::models::{Location, User};
use std::sync::Arc;

/// Top-level screens. The landing page, sign-in, location pages and network
/// activity are public; everything else needs a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Auth,
    Dashboard,
    LogSession,
    Sessions,
    Settings,
    Location(String),
    Network,
}

impl View {
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            View::Dashboard | View::LogSession | View::Sessions | View::Settings
        )
    }

    /// The view to actually render for a requested one. Signed-in users skip
    /// the landing and sign-in pages; protected views without a token go to
    /// sign-in.
    pub fn resolve(self, authenticated: bool) -> View {
        match self {
            View::Home | View::Auth if authenticated => View::Dashboard,
            view if view.is_protected() && !authenticated => View::Auth,
            view => view,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Auth => "Sign in",
            View::Dashboard => "Dashboard",
            View::LogSession => "Log session",
            View::Sessions => "Sessions",
            View::Settings => "Settings",
            View::Location(_) => "Location",
            View::Network => "Network",
        }
    }
}

/// Shared application state for the Overhang web client.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Gateway with the `localStorage` token store attached
    pub api: Signal<ApiClient>,
    /// Signed-in user, once `/auth/me` has answered
    pub user: Signal<Option<User>>,
    pub locations: Signal<Vec<Location>>,
    /// Dashboard filter shared by every chart
    pub filter: Signal<FilterState>,
    pub view: Signal<View>,
    /// Mirrors whether a token is stored; flips on login and logout
    pub authenticated: Signal<bool>,
    pub loading: Signal<bool>,
    /// App-level error (e.g. location list failed to load)
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState talking to the page's own origin.
    pub fn new() -> Self {
        let api = ApiClient::new(
            ApiConfig::new(page_origin()),
            Arc::new(LocalStorageTokenStore),
        );
        let authenticated = api.is_authenticated();
        Self {
            api: Signal::new(api),
            user: Signal::new(None),
            locations: Signal::new(Vec::new()),
            filter: Signal::new(FilterState::new()),
            view: Signal::new(View::default()),
            authenticated: Signal::new(authenticated),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Snapshot of the gateway for use inside a spawned future.
    pub fn client(&self) -> ApiClient {
        self.api.read().clone()
    }

    /// The view to actually render, see [`View::resolve`].
    pub fn effective_view(&self) -> View {
        (self.view)().resolve((self.authenticated)())
    }

    pub fn navigate(&mut self, view: View) {
        self.error_msg.set(None);
        self.view.set(view);
    }

    pub fn sign_out(&mut self) {
        self.api.read().logout();
        self.user.set(None);
        self.authenticated.set(false);
        self.filter.set(FilterState::new());
        self.view.set(View::Home);
    }
}
