//! One component per top-level screen.

mod auth;
mod dashboard;
mod home;
mod location_detail;
mod network;
mod session_form;
mod session_list;
mod settings;

pub use auth::AuthView;
pub use dashboard::Dashboard;
pub use home::Home;
pub use location_detail::LocationDetail;
pub use network::{LocationLinks, NetworkActivity};
pub use session_form::SessionFormView;
pub use session_list::SessionList;
pub use settings::SettingsView;

/// Shared input styling.
pub(crate) const INPUT_STYLE: &str =
    "padding: 6px 8px; border: 1px solid #D1D5DB; border-radius: 4px; font-size: 14px;";
pub(crate) const PRIMARY_BUTTON: &str = "padding: 8px 16px; background: #111827; color: #FFFFFF; border: none; border-radius: 4px; cursor: pointer;";
