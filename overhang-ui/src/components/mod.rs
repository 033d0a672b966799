//! Reusable Dioxus RSX components for the Overhang web client.

mod activity_chart;
mod chart_container;
mod chart_header;
mod distribution_chart;
mod empty_state;
mod error_display;
mod filter_panel;
mod grade_picker;
mod loading_spinner;
mod location_selector;
mod number_stepper;
mod progress_chart;

pub use activity_chart::ActivityChart;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use distribution_chart::DistributionChart;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use filter_panel::FilterPanel;
pub use grade_picker::GradePicker;
pub use loading_spinner::LoadingSpinner;
pub use location_selector::LocationSelector;
pub use number_stepper::NumberStepper;
pub use progress_chart::ProgressChart;
