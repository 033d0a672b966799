//! Shared Dioxus components and Chart.js bridge for the Overhang web client.
//!
//! This crate provides:
//! - `charts`: Chart.js configurations built from reshaped stats series
//! - `js_bridge`: Rust wrappers for the chart glue via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `storage`: `localStorage` token store
//! - `components`: Reusable RSX components (charts, filters, form controls)

pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod storage;
