//! Core types for the Overhang climbing progress tracker.
//!
//! - `grade`: the fixed difficulty scale and its colours
//! - `models`: backend wire shapes
//! - `filter`: dashboard filter controller
//! - `session_form`: session logging form and client-side validation
//! - `sequence`: request tickets for discarding stale responses
//! - `token`: bearer token storage
//! - `api`: REST gateway (feature `api`)

#[cfg(feature = "api")]
pub mod api;
pub mod error;
pub mod filter;
pub mod grade;
pub mod models;
pub mod sequence;
pub mod session_form;
pub mod token;

pub use error::{OverhangError, Result};
pub use grade::Grade;
