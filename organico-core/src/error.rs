//! Error types for the core crate.
//!
//! None of these reach the user of the page: chart failures are swallowed by
//! [`crate::ChartMount`] and catalog/script errors only surface in tooling.

use thiserror::Error;

/// Failure while drawing the growth chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The series has no points to plot
    #[error("chart series is empty")]
    EmptySeries,
    /// The surface is too small to hold the plot area
    #[error("chart surface {width}x{height} is too small to draw into")]
    InvalidDimensions { width: u32, height: u32 },
    /// The drawing backend rejected the output
    #[error("chart backend failed: {0}")]
    Backend(String),
}

/// Invalid literal catalog value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("rating {0} is outside 0.0..=5.0")]
    RatingOutOfRange(f64),
    #[error("price {0} is negative or not a number")]
    InvalidPrice(f64),
}

/// Unparseable step in an interaction script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown step `{0}` (expected menu, add:<id>, email:<text>, subscribe or wait:<ms>)")]
    UnknownStep(String),
    #[error("invalid item id in `{0}`")]
    InvalidItemId(String),
    #[error("invalid delay in `{0}`")]
    InvalidDelay(String),
}
