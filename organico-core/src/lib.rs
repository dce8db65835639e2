//! # organico-core
//!
//! Framework-free core of the Organico landing page.
//!
//! Everything the page does that is not markup lives here:
//!
//! - [`state`] - the [`ViewState`] record and its pure transitions
//! - [`controller`] - [`ViewController`], which owns the state and the
//!   banner dismissal timer
//! - [`timer`] - the [`Scheduler`] port plus a virtual [`ManualClock`]
//! - [`chart`] - the [`ChartRenderer`] port, layout/smoothing geometry and an
//!   SVG renderer
//! - [`catalog`] / [`content`] - literal product data and page copy
//! - [`script`] - replaying interaction scripts on a virtual clock
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use organico_core::{ItemId, ManualClock, ViewController};
//!
//! let clock = ManualClock::new();
//! let mut view = ViewController::new(clock.clone());
//!
//! view.add_to_cart(ItemId(1));
//! view.update_email_draft("a@b.com");
//! assert!(view.subscribe());
//! assert!(view.state().subscribe_success_visible);
//!
//! view.advance(Duration::from_millis(3000));
//! assert!(!view.state().subscribe_success_visible);
//! ```
//!
//! Developed by The Organico Team (c)2025

pub mod catalog;
pub mod chart;
pub mod content;
pub mod controller;
pub mod error;
pub mod script;
pub mod state;
pub mod timer;

pub use catalog::{CatalogItem, ItemId, Price, Rating, SeriesPoint};
pub use chart::{ChartConfig, ChartMount, ChartRenderer, MountOutcome};
pub use controller::{DISMISS_DELAY, ViewController};
pub use error::{CatalogError, ChartError, ScriptError};
pub use state::{BannerState, ViewEvent, ViewState};
pub use timer::{DismissToken, ManualClock, Scheduler, TimerHandle};
