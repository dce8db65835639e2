//! # organico-storefront
//!
//! Leptos components for the Organico landing page.
//!
//! The same component tree serves two hosts:
//!
//! - **CSR** - the `organico-landing` wasm crate mounts [`components::StorefrontPage`]
//!   with a live [`ViewState`] signal and a dispatch callback wired to a
//!   [`organico_core::ViewController`].
//! - **SSR** - [`render_page`] renders a static snapshot of any [`ViewState`]
//!   to a complete HTML document, with the growth chart pre-rendered as SVG.
//!
//! ## Quick Start
//!
//! ```rust
//! use organico_core::ViewState;
//! use organico_storefront::render_page;
//!
//! let state = ViewState {
//!     cart_count: 2,
//!     ..Default::default()
//! };
//!
//! let html = render_page(&state);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Organic Raw Almonds"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - one component per page section
//! - [`context`] - the [`Storefront`] handle passed to interactive sections
//! - [`styles`] - page CSS
//!
//! ---
//!
//! Developed by The Organico Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod context;
pub mod styles;

pub use components::{ChartSlot, StorefrontDocument, StorefrontPage};
pub use context::Storefront;

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use organico_core::ViewState;

/// Render a complete HTML document for a static snapshot of `state`.
///
/// Buttons in the snapshot are inert; the chart is drawn inline as SVG.
///
/// # Example
///
/// ```rust
/// use organico_core::ViewState;
/// use organico_storefront::render_page;
///
/// let html = render_page(&ViewState::default());
/// assert!(html.contains("Pure Nature, Pure Life"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(state: &ViewState) -> String {
    let storefront = Storefront::snapshot(state.clone());
    let chart = ChartSlot::prerender();

    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <StorefrontDocument storefront=storefront chart=chart /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the page body (no `<html>`/`<head>`), e.g. for embedding.
#[cfg(feature = "ssr")]
pub fn render_fragment(state: &ViewState) -> String {
    let storefront = Storefront::snapshot(state.clone());
    let chart = ChartSlot::prerender();

    let owner = Owner::new();
    owner.with(|| view! { <StorefrontPage storefront=storefront chart=chart /> }.to_html())
}
