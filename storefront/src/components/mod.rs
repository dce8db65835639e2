//! Leptos UI components for the landing page.
//!
//! Each section of the page is its own `#[component]`. Sections that react to
//! the [`ViewState`](organico_core::ViewState) take a
//! [`Storefront`](crate::Storefront) handle; the rest are static.
//!
//! # Component Hierarchy
//!
//! ```text
//! StorefrontDocument (SSR only: <html>, <head>, CSS)
//! └── StorefrontPage
//!     ├── Header          menu toggle, cart badge
//!     ├── Hero
//!     ├── Categories
//!     ├── BestSellers
//!     │   └── ProductCard (x3)  "Add to Cart"
//!     ├── BrandStory
//!     ├── GrowthChart     chart surface
//!     ├── Newsletter      email draft, subscribe, success banner
//!     └── Footer
//! ```

mod best_sellers;
mod brand_story;
mod categories;
mod footer;
mod growth_chart;
mod header;
mod hero;
mod icons;
mod newsletter;
mod page;

pub use best_sellers::{BestSellers, ProductCard};
pub use brand_story::BrandStory;
pub use categories::Categories;
pub use footer::Footer;
pub use growth_chart::{ChartSlot, GrowthChart};
pub use header::Header;
pub use hero::Hero;
pub use icons::*;
pub use newsletter::Newsletter;
pub use page::{StorefrontDocument, StorefrontPage};
