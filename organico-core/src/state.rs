//! Local view state and its pure transitions.
//!
//! [`ViewState`] is a plain record. Its methods are the only transitions the
//! page performs; they never schedule anything or touch a clock, which is the
//! job of [`crate::ViewController`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{self, ItemId};

/// Mutable local state of the landing page view.
///
/// Defaults to `(false, 0, "", false)`. Deserialization fills missing fields
/// with those defaults, so `{"cart_count": 2}` is a valid snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Whether the header menu is expanded
    pub menu_open: bool,
    /// Number of "Add to Cart" clicks; shown as the header badge
    pub cart_count: u32,
    /// Current text of the newsletter email field
    pub email_draft: String,
    /// Whether the "Thank you for subscribing!" banner is shown
    pub subscribe_success_visible: bool,
}

/// The two states of the subscribe banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerState {
    Hidden,
    Visible,
}

/// A user interaction, as dispatched by the rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewEvent {
    ToggleMenu,
    AddToCart(ItemId),
    UpdateEmailDraft(String),
    Subscribe,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(menu_open = self.menu_open, "menu toggled");
    }

    /// Count one cart addition. The id is not validated; unknown ids still
    /// count.
    pub fn add_to_cart(&mut self, item: ItemId) {
        self.cart_count = self.cart_count.saturating_add(1);
        match catalog::find(item) {
            Some(found) => debug!(item = %item, name = found.name, cart_count = self.cart_count, "added to cart"),
            None => debug!(item = %item, cart_count = self.cart_count, "added unknown item to cart"),
        }
    }

    /// Replace the email draft verbatim.
    pub fn update_email_draft(&mut self, text: impl Into<String>) {
        self.email_draft = text.into();
    }

    /// Show the success banner and clear the draft.
    ///
    /// Returns `false` and leaves the state untouched when the draft is empty.
    pub fn subscribe(&mut self) -> bool {
        if self.email_draft.is_empty() {
            debug!("subscribe ignored, email draft is empty");
            return false;
        }
        self.email_draft.clear();
        self.subscribe_success_visible = true;
        debug!("subscribe accepted");
        true
    }

    pub fn hide_banner(&mut self) {
        self.subscribe_success_visible = false;
    }

    pub fn banner(&self) -> BannerState {
        if self.subscribe_success_visible {
            BannerState::Visible
        } else {
            BannerState::Hidden
        }
    }

    /// Count to show on the header cart badge; `None` hides the badge.
    pub fn cart_badge(&self) -> Option<u32> {
        (self.cart_count > 0).then_some(self.cart_count)
    }
}
