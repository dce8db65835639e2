//! Fixed site header: brand, navigation, cart badge and the menu toggle.

use super::{ICON_CART, ICON_CLOSE, ICON_MENU, ICON_USER, Icon};
use crate::Storefront;
use leptos::prelude::*;
use organico_core::{ViewEvent, content};

#[component]
pub fn Header(storefront: Storefront) -> impl IntoView {
    let menu_open = move || storefront.read(|s| s.menu_open);
    let cart_count = move || storefront.read(|s| s.cart_count);

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <div class="brand">{content::BRAND}</div>

                <nav class="nav-links">
                    {content::NAV_ITEMS
                        .iter()
                        .map(|item| view! { <button class="nav-link">{*item}</button> })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <button class="icon-button cart-button" aria-label="Cart">
                        <Icon glyph=ICON_CART />
                        <Show when=move || { cart_count() > 0 }>
                            <span class="cart-badge" data-count=move || cart_count().to_string()>
                                {move || cart_count().to_string()}
                            </span>
                        </Show>
                    </button>
                    <button class="icon-button" aria-label="Account">
                        <Icon glyph=ICON_USER />
                    </button>
                    <button
                        class=move || if menu_open() { "icon-button menu-toggle active" } else { "icon-button menu-toggle" }
                        aria-label="Menu"
                        aria-expanded=move || if menu_open() { "true" } else { "false" }
                        on:click=move |_| storefront.send(ViewEvent::ToggleMenu)
                    >
                        {move || {
                            let glyph = if menu_open() { ICON_CLOSE } else { ICON_MENU };
                            view! { <Icon glyph=glyph /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <nav class="mobile-menu">
                    {content::NAV_ITEMS
                        .iter()
                        .map(|item| view! { <button class="mobile-menu-link">{*item}</button> })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
