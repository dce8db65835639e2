//! Best-seller product cards

use crate::Storefront;
use leptos::prelude::*;
use organico_core::{CatalogItem, ViewEvent, catalog, content};

/// One card per catalog item, in catalog order.
#[component]
pub fn BestSellers(storefront: Storefront) -> impl IntoView {
    view! {
        <section class="section best-sellers">
            <div class="container">
                <h2 class="section-title">{content::BEST_SELLERS_TITLE}</h2>
                <div class="product-grid">
                    {catalog::items()
                        .iter()
                        .map(|item| view! { <ProductCard item=*item storefront=storefront /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Image, name, price, rating and the "Add to Cart" button.
#[component]
pub fn ProductCard(item: CatalogItem, storefront: Storefront) -> impl IntoView {
    let id = item.id;
    view! {
        <article class="product-card" data-item-id=item.id.to_string()>
            <div class="product-image">
                <img src=item.image_ref alt=item.name />
            </div>
            <div class="product-body">
                <h3 class="product-name">{item.name}</h3>
                <div class="product-meta">
                    <span class="product-price">{item.price.to_string()}</span>
                    <span class="product-rating">
                        <span class="star">"★"</span>
                        {item.rating.to_string()}
                    </span>
                </div>
                <button
                    class="btn btn-primary btn-block add-to-cart"
                    on:click=move |_| storefront.send(ViewEvent::AddToCart(id))
                >
                    {content::ADD_TO_CART}
                </button>
            </div>
        </article>
    }
}
