//! Category grid (four image tiles)

use leptos::prelude::*;
use organico_core::content::{self, Category};

/// The four category tiles.
#[component]
pub fn Categories() -> impl IntoView {
    view! {
        <section class="section categories">
            <div class="container">
                <h2 class="section-title">{content::CATEGORIES_TITLE}</h2>
                <div class="category-grid">
                    {content::CATEGORIES
                        .into_iter()
                        .map(|category| view! { <CategoryTile category=category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryTile(category: Category) -> impl IntoView {
    view! {
        <div class="category-tile">
            <div class="category-image">
                <img src=category.image_ref alt=category.name />
            </div>
            <div class="category-label">
                <h3>{category.name}</h3>
            </div>
        </div>
    }
}
