//! Page root and the full HTML document used for snapshots.

use super::{
    BestSellers, BrandStory, Categories, ChartSlot, Footer, GrowthChart, Header, Hero, Newsletter,
};
use crate::Storefront;
use crate::styles::PAGE_CSS;
use leptos::prelude::*;
use organico_core::content;

/// Every section of the landing page, top to bottom.
#[component]
pub fn StorefrontPage(storefront: Storefront, chart: ChartSlot) -> impl IntoView {
    view! {
        <div class="storefront">
            <Header storefront=storefront />
            <main>
                <Hero />
                <Categories />
                <BestSellers storefront=storefront />
                <BrandStory />
                <GrowthChart chart=chart />
                <Newsletter storefront=storefront />
            </main>
            <Footer />
        </div>
    }
}

/// The complete HTML document for a static snapshot.
#[component]
pub fn StorefrontDocument(storefront: Storefront, chart: ChartSlot) -> impl IntoView {
    let title = format!("{} - {}", content::BRAND, content::HERO_TITLE);
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <StorefrontPage storefront=storefront chart=chart />
            </body>
        </html>
    }
}
