use leptos::prelude::*;
use organico_core::content;

/// Full-width banner with the tagline and "Shop Now".
#[component]
pub fn Hero() -> impl IntoView {
    let background = format!("background-image: url('{}');", content::HERO_IMAGE);
    view! {
        <section class="hero" style=background>
            <div class="hero-overlay"></div>
            <div class="container hero-inner">
                <div class="hero-content">
                    <h1 class="hero-title">{content::HERO_TITLE}</h1>
                    <p class="hero-tagline">{content::HERO_TAGLINE}</p>
                    <button class="btn btn-primary btn-large">{content::HERO_CTA}</button>
                </div>
            </div>
        </section>
    }
}
