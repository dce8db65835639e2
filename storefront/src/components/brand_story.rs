use leptos::prelude::*;
use organico_core::content;

/// Image and copy for "Our Story".
#[component]
pub fn BrandStory() -> impl IntoView {
    view! {
        <section class="section brand-story">
            <div class="container story-grid">
                <div class="story-image">
                    <img src=content::STORY_IMAGE alt=content::STORY_TITLE />
                </div>
                <div class="story-text">
                    <h2 class="section-title left">{content::STORY_TITLE}</h2>
                    <p>{content::STORY_BODY}</p>
                    <button class="btn btn-primary">{content::STORY_CTA}</button>
                </div>
            </div>
        </section>
    }
}
