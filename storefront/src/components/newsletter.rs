//! Newsletter signup: email draft, subscribe button and the timed banner.

use crate::Storefront;
use leptos::prelude::*;
use organico_core::{ViewEvent, content};

#[component]
pub fn Newsletter(storefront: Storefront) -> impl IntoView {
    let email_draft = move || storefront.read(|s| s.email_draft.clone());
    let banner_visible = move || storefront.read(|s| s.subscribe_success_visible);

    view! {
        <section class="section newsletter">
            <div class="container newsletter-inner">
                <h2 class="section-title light">{content::NEWSLETTER_TITLE}</h2>
                <p class="newsletter-tagline">{content::NEWSLETTER_TAGLINE}</p>
                <div class="newsletter-form">
                    // `value` seeds snapshots, `prop:value` keeps the live input in sync
                    <input
                        type="email"
                        class="newsletter-input"
                        placeholder=content::NEWSLETTER_PLACEHOLDER
                        value=email_draft
                        prop:value=email_draft
                        on:input=move |ev| {
                            storefront.send(ViewEvent::UpdateEmailDraft(event_target_value(&ev)))
                        }
                    />
                    <button
                        class="btn btn-accent subscribe-button"
                        on:click=move |_| storefront.send(ViewEvent::Subscribe)
                    >
                        {content::NEWSLETTER_BUTTON}
                    </button>
                </div>
                <Show when=banner_visible>
                    <p class="subscribe-success" role="status">{content::SUBSCRIBE_SUCCESS}</p>
                </Show>
            </div>
        </section>
    }
}
