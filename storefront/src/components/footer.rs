use super::{Icon, social_icon};
use leptos::prelude::*;
use organico_core::content;

/// Brand blurb, quick links, contact details and certifications.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-column">
                    <h3 class="footer-brand">{content::BRAND}</h3>
                    <p class="footer-muted">{content::FOOTER_BLURB}</p>
                    <div class="social-links">
                        {content::SOCIAL_NETWORKS
                            .into_iter()
                            .map(|network| {
                                view! {
                                    <button class="social-link" aria-label=network data-network=network>
                                        <Icon glyph=social_icon(network) />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer-column">
                    <h3>"Quick Links"</h3>
                    <ul class="footer-list">
                        {content::QUICK_LINKS
                            .into_iter()
                            .map(|link| view! { <li><button class="footer-link">{link}</button></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>"Contact"</h3>
                    <ul class="footer-list footer-muted">
                        {content::CONTACT_LINES
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>"Certifications"</h3>
                    <div class="cert-grid">
                        {content::CERTIFICATIONS
                            .into_iter()
                            .map(|cert| view! { <div class="cert-badge">{cert}</div> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{content::COPYRIGHT}</p>
            </div>
        </footer>
    }
}
