//! CSS for the landing page.
//!
//! Embedded in the `<head>` of snapshots by
//! [`StorefrontDocument`](crate::StorefrontDocument); the wasm landing mounts
//! the same rules next to the page.
//!
//! # Customization
//!
//! ```rust
//! use organico_storefront::styles::PAGE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```
//!
//! # Palette
//!
//! - cream page background `#F9F6F0`
//! - sage brand green `#7C9D8E` (hover `#6A8B7C`)
//! - bark accent `#8B7355` for the subscribe button
//! - slate footer `#2C3E50`

/// Complete CSS for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-cream: #F9F6F0;
    --bg-white: #FFFFFF;
    --brand: #7C9D8E;
    --brand-dark: #6A8B7C;
    --bark: #8B7355;
    --bark-dark: #7A6244;
    --slate: #2C3E50;
    --slate-light: #34495E;
    --text: #1F2937;
    --text-dim: #4B5563;
    --text-muted: #9CA3AF;
    --font-serif: Georgia, 'Times New Roman', serif;
    --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1280px;
    --radius: 8px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--bg-cream);
    color: var(--text);
    line-height: 1.6;
}

img {
    display: block;
    max-width: 100%;
}

button {
    font: inherit;
    cursor: pointer;
    border: none;
    background: none;
    color: inherit;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Header */

.site-header {
    position: fixed;
    top: 0;
    width: 100%;
    background: var(--bg-white);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
    z-index: 50;
}

.header-inner {
    height: 80px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    font-family: var(--font-serif);
    font-size: 1.875rem;
    color: var(--brand);
}

.nav-links {
    display: flex;
    gap: 32px;
}

.nav-link {
    color: var(--text-dim);
    transition: color 0.2s;
}

.nav-link:hover {
    color: var(--brand);
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 24px;
}

.icon-button {
    position: relative;
    color: var(--text-dim);
    display: inline-flex;
}

.menu-toggle {
    display: none;
}

.menu-toggle.active {
    color: var(--brand);
}

.cart-badge {
    position: absolute;
    top: -8px;
    right: -8px;
    width: 20px;
    height: 20px;
    border-radius: 999px;
    background: var(--brand);
    color: #FFFFFF;
    font-size: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
}

.mobile-menu {
    display: flex;
    flex-direction: column;
    padding: 8px 16px 16px;
    background: var(--bg-white);
    border-top: 1px solid #E5E7EB;
}

.mobile-menu-link {
    text-align: left;
    padding: 10px 0;
    color: var(--text-dim);
}

/* Buttons */

.btn {
    padding: 12px 32px;
    border-radius: var(--radius);
    white-space: nowrap;
    transition: background 0.2s;
}

.btn-primary {
    background: var(--brand);
    color: #FFFFFF;
}

.btn-primary:hover {
    background: var(--brand-dark);
}

.btn-accent {
    background: var(--bark);
    color: #FFFFFF;
    border-radius: 999px;
    padding: 8px 24px;
}

.btn-accent:hover {
    background: var(--bark-dark);
}

.btn-large {
    font-size: 1.125rem;
    font-weight: 500;
}

.btn-block {
    width: 100%;
    padding: 8px 0;
}

/* Sections */

.section {
    padding: 80px 0;
}

.section-title {
    font-family: var(--font-serif);
    font-size: 1.875rem;
    font-weight: 400;
    text-align: center;
    margin: 0 0 48px;
}

.section-title.left {
    text-align: left;
    margin-bottom: 24px;
}

.section-title.light {
    color: #FFFFFF;
    margin-bottom: 24px;
}

.hero {
    position: relative;
    height: 600px;
    padding-top: 80px;
    background-size: cover;
    background-position: center;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.4);
}

.hero-inner {
    position: relative;
    height: 100%;
    display: flex;
    align-items: center;
}

.hero-content {
    max-width: 672px;
    color: #FFFFFF;
}

.hero-title {
    font-family: var(--font-serif);
    font-size: 3rem;
    font-weight: 400;
    margin: 0 0 24px;
}

.hero-tagline {
    font-size: 1.25rem;
    margin: 0 0 32px;
}

.category-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 32px;
}

.category-tile {
    position: relative;
    overflow: hidden;
    border-radius: var(--radius);
    cursor: pointer;
}

.category-image {
    aspect-ratio: 1 / 1;
}

.category-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s;
}

.category-tile:hover img {
    transform: scale(1.1);
}

.category-label {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.3);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #FFFFFF;
}

.category-label h3 {
    font-size: 1.5rem;
    font-weight: 500;
}

.best-sellers {
    background: var(--bg-white);
}

.product-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
}

.product-card {
    background: var(--bg-white);
    border-radius: var(--radius);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    overflow: hidden;
}

.product-image {
    aspect-ratio: 1 / 1;
    overflow: hidden;
}

.product-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s;
}

.product-image img:hover {
    transform: scale(1.05);
}

.product-body {
    padding: 24px;
}

.product-name {
    font-size: 1.25rem;
    font-weight: 500;
    margin: 0 0 8px;
}

.product-meta {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 16px;
}

.product-price {
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--brand);
}

.product-rating {
    color: var(--text-dim);
}

.star {
    color: #FACC15;
    margin-right: 4px;
}

.story-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px;
    align-items: center;
}

.story-image {
    aspect-ratio: 4 / 3;
    overflow: hidden;
    border-radius: var(--radius);
}

.story-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.story-text p {
    color: var(--text-dim);
    margin: 0 0 24px;
}

.growth {
    background: var(--bg-white);
}

.chart-surface {
    width: 100%;
    height: 400px;
}

.newsletter {
    background: var(--brand);
    text-align: center;
}

.newsletter-tagline {
    color: #FFFFFF;
    margin: 0 0 32px;
}

.newsletter-form {
    position: relative;
    max-width: 448px;
    margin: 0 auto;
}

.newsletter-input {
    width: 100%;
    padding: 12px 24px;
    border: none;
    border-radius: 999px;
    font: inherit;
    color: var(--text);
}

.newsletter-input:focus {
    outline: 2px solid #FFFFFF;
}

.subscribe-button {
    position: absolute;
    right: 8px;
    top: 50%;
    transform: translateY(-50%);
}

.subscribe-success {
    margin-top: 16px;
    color: #FFFFFF;
}

/* Footer */

.site-footer {
    background: var(--slate);
    color: #FFFFFF;
    padding: 64px 0;
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 48px;
}

.footer-column h3 {
    font-size: 1.25rem;
    font-weight: 400;
    margin: 0 0 24px;
}

.footer-brand {
    font-family: var(--font-serif);
}

.footer-muted {
    color: #D1D5DB;
}

.social-links {
    display: flex;
    gap: 16px;
}

.social-link:hover,
.footer-link:hover {
    color: var(--brand);
}

.footer-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: grid;
    gap: 16px;
}

.footer-link {
    color: #D1D5DB;
}

.cert-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

.cert-badge {
    background: var(--slate-light);
    padding: 12px;
    border-radius: 4px;
    text-align: center;
    font-size: 0.875rem;
}

.footer-bottom {
    margin-top: 48px;
    padding-top: 32px;
    border-top: 1px solid #374151;
    text-align: center;
    color: var(--text-muted);
}

/* Narrow screens */

@media (max-width: 1024px) {
    .category-grid,
    .footer-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .product-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .story-grid {
        grid-template-columns: 1fr;
    }
}

@media (max-width: 768px) {
    .nav-links {
        display: none;
    }

    .menu-toggle {
        display: inline-flex;
    }

    .category-grid,
    .product-grid,
    .footer-grid {
        grid-template-columns: 1fr;
    }

    .hero-title {
        font-size: 2.25rem;
    }
}
"#;
