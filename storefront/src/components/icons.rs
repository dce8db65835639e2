//! Inline SVG icons.
//!
//! Single-path glyphs drawn on a 256x256 grid so they share one viewBox.

use leptos::prelude::*;

/// Header and footer glyph, filled with the surrounding text color so hover
/// colors on the parent button carry over.
///
/// ```rust,ignore
/// view! { <Icon glyph=ICON_CART /> }
/// ```
#[component]
pub fn Icon(
    /// Path data from one of the `ICON_*` constants
    glyph: &'static str,
    /// Edge length in pixels
    #[prop(default = 22)]
    size: u32,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            class="icon"
            width=size.clone()
            height=size
            viewBox="0 0 256 256"
            fill="currentColor"
            aria-hidden="true"
            focusable="false"
        >
            <path d=glyph></path>
        </svg>
    }
}

/// Icon for a footer social link, by network name.
pub fn social_icon(network: &str) -> &'static str {
    match network {
        "facebook" => ICON_FACEBOOK,
        "instagram" => ICON_INSTAGRAM,
        "twitter" => ICON_TWITTER,
        _ => ICON_LINK,
    }
}

/// Shopping cart with two wheels
pub const ICON_CART: &str = "M16,40a8,8,0,0,1,8-8H48a8,8,0,0,1,7.76,6.06L61,64H224a8,8,0,0,1,7.76,9.94l-24,96A8,8,0,0,1,200,176H80a8,8,0,0,1-7.76-6.06L41.75,48H24A8,8,0,0,1,16,40ZM80,192a20,20,0,1,0,20,20A20,20,0,0,0,80,192Zm112,0a20,20,0,1,0,20,20A20,20,0,0,0,192,192Z";

/// Head and shoulders
pub const ICON_USER: &str = "M128,24a56,56,0,1,1-56,56A56,56,0,0,1,128,24ZM32,216c0-44,43-80,96-80s96,36,96,80a8,8,0,0,1-8,8H40A8,8,0,0,1,32,216Z";

/// Three horizontal bars
pub const ICON_MENU: &str = "M40,64H216a8,8,0,0,1,0,16H40a8,8,0,0,1,0-16Zm0,56H216a8,8,0,0,1,0,16H40a8,8,0,0,1,0-16Zm0,56H216a8,8,0,0,1,0,16H40a8,8,0,0,1,0-16Z";

/// Diagonal cross
pub const ICON_CLOSE: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Rounded square with an "f" cut-out
pub const ICON_FACEBOOK: &str = "M64,32H192a32,32,0,0,1,32,32V192a32,32,0,0,1-32,32H152V152h24l4-32H152V100c0-9,3-16,16-16h16V56a200,200,0,0,0-24-2c-24,0-40,15-40,42v24H96v32h24v72H64a32,32,0,0,1-32-32V64A32,32,0,0,1,64,32Z";

/// Rounded square with a lens
pub const ICON_INSTAGRAM: &str = "M72,32H184a40,40,0,0,1,40,40V184a40,40,0,0,1-40,40H72a40,40,0,0,1-40-40V72A40,40,0,0,1,72,32Zm56,52a44,44,0,1,0,44,44A44,44,0,0,0,128,84Zm0,16a28,28,0,1,1-28,28A28,28,0,0,1,128,100Zm56-36a12,12,0,1,0,12,12A12,12,0,0,0,184,64Z";

/// Stylised bird
pub const ICON_TWITTER: &str = "M232,64a88,88,0,0,1-25,7,44,44,0,0,0,19-24,88,88,0,0,1-28,11,44,44,0,0,0-75,40A124,124,0,0,1,33,52a44,44,0,0,0,14,59,44,44,0,0,1-20-6c0,21,15,39,35,43a44,44,0,0,1-20,1,44,44,0,0,0,41,30A88,88,0,0,1,20,197a124,124,0,0,0,67,20c81,0,125-67,125-125l0-6A89,89,0,0,0,232,64Z";

/// Chain link, fallback for unknown networks
pub const ICON_LINK: &str = "M136,96h40a48,48,0,0,1,0,96H136a8,8,0,0,1,0-16h40a32,32,0,0,0,0-64H136a8,8,0,0,1,0-16ZM120,176H80a32,32,0,0,1,0-64h40a8,8,0,0,0,0-16H80a48,48,0,0,0,0,96h40a8,8,0,0,0,0-16Zm-32-48a8,8,0,0,0,8,8h64a8,8,0,0,0,0-16H96A8,8,0,0,0,88,128Z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_footer_network_has_a_dedicated_icon() {
        for network in organico_core::content::SOCIAL_NETWORKS {
            assert_ne!(social_icon(network), ICON_LINK, "{network} falls back to link icon");
        }
        assert_eq!(social_icon("myspace"), ICON_LINK);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn icon_renders_glyph_at_requested_size() {
        use leptos::tachys::view::RenderHtml;

        let html = view! { <Icon glyph=ICON_MENU size=16 /> }.to_html();
        assert!(html.contains(r#"width="16""#));
        assert!(html.contains(r#"height="16""#));
        assert!(html.contains(ICON_MENU));

        let default = view! { <Icon glyph=ICON_CART /> }.to_html();
        assert!(default.contains(r#"width="22""#));
    }
}
