//! Literal page copy.
//!
//! Text and image references for every section that is not driven by
//! [`crate::ViewState`]. Kept here so the SSR snapshot, the wasm page and the
//! CLI dump all agree.

use serde::Serialize;

pub const BRAND: &str = "Organico";

pub const NAV_ITEMS: [&str; 4] = ["Home", "Shop", "About Us", "Contact"];

pub const HERO_TITLE: &str = "Pure Nature, Pure Life";
pub const HERO_TAGLINE: &str = "Discover our carefully curated selection of premium organic products, sourced directly from sustainable farms.";
pub const HERO_CTA: &str = "Shop Now";
pub const HERO_IMAGE: &str = "https://public.readdy.ai/ai/img_res/054f1b9309c595d879074c670a6c43fc.jpg";

/// A tile in the category grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub image_ref: &'static str,
}

pub const CATEGORIES_TITLE: &str = "Our Categories";

pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "Dried Fruits",
        image_ref: "https://public.readdy.ai/ai/img_res/f68f6f29adb68c62bcc07d74e919fd7b.jpg",
    },
    Category {
        name: "Organic Teas",
        image_ref: "https://public.readdy.ai/ai/img_res/6c621c6caad0520f1cd24e6db2bbd003.jpg",
    },
    Category {
        name: "Natural Snacks",
        image_ref: "https://public.readdy.ai/ai/img_res/f060482e35cb8ee06f8a241706e0a215.jpg",
    },
    Category {
        name: "Raw Nuts",
        image_ref: "https://public.readdy.ai/ai/img_res/d579fb566cb166b7d48a04c166af5091.jpg",
    },
];

pub const BEST_SELLERS_TITLE: &str = "Best Sellers";
pub const ADD_TO_CART: &str = "Add to Cart";

pub const STORY_TITLE: &str = "Our Story";
pub const STORY_BODY: &str = "Since 2010, Organico has been at the forefront of the organic movement, partnering with small-scale farmers who share our passion for sustainable agriculture and exceptional quality. Our journey began with a simple mission: to make pure, organic products accessible to everyone while supporting environmental stewardship.";
pub const STORY_CTA: &str = "Learn More";
pub const STORY_IMAGE: &str = "https://public.readdy.ai/ai/img_res/e580f268da2bab9b5d655c462414d399.jpg";

pub const GROWTH_TITLE: &str = "Our Growth";

pub const NEWSLETTER_TITLE: &str = "Join Our Organic Community";
pub const NEWSLETTER_TAGLINE: &str = "Subscribe to receive updates, access to exclusive deals, and more.";
pub const NEWSLETTER_PLACEHOLDER: &str = "Enter your email";
pub const NEWSLETTER_BUTTON: &str = "Subscribe";
pub const SUBSCRIBE_SUCCESS: &str = "Thank you for subscribing!";

pub const FOOTER_BLURB: &str = "Your trusted source for premium organic products.";
pub const QUICK_LINKS: [&str; 4] = ["About Us", "Shop", "Contact", "Blog"];
pub const CONTACT_LINES: [&str; 4] = [
    "1234 Organic Way",
    "New York, NY 10001",
    "+1 (555) 123-4567",
    "info@organico.com",
];
pub const CERTIFICATIONS: [&str; 4] = ["USDA Organic", "Non-GMO", "Fair Trade", "Eco-Certified"];
pub const SOCIAL_NETWORKS: [&str; 3] = ["facebook", "instagram", "twitter"];
pub const COPYRIGHT: &str = "© 2025 Organico. All rights reserved.";
