//! Public landing page.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    catalog::CatalogState,
    currency::format_kes,
    products::models::{Product, ProductId},
};

/// Number of catalog entries featured on the landing page.
pub const FEATURED_COUNT: usize = 3;

/// Shown instead of product cards when the catalog is empty or unavailable.
pub const COMING_SOON: &str = "Products coming soon. Contact us for a custom quote.";

/// Sales contact link.
pub const WHATSAPP_URL: &str = "https://wa.me/254799994758";

const TRUST_INDICATORS: [TrustIndicator; 4] = [
    TrustIndicator {
        label: "Quality Guaranteed",
        value: "ISO Certified",
    },
    TrustIndicator {
        label: "Years Experience",
        value: "5+",
    },
    TrustIndicator {
        label: "Projects Completed",
        value: "50+",
    },
    TrustIndicator {
        label: "Delivery Service",
        value: "Nationwide",
    },
];

const SELLING_POINTS: [&str; 4] = [
    "Factory-controlled quality assurance",
    "Faster installation than cast-in-place",
    "Custom designs to meet your specifications",
    "Nationwide delivery and installation support",
];

/// Opening banner copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    /// Small line above the headline.
    pub tagline: &'static str,

    /// Main banner line.
    pub headline: &'static str,

    /// Paragraph under the headline.
    pub intro: &'static str,
}

/// A headline figure, e.g. years in business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrustIndicator {
    /// What the figure counts.
    pub label: &'static str,

    /// The figure as displayed.
    pub value: &'static str,
}

/// The "why choose us" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WhyChooseUs {
    /// Section title.
    pub heading: &'static str,

    /// Paragraph under the title.
    pub body: &'static str,

    /// Bullet points, in display order.
    pub selling_points: [&'static str; 4],

    /// Badge text overlaid on the section image.
    pub experience_badge: &'static str,
}

/// A featured product as shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    /// Id of the product the card links to.
    pub id: ProductId,

    /// Product name.
    pub name: String,

    /// Short blurb, if the product has one.
    pub description: Option<String>,

    /// Base price in KES.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,

    /// Base price formatted for display, e.g. `KES 4,500`.
    pub price_label: String,

    /// First product image. `None` means the page shows its placeholder.
    pub cover_image: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            base_price: product.base_price,
            price_label: format_kes(product.base_price),
            cover_image: product.cover_image().map(str::to_string),
        }
    }
}

/// What the products section shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Showcase {
    /// Up to [`FEATURED_COUNT`] newest products.
    Featured {
        /// Cards in catalog order.
        products: Vec<ProductCard>,
    },

    /// Placeholder shown when no products can be listed.
    ComingSoon {
        /// Text shown in place of the cards.
        message: &'static str,
    },
}

/// Everything the public landing page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPage {
    /// Opening banner.
    pub hero: Hero,

    /// Figures shown under the banner.
    pub trust_indicators: [TrustIndicator; 4],

    /// Featured products or the coming-soon fallback.
    pub showcase: Showcase,

    /// Closing sales section.
    pub why_choose_us: WhyChooseUs,

    /// Target of the floating WhatsApp button.
    pub whatsapp_url: &'static str,
}

impl LandingPage {
    /// Build the page from whatever the catalog currently holds. Anything
    /// other than a ready, non-empty catalog shows the coming-soon message.
    #[must_use]
    pub fn from_state(state: &CatalogState) -> Self {
        Self::from_products(state.products().unwrap_or_default())
    }

    /// Build the page from a product list, newest first.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let showcase = if products.is_empty() {
            Showcase::ComingSoon {
                message: COMING_SOON,
            }
        } else {
            Showcase::Featured {
                products: products
                    .iter()
                    .take(FEATURED_COUNT)
                    .map(ProductCard::from)
                    .collect(),
            }
        };

        Self {
            hero: Hero {
                tagline: "Premium Precast Solutions",
                headline: "Durable. Precision-Built. Precast Concrete Solutions.",
                intro: "Building Kenya's future with superior precast concrete products. \
                        Quality engineering meets unmatched durability.",
            },
            trust_indicators: TRUST_INDICATORS,
            showcase,
            why_choose_us: WhyChooseUs {
                heading: "Built to Last, Delivered with Precision",
                body: "At BWL Precast Construction, we combine years of expertise with modern \
                       manufacturing to deliver precast concrete solutions that stand the test \
                       of time.",
                selling_points: SELLING_POINTS,
                experience_badge: "5+ Years of Excellence",
            },
            whatsapp_url: WHATSAPP_URL,
        }
    }

    /// Featured cards, empty when the page shows the coming-soon message.
    #[must_use]
    pub fn featured(&self) -> &[ProductCard] {
        match &self.showcase {
            Showcase::Featured { products } => products,
            Showcase::ComingSoon { .. } => &[],
        }
    }
}
