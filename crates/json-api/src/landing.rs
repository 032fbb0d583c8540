//! Landing Page Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use precast_app::domain::landing::{LandingPage, ProductCard, Showcase};

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LabelValue {
    pub label: String,
    pub value: String,
}

/// Featured product card
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCardResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,

    /// Base price in KES
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub base_price: Decimal,

    /// Formatted price, e.g. "KES 4,500"
    pub price_label: String,

    /// First product image; absent when the page shows its placeholder
    pub cover_image: Option<String>,
}

impl From<ProductCard> for ProductCardResponse {
    fn from(card: ProductCard) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name,
            description: card.description,
            base_price: card.base_price,
            price_label: card.price_label,
            cover_image: card.cover_image,
        }
    }
}

/// Landing Page Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LandingResponse {
    pub tagline: String,
    pub headline: String,
    pub intro: String,
    pub trust_indicators: Vec<LabelValue>,

    /// Up to three newest products
    pub featured: Vec<ProductCardResponse>,

    /// Shown instead of featured products when there are none
    pub coming_soon: Option<String>,

    pub why_choose_us_heading: String,
    pub why_choose_us_body: String,
    pub selling_points: Vec<String>,
    pub experience_badge: String,
    pub whatsapp_url: String,
}

impl From<LandingPage> for LandingResponse {
    fn from(page: LandingPage) -> Self {
        let (featured, coming_soon): (Vec<ProductCardResponse>, Option<String>) =
            match page.showcase {
                Showcase::Featured { products } => {
                    (products.into_iter().map(Into::into).collect(), None)
                }
                Showcase::ComingSoon { message } => (Vec::new(), Some(message.to_string())),
            };

        Self {
            tagline: page.hero.tagline.to_string(),
            headline: page.hero.headline.to_string(),
            intro: page.hero.intro.to_string(),
            trust_indicators: page
                .trust_indicators
                .iter()
                .map(|indicator| LabelValue {
                    label: indicator.label.to_string(),
                    value: indicator.value.to_string(),
                })
                .collect(),
            featured,
            coming_soon,
            why_choose_us_heading: page.why_choose_us.heading.to_string(),
            why_choose_us_body: page.why_choose_us.body.to_string(),
            selling_points: page
                .why_choose_us
                .selling_points
                .iter()
                .map(ToString::to_string)
                .collect(),
            experience_badge: page.why_choose_us.experience_badge.to_string(),
            whatsapp_url: page.whatsapp_url.to_string(),
        }
    }
}

/// Landing Page Handler
///
/// Marketing content plus the newest products. A store failure falls back to
/// the coming-soon message instead of an error.
#[endpoint(tags("landing"), summary = "Landing Page")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LandingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = match state.app.products.list_products().await {
        Ok(products) => products,
        Err(error) => {
            warn!("catalog unavailable for landing page: {error}");

            Vec::new()
        }
    };

    Ok(Json(LandingPage::from_products(&products).into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use precast_app::{
        domain::{
            landing::COMING_SOON,
            products::{MockProductsService, ProductsServiceError},
        },
        rest::RestError,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("landing").get(handler))
    }

    #[tokio::test]
    async fn test_landing_features_first_three() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_list_products().once().return_once(|| {
            Ok(["a", "b", "c", "d"].into_iter().map(make_product).collect())
        });

        let response: LandingResponse = TestClient::get("http://example.com/landing")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let ids: Vec<&str> = response
            .featured
            .iter()
            .map(|card| card.id.as_str())
            .collect();

        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(response.coming_soon, None);
        assert_eq!(response.trust_indicators.len(), 4);
        assert_eq!(response.whatsapp_url, "https://wa.me/254799994758");

        Ok(())
    }

    #[tokio::test]
    async fn test_landing_store_failure_shows_coming_soon() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::Store(RestError::EmptyResponse)));

        let mut res = TestClient::get("http://example.com/landing")
            .send(&make_service(products))
            .await;

        let response: LandingResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(response.featured.is_empty());
        assert_eq!(response.coming_soon.as_deref(), Some(COMING_SOON));

        Ok(())
    }
}
