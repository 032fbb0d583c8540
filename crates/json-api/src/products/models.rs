//! Product request and response models.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use precast_app::domain::products::models::{
    NewProduct, Product, ProductUpdate, coerce_amount, non_negative,
};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Store-assigned product id
    pub id: String,

    pub name: String,

    pub description: Option<String>,

    /// Base price in KES
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub base_price: Decimal,

    /// Transport cost in KES
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub transport_cost: Decimal,

    /// Public image URLs in display order
    pub images: Vec<String>,

    pub is_available: bool,

    /// "In Stock" or "Out of Stock"
    pub status: String,

    /// The date and time the product was created
    pub created_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            status: product.availability_label().to_string(),
            created_at: product.created_at.as_ref().map(ToString::to_string),
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            base_price: product.base_price,
            transport_cost: product.transport_cost,
            images: product.images,
            is_available: product.is_available,
        }
    }
}

/// Products Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Products, newest first
    pub products: Vec<ProductResponse>,
}

/// Create Product Request
///
/// Missing or non-numeric prices become zero and negative prices are clamped
/// to zero.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "lenient_amount"
    )]
    #[salvo(schema(value_type = Option<f64>))]
    pub base_price: Option<Decimal>,

    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "lenient_amount"
    )]
    #[salvo(schema(value_type = Option<f64>))]
    pub transport_cost: Option<Decimal>,

    #[serde(default)]
    pub images: Vec<String>,

    /// Defaults to true
    #[serde(default)]
    pub is_available: Option<bool>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name.trim().to_string(),
            description: request.description.and_then(non_blank),
            base_price: request.base_price.map_or(Decimal::ZERO, non_negative),
            transport_cost: request.transport_cost.map_or(Decimal::ZERO, non_negative),
            images: request.images,
            is_available: request.is_available.unwrap_or(true),
        }
    }
}

/// Update Product Request
///
/// Only the fields present are changed. An empty description clears it and a
/// price that is present but not a number is saved as zero.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "lenient_amount"
    )]
    #[salvo(schema(value_type = Option<f64>))]
    pub base_price: Option<Decimal>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "lenient_amount"
    )]
    #[salvo(schema(value_type = Option<f64>))]
    pub transport_cost: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name.map(|name| name.trim().to_string()),
            description: request.description.map(non_blank),
            base_price: request.base_price.map(non_negative),
            transport_cost: request.transport_cost.map(non_negative),
            images: request.images,
            is_available: request.is_available,
        }
    }
}

fn non_blank(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(Decimal),
    Text(String),
    Other(IgnoredAny),
}

/// Accept a price as a number, numeric text or anything else, which becomes
/// zero. Only a missing field stays `None`.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(amount) => non_negative(amount),
        RawAmount::Text(text) => coerce_amount(Some(&text)),
        RawAmount::Other(_ignored) => Decimal::ZERO,
    };

    Ok(Some(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_applies_defaults_and_clamps() {
        let product = NewProduct::from(CreateProductRequest {
            name: "  Culvert Pipe 600mm ".to_string(),
            description: Some("   ".to_string()),
            base_price: Some(Decimal::from(4500)),
            transport_cost: Some(Decimal::from(-20)),
            images: Vec::new(),
            is_available: None,
        });

        assert_eq!(product.name, "Culvert Pipe 600mm");
        assert_eq!(product.description, None);
        assert_eq!(product.base_price, Decimal::from(4500));
        assert_eq!(product.transport_cost, Decimal::ZERO);
        assert!(product.is_available);
    }

    #[test]
    fn update_request_keeps_absent_fields_absent() {
        let update = ProductUpdate::from(UpdateProductRequest {
            is_available: Some(false),
            ..UpdateProductRequest::default()
        });

        assert_eq!(
            update,
            ProductUpdate {
                is_available: Some(false),
                ..ProductUpdate::default()
            }
        );
    }

    #[test]
    fn create_request_coerces_non_numeric_prices() -> Result<(), serde_json::Error> {
        let request: CreateProductRequest = serde_json::from_str(
            r#"{"name":"Kerb","base_price":"abc","transport_cost":" 250 "}"#,
        )?;
        let product = NewProduct::from(request);

        assert_eq!(product.base_price, Decimal::ZERO);
        assert_eq!(product.transport_cost, Decimal::from(250));

        let request: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Kerb","base_price":null,"transport_cost":true}"#)?;
        let product = NewProduct::from(request);

        assert_eq!(product.base_price, Decimal::ZERO);
        assert_eq!(product.transport_cost, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn update_request_present_non_numeric_price_becomes_zero() -> Result<(), serde_json::Error> {
        let request: UpdateProductRequest =
            serde_json::from_str(r#"{"base_price":"abc","transport_cost":12.5}"#)?;
        let update = ProductUpdate::from(request);

        assert_eq!(update.base_price, Some(Decimal::ZERO));
        assert_eq!(update.transport_cost, Some(Decimal::new(125, 1)));
        assert_eq!(update.name, None);

        Ok(())
    }

    #[test]
    fn empty_description_clears() {
        let update = ProductUpdate::from(UpdateProductRequest {
            description: Some(String::new()),
            ..UpdateProductRequest::default()
        });

        assert_eq!(update.description, Some(None));
    }
}
