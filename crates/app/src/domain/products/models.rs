//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque product identifier assigned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a store-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned id, never changes.
    pub id: ProductId,
    /// Display name, never blank.
    pub name: String,
    /// Optional blurb.
    #[serde(default)]
    pub description: Option<String>,
    /// Price in KES, never negative.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    /// Delivery cost in KES, never negative.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub transport_cost: Decimal,
    /// Public image URLs in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    /// Whether the product is in stock. A missing or null value reads as true.
    #[serde(default = "available", deserialize_with = "null_as_available")]
    pub is_available: bool,
    /// Set by the store on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Product {
    /// First image, used as the card cover.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Stock label shown in the admin listing.
    #[must_use]
    pub fn availability_label(&self) -> &'static str {
        if self.is_available {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

/// New Product Model
///
/// Fully resolved insert payload; every default has already been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    /// Trimmed, non-blank name.
    pub name: String,
    /// Description, `None` when left blank.
    pub description: Option<String>,
    /// Price in KES.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    /// Delivery cost in KES.
    #[serde(with = "rust_decimal::serde::float")]
    pub transport_cost: Decimal,
    /// Image URLs in display order.
    pub images: Vec<String>,
    /// Stock flag.
    pub is_available: bool,
}

impl NewProduct {
    /// A product with the given name and every other field defaulted.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            base_price: Decimal::ZERO,
            transport_cost: Decimal::ZERO,
            images: Vec::new(),
            is_available: true,
        }
    }
}

/// Product Update Model
///
/// Partial update: fields left as `None` are not sent and stay untouched.
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, or `Some(None)` to clear it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    /// New price in KES.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub base_price: Option<Decimal>,
    /// New delivery cost in KES.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub transport_cost: Option<Decimal>,
    /// Replacement image list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// New stock flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl ProductUpdate {
    /// Whether the update carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Coerce a raw price input to a non-negative amount.
///
/// Missing, non-numeric and negative input all become zero.
#[must_use]
pub fn coerce_amount(raw: Option<&str>) -> Decimal {
    raw.map(str::trim)
        .and_then(|value| value.parse::<Decimal>().ok())
        .map_or(Decimal::ZERO, non_negative)
}

/// Clamp a negative amount to zero.
#[must_use]
pub fn non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

const fn available() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_available<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|value| value.unwrap_or(true))
}
