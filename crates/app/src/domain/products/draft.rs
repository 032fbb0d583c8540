//! Product Draft

use crate::domain::products::{
    errors::ValidationError,
    models::{NewProduct, Product, ProductId, ProductUpdate, coerce_amount},
};

/// A product being composed in the admin editor.
///
/// Every field is optional and price fields keep the raw text the admin typed.
/// Nothing here is persisted until it is converted with [`Self::to_new_product`]
/// or [`Self::to_update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    /// Set when editing an existing product, `None` when creating.
    pub id: Option<ProductId>,

    /// Name as typed.
    pub name: Option<String>,

    /// Description as typed. Blank clears it on save.
    pub description: Option<String>,

    /// Raw base price text.
    pub base_price: Option<String>,

    /// Raw transport cost text.
    pub transport_cost: Option<String>,

    /// Image URLs in display order.
    pub images: Option<Vec<String>>,

    /// Stock flag. Unset means available.
    pub is_available: Option<bool>,
}

impl ProductDraft {
    /// Seed a draft from the current values of a stored product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: Some(product.name.clone()),
            description: product.description.clone(),
            base_price: Some(product.base_price.to_string()),
            transport_cost: Some(product.transport_cost.to_string()),
            images: Some(product.images.clone()),
            is_available: Some(product.is_available),
        }
    }

    /// Whether the name has any non-whitespace text.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Current images, empty when none were set.
    #[must_use]
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    /// Append uploaded URLs after the existing images.
    pub fn append_images(&mut self, urls: impl IntoIterator<Item = String>) {
        self.images.get_or_insert_with(Vec::new).extend(urls);
    }

    /// Drop the image at `index`, keeping the others in order.
    ///
    /// Only the draft changes; the stored object is left in place.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        let images = self.images.as_mut()?;

        (index < images.len()).then(|| images.remove(index))
    }

    /// Resolve the draft into an insert payload, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] when the name is empty.
    pub fn to_new_product(&self) -> Result<NewProduct, ValidationError> {
        let name = self.required_name()?;

        Ok(NewProduct {
            name,
            description: self.normalized_description(),
            base_price: coerce_amount(self.base_price.as_deref()),
            transport_cost: coerce_amount(self.transport_cost.as_deref()),
            images: self.images.clone().unwrap_or_default(),
            is_available: self.is_available.unwrap_or(true),
        })
    }

    /// Resolve the draft into a partial update carrying only the fields the
    /// draft holds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] when the name is empty.
    pub fn to_update(&self) -> Result<ProductUpdate, ValidationError> {
        let name = self.required_name()?;

        Ok(ProductUpdate {
            name: Some(name),
            description: self
                .description
                .as_ref()
                .map(|_| self.normalized_description()),
            base_price: self
                .base_price
                .as_deref()
                .map(|raw| coerce_amount(Some(raw))),
            transport_cost: self
                .transport_cost
                .as_deref()
                .map(|raw| coerce_amount(Some(raw))),
            images: self.images.clone(),
            is_available: self.is_available,
        })
    }

    fn required_name(&self) -> Result<String, ValidationError> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or(ValidationError::MissingName)
    }

    fn normalized_description(&self) -> Option<String> {
        self.description
            .as_ref()
            .filter(|description| !description.trim().is_empty())
            .cloned()
    }
}
