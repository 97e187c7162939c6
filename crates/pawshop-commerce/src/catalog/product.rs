//! Catalog products that can be put in the cart.

use crate::cart::CartLineItem;
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product shown on the listing page and the pet food section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier, also used as the cart line id.
    pub id: ProductId,
    /// Category the product is listed under.
    pub category_id: Option<CategoryId>,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Display asset reference.
    pub image_url: String,
    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id,
            category_id: None,
            name: name.into(),
            description: String::new(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Build a cart line for this product.
    pub fn to_line_item(&self, quantity: u32) -> Result<CartLineItem, CommerceError> {
        CartLineItem::new(
            self.id,
            self.name.clone(),
            self.image_url.clone(),
            self.price,
            quantity,
        )
    }

    /// Price formatted for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}
