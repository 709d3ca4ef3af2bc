//! Product descriptors and cart line items.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as offered by a listing, ready to be put in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image path shown next to the item.
    pub image: String,
}

impl Product {
    /// Create a new product descriptor.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// A line item in the cart.
///
/// Fields are read-only outside the cart so the quantity can never drop
/// below one while the item is held.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartItem {
    id: ProductId,
    name: String,
    price: Money,
    image: String,
    quantity: u32,
}

impl CartItem {
    /// A fresh line holding one unit of `product`.
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Product id.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Name captured when the product was first added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price captured when the product was first added.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Image path.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Units of this product in the cart, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Caller guarantees `quantity >= 1`.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity >= 1);
        self.quantity = quantity;
    }
}
