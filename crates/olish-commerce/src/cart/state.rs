//! Cart contents and the rules that keep them consistent.

use crate::cart::item::{CartItem, Product};
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// What a mutation did to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    /// A unit was added; `quantity` is the line's new quantity.
    Added { id: ProductId, quantity: u32 },
    /// A line left the cart.
    Removed { id: ProductId },
    /// A line's quantity was set.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// Every line was removed.
    Cleared,
}

/// The ordered line items of one cart.
///
/// Holds at most one line per product id, and every line has a quantity of
/// at least one. Count and total are always computed from the lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// An existing line keeps its position, name, price and image; a new
    /// product is appended.
    pub fn add_to_cart(&mut self, product: &Product) -> CartEvent {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id() == &product.id) {
            existing.increment();
            return CartEvent::Added {
                id: product.id.clone(),
                quantity: existing.quantity(),
            };
        }

        self.items.push(CartItem::from_product(product));
        CartEvent::Added {
            id: product.id.clone(),
            quantity: 1,
        }
    }

    /// Remove the line for `id` whatever its quantity.
    ///
    /// Returns `None` when the id is not in the cart.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Option<CartEvent> {
        let position = self.items.iter().position(|i| i.id() == id)?;
        self.items.remove(position);
        Some(CartEvent::Removed { id: id.clone() })
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. Quantities beyond
    /// `u32::MAX` are stored as `u32::MAX`. Returns `None` when the id is
    /// not in the cart or the quantity is unchanged.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Option<CartEvent> {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let item = self.items.iter_mut().find(|i| i.id() == id)?;
        if item.quantity() == quantity {
            return None;
        }
        item.set_quantity(quantity);
        Some(CartEvent::QuantityChanged {
            id: id.clone(),
            quantity,
        })
    }

    /// Remove every line. Returns `None` when the cart was already empty.
    pub fn clear_cart(&mut self) -> Option<CartEvent> {
        if self.items.is_empty() {
            return None;
        }
        self.items.clear();
        Some(CartEvent::Cleared)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Line for `id`, if present.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Sum of quantities.
    pub fn cart_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }

    /// Sum of price times quantity.
    pub fn cart_total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
