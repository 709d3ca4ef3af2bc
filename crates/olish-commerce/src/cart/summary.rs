//! Read models derived from a cart snapshot.
//!
//! These are what the navbar and cart page render; they hold no state of
//! their own and are rebuilt from each [`CartSnapshot`].

use crate::cart::store::CartSnapshot;
use crate::money::Money;
use serde::Serialize;

/// Cart badge shown in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavBadge {
    /// Units in the cart.
    pub count: u64,
}

impl NavBadge {
    /// Build the badge for `snapshot`.
    pub fn from_snapshot(snapshot: &CartSnapshot) -> Self {
        Self {
            count: snapshot.count,
        }
    }

    /// Badge text, or `None` when the badge is hidden.
    pub fn label(&self) -> Option<String> {
        (self.count > 0).then(|| self.count.to_string())
    }
}

/// Heading above the cart lines, e.g. "2 Items in Cart".
pub fn items_heading(count: u64) -> String {
    let noun = if count == 1 { "Item" } else { "Items" };
    format!("{} {} in Cart", count, noun)
}

/// Order summary panel on the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Units in the cart.
    pub item_count: u64,
    /// Cart total before shipping.
    pub subtotal: Money,
    /// Flat shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

impl OrderSummary {
    /// Summarize `snapshot` with a flat `shipping` charge.
    pub fn from_snapshot(snapshot: &CartSnapshot, shipping: Money) -> Self {
        Self {
            item_count: snapshot.count,
            subtotal: snapshot.total,
            shipping,
            total: snapshot.total + shipping,
        }
    }

    /// The page shows its empty state instead of a summary.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartStore, Product};

    fn snapshot_with(quantities: &[(u32, u64, u32)]) -> CartSnapshot {
        let store = CartStore::new();
        for &(id, price, qty) in quantities {
            let product = Product::new(id, "p", Money::from_minor(price), "p.png");
            for _ in 0..qty {
                store.add_to_cart(&product);
            }
        }
        store.snapshot()
    }

    #[test]
    fn test_badge_hidden_when_empty() {
        let badge = NavBadge::from_snapshot(&snapshot_with(&[]));
        assert_eq!(badge.label(), None);

        let badge = NavBadge::from_snapshot(&snapshot_with(&[(1, 100, 2), (2, 100, 1)]));
        assert_eq!(badge.label().as_deref(), Some("3"));
    }

    #[test]
    fn test_items_heading() {
        assert_eq!(items_heading(1), "1 Item in Cart");
        assert_eq!(items_heading(4), "4 Items in Cart");
        assert_eq!(items_heading(0), "0 Items in Cart");
    }

    #[test]
    fn test_order_summary_adds_shipping() {
        let snapshot = snapshot_with(&[(1, 139_000, 1), (2, 199_000, 1)]);
        let summary = OrderSummary::from_snapshot(&snapshot, Money::from_minor(20_000));

        assert_eq!(summary.subtotal.display(), "Rs.3380.00");
        assert_eq!(summary.shipping.display(), "Rs.200.00");
        assert_eq!(summary.total.display(), "Rs.3580.00");
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_order_summary_empty() {
        let summary = OrderSummary::from_snapshot(&snapshot_with(&[]), Money::from_minor(20_000));
        assert!(summary.is_empty());
        assert_eq!(summary.subtotal, Money::ZERO);
    }
}
