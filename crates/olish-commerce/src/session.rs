//! Session-scoped cart provider.
//!
//! One `CartSession` exists per browsing session. It creates the cart
//! store when the session starts, hands shared handles to every view, and
//! tears the cart down when the session ends. Nothing is persisted.

use tracing::{info, info_span, Span};

use crate::cart::{CartSnapshot, CartStore, NavBadge, OrderSummary};
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::ids::SessionId;
use crate::money::Money;

/// Owner of the cart for one session.
#[derive(Debug)]
pub struct CartSession {
    id: SessionId,
    store: CartStore,
    shipping: Money,
    span: Span,
}

impl CartSession {
    /// Start a session with an empty cart.
    pub fn start(config: &StorefrontConfig) -> Result<Self, CommerceError> {
        Self::start_with_id(SessionId::generate(), config)
    }

    /// Start a session under a known id.
    pub fn start_with_id(id: SessionId, config: &StorefrontConfig) -> Result<Self, CommerceError> {
        let shipping = config.shipping.flat_rate_money()?;
        let span = info_span!("cart_session", session_id = %id);
        span.in_scope(|| info!(shipping = %shipping, "cart session started"));

        Ok(Self {
            id,
            store: CartStore::new(),
            shipping,
            span,
        })
    }

    /// Session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Shared handle to the session's cart.
    pub fn store(&self) -> CartStore {
        self.store.clone()
    }

    /// Flat shipping charge for this session.
    pub fn shipping(&self) -> Money {
        self.shipping
    }

    /// Navbar badge for the current cart.
    pub fn nav_badge(&self) -> NavBadge {
        NavBadge::from_snapshot(&self.store.snapshot())
    }

    /// Order summary for the current cart.
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::from_snapshot(&self.store.snapshot(), self.shipping)
    }

    /// End the session, returning the cart as it was before teardown.
    ///
    /// Subscribers see a final `Cleared` change if the cart held anything,
    /// then every subscription is dropped.
    pub fn end(self) -> CartSnapshot {
        let _entered = self.span.enter();
        let last = self.store.snapshot();
        info!(
            items = last.items.len(),
            count = last.count,
            total = %last.total,
            "cart session ended"
        );

        self.store.clear_cart();
        self.store.unsubscribe_all();
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartEvent, Product};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn serum() -> Product {
        Product::new(1u32, "Niacinamide Serum", Money::from_minor(139_000), "serum.png")
    }

    #[test]
    fn test_views_share_the_session_cart() {
        let session = CartSession::start(&StorefrontConfig::default()).unwrap();
        let listing = session.store();
        let cart_page = session.store();

        listing.add_to_cart(&serum());
        assert_eq!(cart_page.cart_count(), 1);
        assert_eq!(session.nav_badge().label().as_deref(), Some("1"));
        assert_eq!(session.order_summary().total.display(), "Rs.1590.00");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let config = StorefrontConfig::default();
        let a = CartSession::start(&config).unwrap();
        let b = CartSession::start(&config).unwrap();
        assert_ne!(a.id(), b.id());

        a.store().add_to_cart(&serum());
        assert!(b.store().is_empty());
    }

    #[test]
    fn test_end_clears_and_unsubscribes() {
        let session =
            CartSession::start_with_id(SessionId::new("sess-test"), &StorefrontConfig::default())
                .unwrap();
        let store = session.store();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store
            .subscribe(move |change| sink.borrow_mut().push(change.event.clone()))
            .detach();

        store.add_to_cart(&serum());
        store.add_to_cart(&serum());
        let last = session.end();

        assert_eq!(last.count, 2);
        assert!(store.is_empty());
        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(events.borrow().last(), Some(&CartEvent::Cleared));
    }

    #[test]
    fn test_invalid_shipping_rejected() {
        let mut config = StorefrontConfig::default();
        config.shipping.flat_rate = f64::NAN;
        assert!(CartSession::start(&config).is_err());
    }
}
