//! Shared cart store with change notification.
//!
//! `CartStore` is a cheap, clonable handle over one [`CartState`]. Views
//! hold clones of the handle, never copies of the items. Every mutation
//! that changes the cart bumps a version and notifies subscribers
//! synchronously, after the state is fully updated.
//!
//! # Notification order
//!
//! Subscribers run in registration order. A subscriber may call back into
//! the store; the resulting change is queued and delivered once the current
//! change has reached every subscriber, so all subscribers observe changes
//! in the order the operations were invoked.
//!
//! The store is single-threaded (`Rc`/`RefCell`) and is not `Send`.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;
use tracing::{debug, trace};

use crate::cart::item::{CartItem, Product};
use crate::cart::state::{CartEvent, CartState};
use crate::ids::ProductId;
use crate::money::Money;

type Callback = Rc<dyn Fn(&CartChange)>;

/// Cart contents and derived values at one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<CartItem>,
    /// Sum of quantities.
    pub count: u64,
    /// Sum of price times quantity.
    pub total: Money,
    /// Store version this snapshot was taken at.
    pub version: u64,
}

impl CartSnapshot {
    fn capture(state: &CartState, version: u64) -> Self {
        Self {
            items: state.items().to_vec(),
            count: state.cart_count(),
            total: state.cart_total(),
            version,
        }
    }

    /// Check if the cart was empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A change delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartChange {
    /// What the mutation did.
    pub event: CartEvent,
    /// The cart right after the mutation.
    pub snapshot: CartSnapshot,
}

impl CartChange {
    /// Version produced by the mutation.
    pub fn version(&self) -> u64 {
        self.snapshot.version
    }
}

struct Inner {
    state: RefCell<CartState>,
    version: Cell<u64>,
    observers: RefCell<Vec<(u64, Callback)>>,
    next_observer_id: Cell<u64>,
    pending: RefCell<VecDeque<CartChange>>,
    notifying: Cell<bool>,
}

/// Ends a delivery cycle, even one cut short by a panicking subscriber.
///
/// Changes still queued when a subscriber panics are discarded; later
/// subscribers can read the current state from the next change.
struct NotifyGuard<'a>(&'a Inner);

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.notifying.set(false);
    }
}

/// Handle to the session's cart.
///
/// # Example
///
/// ```
/// use olish_commerce::prelude::*;
///
/// let store = CartStore::new();
/// let badge = store.subscribe(|change| {
///     println!("{} items in cart", change.snapshot.count);
/// });
///
/// let serum = Product::new(1u32, "Niacinamide Serum", Money::from_minor(139_000), "serum.png");
/// store.add_to_cart(&serum);
/// assert_eq!(store.cart_count(), 1);
/// drop(badge);
/// ```
#[derive(Clone)]
pub struct CartStore {
    inner: Rc<Inner>,
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(CartState::new()),
                version: Cell::new(0),
                observers: RefCell::new(Vec::new()),
                next_observer_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Add one unit of `product`.
    pub fn add_to_cart(&self, product: &Product) {
        self.apply("add_to_cart", |state| Some(state.add_to_cart(product)));
    }

    /// Remove the line for `id`; unknown ids are ignored.
    pub fn remove_from_cart(&self, id: &ProductId) {
        self.apply("remove_from_cart", |state| state.remove_from_cart(id));
    }

    /// Set the quantity for `id`; zero or less removes the line.
    pub fn update_quantity(&self, id: &ProductId, quantity: i64) {
        self.apply("update_quantity", |state| state.update_quantity(id, quantity));
    }

    /// Remove every line.
    pub fn clear_cart(&self) {
        self.apply("clear_cart", CartState::clear_cart);
    }

    /// Copy of the line items in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.inner.state.borrow().items().to_vec()
    }

    /// Copy of the line for `id`, if present.
    pub fn get(&self, id: &ProductId) -> Option<CartItem> {
        self.inner.state.borrow().get(id).cloned()
    }

    /// Sum of quantities.
    pub fn cart_count(&self) -> u64 {
        self.inner.state.borrow().cart_count()
    }

    /// Sum of price times quantity.
    pub fn cart_total(&self) -> Money {
        self.inner.state.borrow().cart_total()
    }

    /// Cart total in rupees as a float.
    pub fn cart_total_decimal(&self) -> f64 {
        self.cart_total().to_decimal()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.state.borrow().is_empty()
    }

    /// Number of changes applied so far.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Consistent copy of items, count and total.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::capture(&self.inner.state.borrow(), self.inner.version.get())
    }

    /// Register `callback` to run after every change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&CartChange) + 'static,
    {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        trace!(observer = id, "subscribed to cart");

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
            active: true,
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Drop every subscriber; outstanding `Subscription`s become inert.
    pub fn unsubscribe_all(&self) {
        self.inner.observers.borrow_mut().clear();
    }

    fn apply<F>(&self, op: &'static str, mutate: F)
    where
        F: FnOnce(&mut CartState) -> Option<CartEvent>,
    {
        let change = {
            let mut state = self.inner.state.borrow_mut();
            let Some(event) = mutate(&mut *state) else {
                trace!(op, "cart unchanged");
                return;
            };

            let version = self.inner.version.get() + 1;
            self.inner.version.set(version);
            debug!(
                op,
                ?event,
                version,
                count = state.cart_count(),
                total = %state.cart_total(),
                "cart updated"
            );

            if self.inner.observers.borrow().is_empty() {
                return;
            }
            CartChange {
                event,
                snapshot: CartSnapshot::capture(&state, version),
            }
        };

        self.inner.pending.borrow_mut().push_back(change);
        self.flush();
    }

    fn flush(&self) {
        // A subscriber is mutating the store; the outer loop delivers it.
        if self.inner.notifying.replace(true) {
            return;
        }
        let _guard = NotifyGuard(&self.inner);

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(change) = next else {
                break;
            };

            let observers: Vec<Callback> = self
                .inner
                .observers
                .borrow()
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect();
            for callback in observers {
                callback(&change);
            }
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.inner.state.borrow())
            .field("version", &self.inner.version.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a callback registered with a [`CartStore`].
///
/// Dropping the subscription unregisters the callback; it will not run for
/// any change delivered afterwards.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
    active: bool,
}

impl Subscription {
    /// Keep the callback registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.active = false;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Some(inner) = self.store.upgrade() {
            inner.observers.borrow_mut().retain(|(id, _)| *id != self.id);
            trace!(observer = self.id, "unsubscribed from cart");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
