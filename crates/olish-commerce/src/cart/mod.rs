//! Shopping cart module.
//!
//! Contains the line item types, the cart state rules, the shared store
//! views subscribe to, and the read models built from it.

mod item;
mod state;
mod store;
mod summary;

pub use item::{CartItem, Product};
pub use state::{CartEvent, CartState};
pub use store::{CartChange, CartSnapshot, CartStore, Subscription};
pub use summary::{items_heading, NavBadge, OrderSummary};
