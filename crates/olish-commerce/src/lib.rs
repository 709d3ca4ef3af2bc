//! Shopping cart state for the Olish storefront.
//!
//! The storefront's pages, navbar and summary panel all read one cart. This
//! crate provides that cart and the values derived from it:
//!
//! - **Cart**: line items keyed by product id, the [`CartStore`] views
//!   subscribe to, and the badge / order summary read models
//! - **Session**: the provider that creates the cart at session start and
//!   drops it at session end
//! - **Money**: exact minor-unit amounts displayed as `Rs.X.XX`
//!
//! # Example
//!
//! ```rust
//! use olish_commerce::prelude::*;
//!
//! let session = CartSession::start(&StorefrontConfig::default())?;
//! let store = session.store();
//!
//! let serum = Product::new(1u32, "Niacinamide Serum", Money::from_decimal(1390.0)?, "serum.png");
//! store.add_to_cart(&serum);
//! store.add_to_cart(&serum);
//!
//! assert_eq!(store.cart_count(), 2);
//! assert_eq!(store.cart_total().display(), "Rs.2780.00");
//! assert_eq!(session.order_summary().total.display(), "Rs.2980.00");
//! # Ok::<(), olish_commerce::CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod config;
pub mod session;
pub mod telemetry;

pub use cart::{CartItem, CartStore, Product};
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use session::CartSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Cart
    pub use crate::cart::{
        items_heading, CartChange, CartEvent, CartItem, CartSnapshot, CartState, CartStore,
        NavBadge, OrderSummary, Product, Subscription,
    };

    // Session
    pub use crate::config::StorefrontConfig;
    pub use crate::session::CartSession;
}
