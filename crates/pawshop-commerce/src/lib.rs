//! E-commerce domain types for the Pawshop storefront.
//!
//! - **Cart**: persisted line items, quantity rules, totals
//! - **Checkout**: checkout mode, hand-off request, customer details
//! - **Catalog**: products and pet categories
//!
//! # Example
//!
//! ```rust
//! use pawshop_commerce::prelude::*;
//!
//! let food = Product::new(
//!     ProductId::new(1),
//!     "Food",
//!     "/food.png",
//!     Money::from_decimal(100.0, Currency::INR).unwrap(),
//! );
//!
//! let mut cart = Cart::new();
//! cart.add_item(food.to_line_item(2).unwrap()).unwrap();
//! assert_eq!(cart.total().unwrap().display(), "Rs. 200.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{Cart, CartLineItem, CartPricing, LineItemPricing, MAX_QUANTITY_PER_ITEM};
    pub use crate::catalog::{Category, Product};
    pub use crate::checkout::{
        CheckoutAction, CheckoutDetails, CheckoutMode, CheckoutRequest, FieldError,
    };
}
