//! Shopping cart module.
//!
//! Contains the persisted line item shape, cart operations, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartLineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartPricing, LineItemPricing};
