//! Checkout module.
//!
//! Contains the checkout mode switch, the request handed to the checkout
//! surface, and the customer details form model.

mod details;
mod request;

pub use details::{CheckoutDetails, FieldError, PHONE_DIGITS};
pub use request::{CheckoutAction, CheckoutMode, CheckoutRequest};
