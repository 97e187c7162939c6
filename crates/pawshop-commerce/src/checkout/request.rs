//! Checkout hand-off from the cart drawer.

use crate::cart::{Cart, CartLineItem};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How the drawer's checkout button behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// Log the request and alert the product names. Nothing is submitted.
    Stub,
    /// Open the checkout form with the request.
    #[default]
    Form,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Stub => "stub",
            CheckoutMode::Form => "form",
        }
    }

    /// Decide what the checkout button does for this cart.
    ///
    /// Returns `Ok(None)` for an empty cart: checkout never opens without
    /// items. A cart whose total cannot be computed is an error.
    pub fn begin(&self, cart: &Cart) -> Result<Option<CheckoutAction>, CommerceError> {
        let request = match CheckoutRequest::from_cart(cart) {
            Ok(request) => request,
            Err(CommerceError::EmptyCart) => return Ok(None),
            Err(err) => return Err(err),
        };
        Ok(Some(match self {
            CheckoutMode::Stub => CheckoutAction::Alert(request.alert_message()),
            CheckoutMode::Form => CheckoutAction::OpenForm(request),
        }))
    }
}

/// Outcome of pressing checkout on a non-empty cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutAction {
    /// Show a browser alert with this text.
    Alert(String),
    /// Open the checkout form for this request.
    OpenForm(CheckoutRequest),
}

/// Everything the checkout surface receives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    /// Item names joined for display.
    pub product_names: String,
    /// Snapshot of the cart lines.
    pub items: Vec<CartLineItem>,
    /// Cart total at the time of checkout.
    pub total: Money,
}

impl CheckoutRequest {
    /// Snapshot a cart for checkout.
    pub fn from_cart(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            product_names: cart.product_names(),
            items: cart.items().to_vec(),
            total: cart.total()?,
        })
    }

    /// Text shown by the stub checkout.
    pub fn alert_message(&self) -> String {
        format!(
            "Proceeding to checkout with: {} (Total: {})",
            self.product_names,
            self.total.display()
        )
    }
}
