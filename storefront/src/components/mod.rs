//! Interactive components that read or change the cart.

mod cart_drawer;
mod checkout_form;
mod navbar;
mod product_card;

pub use cart_drawer::CartDrawer;
pub use checkout_form::CheckoutForm;
pub use navbar::Navbar;
pub use product_card::ProductCard;

/// Blocking browser alert.
#[cfg(target_arch = "wasm32")]
pub(crate) fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        tracing::warn!(message, "alert could not be shown");
    }
}

/// Blocking browser alert. Logged instead off the browser.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn alert(message: &str) {
    tracing::info!(message, "alert");
}
