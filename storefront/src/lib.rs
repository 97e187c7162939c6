//! Pawshop storefront
//!
//! Client-rendered Leptos front-end for the pet shop:
//! - Navbar with cart badge, menu and cart drawer
//! - Checkout hand-off (stub alert or checkout form)
//! - Static marketing sections and the product listing
//!
//! All cart surfaces share one injected `CartHub`; none of them keep their
//! own copy of the cart beyond a signal refreshed on every change.

mod app;
mod components;
mod content;
mod pages;
mod sections;
mod state;

pub use app::App;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
