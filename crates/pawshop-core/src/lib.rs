//! Shared state for the Pawshop storefront.
//!
//! This crate provides:
//! - `SignalBus` / `Subscription` - Payload-free change signal with RAII unsubscribe
//! - `CartHub` - Observable cart: persisted slot plus change signal
//! - `SiteConfig` - Storefront configuration (routes, checkout mode, logging)

mod config;
mod error;
mod hub;
mod signal;

pub use config::*;
pub use error::CoreError;
pub use hub::CartHub;
pub use signal::*;
