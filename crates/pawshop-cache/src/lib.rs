//! Type-safe key-value storage for the Pawshop storefront.
//!
//! Wraps browser local storage (or an in-memory map off the browser) with
//! automatic JSON serialization, and exposes the persisted cart slot.
//!
//! # Example
//!
//! ```rust
//! use pawshop_cache::{Cache, CartStore};
//!
//! let store = CartStore::new(Cache::in_memory());
//!
//! // A missing or corrupt slot reads as an empty cart.
//! let cart = store.read();
//! assert!(cart.is_empty());
//!
//! store.write(&cart).unwrap();
//! ```

#[cfg(target_arch = "wasm32")]
mod browser;
mod cart_store;
mod error;
mod kv;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
pub use cart_store::{CartStore, CART_KEY};
pub use error::CacheError;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, CartStore, KeyValueStore, MemoryStore};
}
