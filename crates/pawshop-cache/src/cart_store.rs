//! The persisted cart slot.

use pawshop_commerce::cart::Cart;

use crate::{Cache, CacheError};

/// Storage key of the cart slot.
pub const CART_KEY: &str = "cart";

/// Reads and writes the whole cart under a single key.
#[derive(Debug, Clone)]
pub struct CartStore {
    cache: Cache,
    key: String,
}

impl CartStore {
    /// Cart store under the default `"cart"` key.
    pub fn new(cache: Cache) -> Self {
        Self::with_key(cache, CART_KEY)
    }

    /// Cart store under a custom key.
    pub fn with_key(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the cart, reporting decode failures.
    ///
    /// A missing slot is an empty cart. Lines with a zero quantity are
    /// dropped and oversized quantities capped, and the repaired cart is
    /// written back so the slot never keeps lines no read would return.
    pub fn try_read(&self) -> Result<Cart, CacheError> {
        let mut cart: Cart = self.cache.get(&self.key)?.unwrap_or_default();
        let touched = cart.sanitize();
        if touched > 0 {
            tracing::warn!(key = %self.key, lines = touched, "repaired invalid cart lines");
            if let Err(err) = self.write(&cart) {
                tracing::warn!(key = %self.key, error = %err, "failed to persist repaired cart");
            }
        }
        Ok(cart)
    }

    /// Read the cart, falling back to an empty cart on any error.
    pub fn read(&self) -> Cart {
        match self.try_read() {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cart slot unreadable, using empty cart");
                Cart::default()
            }
        }
    }

    /// Replace the stored cart.
    pub fn write(&self, cart: &Cart) -> Result<(), CacheError> {
        self.cache.set(&self.key, cart)
    }

    /// Remove the slot entirely.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }
}
