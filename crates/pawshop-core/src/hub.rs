//! The observable cart: one store, one signal, injected into every surface.

use pawshop_cache::{Cache, CartStore};
use pawshop_commerce::cart::{Cart, CartLineItem};
use pawshop_commerce::{CommerceError, ProductId};

use crate::signal::{SignalBus, Subscription, CART_UPDATED};
use crate::CoreError;

/// Owns the persisted cart and its change signal.
///
/// Every mutation is a full read, modify, write, publish cycle. Listeners
/// run only after the write has completed, so a `read()` from inside a
/// listener sees the change that triggered it. Mutations that change nothing
/// neither write nor publish.
///
/// Clones share the same store and listeners.
#[derive(Debug, Clone)]
pub struct CartHub {
    store: CartStore,
    bus: SignalBus,
}

impl CartHub {
    /// Hub over an existing cart store.
    pub fn new(store: CartStore) -> Self {
        Self {
            store,
            bus: SignalBus::new(CART_UPDATED),
        }
    }

    /// Hub over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(CartStore::new(Cache::in_memory()))
    }

    /// Hub over browser local storage under `key`.
    #[cfg(target_arch = "wasm32")]
    pub fn browser(key: &str) -> Result<Self, CoreError> {
        Ok(Self::new(CartStore::with_key(Cache::browser()?, key)))
    }

    /// Current cart. Never fails; an unreadable slot is an empty cart.
    pub fn read(&self) -> Cart {
        self.store.read()
    }

    /// Register a change listener. Keep the subscription while mounted.
    pub fn subscribe(&self, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.bus.subscribe(handler)
    }

    /// The change signal.
    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    /// The persisted slot.
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Add an item, merging quantity into an existing line for the same product.
    pub fn add_item(&self, item: CartLineItem) -> Result<bool, CoreError> {
        self.mutate("add_item", |cart| {
            cart.add_item(item)?;
            Ok(true)
        })
    }

    /// Remove every line for a product. Unknown ids are a no-op.
    pub fn remove_item(&self, id: ProductId) -> Result<bool, CoreError> {
        self.mutate("remove_item", |cart| Ok(cart.remove_item(id)))
    }

    /// Set a product's quantity. Quantities below one are rejected unchanged.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) -> Result<bool, CoreError> {
        self.mutate("update_quantity", |cart| cart.update_quantity(id, quantity))
    }

    /// Empty the cart.
    pub fn clear(&self) -> Result<bool, CoreError> {
        self.mutate("clear", |cart| {
            let had_items = !cart.is_empty();
            cart.clear();
            Ok(had_items)
        })
    }

    fn mutate<F>(&self, op: &'static str, apply: F) -> Result<bool, CoreError>
    where
        F: FnOnce(&mut Cart) -> Result<bool, CommerceError>,
    {
        let mut cart = self.store.read();

        let changed = match apply(&mut cart) {
            Ok(changed) => changed,
            Err(err) => {
                tracing::debug!(op, error = %err, "cart change rejected");
                return Err(err.into());
            }
        };
        if !changed {
            tracing::debug!(op, "cart unchanged");
            return Ok(false);
        }

        self.store.write(&cart)?;
        tracing::debug!(op, lines = cart.len(), "cart updated");
        self.bus.publish();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawshop_commerce::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn food(quantity: u32) -> CartLineItem {
        CartLineItem::new(
            ProductId::new(1),
            "Food",
            "/food.png",
            Money::from_decimal(100.0, Currency::INR).unwrap(),
            quantity,
        )
        .unwrap()
    }

    fn publish_counter(hub: &CartHub) -> (Arc<AtomicUsize>, Subscription) {
        let count = Arc::new(AtomicUsize::new(0));
        let sub = hub.subscribe({
            let count = count.clone();
            move || {
                count.fetch_add(1, Ordering::SeqCst);
            }
        });
        (count, sub)
    }

    #[test]
    fn test_add_item_writes_and_publishes() {
        let hub = CartHub::in_memory();
        let (count, _sub) = publish_counter(&hub);

        assert!(hub.add_item(food(2)).unwrap());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(hub.store().try_read().unwrap(), hub.read());
        assert_eq!(hub.read().total().unwrap().display(), "Rs. 200.00");
    }

    #[test]
    fn test_listener_sees_the_write() {
        let hub = CartHub::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _sub = hub.subscribe({
            let hub = hub.clone();
            let seen = seen.clone();
            move || seen.lock().unwrap().push(hub.read().item_count())
        });

        hub.add_item(food(2)).unwrap();
        hub.update_quantity(ProductId::new(1), 3).unwrap();
        hub.remove_item(ProductId::new(1)).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![2, 3, 0]);
    }

    #[test]
    fn test_invalid_quantity_is_rejected_without_publish() {
        let hub = CartHub::in_memory();
        hub.add_item(food(2)).unwrap();
        let (count, _sub) = publish_counter(&hub);
        let before = hub.read();

        let err = hub.update_quantity(ProductId::new(1), 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Commerce(CommerceError::InvalidQuantity(0))
        ));
        assert_eq!(hub.read(), before);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_noops_do_not_publish() {
        let hub = CartHub::in_memory();
        hub.add_item(food(2)).unwrap();
        let (count, _sub) = publish_counter(&hub);

        assert!(!hub.remove_item(ProductId::new(99)).unwrap());
        assert!(!hub.update_quantity(ProductId::new(99), 4).unwrap());
        assert!(!hub.update_quantity(ProductId::new(1), 2).unwrap());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clear() {
        let hub = CartHub::in_memory();
        let (count, _sub) = publish_counter(&hub);

        assert!(!hub.clear().unwrap());
        hub.add_item(food(1)).unwrap();
        assert!(hub.clear().unwrap());
        assert!(hub.read().is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let hub = CartHub::in_memory();
        let navbar = hub.clone();
        let (count, _sub) = publish_counter(&navbar);

        hub.add_item(food(1)).unwrap();
        assert_eq!(navbar.read().len(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_corrupt_slot_is_replaced_on_next_write() {
        let cache = Cache::in_memory();
        cache.set_raw("cart", "not json").unwrap();
        let hub = CartHub::new(CartStore::new(cache.clone()));

        assert!(hub.read().is_empty());
        hub.add_item(food(1)).unwrap();
        assert_eq!(hub.store().try_read().unwrap().len(), 1);
    }

    #[test]
    fn test_capped_quantity_reaches_the_slot() {
        let cache = Cache::in_memory();
        cache
            .set_raw(
                "cart",
                r#"[{"id":1,"name":"Food","imageUrl":"/f.png","price":100,"quantity":20000}]"#,
            )
            .unwrap();
        let hub = CartHub::new(CartStore::new(cache.clone()));

        assert!(!hub.update_quantity(ProductId::new(1), 9999).unwrap());
        let stored: Cart = cache.get("cart").unwrap().unwrap();
        assert_eq!(stored.items()[0].quantity, 9999);
    }

    #[test]
    fn test_unpriceable_slot_is_never_rewritten_with_a_clamped_price() {
        let cache = Cache::in_memory();
        let raw = r#"[{"id":1,"name":"Food","imageUrl":"/f.png","price":1e300,"quantity":1}]"#;
        cache.set_raw("cart", raw).unwrap();
        let hub = CartHub::new(CartStore::new(cache.clone()));

        assert!(hub.read().is_empty());
        assert!(!hub.update_quantity(ProductId::new(1), 2).unwrap());
        assert_eq!(cache.get_raw("cart").unwrap().as_deref(), Some(raw));

        hub.add_item(food(1)).unwrap();
        let stored = hub.store().try_read().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.total().unwrap().display(), "Rs. 100.00");
    }
}
