//! Payload-free change signal shared by every cart surface.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Name of the cart change signal.
pub const CART_UPDATED: &str = "cartUpdated";

type Handler = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Handler)>,
}

/// A broadcast channel with no payload.
///
/// Listeners re-read whatever state they care about when the signal fires.
/// Clones share the same listener list.
#[derive(Clone)]
pub struct SignalBus {
    name: Arc<str>,
    listeners: Arc<Mutex<Listeners>>,
}

impl fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalBus")
            .field("name", &self.name)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new(CART_UPDATED)
    }
}

impl SignalBus {
    /// Create a bus with no listeners.
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    /// Signal name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a listener.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or unsubscribed; keep it for as long as the subscriber is mounted.
    pub fn subscribe(&self, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut listeners = self.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(handler)));
        tracing::trace!(signal = %self.name, id, "subscribed");

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Notify every listener, in subscription order.
    ///
    /// No lock is held while a listener runs, so listeners may subscribe,
    /// unsubscribe or publish. A listener removed during this call is skipped;
    /// one added during this call first fires on the next publish.
    /// Returns the number of listeners invoked.
    pub fn publish(&self) -> usize {
        let snapshot: Vec<(u64, Handler)> = self.lock().entries.clone();

        let mut notified = 0;
        for (id, handler) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            handler();
            notified += 1;
        }
        tracing::trace!(signal = %self.name, notified, "published");
        notified
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.lock().entries.len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.lock().entries.iter().any(|(entry, _)| *entry == id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Subscription {
    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Whether the listener is still registered on a live bus.
    pub fn is_active(&self) -> bool {
        self.listeners.upgrade().is_some_and(|listeners| {
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entries
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = {
            let count = count.clone();
            move || {
                count.fetch_add(1, Ordering::SeqCst);
            }
        };
        (count, handler)
    }

    #[test]
    fn test_publish_reaches_every_listener() {
        let bus = SignalBus::default();
        let (a, on_a) = counter();
        let (b, on_b) = counter();
        let _sa = bus.subscribe(on_a);
        let _sb = bus.subscribe(on_b);

        assert_eq!(bus.publish(), 2);
        assert_eq!(bus.publish(), 2);
        assert_eq!(a.load(Ordering::SeqCst), 2);
        assert_eq!(b.load(Ordering::SeqCst), 2);
        assert_eq!(bus.name(), CART_UPDATED);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = SignalBus::default();
        let (count, handler) = counter();
        let sub = bus.subscribe(handler);
        assert!(sub.is_active());
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.publish(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let bus = SignalBus::default();
        let (_, handler) = counter();
        let sub = bus.subscribe(handler);
        sub.unsubscribe();
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_clones_share_listeners() {
        let bus = SignalBus::default();
        let other = bus.clone();
        let (count, handler) = counter();
        let _sub = bus.subscribe(handler);

        other.publish();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus = SignalBus::default();
        let (_, handler) = counter();
        let sub = bus.subscribe(handler);
        drop(bus);
        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn test_listener_may_subscribe_during_publish() {
        let bus = SignalBus::default();
        let late = Arc::new(Mutex::new(Vec::new()));
        let (late_count, _) = counter();

        let _sub = bus.subscribe({
            let bus = bus.clone();
            let late = late.clone();
            let late_count = late_count.clone();
            move || {
                let late_count = late_count.clone();
                let sub = bus.subscribe(move || {
                    late_count.fetch_add(1, Ordering::SeqCst);
                });
                late.lock().unwrap().push(sub);
            }
        });

        assert_eq!(bus.publish(), 1);
        assert_eq!(late_count.load(Ordering::SeqCst), 0);
        // The listener added above fires from now on.
        assert_eq!(bus.publish(), 2);
        assert_eq!(late_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_removed_during_publish_is_skipped() {
        let bus = SignalBus::default();
        let victim: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let (victim_count, on_victim) = counter();

        let _killer = bus.subscribe({
            let victim = victim.clone();
            move || {
                victim.lock().unwrap().take();
            }
        });
        *victim.lock().unwrap() = Some(bus.subscribe(on_victim));

        assert_eq!(bus.publish(), 1);
        assert_eq!(victim_count.load(Ordering::SeqCst), 0);
    }
}
