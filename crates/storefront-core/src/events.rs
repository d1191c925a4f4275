//! # Event Channel
//!
//! In-process publish/subscribe used to connect views that hold no reference
//! to each other (the review form and the product catalog).
//!
//! ## Delivery Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    EventChannel<Review> "review-submitted"              │
//! │                                                                         │
//! │  ReviewFormView::submit()                                               │
//! │         │ publish(&review)                                              │
//! │         ▼                                                               │
//! │  ┌──────────────┐  snapshot listeners, release lock                     │
//! │  │  Registry    │──────────────────────────────┐                        │
//! │  │  [(1, f1),   │                              ▼                        │
//! │  │   (2, f2)]   │                 f1(&review) then f2(&review)          │
//! │  └──────────────┘                 (subscription order, synchronous)     │
//! │         ▲                                                               │
//! │         │ Drop for Subscription removes (id, f)                         │
//! │  ProductCatalogView torn down                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The channel is a cheap cloneable handle. It is passed into the views that
//! need it, never stored in a global.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

fn lock<T>(registry: &Mutex<Registry<T>>) -> MutexGuard<'_, Registry<T>> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// EventChannel
// =============================================================================

/// A synchronous publish/subscribe channel for one topic.
pub struct EventChannel<T> {
    topic: &'static str,
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T: 'static> EventChannel<T> {
    /// Creates a channel with no subscribers.
    pub fn new(topic: &'static str) -> Self {
        EventChannel {
            topic,
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers a listener and returns the guard that keeps it registered.
    ///
    /// Dropping the returned [`Subscription`] removes the listener.
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = lock(&self.registry);
            registry.next_id += 1;
            let id = registry.next_id;
            registry.listeners.push((id, Arc::new(listener)));
            id
        };
        debug!(topic = self.topic, subscription = id, "Listener subscribed");

        let weak: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        let topic = self.topic;
        Subscription {
            id,
            topic,
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    // The listener is dropped after the lock is released.
                    let removed = {
                        let mut registry = lock(&registry);
                        let position = registry.listeners.iter().position(|(lid, _)| *lid == id);
                        position.map(|pos| registry.listeners.remove(pos))
                    };
                    drop(removed);
                    debug!(topic = topic, subscription = id, "Listener unsubscribed");
                }
            })),
        }
    }

    /// Delivers `event` to every current listener, in subscription order.
    ///
    /// Listeners are snapshotted first, so a listener may publish or
    /// subscribe on this channel without deadlocking. Listeners added during
    /// delivery only see later events.
    ///
    /// Returns the number of listeners the event was delivered to.
    pub fn publish(&self, event: &T) -> usize {
        let listeners: Vec<Listener<T>> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        debug!(
            topic = self.topic,
            listeners = listeners.len(),
            "Publishing event"
        );

        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

impl<T> Clone for EventChannel<T> {
    fn clone(&self) -> Self {
        EventChannel {
            topic: self.topic,
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("topic", &self.topic)
            .field("subscribers", &lock(&self.registry).listeners.len())
            .finish()
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Scoped registration of a listener on an [`EventChannel`].
///
/// The listener stays registered exactly as long as this guard is alive.
pub struct Subscription {
    id: u64,
    topic: &'static str,
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Removes the listener now. Calling it again does nothing.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .field("active", &self.is_active())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
