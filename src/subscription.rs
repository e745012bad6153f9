//! Revocable event listener subscriptions.
//!
//! [`bind_revocable`] attaches a listener and hands back a [`Subscription`]
//! that detaches exactly the same (target, event, listener) triple. Several
//! subscriptions collect into an [`Unbind`], which the owner revokes in one
//! call before rebinding.
//!
//! DESIGN
//! ======
//! Owners revoke explicitly, in a known order, before rebinding. Dropping a
//! still-active [`Subscription`] revokes it as well: a registration token may
//! own the host-side callback, and a callback freed while still attached
//! would keep firing into a dead closure.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::event::HostEvent;

/// Shared event callback.
pub type Listener<E> = Rc<dyn Fn(&E)>;

/// Listener registration options recognized by this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Passive hint. `None` leaves the host default in place.
    pub passive: Option<bool>,
}

impl ListenerOptions {
    /// Options for listeners that must never block scrolling.
    pub const PASSIVE: Self = Self { passive: Some(true) };
}

/// Something listeners can be attached to.
///
/// `add_listener` returns a registration token that `remove_listener` later
/// uses to detach the identical listener.
pub trait EventTarget: Clone + 'static {
    type Event: HostEvent;
    type Registration: 'static;

    /// Attach `listener` for `name` events.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] when the host refuses the registration.
    fn add_listener(
        &self,
        name: &'static str,
        listener: Listener<Self::Event>,
        options: ListenerOptions,
    ) -> Result<Self::Registration, Error>;

    /// Detach a listener previously attached with `add_listener`.
    fn remove_listener(&self, name: &'static str, registration: &Self::Registration);
}

/// Handle that detaches one listener.
///
/// Revoking is idempotent: only the first [`Subscription::revoke`] detaches.
pub struct Subscription {
    event: &'static str,
    revoke: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Detach the listener. Later calls do nothing.
    pub fn revoke(&mut self) {
        if let Some(revoke) = self.revoke.take() {
            revoke();
        }
    }

    /// Whether the listener is still attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.revoke.is_some()
    }

    /// Event name this subscription listens for.
    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.is_active() {
            log::trace!("revoking dropped `{}` subscription", self.event);
        }
        self.revoke();
    }
}

/// Attach `listener` to `target` and return the handle that detaches it.
///
/// `options` are forwarded to the target unchanged.
///
/// # Errors
///
/// Propagates the target's refusal as [`Error::Bind`].
pub fn bind_revocable<T: EventTarget>(
    target: &T,
    event: &'static str,
    listener: Listener<T::Event>,
    options: ListenerOptions,
) -> Result<Subscription, Error> {
    let registration = target.add_listener(event, listener, options)?;
    let target = target.clone();
    Ok(Subscription {
        event,
        revoke: Some(Box::new(move || target.remove_listener(event, &registration))),
    })
}

/// Ordered set of subscriptions released together.
///
/// [`Unbind::revoke`] consumes the set, so a released set cannot be reused.
#[derive(Debug, Default)]
pub struct Unbind {
    subscriptions: Vec<Subscription>,
}

impl Unbind {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing subscription.
    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Bind a listener and keep its subscription.
    ///
    /// # Errors
    ///
    /// Propagates [`bind_revocable`] failures; nothing is added in that case.
    pub fn bind<T: EventTarget>(
        &mut self,
        target: &T,
        event: &'static str,
        listener: Listener<T::Event>,
        options: ListenerOptions,
    ) -> Result<(), Error> {
        self.push(bind_revocable(target, event, listener, options)?);
        Ok(())
    }

    /// Number of subscriptions held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Event names in bind order.
    #[must_use]
    pub fn events(&self) -> Vec<&'static str> {
        self.subscriptions.iter().map(Subscription::event).collect()
    }

    /// Revoke every subscription once, in bind order.
    pub fn revoke(mut self) {
        for subscription in &mut self.subscriptions {
            subscription.revoke();
        }
    }
}

impl Extend<Subscription> for Unbind {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.subscriptions.extend(iter);
    }
}
