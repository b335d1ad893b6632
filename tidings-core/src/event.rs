//! Domain event contracts.
//!
//! `DomainEvent` is the lightweight trait every concrete payload struct
//! implements. [`Event`] wraps a payload together with the moment it was
//! raised; it is the value handed to every subscribed handler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker trait for payloads that can be published through an
/// [`EventDispatcher`](crate::dispatcher::EventDispatcher).
///
/// Each payload carries a stable [`Self::KIND`] identifier. The dispatcher
/// routes on this string, so handlers must be registered under the same value
/// (see [`EventDispatcher::subscribe`](crate::dispatcher::EventDispatcher::subscribe)
/// for a helper that reads it for you).
///
/// Most projects implement this trait with `#[derive(DomainEvent)]`, which
/// uses the struct name as the kind unless `#[event(kind = "...")]` overrides
/// it.
pub trait DomainEvent {
    const KIND: &'static str;
}

/// Extension trait for getting the event kind from an event instance.
///
/// This trait has a blanket implementation for all types that implement
/// [`DomainEvent`], ensuring that the `kind()` method always returns the
/// same value as the `KIND` constant. [`Event`] forwards to its payload.
///
/// **You never need to implement this trait yourself.**
pub trait EventKind {
    fn kind(&self) -> &'static str;
}

impl<T: DomainEvent> EventKind for T {
    fn kind(&self) -> &'static str {
        T::KIND
    }
}

/// An immutable envelope around a domain payload.
///
/// The timestamp is fixed at construction and neither field can be mutated
/// afterwards. The dispatcher borrows the envelope for the duration of a
/// `notify` call and never retains it.
///
/// ```
/// use tidings_core::event::{DomainEvent, Event};
///
/// struct ProductCreated {
///     name: String,
/// }
///
/// impl DomainEvent for ProductCreated {
///     const KIND: &'static str = "ProductCreatedEvent";
/// }
///
/// let event = Event::new(ProductCreated { name: "Product 1".into() });
/// assert_eq!(event.kind(), "ProductCreatedEvent");
/// assert_eq!(event.payload().name, "Product 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event<P> {
    occurred_at: DateTime<Utc>,
    payload: P,
}

impl<P> Event<P> {
    /// Wrap `payload`, stamping the current time.
    #[must_use]
    pub fn new(payload: P) -> Self {
        Self::at(payload, Utc::now())
    }

    /// Wrap `payload` with an explicit timestamp.
    #[must_use]
    pub const fn at(payload: P, occurred_at: DateTime<Utc>) -> Self {
        Self {
            occurred_at,
            payload,
        }
    }

    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: DomainEvent> Event<P> {
    /// The event-type identifier this envelope is routed under.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        P::KIND
    }
}

impl<P: DomainEvent> From<P> for Event<P> {
    fn from(payload: P) -> Self {
        Self::new(payload)
    }
}
