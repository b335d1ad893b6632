//! The event registry and router.
//!
//! [`EventDispatcher`] maps event-type identifiers to an ordered list of
//! handlers and fans every published [`Event`] out to the handlers registered
//! under its [`DomainEvent::KIND`]. Dispatch is synchronous: `notify` returns
//! once every handler has returned, or as soon as one fails under the default
//! [`FailFast`] policy.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tidings_core::{
//!     dispatcher::EventDispatcher,
//!     event::{DomainEvent, Event},
//!     handler::HandlerError,
//! };
//!
//! struct ProductCreated {
//!     name: String,
//! }
//!
//! impl DomainEvent for ProductCreated {
//!     const KIND: &'static str = "ProductCreatedEvent";
//! }
//!
//! let mut dispatcher = EventDispatcher::new();
//! let handler = Arc::new(|event: &Event<ProductCreated>| -> Result<(), HandlerError> {
//!     assert_eq!(event.payload().name, "Product 1");
//!     Ok(())
//! });
//!
//! dispatcher.register("ProductCreatedEvent", Arc::clone(&handler));
//! dispatcher
//!     .notify(&Event::new(ProductCreated { name: "Product 1".into() }))
//!     .unwrap();
//!
//! dispatcher.unregister("ProductCreatedEvent", &handler);
//! assert_eq!(dispatcher.event_handlers("ProductCreatedEvent").map(<[_]>::len), Some(0));
//! ```

use std::{any::Any, collections::HashMap, fmt, marker::PhantomData, sync::Arc};

use nonempty::NonEmpty;

use crate::{
    error::{HandlerFailure, NotifyError},
    event::{DomainEvent, Event},
    handler::{ErasedHandler, EventHandler, Typed},
    policy::{CollectErrors, FailFast, FailurePolicy},
};

/// A handler registered under an event-type identifier.
///
/// Subscriptions are the read-only view returned by
/// [`EventDispatcher::event_handlers`]. They can be compared against the
/// handler they were created from, but cannot be used to change the registry.
pub struct Subscription {
    handler: Arc<dyn ErasedHandler>,
}

impl Subscription {
    fn new<P, H>(handler: Arc<H>) -> Self
    where
        P: 'static,
        H: EventHandler<P> + ?Sized + 'static,
    {
        Self {
            handler: Arc::new(Typed::<P, H>::new(handler)),
        }
    }

    /// Whether this subscription was registered with `handler`.
    ///
    /// Comparison is by identity: two distinct handler instances never
    /// match, even if they behave identically.
    #[must_use]
    pub fn is<H: ?Sized>(&self, handler: &Arc<H>) -> bool {
        std::ptr::eq(self.handler.address(), Arc::as_ptr(handler).cast::<()>())
    }

    /// Type name of the registered handler.
    #[must_use]
    pub fn handler_type(&self) -> &'static str {
        self.handler.handler_type()
    }

    /// Type name of the payload the handler accepts.
    #[must_use]
    pub fn payload_type(&self) -> &'static str {
        self.handler.payload_type()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("handler", &self.handler_type())
            .field("payload", &self.payload_type())
            .finish()
    }
}

/// Registry and router for domain events.
///
/// The dispatcher owns nothing but its registry. Handlers are shared through
/// [`Arc`], so the same handler instance can be registered under several
/// event types and with several dispatchers.
///
/// `register`, `unregister` and `unregister_all` take `&mut self` while
/// `notify` takes `&self`; a host that publishes from several threads shares
/// the dispatcher behind a lock (for example `Arc<RwLock<EventDispatcher>>`).
///
/// The type parameter selects the [`FailurePolicy`]; see [`FailFast`] (the
/// default) and [`CollectErrors`].
pub struct EventDispatcher<F = FailFast> {
    handlers: HashMap<String, Vec<Subscription>>,
    _policy: PhantomData<fn() -> F>,
}

impl EventDispatcher<FailFast> {
    /// Create an empty fail-fast dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to the [`CollectErrors`] policy, keeping current registrations.
    #[must_use]
    pub fn collecting_errors(self) -> EventDispatcher<CollectErrors> {
        self.with_policy()
    }
}

impl<F: FailurePolicy> Default for EventDispatcher<F> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            _policy: PhantomData,
        }
    }
}

impl<F: FailurePolicy> EventDispatcher<F> {
    /// Change the failure policy, keeping current registrations.
    #[must_use]
    pub fn with_policy<G: FailurePolicy>(self) -> EventDispatcher<G> {
        EventDispatcher {
            handlers: self.handlers,
            _policy: PhantomData,
        }
    }

    /// Append `handler` to the handlers registered under `event_type`.
    ///
    /// Registering the same handler twice is allowed and results in two
    /// invocations per `notify`.
    pub fn register<P>(
        &mut self,
        event_type: impl Into<String>,
        handler: Arc<impl EventHandler<P> + ?Sized + 'static>,
    ) where
        P: 'static,
    {
        let event_type = event_type.into();
        let subscription = Subscription::new::<P, _>(handler);
        tracing::debug!(
            event_type = %event_type,
            handler = subscription.handler_type(),
            "registering event handler"
        );
        self.handlers
            .entry(event_type)
            .or_default()
            .push(subscription);
    }

    /// Register `handler` under the payload's own [`DomainEvent::KIND`].
    pub fn subscribe<P>(&mut self, handler: Arc<impl EventHandler<P> + ?Sized + 'static>)
    where
        P: DomainEvent + 'static,
    {
        self.register::<P>(P::KIND, handler);
    }

    /// Remove the first registration of `handler` under `event_type`.
    ///
    /// Unknown event types and handlers that were never registered are
    /// ignored. The event type stays in the registry even when its last
    /// handler is removed.
    pub fn unregister<H: ?Sized>(&mut self, event_type: &str, handler: &Arc<H>) {
        let Some(subscriptions) = self.handlers.get_mut(event_type) else {
            tracing::trace!(event_type, "unregister for unknown event type ignored");
            return;
        };

        if let Some(index) = subscriptions.iter().position(|s| s.is(handler)) {
            let removed = subscriptions.remove(index);
            tracing::debug!(
                event_type,
                handler = removed.handler_type(),
                remaining = subscriptions.len(),
                "unregistered event handler"
            );
        } else {
            tracing::trace!(event_type, "handler not registered, nothing to remove");
        }
    }

    /// Remove every event type and every handler.
    pub fn unregister_all(&mut self) {
        tracing::debug!(event_types = self.handlers.len(), "clearing event registry");
        self.handlers.clear();
    }

    /// Handlers registered under `event_type`, in registration order.
    ///
    /// Returns `None` if the event type was never registered (or the registry
    /// has been cleared since), and an empty slice if every handler was
    /// individually unregistered.
    #[must_use]
    pub fn event_handlers(&self, event_type: &str) -> Option<&[Subscription]> {
        self.handlers.get(event_type).map(Vec::as_slice)
    }

    /// Event types currently present in the registry, in no particular order.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Publish `event` to every handler registered under its kind.
    ///
    /// Handlers run on the caller's thread, in registration order. Publishing
    /// an event nobody subscribed to is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if any handler fails. Under [`FailFast`] the
    /// remaining handlers are skipped; under [`CollectErrors`] they all run and
    /// every failure is reported.
    #[tracing::instrument(
        skip(self, event),
        fields(event_type = P::KIND, handler_count = tracing::field::Empty)
    )]
    pub fn notify<P>(&self, event: &Event<P>) -> Result<(), NotifyError>
    where
        P: DomainEvent + 'static,
    {
        self.dispatch(event.kind(), event)
    }

    fn dispatch(&self, event_type: &str, event: &dyn Any) -> Result<(), NotifyError> {
        let Some(subscriptions) = self.handlers.get(event_type) else {
            tracing::trace!("no handlers registered");
            return Ok(());
        };
        tracing::Span::current().record("handler_count", subscriptions.len());

        let mut failures = Vec::new();
        for (position, subscription) in subscriptions.iter().enumerate() {
            tracing::trace!(
                position,
                handler = subscription.handler_type(),
                "invoking handler"
            );

            if let Err(source) = subscription.handler.handle_erased(event_type, event) {
                let failure = HandlerFailure {
                    event_type: event_type.to_string(),
                    position,
                    handler: subscription.handler_type(),
                    source,
                };
                tracing::warn!(error = %failure, "event handler failed");

                if F::STOP_ON_FAILURE {
                    return Err(NotifyError::Handler(failure));
                }
                failures.push(failure);
            }
        }

        match NonEmpty::from_vec(failures) {
            Some(failures) => Err(NotifyError::Collected {
                event_type: event_type.to_string(),
                failures,
            }),
            None => Ok(()),
        }
    }
}

impl<F> fmt::Debug for EventDispatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers)
            .field("policy", &std::any::type_name::<F>())
            .finish()
    }
}
