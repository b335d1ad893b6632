//! Handler-side primitives.
//!
//! An [`EventHandler<P>`] performs one side effect for every [`Event<P>`] it
//! receives. The dispatcher keeps handlers for many payload types in a single
//! registry, so it stores them behind the type-erased [`ErasedHandler`] seam
//! and recovers the concrete payload type at dispatch time.

use std::{any::Any, marker::PhantomData, sync::Arc};

use crate::{error::DispatchError, event::Event};

/// Error type returned by a failing handler.
///
/// Handlers wrap whatever went wrong (I/O, a downstream repository, a
/// rejected message) and the dispatcher reports it back to the publisher
/// unchanged.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// React to a published event.
///
/// Handlers are invoked synchronously, on the publisher's thread, in the order
/// they were registered. Returning `Err` is how a handler "raises"; what the
/// dispatcher does next depends on its
/// [`FailurePolicy`](crate::policy::FailurePolicy).
///
/// ```ignore
/// struct SendEmailWhenProductIsCreated;
///
/// impl EventHandler<ProductCreated> for SendEmailWhenProductIsCreated {
///     fn handle(&self, event: &Event<ProductCreated>) -> Result<(), HandlerError> {
///         tracing::info!(product = %event.payload().name, "sending email");
///         Ok(())
///     }
/// }
/// ```
///
/// Closures of the shape `Fn(&Event<P>) -> Result<(), HandlerError>` are
/// handlers too.
// ANCHOR: handler_trait
pub trait EventHandler<P>: Send + Sync {
    /// Perform the side effect for `event`.
    ///
    /// # Errors
    ///
    /// Returns a [`HandlerError`] if the side effect could not be carried
    /// out. The error is propagated out of `notify`.
    fn handle(&self, event: &Event<P>) -> Result<(), HandlerError>;
}
// ANCHOR_END: handler_trait

impl<P, F> EventHandler<P> for F
where
    F: Fn(&Event<P>) -> Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, event: &Event<P>) -> Result<(), HandlerError> {
        self(event)
    }
}

/// Object-safe view of a typed handler, stored in the dispatcher registry.
pub(crate) trait ErasedHandler: Send + Sync {
    /// Downcast `event` to the handler's payload type and invoke it.
    fn handle_erased(&self, event_type: &str, event: &dyn Any) -> Result<(), HandlerError>;

    /// Allocation address of the registered handler, used for identity.
    fn address(&self) -> *const ();

    fn handler_type(&self) -> &'static str;

    fn payload_type(&self) -> &'static str;
}

/// Binds a shared handler to the payload type it was registered for.
pub(crate) struct Typed<P, H: ?Sized> {
    handler: Arc<H>,
    _payload: PhantomData<fn(&P)>,
}

impl<P, H: ?Sized> Typed<P, H> {
    pub(crate) const fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            _payload: PhantomData,
        }
    }
}

impl<P, H> ErasedHandler for Typed<P, H>
where
    P: 'static,
    H: EventHandler<P> + ?Sized,
{
    fn handle_erased(&self, event_type: &str, event: &dyn Any) -> Result<(), HandlerError> {
        let Some(event) = event.downcast_ref::<Event<P>>() else {
            return Err(Box::new(DispatchError::PayloadMismatch {
                event_type: event_type.to_string(),
                handler: self.handler_type(),
                expected: self.payload_type(),
            }));
        };
        self.handler.handle(event)
    }

    fn address(&self) -> *const () {
        Arc::as_ptr(&self.handler).cast::<()>()
    }

    fn handler_type(&self) -> &'static str {
        std::any::type_name::<H>()
    }

    fn payload_type(&self) -> &'static str {
        std::any::type_name::<P>()
    }
}
