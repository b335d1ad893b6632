//! Errors surfaced by [`EventDispatcher::notify`].
//!
//! Absent subscribers and unknown handlers are not errors; the only failures
//! a publisher sees are handlers that returned `Err` and handlers that were
//! registered under a key whose events carry a different payload type.
//!
//! [`EventDispatcher::notify`]: crate::dispatcher::EventDispatcher::notify

use nonempty::NonEmpty;
use thiserror::Error;

use crate::handler::HandlerError;

/// Misuse of the dispatcher detected while routing an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A handler was registered under `event_type` for a payload type other
    /// than the one that was published under that key.
    #[error(
        "handler `{handler}` registered under `{event_type}` expects `{expected}` payloads (hint: \
         register handlers under the payload's `DomainEvent::KIND`)"
    )]
    PayloadMismatch {
        event_type: String,
        handler: &'static str,
        expected: &'static str,
    },
}

/// A single handler that failed during `notify`.
#[derive(Debug, Error)]
#[error("handler #{position} (`{handler}`) failed for `{event_type}`: {source}")]
pub struct HandlerFailure {
    /// The event-type identifier being dispatched.
    pub event_type: String,
    /// Index of the handler in the registration order for `event_type`.
    pub position: usize,
    /// Type name of the failing handler.
    pub handler: &'static str,
    /// The error returned by the handler.
    #[source]
    pub source: HandlerError,
}

impl HandlerFailure {
    /// Returns the routing error if this failure was caused by misuse rather
    /// than by the handler itself.
    #[must_use]
    pub fn dispatch_error(&self) -> Option<&DispatchError> {
        self.source.downcast_ref::<DispatchError>()
    }
}

/// Error returned by `notify` when one or more handlers failed.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Fail-fast dispatch stopped at this handler; later handlers were not
    /// invoked.
    #[error("dispatch stopped: {0}")]
    Handler(#[source] HandlerFailure),
    /// Every handler ran; these are the ones that failed, in registration
    /// order.
    #[error("{} handler(s) failed while dispatching `{event_type}`", .failures.len())]
    Collected {
        event_type: String,
        failures: NonEmpty<HandlerFailure>,
    },
}

impl NotifyError {
    /// The first (or only) failure.
    #[must_use]
    pub fn first(&self) -> &HandlerFailure {
        match self {
            Self::Handler(failure) => failure,
            Self::Collected { failures, .. } => failures.first(),
        }
    }

    /// All recorded failures, in registration order.
    pub fn failures(&self) -> impl Iterator<Item = &HandlerFailure> {
        let (head, tail): (&HandlerFailure, &[HandlerFailure]) = match self {
            Self::Handler(failure) => (failure, &[][..]),
            Self::Collected { failures, .. } => (&failures.head, failures.tail.as_slice()),
        };
        std::iter::once(head).chain(tail)
    }

    /// Take ownership of the recorded failures.
    #[must_use]
    pub fn into_failures(self) -> NonEmpty<HandlerFailure> {
        match self {
            Self::Handler(failure) => NonEmpty::new(failure),
            Self::Collected { failures, .. } => failures,
        }
    }
}
