#![doc = include_str!("../README.md")]

#[cfg(feature = "test-util")]
pub use tidings_core::test;
pub use tidings_core::{
    dispatcher,
    dispatcher::{EventDispatcher, Subscription},
    error,
    error::{DispatchError, HandlerFailure, NotifyError},
    event,
    event::{DomainEvent, Event, EventKind},
    handler,
    handler::{EventHandler, HandlerError},
    policy,
    policy::{CollectErrors, FailFast, FailurePolicy},
};
// Re-export proc macro derives so consumers only depend on `tidings`.
pub use tidings_macros::DomainEvent;
