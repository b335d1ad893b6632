//! Core traits and types for the tidings domain event library.
//!
//! This crate provides the building blocks for in-process, synchronous domain
//! events:
//!
//! - [`event`] - Payload marker and envelope (`DomainEvent`, `EventKind`, `Event`)
//! - [`handler`] - The single-method handler capability (`EventHandler`)
//! - [`dispatcher`] - Registration and routing (`EventDispatcher`)
//! - [`policy`] - Handler failure policy markers (`FailFast`, `CollectErrors`)
//! - [`error`] - Errors reported to publishers (`NotifyError`)
//!
//! # Example
//!
//! ```
//! use tidings_core::dispatcher::EventDispatcher;
//!
//! let dispatcher = EventDispatcher::new();
//! assert_eq!(dispatcher.event_types().count(), 0);
//! ```
//!
//! Most users should depend on the [`tidings`](https://docs.rs/tidings) crate,
//! which re-exports these types alongside the derive macro.

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod policy;
