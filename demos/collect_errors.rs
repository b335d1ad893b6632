//! Comparing the fail-fast and collect-errors failure policies.
//!
//! Run with: `cargo run --example collect_errors`

use std::{io, sync::Arc};

use tidings::{DomainEvent, Event, EventDispatcher, EventHandler, FailurePolicy, HandlerError};

#[derive(Clone, Debug, DomainEvent)]
#[event(kind = "OrderPlacedEvent")]
pub struct OrderPlaced {
    pub order_id: String,
    pub total: f64,
}

/// Fails for every order, as if the mail server were down.
#[derive(Debug)]
pub struct SendReceipt;

impl EventHandler<OrderPlaced> for SendReceipt {
    fn handle(&self, event: &Event<OrderPlaced>) -> Result<(), HandlerError> {
        Err(Box::new(io::Error::other(format!(
            "mail server refused receipt for {}",
            event.payload().order_id
        ))))
    }
}

#[derive(Debug)]
pub struct ReserveStock;

impl EventHandler<OrderPlaced> for ReserveStock {
    fn handle(&self, event: &Event<OrderPlaced>) -> Result<(), HandlerError> {
        let order = event.payload();
        tracing::info!(order = %order.order_id, total = order.total, "stock reserved");
        Ok(())
    }
}

fn wire<F: FailurePolicy>(dispatcher: &mut EventDispatcher<F>) {
    dispatcher.subscribe(Arc::new(SendReceipt));
    dispatcher.subscribe(Arc::new(ReserveStock));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let event = Event::new(OrderPlaced {
        order_id: "ORD-1".into(),
        total: 42.5,
    });

    let mut fail_fast = EventDispatcher::new();
    wire(&mut fail_fast);
    if let Err(err) = fail_fast.notify(&event) {
        // stock was never reserved
        println!("fail-fast: {err}");
    }

    let mut collecting = EventDispatcher::new().collecting_errors();
    wire(&mut collecting);
    if let Err(err) = collecting.notify(&event) {
        // stock was reserved despite the failing receipt
        println!("collect-errors: {err}");
        for failure in err.failures() {
            println!("  - {failure}");
        }
    }
}
