//! A minimal example: one event, one handler, one publish.
//!
//! Run with: `cargo run --example quickstart`

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tidings::{DomainEvent, Event, EventDispatcher, EventHandler, HandlerError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, DomainEvent)]
#[event(kind = "ProductCreatedEvent")]
pub struct ProductCreated {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug)]
pub struct SendEmailWhenProductIsCreated;

impl EventHandler<ProductCreated> for SendEmailWhenProductIsCreated {
    fn handle(&self, event: &Event<ProductCreated>) -> Result<(), HandlerError> {
        let product = event.payload();
        tracing::info!(
            name = %product.name,
            price = product.price,
            occurred_at = %event.occurred_at(),
            "sending product created email"
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tidings_core=debug".into()),
        )
        .init();

    let mut dispatcher = EventDispatcher::new();
    let handler = Arc::new(SendEmailWhenProductIsCreated);
    dispatcher.register("ProductCreatedEvent", Arc::clone(&handler));

    let event = Event::new(ProductCreated {
        name: "Product 1".into(),
        description: "Product 1 description".into(),
        price: 10.0,
    });
    println!("{}", serde_json::to_string_pretty(&event)?);
    dispatcher.notify(&event)?;

    dispatcher.unregister("ProductCreatedEvent", &handler);
    assert_eq!(
        dispatcher.event_handlers("ProductCreatedEvent").map(<[_]>::len),
        Some(0)
    );

    dispatcher.unregister_all();
    assert!(dispatcher.event_handlers("ProductCreatedEvent").is_none());

    Ok(())
}
