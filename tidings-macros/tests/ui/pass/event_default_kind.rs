extern crate tidings_core as tidings;

use tidings::event::{DomainEvent, Event, EventKind};
use tidings_macros::DomainEvent;

#[derive(DomainEvent)]
pub struct ProductCreatedEvent {
    pub name: String,
    pub price: f64,
}

fn main() {
    assert_eq!(ProductCreatedEvent::KIND, "ProductCreatedEvent");

    let payload = ProductCreatedEvent {
        name: "Product 1".into(),
        price: 10.0,
    };
    assert_eq!(payload.kind(), "ProductCreatedEvent");
    assert_eq!(Event::new(payload).kind(), "ProductCreatedEvent");
}
