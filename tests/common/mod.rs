//! Example domain shared by the integration tests.

#![allow(dead_code)]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};
use tidings::{DomainEvent, Event, EventHandler, HandlerError};

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, DomainEvent)]
#[event(kind = "ProductCreatedEvent")]
pub struct ProductCreated {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, DomainEvent)]
#[event(kind = "CustomerCreatedEvent")]
pub struct CustomerCreated {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl Address {
    pub fn new(street: &str, number: u32, zip: &str, city: &str) -> Self {
        Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, DomainEvent)]
#[event(kind = "CustomerChandedAddressEvent")]
pub struct CustomerChangedAddress {
    pub id: String,
    pub name: String,
    pub address: Address,
}

// ============================================================================
// Handlers
// ============================================================================

/// Stand-in for an outbound channel (mailer, console, message bus).
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    sent: Arc<Mutex<Vec<String>>>,
}

impl Outbox {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    fn send(&self, message: String) {
        tracing::info!(%message, "notification sent");
        self.sent.lock().unwrap().push(message);
    }
}

#[derive(Debug)]
pub struct SendEmailWhenProductIsCreated {
    pub outbox: Outbox,
}

impl EventHandler<ProductCreated> for SendEmailWhenProductIsCreated {
    fn handle(&self, event: &Event<ProductCreated>) -> Result<(), HandlerError> {
        let product = event.payload();
        self.outbox.send(format!(
            "product {} created at {:.2}",
            product.name, product.price
        ));
        Ok(())
    }
}

#[derive(Debug)]
pub struct SendConsoleLog1 {
    pub outbox: Outbox,
}

impl EventHandler<CustomerCreated> for SendConsoleLog1 {
    fn handle(&self, _event: &Event<CustomerCreated>) -> Result<(), HandlerError> {
        self.outbox
            .send("this is the first console.log of the event: CustomerCreated".into());
        Ok(())
    }
}

#[derive(Debug)]
pub struct SendConsoleLog2 {
    pub outbox: Outbox,
}

impl EventHandler<CustomerCreated> for SendConsoleLog2 {
    fn handle(&self, _event: &Event<CustomerCreated>) -> Result<(), HandlerError> {
        self.outbox
            .send("this is the second console.log of the event: CustomerCreated".into());
        Ok(())
    }
}

#[derive(Debug)]
pub struct SendWhenCustomerAddressChanged {
    pub outbox: Outbox,
}

impl EventHandler<CustomerChangedAddress> for SendWhenCustomerAddressChanged {
    fn handle(&self, event: &Event<CustomerChangedAddress>) -> Result<(), HandlerError> {
        let CustomerChangedAddress { id, name, address } = event.payload();
        self.outbox.send(format!(
            "address of customer {id}, {name} changed to: {address}"
        ));
        Ok(())
    }
}

pub fn product_created() -> Event<ProductCreated> {
    Event::new(ProductCreated {
        name: "Product 1".into(),
        description: "Product 1 description".into(),
        price: 10.0,
    })
}
