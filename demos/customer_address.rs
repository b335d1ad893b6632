//! A customer entity raising domain events through an injected dispatcher.
//!
//! Run with: `cargo run --example customer_address`

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tidings::{DomainEvent, Event, EventDispatcher, EventHandler, HandlerError, NotifyError};

// ---------------------------------------------------------------------------
// Value objects and events
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DomainEvent)]
#[event(kind = "CustomerCreatedEvent")]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DomainEvent)]
#[event(kind = "CustomerChandedAddressEvent")]
pub struct CustomerChangedAddress {
    pub id: String,
    pub name: String,
    pub address: Address,
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Customer<'a> {
    id: String,
    name: String,
    address: Option<Address>,
    events: &'a EventDispatcher,
}

impl<'a> Customer<'a> {
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        events: &'a EventDispatcher,
    ) -> Result<Self, NotifyError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            events,
        };
        events.notify(&Event::new(CustomerCreated {
            id: customer.id.clone(),
            name: customer.name.clone(),
        }))?;
        Ok(customer)
    }

    pub const fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn change_address(&mut self, address: Address) -> Result<(), NotifyError> {
        self.address = Some(address.clone());
        self.events.notify(&Event::new(CustomerChangedAddress {
            id: self.id.clone(),
            name: self.name.clone(),
            address,
        }))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct SendConsoleLog1;

impl EventHandler<CustomerCreated> for SendConsoleLog1 {
    fn handle(&self, _event: &Event<CustomerCreated>) -> Result<(), HandlerError> {
        tracing::info!("this is the first console.log of the event: CustomerCreated");
        Ok(())
    }
}

#[derive(Debug)]
pub struct SendConsoleLog2;

impl EventHandler<CustomerCreated> for SendConsoleLog2 {
    fn handle(&self, _event: &Event<CustomerCreated>) -> Result<(), HandlerError> {
        tracing::info!("this is the second console.log of the event: CustomerCreated");
        Ok(())
    }
}

#[derive(Debug)]
pub struct SendWhenCustomerAddressChanged;

impl EventHandler<CustomerChangedAddress> for SendWhenCustomerAddressChanged {
    fn handle(&self, event: &Event<CustomerChangedAddress>) -> Result<(), HandlerError> {
        let CustomerChangedAddress { id, name, address } = event.payload();
        tracing::info!("address of customer {id}, {name} changed to: {address}");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // composition root: handlers are wired once, entities only see the dispatcher
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe(Arc::new(SendConsoleLog1));
    dispatcher.subscribe(Arc::new(SendConsoleLog2));
    dispatcher.subscribe(Arc::new(SendWhenCustomerAddressChanged));

    let mut customer = Customer::create("1", "Mussun", &dispatcher)?;
    customer.change_address(Address {
        street: "Street 1".into(),
        number: 123,
        zip: "13330-250".into(),
        city: "São Paulo".into(),
    })?;
    tracing::info!(address = ?customer.address(), "customer updated");

    Ok(())
}
