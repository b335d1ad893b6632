extern crate tidings_core as tidings;

use tidings::event::DomainEvent;
use tidings_macros::DomainEvent;

#[derive(DomainEvent)]
#[event(kind = "CustomerChandedAddressEvent")]
pub struct CustomerChangedAddress {
    pub id: String,
}

#[derive(DomainEvent)]
#[event(kind = "OrderStatusChanged")]
pub enum OrderStatus {
    Paid,
    Shipped,
}

fn main() {
    assert_eq!(CustomerChangedAddress::KIND, "CustomerChandedAddressEvent");
    assert_eq!(OrderStatus::KIND, "OrderStatusChanged");
}
