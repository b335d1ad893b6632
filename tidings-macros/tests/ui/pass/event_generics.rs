extern crate tidings_core as tidings;

use tidings::event::DomainEvent;
use tidings_macros::DomainEvent;

#[derive(DomainEvent)]
#[event(kind = "Audited")]
pub struct Audited<T>
where
    T: Clone,
{
    pub inner: T,
}

fn main() {
    assert_eq!(<Audited<u32> as DomainEvent>::KIND, "Audited");
    assert_eq!(<Audited<String> as DomainEvent>::KIND, "Audited");
}
