#![allow(dead_code)]

use tidings_macros::DomainEvent;

#[derive(DomainEvent)]
pub union Raw {
    a: u32,
}

fn main() {}
