#![allow(dead_code)]

use tidings_macros::DomainEvent;

#[derive(DomainEvent)]
#[event(kind = ProductCreated)]
pub struct ProductCreated;

fn main() {}
