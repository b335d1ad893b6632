#![allow(dead_code)]

use tidings_macros::DomainEvent;

#[derive(DomainEvent)]
#[event(kind = "  ")]
pub struct Blank;

fn main() {}
