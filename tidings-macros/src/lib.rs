// These lints are triggered by darling's generated code for
// `#[darling(default)]`.
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_continue)]

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Ident, parse_macro_input};

/// Configuration for the `#[event(...)]` attribute.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(event), supports(struct_any, enum_any))]
struct EventArgs {
    ident: Ident,
    #[darling(default)]
    kind: Option<String>,
}

/// Returns the kind override or the type name itself.
fn default_kind(ident: &Ident, kind: Option<String>) -> String {
    kind.unwrap_or_else(|| ident.to_string())
}

/// Parse derive input with darling and render errors as tokens.
fn parse_or_error<T, F>(input: &DeriveInput, f: F) -> TokenStream2
where
    T: FromDeriveInput,
    F: FnOnce(T) -> TokenStream2,
{
    match T::from_derive_input(input) {
        Ok(args) => f(args),
        Err(err) => err.write_errors(),
    }
}

/// Derives the `DomainEvent` trait for a payload type.
///
/// The generated `KIND` is the event-type identifier handlers are registered
/// under.
///
/// # Attributes
///
/// ## Optional
/// - `kind = "name"` - Event-type identifier (default: the type name, e.g.
///   `ProductCreatedEvent`)
///
/// # Example
///
/// ```ignore
/// #[derive(DomainEvent)]
/// #[event(kind = "CustomerChandedAddressEvent")]
/// pub struct CustomerChangedAddress {
///     id: String,
///     address: Address,
/// }
/// ```
#[proc_macro_derive(DomainEvent, attributes(event))]
pub fn derive_domain_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    derive_domain_event_impl(&input).into()
}

/// Internal entry point that returns tokens for the domain event derive.
fn derive_domain_event_impl(input: &DeriveInput) -> TokenStream2 {
    parse_or_error::<EventArgs, _>(input, |args| generate_domain_event_impl(args, input))
}

/// Generate the domain event derive implementation tokens.
fn generate_domain_event_impl(args: EventArgs, input: &DeriveInput) -> TokenStream2 {
    let type_name = &args.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let kind = default_kind(type_name, args.kind);
    if kind.trim().is_empty() {
        return darling::Error::custom("event kind must not be empty")
            .with_span(&input.ident)
            .write_errors();
    }

    quote! {
        impl #impl_generics ::tidings::event::DomainEvent for #type_name #ty_generics #where_clause {
            const KIND: &'static str = #kind;
        }
    }
}
