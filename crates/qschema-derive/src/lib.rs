//! `#[derive(Record)]`: describes a struct to the QSchema compiler.
//!
//! ```ignore
//! #[derive(Record)]
//! #[qschema(namespace = "test")]
//! pub struct Country {
//!     #[qschema(key, unique)]
//!     pub id: String,
//!     #[qschema(foreign_key = "Region")]
//!     pub region: String,
//! }
//! ```

use proc_macro::TokenStream;

mod field;
mod helper;
mod record;

#[proc_macro_derive(Record, attributes(qschema))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
