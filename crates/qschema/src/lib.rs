//! QSchema: compile Rust record types into empty q/kdb+ table declarations.
//!
//! ## Crate layout
//! - core modules (`node`, `types`, `naming`, `model`, `graph`, `emit`,
//!   `compile`, `config`, `trace`, `error`) are re-exported from `qschema-core`.
//! - `Record` (derive) comes from `qschema-derive` and fills in the
//!   `node::Record` trait from struct fields and `#[qschema(...)]` attributes.
//!
//! ```ignore
//! use qschema::prelude::*;
//!
//! #[derive(Record)]
//! struct Trade {
//!     #[qschema(key)]
//!     id: i64,
//!     #[qschema(grouped)]
//!     sym: String,
//! }
//!
//! assert_eq!(
//!     declare_empty_table::<Trade>()?,
//!     ".trade:([id:`long$()]`g#sym:`symbol$())"
//! );
//! ```

pub use qschema_core::*;
pub use qschema_derive::Record;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use qschema_core::prelude::*;
    pub use qschema_derive::Record;
}
