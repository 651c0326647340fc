//! Record metadata consumed by the compiler.
//!
//! Descriptors are plain `'static` data. Any metadata source (the derive
//! macro, a hand-written static, generated code) that can populate them
//! satisfies the compiler's input contract.

mod field;
mod record;

pub use field::*;
pub use record::*;
