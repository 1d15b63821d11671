//! Input side of the live-template generator.
//!
//! A component library is handed over as a JSON manifest that mirrors its
//! export object. This crate loads that manifest and provides the small set
//! of JavaScript value semantics (truthiness, string conversion) the
//! generator needs to interpret it.

pub mod error;
pub mod filesystem;
pub mod manifest;
pub mod result;
pub mod value;

pub use error::*;
pub use filesystem::*;
pub use manifest::*;
pub use result::*;
pub use value::*;
