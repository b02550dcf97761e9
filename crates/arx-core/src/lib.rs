//! Core types and traits for the Arx runtime.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by every runtime component and the narrow
//! contracts through which compiled programs talk to their input and
//! output collaborators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod value;

pub use error::RuntimeError;
pub use traits::{LineSource, Printer};
pub use value::Primitive;
