//! Growable lists for the Arx runtime.
//!
//! Provides the container every other runtime component builds on. Two
//! flavours share one contract (create, append, get, slice, drop):
//!
//! ```text
//! List<T>     typed; element layout known at compile time
//! ├── OwningList<T>      = List<Box<T>>   frees its referents on drop
//! └── BorrowingList<T>   = List<&T>       never frees its referents
//! RawList     type-erased; element width known only at run time
//! └── ByteBuffer         fallible contiguous byte storage
//! ```
//!
//! # Growth policy
//!
//! Empty lists start with [`ListConfig::initial_capacity`] slots (8 by
//! default). A full list doubles its capacity before the next append; lists
//! created from existing data or by slicing are exact-fit. Every reservation
//! goes through `try_reserve_exact`, so a failed growth is reported as
//! [`RuntimeError::AllocationFailed`](arx_core::RuntimeError) and the list is
//! left exactly as it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod erased;
pub mod list;

// Public re-exports for the primary API surface.
pub use buffer::ByteBuffer;
pub use config::ListConfig;
pub use erased::RawList;
pub use list::{BorrowingList, List, OwningList};
