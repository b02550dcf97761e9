//! Arx: runtime support library for compiled Arx programs.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Arx runtime sub-crates. Code generators and host programs normally depend
//! on `arx` alone.
//!
//! # Quick start
//!
//! ```rust
//! use arx::prelude::*;
//!
//! let words = split("a,b,,c", ",").unwrap();
//! assert_eq!(words.len(), 4);
//! assert_eq!(join(words.as_slice(), "-").unwrap(), "a-b--c");
//!
//! let evens = int_range(0, 10, 2).unwrap();
//! assert_eq!(evens.as_slice(), &[0, 2, 4, 6, 8]);
//!
//! let mut list: List<&str> = List::new().unwrap();
//! list.append("x").unwrap();
//! assert_eq!(list.slice(0, 1).unwrap().get(0), Some(&"x"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `arx-core` | `RuntimeError`, collaborator traits, `Primitive` |
//! | [`list`] | `arx-list` | `List`, `RawList`, `ByteBuffer`, `ListConfig` |
//! | [`text`] | `arx-text` | String operations and splitting |
//! | [`iter`] | `arx-iter` | Integer ranges |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error taxonomy and collaborator contracts (`arx-core`).
///
/// Contains [`types::RuntimeError`] and the [`types::LineSource`] /
/// [`types::Printer`] traits hosts implement for program I/O.
pub use arx_core as types;

/// Growable lists (`arx-list`).
///
/// [`list::List`] for typed elements, [`list::RawList`] when only the
/// element width is known at run time.
pub use arx_list as list;

/// String operations (`arx-text`).
pub use arx_text as text;

/// Integer range producers (`arx-iter`).
pub use arx_iter as iter;

/// Common imports for typical runtime usage.
///
/// ```rust
/// use arx::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use arx_core::{LineSource, Primitive, Printer, RuntimeError};

    // Lists
    pub use arx_list::{BorrowingList, List, ListConfig, OwningList, RawList};

    // Strings
    pub use arx_text::{
        concat, ends_with, equal, index_of, is_alpha, is_numeric, is_space, join, last_index_of,
        repeat, replace, split, split_ref, starts_with, substring, to_lower, to_upper, trim,
        trim_left, trim_right,
    };

    // Ranges
    pub use arx_iter::{int_range, IntRange};
}
