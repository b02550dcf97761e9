//! String operations for the Arx runtime.
//!
//! - [`ops`]: substring, repeat, join, trim, replace, search, case mapping,
//!   classification, concatenation, and equality.
//! - [`split`]: delimiter splitting into [`List`](arx_list::List)s, owned or
//!   borrowed.
//!
//! No function mutates its inputs; every string result is a new, independently
//! owned buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ops;
pub mod split;

pub use ops::{
    concat, ends_with, equal, index_of, is_alpha, is_numeric, is_space, join, last_index_of,
    repeat, replace, starts_with, substring, to_lower, to_upper, trim, trim_left, trim_right,
};
pub use split::{split, split_ref};
