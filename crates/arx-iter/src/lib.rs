//! Range producers for the Arx runtime.
//!
//! Compiled `for i in range(start, end, step)` loops are backed by
//! [`int_range`], which materialises the progression into a
//! [`List<i64>`](arx_list::List). [`IntRange`] is the lazy form for callers
//! that only need to iterate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod range;

pub use range::{int_range, IntRange};
