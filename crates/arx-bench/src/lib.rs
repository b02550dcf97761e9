//! Benchmark profiles and utilities for the Arx runtime.
//!
//! Provides deterministic inputs for benchmarks:
//!
//! - [`filled_list`]: a `List<i64>` grown one append at a time
//! - [`filled_raw_list`]: the same contents in an 8-byte-wide [`RawList`]
//! - [`csv_line`]: a comma-separated line of pseudo-random words via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use arx_core::RuntimeError;
use arx_list::{List, RawList};

/// Element count used by the reference list benchmarks.
pub const REFERENCE_LEN: usize = 10_000;

/// Build a list of `0..n` by repeated appends from the default capacity.
pub fn filled_list(n: usize) -> Result<List<i64>, RuntimeError> {
    let mut list = List::new()?;
    for i in 0..n as i64 {
        list.append(i)?;
    }
    Ok(list)
}

/// Build a type-erased list of `0..n` stored as native-endian `i64`.
pub fn filled_raw_list(n: usize) -> Result<RawList, RuntimeError> {
    let mut list = RawList::new(std::mem::size_of::<i64>())?;
    for i in 0..n as i64 {
        list.append(&i.to_ne_bytes())?;
    }
    Ok(list)
}

/// Generate a deterministic comma-separated line of `fields` words.
///
/// Words are 1 to 8 lowercase letters, padded with a space on either side
/// every third field so trimming has work to do.
pub fn csv_line(fields: usize, seed: u64) -> String {
    let mut state = seed;
    let mut line = String::with_capacity(fields * 8);
    for i in 0..fields {
        if i > 0 {
            line.push(',');
        }
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let word_len = 1 + (state >> 60) as usize % 8;
        let padded = i % 3 == 0;
        if padded {
            line.push(' ');
        }
        for k in 0..word_len {
            let letter = ((state >> (k * 5)) % 26) as u8;
            line.push(char::from(b'a' + letter));
        }
        if padded {
            line.push(' ');
        }
    }
    line
}
