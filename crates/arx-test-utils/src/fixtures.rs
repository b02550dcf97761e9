//! Reusable list fixtures.
//!
//! - [`sequential`]: `0..n` appended one at a time, exercising growth.
//! - [`words`]: owned strings for split/join scenarios.
//! - [`raw_i32`]: a [`RawList`] of little-endian `i32` values.

use arx_list::{List, RawList};

/// A list of `0..n` built by repeated appends from the default capacity.
pub fn sequential(n: i64) -> List<i64> {
    let mut list = List::new().expect("default list allocates");
    for i in 0..n {
        list.append(i).expect("append within test sizes");
    }
    list
}

/// A list of owned words.
pub fn words(items: &[&str]) -> List<String> {
    List::from_vec(items.iter().map(|s| (*s).to_owned()).collect())
}

/// A type-erased list of 4-byte little-endian integers.
pub fn raw_i32(values: &[i32]) -> RawList {
    let mut list = RawList::new(4).expect("default raw list allocates");
    for v in values {
        list.append(&v.to_le_bytes())
            .expect("append within test sizes");
    }
    list
}

/// Decode element `index` of a list built by [`raw_i32`].
pub fn raw_i32_at(list: &RawList, index: usize) -> Option<i32> {
    let bytes: [u8; 4] = list.get(index)?.try_into().ok()?;
    Some(i32::from_le_bytes(bytes))
}
