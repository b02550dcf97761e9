//! String transformations, searches, and classification.
//!
//! Every function borrows its inputs and returns a freshly owned result.
//! Positions are byte offsets. Functions whose output may outgrow their
//! input (`repeat`, `join`, `replace`, `concat`) size the result up front and
//! reserve it fallibly, so an impossible size is reported as
//! [`RuntimeError::AllocationFailed`] rather than aborting.
//!
//! Character classes are ASCII-only and locale-independent.

use arx_core::RuntimeError;
use smallvec::SmallVec;

pub use arx_core::value::is_space_byte;

/// Match offsets collected by [`replace`]. Most inputs have few matches.
type Matches = SmallVec<[usize; 8]>;

/// Bytes `[start, end)` of `src`, with `end` clamped to `src.len()`.
///
/// Fails with `InvalidArgument` if `end < start` after clamping or if
/// either offset splits a UTF-8 character.
pub fn substring(src: &str, start: usize, end: usize) -> Result<String, RuntimeError> {
    let end = end.min(src.len());
    if end < start {
        return Err(RuntimeError::invalid(format!(
            "substring end {end} precedes start {start}"
        )));
    }
    src.get(start..end)
        .map(str::to_owned)
        .ok_or_else(|| RuntimeError::invalid("substring bounds split a character"))
}

/// `src` repeated `times` times. Non-positive `times` yields `""`.
pub fn repeat(src: &str, times: i64) -> Result<String, RuntimeError> {
    let Ok(times) = usize::try_from(times) else {
        return Ok(String::new());
    };
    if src.is_empty() {
        return Ok(String::new());
    }
    let total = src.len().checked_mul(times).ok_or_else(too_large)?;
    let mut out = reserve(total)?;
    for _ in 0..times {
        out.push_str(src);
    }
    Ok(out)
}

/// Concatenate `parts`, inserting `delimiter` between neighbours.
pub fn join<S: AsRef<str>>(parts: &[S], delimiter: &str) -> Result<String, RuntimeError> {
    let Some((first, rest)) = parts.split_first() else {
        return Ok(String::new());
    };
    let delimiters = delimiter
        .len()
        .checked_mul(rest.len())
        .ok_or_else(too_large)?;
    let total = parts
        .iter()
        .try_fold(delimiters, |acc, part| acc.checked_add(part.as_ref().len()))
        .ok_or_else(too_large)?;
    let mut out = reserve(total)?;
    out.push_str(first.as_ref());
    for part in rest {
        out.push_str(delimiter);
        out.push_str(part.as_ref());
    }
    Ok(out)
}

/// `src` without leading or trailing whitespace.
pub fn trim(src: &str) -> String {
    trim_str(src, true, true).to_owned()
}

/// `src` without leading whitespace.
pub fn trim_left(src: &str) -> String {
    trim_str(src, true, false).to_owned()
}

/// `src` without trailing whitespace.
pub fn trim_right(src: &str) -> String {
    trim_str(src, false, true).to_owned()
}

fn trim_str(src: &str, left: bool, right: bool) -> &str {
    let bytes = src.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();
    if left {
        while start < end && is_space_byte(bytes[start]) {
            start += 1;
        }
    }
    if right {
        while end > start && is_space_byte(bytes[end - 1]) {
            end -= 1;
        }
    }
    // Whitespace bytes are ASCII, so both cuts land on char boundaries.
    &src[start..end]
}

/// Replace every non-overlapping occurrence of `find`, scanning left to
/// right. Replaced text is not searched again.
///
/// An empty `find` is rejected; with no occurrence the result is a copy of
/// `src`.
pub fn replace(src: &str, find: &str, replacement: &str) -> Result<String, RuntimeError> {
    if find.is_empty() {
        return Err(RuntimeError::invalid("replace pattern must be non-empty"));
    }
    let matches: Matches = src.match_indices(find).map(|(at, _)| at).collect();
    if matches.is_empty() {
        return Ok(src.to_owned());
    }

    let kept = src.len() - matches.len() * find.len();
    let total = replacement
        .len()
        .checked_mul(matches.len())
        .and_then(|added| added.checked_add(kept))
        .ok_or_else(too_large)?;
    let mut out = reserve(total)?;
    let mut cursor = 0;
    for at in matches {
        out.push_str(&src[cursor..at]);
        out.push_str(replacement);
        cursor = at + find.len();
    }
    out.push_str(&src[cursor..]);
    Ok(out)
}

/// Offset of the first occurrence of `needle`. An empty needle matches at 0.
pub fn index_of(src: &str, needle: &str) -> Option<usize> {
    src.find(needle)
}

/// Offset of the last occurrence found by a non-overlapping left-to-right
/// scan. An empty needle matches at `src.len()`.
///
/// For overlapping candidates this differs from [`str::rfind`]:
/// `last_index_of("aaa", "aa")` is `Some(0)`.
pub fn last_index_of(src: &str, needle: &str) -> Option<usize> {
    src.match_indices(needle).last().map(|(at, _)| at)
}

/// Whether `src` begins with `prefix`. An empty prefix always matches.
pub fn starts_with(src: &str, prefix: &str) -> bool {
    src.as_bytes().starts_with(prefix.as_bytes())
}

/// Whether `src` ends with `suffix`. An empty suffix always matches.
pub fn ends_with(src: &str, suffix: &str) -> bool {
    src.as_bytes().ends_with(suffix.as_bytes())
}

/// ASCII lowercase copy. Non-ASCII characters are unchanged.
pub fn to_lower(src: &str) -> String {
    src.to_ascii_lowercase()
}

/// ASCII uppercase copy. Non-ASCII characters are unchanged.
pub fn to_upper(src: &str) -> String {
    src.to_ascii_uppercase()
}

/// Non-empty and made only of ASCII digits.
pub fn is_numeric(src: &str) -> bool {
    all_bytes(src, |b| b.is_ascii_digit())
}

/// Non-empty and made only of ASCII letters.
pub fn is_alpha(src: &str) -> bool {
    all_bytes(src, |b| b.is_ascii_alphabetic())
}

/// Non-empty and made only of whitespace (see [`is_space_byte`]).
pub fn is_space(src: &str) -> bool {
    all_bytes(src, is_space_byte)
}

fn all_bytes(src: &str, class: impl Fn(u8) -> bool) -> bool {
    !src.is_empty() && src.bytes().all(class)
}

/// `a` followed by `b`, in a new buffer.
pub fn concat(a: &str, b: &str) -> Result<String, RuntimeError> {
    let total = a.len().checked_add(b.len()).ok_or_else(too_large)?;
    let mut out = reserve(total)?;
    out.push_str(a);
    out.push_str(b);
    Ok(out)
}

/// Byte-wise equality.
pub fn equal(a: &str, b: &str) -> bool {
    a == b
}

fn reserve(bytes: usize) -> Result<String, RuntimeError> {
    let mut out = String::new();
    out.try_reserve_exact(bytes).map_err(|_| RuntimeError::AllocationFailed {
        requested: bytes,
        limit: isize::MAX as usize,
    })?;
    Ok(out)
}

fn too_large() -> RuntimeError {
    RuntimeError::AllocationFailed {
        requested: usize::MAX,
        limit: isize::MAX as usize,
    }
}
