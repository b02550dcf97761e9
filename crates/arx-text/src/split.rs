//! Delimiter-based splitting into lists.
//!
//! The source is scanned left to right for non-overlapping occurrences of
//! the delimiter. Every gap becomes one element, including a leading gap
//! before a delimiter at offset 0 and a trailing gap after a delimiter at the
//! very end:
//!
//! ```text
//! "a,b,,c"  ->  ["a", "b", "", "c"]
//! ",a,"     ->  ["", "a", ""]
//! "abc"     ->  ["abc"]
//! ""        ->  [""]
//! ```
//!
//! With this rule `join(split(s, d), d) == s` holds for every `s`.

use arx_core::RuntimeError;
use arx_list::List;

/// Split `src` into owned strings.
///
/// The returned list owns each element; dropping it frees them all.
pub fn split(src: &str, delimiter: &str) -> Result<List<String>, RuntimeError> {
    check_delimiter(delimiter)?;
    let mut parts = List::new()?;
    for gap in src.split(delimiter) {
        parts.append(gap.to_owned())?;
    }
    Ok(parts)
}

/// Split `src` into views that borrow from it.
///
/// No element is copied; the list cannot outlive `src`.
pub fn split_ref<'a>(src: &'a str, delimiter: &str) -> Result<List<&'a str>, RuntimeError> {
    check_delimiter(delimiter)?;
    let mut parts = List::new()?;
    for gap in src.split(delimiter) {
        parts.append(gap)?;
    }
    Ok(parts)
}

fn check_delimiter(delimiter: &str) -> Result<(), RuntimeError> {
    if delimiter.is_empty() {
        return Err(RuntimeError::invalid("split delimiter must be non-empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::join;

    fn parts(src: &str, delimiter: &str) -> Vec<String> {
        split(src, delimiter).unwrap().into_vec()
    }

    #[test]
    fn keeps_empty_gaps() {
        assert_eq!(parts("a,b,,c", ","), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn no_occurrence_yields_source() {
        assert_eq!(parts("abc", "x"), vec!["abc"]);
        assert_eq!(parts("", ","), vec![""]);
    }

    #[test]
    fn leading_and_trailing_delimiters() {
        assert_eq!(parts(",a", ","), vec!["", "a"]);
        assert_eq!(parts("a,", ","), vec!["a", ""]);
        assert_eq!(parts(",", ","), vec!["", ""]);
    }

    #[test]
    fn multi_byte_delimiter_is_non_overlapping() {
        assert_eq!(parts("a::b:::c", "::"), vec!["a", "b", ":c"]);
        assert_eq!(parts("aaaa", "aa"), vec!["", "", ""]);
    }

    #[test]
    fn empty_delimiter_rejected() {
        assert!(matches!(
            split("abc", ""),
            Err(RuntimeError::InvalidArgument { .. })
        ));
        assert!(split_ref("abc", "").is_err());
    }

    #[test]
    fn many_parts_grow_the_list() {
        let src = vec!["x"; 20].join(",");
        let list = split(&src, ",").unwrap();
        assert_eq!(list.len(), 20);
        assert!(list.capacity() >= 20);
        assert!(list.iter().all(|p| p == "x"));
    }

    #[test]
    fn split_ref_borrows_from_source() {
        let src = String::from("k=v");
        let list = split_ref(&src, "=").unwrap();
        assert_eq!(list.as_slice(), &["k", "v"]);
        assert_eq!(list.resolve(0), Some("k"));
    }

    #[test]
    fn owned_and_borrowed_agree() {
        let owned = split("one two  three", " ").unwrap();
        let borrowed = split_ref("one two  three", " ").unwrap();
        assert_eq!(owned.len(), borrowed.len());
        for (a, b) in owned.iter().zip(borrowed.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn join_restores_source() {
        for src in ["a,b,,c", ",lead", "trail,", ",", "", "none"] {
            let list = split(src, ",").unwrap();
            assert_eq!(join(list.as_slice(), ",").unwrap(), src);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn join_inverts_split(s in "[a-c,;]{0,24}", d in "[,;]{1,2}") {
                let list = split(&s, &d).unwrap();
                prop_assert_eq!(join(list.as_slice(), &d).unwrap(), s);
            }

            #[test]
            fn element_count_is_occurrences_plus_one(s in "[ab,]{0,24}") {
                let list = split(&s, ",").unwrap();
                prop_assert_eq!(list.len(), s.matches(',').count() + 1);
            }
        }
    }
}
