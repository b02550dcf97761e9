//! Arithmetic integer ranges.
//!
//! [`IntRange`] yields `start, start + step, start + 2*step, ...` while the
//! value is strictly before `end` in the direction of `step`. The element
//! count is computed once, in `i128`, so ranges spanning the whole `i64`
//! domain neither overflow nor wrap.

use arx_core::RuntimeError;
use arx_list::List;

/// Lazy arithmetic progression over `i64`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntRange {
    start: i64,
    step: i64,
    /// Index of the next value from the front.
    front: usize,
    /// One past the index of the next value from the back.
    back: usize,
}

impl IntRange {
    /// Create a range. Fails with `InvalidArgument` when `step` is zero.
    ///
    /// A positive step is non-empty only if `start < end`, a negative one
    /// only if `start > end`; anything else is a valid empty range. A range
    /// with more than `usize::MAX` values (possible on targets narrower than
    /// 64 bits) fails with `InvalidArgument`.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, RuntimeError> {
        if step == 0 {
            return Err(RuntimeError::invalid("range step must be non-zero"));
        }
        let (start_w, end_w, step_w) = (i128::from(start), i128::from(end), i128::from(step));
        let span = if step > 0 { end_w - start_w } else { start_w - end_w };
        let count = if span <= 0 {
            0
        } else {
            // Ceiling division: a partial final stride still yields a value.
            let stride = step_w.abs();
            (span + stride - 1) / stride
        };
        let back = usize::try_from(count).map_err(|_| {
            RuntimeError::invalid(format!("range of {count} values exceeds usize"))
        })?;
        Ok(Self {
            start,
            step,
            front: 0,
            back,
        })
    }

    fn value_at(&self, index: usize) -> i64 {
        // In range by construction: every yielded value lies between start
        // and end.
        (i128::from(self.start) + index as i128 * i128::from(self.step)) as i64
    }
}

impl Iterator for IntRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.value_at(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for IntRange {
    fn next_back(&mut self) -> Option<i64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.value_at(self.back))
    }
}

impl ExactSizeIterator for IntRange {}

/// Collect `start..end` by `step` into an exact-fit list.
///
/// `step == 0` is rejected with `InvalidArgument`; a range too large to
/// allocate fails with `AllocationFailed`.
pub fn int_range(start: i64, end: i64, step: i64) -> Result<List<i64>, RuntimeError> {
    let range = IntRange::new(start, end, step)?;
    let mut list = List::with_capacity(range.len())?;
    for value in range {
        list.append(value)?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(start: i64, end: i64, step: i64) -> Vec<i64> {
        int_range(start, end, step).unwrap().into_vec()
    }

    #[test]
    fn positive_step() {
        assert_eq!(values(0, 10, 2), vec![0, 2, 4, 6, 8]);
        assert_eq!(values(0, 9, 3), vec![0, 3, 6]);
        assert_eq!(values(0, 10, 3), vec![0, 3, 6, 9]);
    }

    #[test]
    fn negative_step() {
        assert_eq!(values(10, 0, -3), vec![10, 7, 4, 1]);
        assert_eq!(values(0, -4, -1), vec![0, -1, -2, -3]);
    }

    #[test]
    fn empty_when_direction_disagrees() {
        assert!(values(5, 5, 1).is_empty());
        assert!(values(5, 0, 1).is_empty());
        assert!(values(0, 5, -1).is_empty());
    }

    #[test]
    fn zero_step_rejected() {
        assert!(matches!(
            int_range(0, 10, 0),
            Err(RuntimeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn list_is_exact_fit() {
        let list = int_range(0, 10, 2).unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list.capacity(), 5);
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let mut range = IntRange::new(i64::MIN, i64::MAX, i64::MAX).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.next(), Some(i64::MIN));
        assert_eq!(range.next(), Some(-1));
        assert_eq!(range.next(), Some(i64::MAX - 1));
        assert_eq!(range.next(), None);

        let down = IntRange::new(i64::MAX, i64::MIN, i64::MIN).unwrap();
        assert_eq!(down.collect::<Vec<_>>(), vec![i64::MAX, -1]);
    }

    #[test]
    fn exact_size_over_full_domain() {
        let range = IntRange::new(i64::MIN, i64::MAX, 1);
        if cfg!(target_pointer_width = "64") {
            let range = range.unwrap();
            assert_eq!(range.size_hint(), (usize::MAX, Some(usize::MAX)));
            assert_eq!(range.len(), usize::MAX);
        } else {
            assert!(matches!(range, Err(RuntimeError::InvalidArgument { .. })));
        }
    }

    #[test]
    fn unallocatable_range_is_reported() {
        assert!(matches!(
            int_range(i64::MIN, i64::MAX, 1),
            Err(RuntimeError::AllocationFailed { .. } | RuntimeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn iterates_from_both_ends() {
        let mut range = IntRange::new(0, 10, 2).unwrap();
        assert_eq!(range.next_back(), Some(8));
        assert_eq!(range.next(), Some(0));
        assert_eq!(range.len(), 3);
        assert_eq!(range.rev().collect::<Vec<_>>(), vec![6, 4, 2]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_step_by_reference(
                start in -200i64..200,
                end in -200i64..200,
                step in 1i64..20,
            ) {
                let up: Vec<i64> = (start..end).step_by(step as usize).collect();
                prop_assert_eq!(values(start, end, step), up);

                let down: Vec<i64> = ((end + 1)..=start).rev().step_by(step as usize).collect();
                prop_assert_eq!(values(start, end, -step), down);
            }

            #[test]
            fn every_value_precedes_end(
                start in any::<i64>(),
                end in any::<i64>(),
                step in prop_oneof![1i64..1000, -1000i64..-1],
            ) {
                let range = IntRange::new(start, end, step).unwrap();
                if range.len() <= 4096 {
                    for v in range {
                        if step > 0 {
                            prop_assert!(start <= v && v < end);
                        } else {
                            prop_assert!(end < v && v <= start);
                        }
                    }
                }
            }
        }
    }
}
