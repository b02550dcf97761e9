//! Type-erased list of fixed-width byte elements.
//!
//! [`RawList`] serves callers that only know an element's byte width at run
//! time (generated code passing `sizeof(T)` at each call site). Elements are
//! stored inline and copied in and out as byte slices; the list never
//! reinterprets them.
//!
//! ```text
//! RawList { element_width = 4, len = 3, capacity = 4 }
//! storage: [e0 e0 e0 e0 | e1 e1 e1 e1 | e2 e2 e2 e2 | (free)      ]
//! ```

use arx_core::RuntimeError;
use log::{debug, trace};

use crate::buffer::ByteBuffer;
use crate::config::ListConfig;

/// A growable list of `element_width`-byte elements.
///
/// Equality compares element width and element bytes only. Clones are
/// exact-fit.
#[derive(Debug)]
pub struct RawList {
    storage: ByteBuffer,
    element_width: usize,
    len: usize,
    /// Slot count currently reserved in `storage`.
    capacity: usize,
    config: ListConfig,
}

impl RawList {
    /// Create an empty list with the default configuration.
    pub fn new(element_width: usize) -> Result<Self, RuntimeError> {
        Self::with_config(element_width, &ListConfig::default())
    }

    /// Create an empty list with `config.initial_capacity` slots reserved.
    pub fn with_config(element_width: usize, config: &ListConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        check_width(element_width)?;
        let bytes = slot_bytes(config.initial_capacity, element_width, config)?;
        Ok(Self {
            storage: ByteBuffer::with_capacity(bytes)?,
            element_width,
            len: 0,
            capacity: config.initial_capacity,
            config: *config,
        })
    }

    /// Create a list holding exactly `count` elements copied from `src`.
    ///
    /// Capacity equals `count`. `src` must provide at least
    /// `count * element_width` bytes; any excess is ignored.
    pub fn from_bytes(src: &[u8], count: usize, element_width: usize) -> Result<Self, RuntimeError> {
        check_width(element_width)?;
        let config = ListConfig::default();
        let bytes = slot_bytes(count, element_width, &config)?;
        let Some(src) = src.get(..bytes) else {
            return Err(RuntimeError::invalid(format!(
                "source holds {} bytes, {count} elements of width {element_width} need {bytes}",
                src.len()
            )));
        };
        Ok(Self {
            storage: ByteBuffer::from_slice(src)?,
            element_width,
            len: count,
            capacity: count,
            config,
        })
    }

    /// Copy `value` into the next free slot, growing if the list is full.
    ///
    /// `value` must be exactly `element_width` bytes. On error the list is
    /// left unchanged.
    pub fn append(&mut self, value: &[u8]) -> Result<(), RuntimeError> {
        if value.len() != self.element_width {
            return Err(RuntimeError::invalid(format!(
                "value is {} bytes, element width is {}",
                value.len(),
                self.element_width
            )));
        }
        if self.len == self.capacity {
            self.grow()?;
        }
        self.storage.extend_from_slice(value)?;
        self.len += 1;
        Ok(())
    }

    /// Bytes of the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len {
            return None;
        }
        self.storage
            .range(index * self.element_width, self.element_width)
    }

    /// Deep copy of elements `[start, end)` into a new exact-fit list.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, RuntimeError> {
        if start > end || end > self.len {
            return Err(RuntimeError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        let width = self.element_width;
        let bytes = self
            .storage
            .range(start * width, (end - start) * width)
            .unwrap_or_default();
        Ok(Self {
            storage: ByteBuffer::from_slice(bytes)?,
            element_width: width,
            len: end - start,
            capacity: end - start,
            config: self.config,
        })
    }

    /// Iterate over element byte slices in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.storage.as_slice().chunks_exact(self.element_width)
    }

    /// Byte width of one element. Fixed at creation.
    pub fn element_width(&self) -> usize {
        self.element_width
    }

    /// Number of populated elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots reserved.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw bytes of all populated elements.
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_slice()
    }

    fn grow(&mut self) -> Result<(), RuntimeError> {
        let width = self.element_width;
        let Some(new_capacity) = self.config.next_capacity(self.capacity) else {
            debug!(
                "raw list at max capacity {} (width {width})",
                self.config.max_capacity
            );
            return Err(RuntimeError::AllocationFailed {
                requested: self.capacity.saturating_add(1).saturating_mul(width),
                limit: self.config.max_capacity.saturating_mul(width),
            });
        };
        let bytes = slot_bytes(new_capacity, width, &self.config)?;
        self.storage.reserve_total(bytes)?;
        trace!(
            "raw list grown from {} to {new_capacity} slots ({bytes} bytes)",
            self.capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }
}

impl Clone for RawList {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            element_width: self.element_width,
            len: self.len,
            capacity: self.len,
            config: self.config,
        }
    }
}

impl PartialEq for RawList {
    fn eq(&self, other: &Self) -> bool {
        self.element_width == other.element_width && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for RawList {}

fn check_width(element_width: usize) -> Result<(), RuntimeError> {
    if element_width == 0 {
        return Err(RuntimeError::invalid("element width must be non-zero"));
    }
    Ok(())
}

/// Bytes needed for `slots` elements, or `AllocationFailed` on overflow.
fn slot_bytes(slots: usize, width: usize, config: &ListConfig) -> Result<usize, RuntimeError> {
    slots
        .checked_mul(width)
        .ok_or(RuntimeError::AllocationFailed {
            requested: usize::MAX,
            limit: config.max_capacity.saturating_mul(width),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of(v: i32) -> [u8; 4] {
        v.to_le_bytes()
    }

    fn value_at(list: &RawList, index: usize) -> Option<i32> {
        list.get(index)
            .map(|b| i32::from_le_bytes(b.try_into().unwrap()))
    }

    fn filled(n: i32) -> RawList {
        let mut list = RawList::new(4).unwrap();
        for i in 0..n {
            list.append(&bytes_of(i * 10)).unwrap();
        }
        list
    }

    #[test]
    fn new_list_is_empty_with_default_capacity() {
        let list = RawList::new(4).unwrap();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.element_width(), 4);
    }

    #[test]
    fn zero_width_rejected() {
        assert!(matches!(
            RawList::new(0),
            Err(RuntimeError::InvalidArgument { .. })
        ));
        assert!(RawList::from_bytes(&[], 0, 0).is_err());
    }

    #[test]
    fn append_then_get_round_trips_across_growth() {
        for n in [0, 1, 8, 9] {
            let list = filled(n);
            assert_eq!(list.len(), n as usize);
            for i in 0..n {
                assert_eq!(value_at(&list, i as usize), Some(i * 10));
            }
            assert_eq!(list.get(n as usize), None);
        }
    }

    #[test]
    fn growth_doubles_capacity() {
        let list = filled(9);
        assert_eq!(list.capacity(), 16);
    }

    #[test]
    fn append_wrong_width_is_rejected_without_change() {
        let mut list = filled(2);
        let result = list.append(&[1, 2]);
        assert!(matches!(result, Err(RuntimeError::InvalidArgument { .. })));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn from_bytes_is_exact_fit() {
        let src: Vec<u8> = [1i32, 2, 3].iter().flat_map(|v| v.to_le_bytes()).collect();
        let list = RawList::from_bytes(&src, 3, 4).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.capacity(), 3);
        assert_eq!(value_at(&list, 2), Some(3));
    }

    #[test]
    fn from_bytes_rejects_short_source() {
        let result = RawList::from_bytes(&[0u8; 7], 2, 4);
        assert!(matches!(result, Err(RuntimeError::InvalidArgument { .. })));
    }

    #[test]
    fn empty_exact_fit_list_grows_to_one() {
        let mut list = RawList::from_bytes(&[], 0, 4).unwrap();
        assert_eq!(list.capacity(), 0);
        list.append(&bytes_of(5)).unwrap();
        assert_eq!(list.capacity(), 1);
        assert_eq!(value_at(&list, 0), Some(5));
    }

    #[test]
    fn slice_copies_requested_window() {
        let list = filled(10);
        let window = list.slice(3, 7).unwrap();
        assert_eq!(window.len(), 4);
        assert_eq!(window.capacity(), 4);
        for i in 0..4 {
            assert_eq!(value_at(&window, i), value_at(&list, i + 3));
        }
    }

    #[test]
    fn slice_rejects_bad_bounds() {
        let list = filled(3);
        assert_eq!(
            list.slice(2, 1),
            Err(RuntimeError::InvalidRange {
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert!(matches!(
            list.slice(0, 4),
            Err(RuntimeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn empty_slice_at_every_position() {
        let list = filled(3);
        for a in 0..=3 {
            assert!(list.slice(a, a).unwrap().is_empty());
        }
    }

    #[test]
    fn bounded_list_reports_ceiling() {
        let mut list = RawList::with_config(4, &ListConfig::bounded(2)).unwrap();
        list.append(&bytes_of(1)).unwrap();
        list.append(&bytes_of(2)).unwrap();
        let result = list.append(&bytes_of(3));
        assert_eq!(
            result,
            Err(RuntimeError::AllocationFailed {
                requested: 12,
                limit: 8
            })
        );
        assert_eq!(list.len(), 2);
        assert_eq!(value_at(&list, 1), Some(2));
    }

    #[test]
    fn clone_is_exact_fit_and_grows_again() {
        let list = filled(9);
        assert_eq!(list.capacity(), 16);
        let mut copy = list.clone();
        assert_eq!(copy.capacity(), copy.len());
        assert_eq!(copy, list);
        copy.append(&bytes_of(90)).unwrap();
        assert_eq!(copy.capacity(), 18);
        assert_eq!(value_at(&copy, 9), Some(90));
        assert_eq!(list.len(), 9);
    }

    #[test]
    fn equality_ignores_capacity() {
        let exact = RawList::from_bytes(&bytes_of(1), 1, 4).unwrap();
        let mut grown = RawList::new(4).unwrap();
        grown.append(&bytes_of(1)).unwrap();
        assert_ne!(exact.capacity(), grown.capacity());
        assert_eq!(exact, grown);

        let bounded = RawList::with_config(4, &ListConfig::bounded(2)).unwrap();
        assert_eq!(bounded, RawList::new(4).unwrap());
    }

    #[test]
    fn equality_respects_width_and_bytes() {
        let wide = RawList::from_bytes(&[0u8; 4], 1, 4).unwrap();
        let narrow = RawList::from_bytes(&[0u8; 4], 2, 2).unwrap();
        assert_ne!(wide, narrow);
        assert_ne!(filled(3), filled(2));
        assert_ne!(RawList::new(4).unwrap(), RawList::new(2).unwrap());
    }

    #[test]
    fn iter_yields_each_element() {
        let list = filled(3);
        let values: Vec<i32> = list
            .iter()
            .map(|b| i32::from_le_bytes(b.try_into().unwrap()))
            .collect();
        assert_eq!(values, vec![0, 10, 20]);
    }
}
