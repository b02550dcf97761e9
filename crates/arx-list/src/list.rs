//! Typed growable list.
//!
//! [`List<T>`] is the runtime's general-purpose sequence. Capacity is managed
//! explicitly: an empty list reserves [`ListConfig::initial_capacity`] slots,
//! a full list doubles, and lists built from existing data (or by slicing)
//! are exact-fit. Every reservation is fallible, so running out of memory
//! is reported through [`RuntimeError::AllocationFailed`].
//!
//! # Indirect elements
//!
//! Whether a list owns the objects its slots refer to is part of the element
//! type rather than a runtime flag:
//!
//! - [`OwningList<T>`] (`List<Box<T>>`) frees every element when dropped.
//! - [`BorrowingList<'a, T>`] (`List<&'a T>`) only holds references; the
//!   referents outlive the list and are freed by their owner.
//!
//! [`List::resolve`] reads through the indirection and hands out the target,
//! never a reference to the slot itself.

use std::fmt;
use std::mem;
use std::ops::Deref;

use arx_core::RuntimeError;
use log::{debug, trace};

use crate::config::ListConfig;

/// A list whose slots own heap-allocated elements.
pub type OwningList<T> = List<Box<T>>;

/// A list whose slots refer to elements owned elsewhere.
pub type BorrowingList<'a, T> = List<&'a T>;

/// A growable, homogeneous sequence with explicit capacity management.
pub struct List<T> {
    items: Vec<T>,
    /// Logical slot count. `items.capacity()` may exceed it, never the
    /// reverse.
    capacity: usize,
    config: ListConfig,
}

impl<T> List<T> {
    /// Create an empty list with the default configuration (8 slots).
    pub fn new() -> Result<Self, RuntimeError> {
        Self::with_config(&ListConfig::default())
    }

    /// Create an empty list with `config.initial_capacity` slots reserved.
    pub fn with_config(config: &ListConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        let mut list = Self::reserved(config.initial_capacity)?;
        list.config = *config;
        Ok(list)
    }

    /// Create an empty list with exactly `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, RuntimeError> {
        Self::reserved(capacity)
    }

    /// Take ownership of `items`. Capacity equals the element count.
    pub fn from_vec(items: Vec<T>) -> Self {
        let capacity = items.len();
        Self {
            items,
            capacity,
            config: ListConfig::default(),
        }
    }

    /// Length of an optional list, treating an absent list as empty.
    pub fn len_of(list: Option<&Self>) -> usize {
        list.map_or(0, Self::len)
    }

    /// Move `value` into the next free slot, growing if the list is full.
    ///
    /// If growth fails the error is returned, `value` is dropped, and the
    /// list keeps its previous contents and capacity.
    pub fn append(&mut self, value: T) -> Result<(), RuntimeError> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(value);
        Ok(())
    }

    /// Element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Element at `index`, or [`RuntimeError::NotFound`] when out of range.
    pub fn try_get(&self, index: usize) -> Result<&T, RuntimeError> {
        self.items.get(index).ok_or(RuntimeError::NotFound)
    }

    /// Number of populated elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of element slots reserved.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Byte width of one stored slot.
    ///
    /// For indirect lists this is the width of the pointer, not the target.
    pub fn element_width(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the list, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn reserved(capacity: usize) -> Result<Self, RuntimeError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| RuntimeError::AllocationFailed {
                requested: capacity.saturating_mul(mem::size_of::<T>()),
                limit: isize::MAX as usize,
            })?;
        Ok(Self {
            items,
            capacity,
            config: ListConfig::default(),
        })
    }

    fn grow(&mut self) -> Result<(), RuntimeError> {
        let width = mem::size_of::<T>();
        let Some(new_capacity) = self.config.next_capacity(self.capacity) else {
            debug!("list at max capacity {}", self.config.max_capacity);
            return Err(RuntimeError::AllocationFailed {
                requested: self.capacity.saturating_add(1).saturating_mul(width),
                limit: self.config.max_capacity.saturating_mul(width),
            });
        };
        let additional = new_capacity - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| {
                debug!("list growth to {new_capacity} slots refused by allocator");
                RuntimeError::AllocationFailed {
                    requested: new_capacity.saturating_mul(width),
                    limit: isize::MAX as usize,
                }
            })?;
        trace!(
            "list grown from {} to {new_capacity} slots",
            self.capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T: Clone> List<T> {
    /// Create an exact-fit list holding copies of `src`.
    pub fn from_slice(src: &[T]) -> Result<Self, RuntimeError> {
        let mut list = Self::reserved(src.len())?;
        list.items.extend_from_slice(src);
        Ok(list)
    }

    /// Deep copy of elements `[start, end)` into a new exact-fit list.
    ///
    /// The result shares nothing with `self`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, RuntimeError> {
        let Some(window) = self.items.get(start..end) else {
            return Err(RuntimeError::InvalidRange {
                start,
                end,
                len: self.items.len(),
            });
        };
        let mut list = Self::from_slice(window)?;
        list.config = self.config;
        Ok(list)
    }
}

impl<P: Deref> List<P> {
    /// Target of the reference stored at `index`, or `None` when out of
    /// range.
    pub fn resolve(&self, index: usize) -> Option<&P::Target> {
        self.items.get(index).map(Deref::deref)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            capacity: self.items.len(),
            config: self.config,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
