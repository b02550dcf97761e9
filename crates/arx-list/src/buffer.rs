//! Contiguous owned byte storage with fallible allocation.
//!
//! A [`ByteBuffer`] is the substrate under [`RawList`](crate::RawList): a
//! `Vec<u8>` whose every allocation goes through `try_reserve_exact`, so an
//! out-of-memory condition surfaces as [`RuntimeError::AllocationFailed`]
//! instead of aborting the process.

use arx_core::RuntimeError;

/// Upper bound on a single allocation, as enforced by the global allocator.
const ALLOC_LIMIT: usize = isize::MAX as usize;

/// Owned, contiguous byte storage.
///
/// Capacity is reserved exactly; the buffer never over-allocates on its own.
/// A failed reservation leaves the buffer untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Allocate an empty buffer able to hold `bytes` bytes without
    /// reallocating.
    pub fn with_capacity(bytes: usize) -> Result<Self, RuntimeError> {
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| alloc_failed(bytes))?;
        Ok(Self { data })
    }

    /// Allocate an exact-fit copy of `src`.
    pub fn from_slice(src: &[u8]) -> Result<Self, RuntimeError> {
        let mut buf = Self::with_capacity(src.len())?;
        buf.data.extend_from_slice(src);
        Ok(buf)
    }

    /// Ensure the buffer can hold `total` bytes in all.
    ///
    /// On failure the buffer keeps its previous contents and capacity.
    pub fn reserve_total(&mut self, total: usize) -> Result<(), RuntimeError> {
        let additional = total.saturating_sub(self.data.len());
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| alloc_failed(total))
    }

    /// Append `bytes`, reserving exactly what is missing.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), RuntimeError> {
        let total = self
            .data
            .len()
            .checked_add(bytes.len())
            .ok_or_else(|| alloc_failed(usize::MAX))?;
        self.reserve_total(total)?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Borrow `len` bytes starting at `offset`, if that range is populated.
    pub fn range(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }

    /// All populated bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of populated bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no bytes are populated.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes that can be held without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

fn alloc_failed(requested: usize) -> RuntimeError {
    RuntimeError::AllocationFailed {
        requested,
        limit: ALLOC_LIMIT,
    }
}
