//! List configuration parameters.

use arx_core::RuntimeError;

/// Configuration for list allocation and growth.
///
/// Controls the initial slot count of empty lists and an optional ceiling on
/// how far growth may go. Validated at construction; a list copies what it
/// needs and never observes later changes to the config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of slots allocated by an empty list before the first append.
    ///
    /// Default: 8. Must not exceed `max_capacity`.
    pub initial_capacity: usize,

    /// Largest slot count a list may grow to.
    ///
    /// Default: `usize::MAX` (bounded only by the allocator). Appending to a
    /// list that already holds `max_capacity` elements fails with
    /// [`RuntimeError::AllocationFailed`].
    pub max_capacity: usize,
}

impl ListConfig {
    /// Default slot count for a freshly created list.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Default growth ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// Multiplier applied to capacity when a full list grows.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create a config with the default initial capacity and no ceiling.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Create a config whose growth stops at `max_capacity` slots.
    ///
    /// The initial capacity is lowered to fit under the ceiling if needed.
    pub fn bounded(max_capacity: usize) -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY.min(max_capacity),
            max_capacity,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), RuntimeError> {
        if self.max_capacity == 0 {
            return Err(RuntimeError::invalid("max_capacity must be at least 1"));
        }
        if self.initial_capacity > self.max_capacity {
            return Err(RuntimeError::invalid(format!(
                "initial_capacity {} exceeds max_capacity {}",
                self.initial_capacity, self.max_capacity
            )));
        }
        Ok(())
    }

    /// Slot count a full list of `current` slots should grow to.
    ///
    /// Doubles, starting from 1 for an empty exact-fit list, clamped to
    /// `max_capacity`. Returns `None` once the ceiling has been reached.
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        if current >= self.max_capacity {
            return None;
        }
        Some(
            current
                .saturating_mul(Self::GROWTH_FACTOR)
                .max(1)
                .min(self.max_capacity),
        )
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new()
    }
}
