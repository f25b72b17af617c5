// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Event Capacity Bounds
// =============================================================================

/// Event log capacity bounds (100 to 5000 events).
pub mod event_capacity_bounds {
    /// Minimum event log capacity.
    pub const MIN: usize = 100;
    /// Maximum event log capacity.
    pub const MAX: usize = 5000;
    /// Default event log capacity.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// EventCapacity
// =============================================================================

/// Capacity of the diagnostic event log.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (100-5000 events).
///
/// # Example
///
/// ```ignore
/// let capacity = EventCapacity::new(500);
/// assert_eq!(capacity.value(), 500);
///
/// // Values outside range are clamped
/// let too_high = EventCapacity::new(50000);
/// assert_eq!(too_high.value(), 5000); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCapacity(usize);

impl EventCapacity {
    /// Creates a new event log capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(event_capacity_bounds::MIN, event_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= event_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= event_capacity_bounds::MAX
    }
}

impl Default for EventCapacity {
    fn default() -> Self {
        Self(event_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
