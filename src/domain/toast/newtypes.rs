// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast stack values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Toast Capacity Bounds
// =============================================================================

/// Toast capacity bounds (1 to 50 toasts).
pub mod toast_capacity_bounds {
    /// Minimum toast capacity.
    pub const MIN: usize = 1;
    /// Maximum toast capacity.
    pub const MAX: usize = 50;
    /// Default toast capacity.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// ToastCapacity
// =============================================================================

/// Maximum number of toasts a stack holds at once.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1-50 toasts). A misconfigured
/// capacity of zero clamps to 1 rather than being rejected; a stack can
/// never be configured into a state where it cannot hold a toast.
///
/// # Example
///
/// ```ignore
/// let capacity = ToastCapacity::new(5);
/// assert_eq!(capacity.value(), 5);
///
/// // Values outside range are clamped
/// let none = ToastCapacity::new(0);
/// assert_eq!(none.value(), 1); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastCapacity(usize);

impl ToastCapacity {
    /// Creates a new toast capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(toast_capacity_bounds::MIN, toast_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= toast_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= toast_capacity_bounds::MAX
    }
}

impl Default for ToastCapacity {
    fn default() -> Self {
        Self(toast_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
