// SPDX-License-Identifier: MPL-2.0
//! Booking newtypes.
//!
//! This module provides type-safe wrappers for booking policy values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Service Fee Bounds
// =============================================================================

/// Service fee bounds (0% to 100%).
pub mod service_fee_bounds {
    /// Minimum service fee percentage.
    pub const MIN: u8 = 0;
    /// Maximum service fee percentage.
    pub const MAX: u8 = 100;
    /// Default service fee percentage.
    pub const DEFAULT: u8 = 10;
}

// =============================================================================
// ServiceFeePercent
// =============================================================================

/// Service fee charged on a stay, as a percentage of the subtotal.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0-100%). A fee of 0% is legal and
/// means no fee line on the quote.
///
/// # Example
///
/// ```ignore
/// let fee = ServiceFeePercent::new(10);
/// assert_eq!(fee.value(), 10);
///
/// // Values outside range are clamped
/// let too_high = ServiceFeePercent::new(250);
/// assert_eq!(too_high.value(), 100); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceFeePercent(u8);

impl ServiceFeePercent {
    /// Creates a new service fee percentage, clamping to valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(service_fee_bounds::MIN, service_fee_bounds::MAX))
    }

    /// Returns the value as u8.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if no fee is charged.
    #[must_use]
    pub fn is_free(self) -> bool {
        self.0 == 0
    }
}

impl Default for ServiceFeePercent {
    fn default() -> Self {
        Self(service_fee_bounds::DEFAULT)
    }
}

// =============================================================================
// Minimum Stay Bounds
// =============================================================================

/// Minimum stay bounds (1 to 90 nights).
pub mod minimum_stay_bounds {
    /// Shortest allowed minimum stay.
    pub const MIN: u32 = 1;
    /// Longest allowed minimum stay.
    pub const MAX: u32 = 90;
    /// Default minimum stay.
    pub const DEFAULT: u32 = 1;
}

// =============================================================================
// MinimumStay
// =============================================================================

/// Minimum number of nights a listing requires per booking.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1-90 nights).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumStay(u32);

impl MinimumStay {
    /// Creates a new minimum stay, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(minimum_stay_bounds::MIN, minimum_stay_bounds::MAX))
    }

    /// Returns the value in nights.
    #[must_use]
    pub fn nights(self) -> u32 {
        self.0
    }

    /// Returns true if any stay length is accepted.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= minimum_stay_bounds::MIN
    }
}

impl Default for MinimumStay {
    fn default() -> Self {
        Self(minimum_stay_bounds::DEFAULT)
    }
}

// =============================================================================
// Guest Capacity Bounds
// =============================================================================

/// Guest capacity bounds (1 to 16 guests).
pub mod guest_capacity_bounds {
    /// Minimum guest capacity.
    pub const MIN: u32 = 1;
    /// Maximum guest capacity.
    pub const MAX: u32 = 16;
    /// Default guest capacity.
    pub const DEFAULT: u32 = 6;
}

// =============================================================================
// GuestCapacity
// =============================================================================

/// Maximum number of guests a listing accommodates.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1-16 guests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestCapacity(u32);

impl GuestCapacity {
    /// Creates a new guest capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(guest_capacity_bounds::MIN, guest_capacity_bounds::MAX))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if the given party size fits.
    #[must_use]
    pub fn accommodates(self, guests: u32) -> bool {
        guests <= self.0
    }
}

impl Default for GuestCapacity {
    fn default() -> Self {
        Self(guest_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_fee_clamps() {
        assert_eq!(ServiceFeePercent::new(250).value(), service_fee_bounds::MAX);
        assert_eq!(ServiceFeePercent::new(0).value(), 0);
    }

    #[test]
    fn service_fee_default() {
        assert_eq!(
            ServiceFeePercent::default().value(),
            service_fee_bounds::DEFAULT
        );
    }

    #[test]
    fn service_fee_zero_is_free() {
        assert!(ServiceFeePercent::new(0).is_free());
        assert!(!ServiceFeePercent::default().is_free());
    }

    #[test]
    fn minimum_stay_clamps() {
        assert_eq!(MinimumStay::new(0).nights(), minimum_stay_bounds::MIN);
        assert_eq!(MinimumStay::new(365).nights(), minimum_stay_bounds::MAX);
    }

    #[test]
    fn minimum_stay_default_accepts_single_night() {
        assert!(MinimumStay::default().is_min());
        assert_eq!(MinimumStay::default().nights(), 1);
    }

    #[test]
    fn guest_capacity_clamps() {
        assert_eq!(GuestCapacity::new(0).value(), guest_capacity_bounds::MIN);
        assert_eq!(GuestCapacity::new(99).value(), guest_capacity_bounds::MAX);
    }

    #[test]
    fn guest_capacity_accommodates() {
        let capacity = GuestCapacity::new(4);
        assert!(capacity.accommodates(1));
        assert!(capacity.accommodates(4));
        assert!(!capacity.accommodates(5));
    }

    #[test]
    fn guest_capacity_default() {
        assert_eq!(
            GuestCapacity::default().value(),
            guest_capacity_bounds::DEFAULT
        );
    }
}
