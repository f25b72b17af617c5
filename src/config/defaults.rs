// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the session library. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Toast stack capacity and display timing
//! - **Booking**: Service fee and stay limits
//! - **Diagnostics**: Diagnostic event log sizing

use crate::domain::booking::{guest_capacity_bounds, minimum_stay_bounds, service_fee_bounds};
use crate::domain::diagnostics::event_capacity_bounds;
use crate::domain::toast::toast_capacity_bounds;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default maximum number of toasts held at once.
/// When the stack is full, pushing a toast evicts the oldest one.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Default auto-dismiss delay for a toast, in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Duration value that keeps a toast on screen until it is dismissed.
pub const STICKY_TOAST_DURATION_MS: u64 = 0;

// ==========================================================================
// Booking Defaults
// ==========================================================================

/// Default service fee percentage charged on a stay subtotal.
pub const DEFAULT_SERVICE_FEE_PERCENT: u8 = 10;

/// Default minimum number of nights per booking.
pub const DEFAULT_MIN_NIGHTS: u32 = 1;

/// Default maximum number of guests per booking.
pub const DEFAULT_MAX_GUESTS: u32 = 6;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained in the session log.
pub const DEFAULT_EVENT_CAPACITY: usize = 500;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation (config defaults must agree with the domain bounds)
    assert!(DEFAULT_MAX_TOASTS == toast_capacity_bounds::DEFAULT);
    assert!(DEFAULT_MAX_TOASTS >= toast_capacity_bounds::MIN);
    assert!(DEFAULT_MAX_TOASTS <= toast_capacity_bounds::MAX);
    assert!(DEFAULT_TOAST_DURATION_MS as u128 == crate::toast::DEFAULT_DURATION.as_millis());
    assert!(DEFAULT_TOAST_DURATION_MS > STICKY_TOAST_DURATION_MS);

    // Booking validation
    assert!(DEFAULT_SERVICE_FEE_PERCENT == service_fee_bounds::DEFAULT);
    assert!(DEFAULT_SERVICE_FEE_PERCENT <= service_fee_bounds::MAX);
    assert!(DEFAULT_MIN_NIGHTS == minimum_stay_bounds::DEFAULT);
    assert!(DEFAULT_MIN_NIGHTS >= minimum_stay_bounds::MIN);
    assert!(DEFAULT_MAX_GUESTS == guest_capacity_bounds::DEFAULT);
    assert!(DEFAULT_MAX_GUESTS <= guest_capacity_bounds::MAX);

    // Diagnostics validation
    assert!(DEFAULT_EVENT_CAPACITY == event_capacity_bounds::DEFAULT);
    assert!(DEFAULT_EVENT_CAPACITY >= event_capacity_bounds::MIN);
    assert!(DEFAULT_EVENT_CAPACITY <= event_capacity_bounds::MAX);
};
