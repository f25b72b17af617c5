// SPDX-License-Identifier: MPL-2.0
//! Booking domain types.
//!
//! This module contains booking policy value objects that are independent
//! of any presentation or persistence concern.

mod newtypes;

pub use newtypes::{
    guest_capacity_bounds, minimum_stay_bounds, service_fee_bounds, GuestCapacity, MinimumStay,
    ServiceFeePercent,
};
