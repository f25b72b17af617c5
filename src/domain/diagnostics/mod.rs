// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! This module provides pure domain types for diagnostics:
//! - [`EventCapacity`]: Capacity for the diagnostic event log

mod newtypes;

pub use newtypes::{event_capacity_bounds, EventCapacity};
