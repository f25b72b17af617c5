// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module provides pure domain types for the toast stack:
//! - [`ToastCapacity`]: Maximum number of toasts held at once

mod newtypes;

pub use newtypes::{toast_capacity_bounds, ToastCapacity};
