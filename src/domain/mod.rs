// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`booking`]: Booking policy values ([`ServiceFeePercent`](booking::ServiceFeePercent),
//!   [`MinimumStay`](booking::MinimumStay), [`GuestCapacity`](booking::GuestCapacity))
//! - [`diagnostics`]: Diagnostics types ([`EventCapacity`](diagnostics::EventCapacity))
//! - [`toast`]: Toast stack values ([`ToastCapacity`](toast::ToastCapacity))

pub mod booking;
pub mod diagnostics;
pub mod toast;
