// SPDX-License-Identifier: MPL-2.0
//! Stay pricing and booking validation.
//!
//! This module computes the price breakdown a guest sees for a stay and
//! validates booking requests against listing policy. All amounts are in
//! integer minor currency units; no floats touch money.
//!
//! # Components
//!
//! - [`quote`] - `Quote` arithmetic and the validating `BookingPolicy`
//!
//! # Usage
//!
//! ```ignore
//! use wanderstay_session::booking::{BookingPolicy, BookingRequest};
//!
//! let policy = BookingPolicy::default();
//! let quote = policy.quote(&request)?;
//! println!("{} nights, total {}", quote.nights, quote.total);
//! ```

pub mod quote;

pub use quote::{nights_between, BookingPolicy, BookingRequest, Quote, QuoteError};
