// SPDX-License-Identifier: MPL-2.0
//! `wanderstay_session` is the headless state layer of the Wanderstay
//! homestay booking interface.
//!
//! It provides a bounded toast notification stack, booking quote policy,
//! user preference management, and a diagnostics log for support exports.
//! Rendering and timers live in the embedding application; this crate only
//! owns the state they drive.
//!
//! # Examples
//!
//! ```
//! use wanderstay_session::session::Session;
//!
//! let mut session = Session::new();
//! let id = session.toasts_mut().show_success("Booking confirmed!");
//! assert!(session.toasts_mut().dismiss(id));
//! ```

#![doc(html_root_url = "https://docs.rs/wanderstay-session/0.1.0")]

pub mod booking;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod paths;
pub mod session;
pub mod toast;
