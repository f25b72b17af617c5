// SPDX-License-Identifier: MPL-2.0
//! Toast notification stack for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about actions (booking confirmed, errors, etc.) without blocking
//! interaction. The stack is headless: rendering and timers belong to the
//! embedding application.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` struct with variant, position and duration
//! - [`stack`] - `ToastStack` holding the bounded, ordered live set
//!
//! # Usage
//!
//! ```ignore
//! use wanderstay_session::toast::{Toast, ToastStack};
//!
//! // Create a stack
//! let mut stack = ToastStack::new();
//!
//! // Push a toast and keep its id for later dismissal
//! let id = stack.push(Toast::success("Booking confirmed"));
//!
//! // In your view function, render the current set oldest-first
//! for toast in stack.iter() {
//!     render(toast);
//! }
//!
//! // Dismiss explicitly, or poll `tick()` so durations elapse
//! stack.dismiss(id);
//! ```
//!
//! # Design Considerations
//!
//! - Capacity: bounded (default 5); pushing at capacity evicts the oldest
//! - Ordering: insertion order, oldest first, for both display and eviction
//! - Duration: per-toast, default 4s; zero means sticky (manual dismiss)
//! - Position: screen anchor only, default bottom-end; no layout logic here

mod stack;
mod toast;

pub use stack::{Message as ToastMessage, ToastStack};
pub use toast::{Toast, ToastId, ToastPosition, ToastVariant, DEFAULT_DURATION};
