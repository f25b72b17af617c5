// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! This module provides infrastructure for capturing warning and error
//! events during application usage, storing them in a memory-bounded ring,
//! and exporting them as a JSON support bundle.
//!
//! # Architecture
//!
//! - [`DiagnosticsLog`]: Owns the bounded ring and drains the event channel
//! - [`DiagnosticsHandle`]: Cheap clonable sender held by capture sites
//! - [`DiagnosticEvent`]: One captured warning or error with its timestamp
//!
//! # Privacy
//!
//! Messages are sanitized before storage: email addresses are replaced
//! with a placeholder so exported bundles never carry guest contact
//! details.

mod events;
mod log;
mod sanitizer;

pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, WarningEvent};
pub use log::{DiagnosticsHandle, DiagnosticsLog};
pub use sanitizer::{sanitize_message, ErrorKind, WarningKind};
