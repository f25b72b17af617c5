// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event definitions.
//!
//! Events are captured while the application runs and stored in the
//! bounded event log for later export in a support bundle.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::sanitizer::{ErrorKind, WarningKind};

/// A warning surfaced to the user, categorized for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    /// Category of the warning.
    pub kind: WarningKind,
    /// Human-readable description. Sanitized before storage.
    pub message: String,
}

impl WarningEvent {
    /// Creates a new warning event.
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// An error surfaced to the user, categorized for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    /// Category of the error.
    pub kind: ErrorKind,
    /// Human-readable description. Sanitized before storage.
    pub message: String,
}

impl ErrorEvent {
    /// Creates a new error event.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The kind of diagnostic event, with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A warning was shown to the user.
    Warning {
        /// The warning details.
        event: WarningEvent,
    },
    /// An error was shown to the user.
    Error {
        /// The error details.
        event: ErrorEvent,
    },
}

/// A diagnostic event with the instant it was captured.
///
/// The timestamp is monotonic; exports convert it to an offset relative
/// to the start of collection.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event was captured.
    pub timestamp: Instant,
    /// What happened.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event captured now.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates an event with an explicit capture time.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
