// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event collection and export.
//!
//! The [`DiagnosticsLog`] owns a bounded, in-memory ring of events and a
//! channel that decouples capture sites from storage. Capture sites hold a
//! cheap [`DiagnosticsHandle`] and never block; the owning context drains
//! pending events once per tick and can export everything as a JSON
//! support bundle.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, WarningEvent};
use super::sanitizer::{sanitize_message, ErrorKind, WarningKind};
use crate::domain::diagnostics::EventCapacity;

/// Default channel capacity for event buffering.
/// This allows some buffering without excessive memory usage.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// A handle for sending events to a [`DiagnosticsLog`].
///
/// Handles are cheap to clone and can be distributed to different
/// parts of the application.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    /// Sender for the log's event channel.
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a warning event.
    ///
    /// The message is automatically sanitized to remove email addresses.
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let sanitized_event = WarningEvent {
            message: sanitize_message(&warning_event.message),
            ..warning_event
        };
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: sanitized_event,
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning with the `Other` category.
    ///
    /// The message is automatically sanitized to remove email addresses.
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        let warning = WarningEvent::new(WarningKind::Other, sanitize_message(&message.into()));
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event.
    ///
    /// The message is automatically sanitized to remove email addresses.
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_error(&self, error_event: ErrorEvent) {
        let sanitized_event = ErrorEvent {
            message: sanitize_message(&error_event.message),
            ..error_event
        };
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: sanitized_event,
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error with the `Other` category.
    ///
    /// The message is automatically sanitized to remove email addresses.
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_error_simple(&self, message: impl Into<String>) {
        let error = ErrorEvent::new(ErrorKind::Other, sanitize_message(&message.into()));
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error });
        let _ = self.event_tx.try_send(event);
    }
}

/// Memory-bounded ring of diagnostic events.
///
/// Old events are evicted from the front when the ring is at capacity.
#[derive(Debug)]
struct EventRing {
    events: VecDeque<DiagnosticEvent>,
    capacity: EventCapacity,
}

impl EventRing {
    fn new(capacity: EventCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity,
        }
    }

    fn push(&mut self, event: DiagnosticEvent) {
        if self.events.len() >= self.capacity.value() {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    fn len(&self) -> usize {
        self.events.len()
    }

    fn clear(&mut self) {
        self.events.clear();
    }
}

/// Central log for diagnostic events.
///
/// The log receives events through a channel and stores them in a
/// memory-bounded ring. Old events are automatically evicted when the
/// ring reaches capacity.
#[derive(Debug)]
pub struct DiagnosticsLog {
    /// Ring storing diagnostic events, oldest first.
    ring: EventRing,
    /// Receiver for incoming events.
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (monotonic clock for offsets).
    collection_started_at: Instant,
    /// When collection started (wall clock for report metadata).
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsLog {
    /// Creates a new diagnostics log with the specified event capacity.
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            ring: EventRing::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this log.
    ///
    /// Handles are cheap to clone and can be distributed to different
    /// parts of the application.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each tick) to drain the event
    /// channel and store events in the ring.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.ring.push(event);
        }
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.ring.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> EventCapacity {
        self.ring.capacity
    }

    /// Returns how long the log has been collecting.
    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.collection_started_at.elapsed()
    }

    /// Exports all collected events as a JSON support bundle.
    ///
    /// The bundle includes:
    /// - Metadata (timestamps, collection span, event count)
    /// - All events with timestamps relative to the start of collection
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = self.build_report();
        serde_json::to_string_pretty(&report)
    }

    /// Builds a report from the current ring contents.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<ReportEvent> = self
            .ring
            .iter()
            .map(|event| ReportEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.collection_started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            generated_at: Utc::now().to_rfc3339(),
            collection_started_at: self.collection_started_at_utc.to_rfc3339(),
            collection_duration_ms: self.collection_duration().as_millis() as u64,
            event_count: events.len(),
            events,
        }
    }
}

/// One event in the exported bundle, with a collection-relative offset.
#[derive(Debug, Clone, Serialize)]
struct ReportEvent {
    /// Milliseconds since collection started.
    offset_ms: u64,
    /// What happened.
    #[serde(flatten)]
    kind: DiagnosticEventKind,
}

/// The JSON support bundle written by [`DiagnosticsLog::export_json`].
#[derive(Debug, Clone, Serialize)]
struct DiagnosticReport {
    /// When the bundle was generated (RFC 3339).
    generated_at: String,
    /// When collection started (RFC 3339).
    collection_started_at: String,
    /// How long collection had been running, in milliseconds.
    collection_duration_ms: u64,
    /// Number of events in the bundle.
    event_count: usize,
    /// The events, oldest first.
    events: Vec<ReportEvent>,
}
