// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastStack` holds the bounded, ordered set of live toasts. It
//! enforces the capacity at insertion time, dismisses by id, and expires
//! toasts whose duration has elapsed when ticked.

use super::toast::{Toast, ToastId, ToastPosition, ToastVariant, DEFAULT_DURATION};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorKind, WarningEvent, WarningKind};
use crate::domain::toast::ToastCapacity;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Tick for checking expired durations.
    Tick,
}

/// Holds the live toasts in insertion order, oldest first.
///
/// The stack is owned by the session context and mutated only through
/// these synchronous operations; rendering and timers are external.
/// Its length never exceeds the configured capacity: pushing at capacity
/// evicts the oldest toast before the new one is appended.
#[derive(Debug)]
pub struct ToastStack {
    /// Live toasts, oldest at the front.
    toasts: VecDeque<Toast>,
    /// Maximum number of toasts held at once.
    capacity: ToastCapacity,
    /// Anchor given to toasts pushed without an explicit position.
    default_position: ToastPosition,
    /// Duration given to toasts pushed without an explicit duration.
    default_duration: Duration,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastStack {
    /// Creates an empty stack with default capacity, position and duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(
            ToastCapacity::default(),
            ToastPosition::default(),
            DEFAULT_DURATION,
        )
    }

    /// Creates an empty stack with the given capacity and default
    /// position/duration.
    #[must_use]
    pub fn with_capacity(capacity: ToastCapacity) -> Self {
        Self::with_defaults(capacity, ToastPosition::default(), DEFAULT_DURATION)
    }

    /// Creates an empty stack with explicit capacity and defaults.
    ///
    /// The settings are fixed for the stack's lifetime.
    #[must_use]
    pub fn with_defaults(
        capacity: ToastCapacity,
        default_position: ToastPosition,
        default_duration: Duration,
    ) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity.value()),
            capacity,
            default_position,
            default_duration,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a toast, returning its id for later dismissal.
    ///
    /// Unset position/duration are filled from the stack defaults. When the
    /// stack is at capacity the oldest toast is evicted first (exactly one
    /// per push), so the length never exceeds the capacity. Push cannot fail.
    ///
    /// Warnings and errors are logged to the diagnostics system. Push sites
    /// should use `with_warning_kind()` or `with_error_kind()` to set an
    /// explicit diagnostic category; `Other` is the fallback.
    pub fn push(&mut self, mut toast: Toast) -> ToastId {
        toast.fill_defaults(self.default_position, self.default_duration);

        // Log warnings and errors to diagnostics
        if let Some(handle) = &self.diagnostics {
            match toast.variant() {
                ToastVariant::Warning => {
                    let kind = toast.warning_kind().unwrap_or(WarningKind::Other);
                    handle.log_warning(WarningEvent::new(kind, toast.message()));
                }
                ToastVariant::Error => {
                    let kind = toast.error_kind().unwrap_or(ErrorKind::Other);
                    handle.log_error(ErrorEvent::new(kind, toast.message()));
                }
                ToastVariant::Info | ToastVariant::Success => {
                    // Info and success toasts are not diagnostic events
                }
            }
        }

        // Make room for exactly one before appending
        if self.toasts.len() >= self.capacity.value() {
            self.toasts.pop_front();
        }

        let id = toast.id();
        self.toasts.push_back(toast);
        id
    }

    /// Pushes an info toast with stack defaults.
    pub fn show_info(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::info(message))
    }

    /// Pushes a success toast with stack defaults.
    pub fn show_success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::success(message))
    }

    /// Pushes a warning toast with stack defaults.
    pub fn show_warning(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::warning(message))
    }

    /// Pushes an error toast with stack defaults.
    pub fn show_error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(Toast::error(message))
    }

    /// Pushes the standard warning for a feature that is not wired up yet.
    pub fn show_not_implemented(&mut self, feature: Option<&str>) -> ToastId {
        let message = match feature {
            Some(name) => format!("\"{name}\" is not implemented yet"),
            None => String::from("This feature is not implemented yet"),
        };
        self.push(Toast::warning(message).with_warning_kind(WarningKind::FeatureUnavailable))
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed. Dismissing an
    /// unknown id is a silent no-op, so a user dismissal racing an elapsed
    /// timer never becomes an error.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|t| t.id() == id) {
            self.toasts.remove(pos);
            return true;
        }
        false
    }

    /// Dismisses every toast whose duration had elapsed at `now`.
    ///
    /// Sticky toasts are never expired by this.
    pub fn tick_at(&mut self, now: Instant) {
        // Collect IDs of toasts to dismiss
        let to_dismiss: Vec<ToastId> = self
            .toasts
            .iter()
            .filter(|t| t.should_auto_dismiss_at(now))
            .map(Toast::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Processes a tick event, dismissing any toasts that have expired.
    ///
    /// Should be called periodically (e.g., every 100-500ms) when the
    /// embedding application drives expiry by polling.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the live toasts in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns an owned snapshot of the live toasts, oldest first.
    ///
    /// The snapshot is detached: later pushes and dismissals do not
    /// alter it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.iter().cloned().collect()
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether no toasts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> ToastCapacity {
        self.capacity
    }

    /// Clears all toasts.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}
