// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct and the `ToastVariant` and
//! `ToastPosition` enums used throughout the toast system.

use crate::diagnostics::{ErrorKind, WarningKind};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Display duration applied when neither the toast nor its stack names one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Unique identifier for a toast.
///
/// Ids come from a process-wide monotonic counter: two toasts never share
/// an id for the lifetime of the process, and a dismissed toast's id is
/// never reused. They carry no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Variant determines the visual treatment and diagnostic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Neutral informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Something degraded but not blocking.
    Warning,
    /// Something failed and needs attention.
    Error,
}

/// Screen anchor a toast is displayed at.
///
/// Pure data for the rendering layer; the stack never positions anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    /// Top left in LTR locales.
    TopStart,
    /// Top center.
    TopCenter,
    /// Top right in LTR locales.
    TopEnd,
    /// Bottom left in LTR locales.
    BottomStart,
    /// Bottom center.
    BottomCenter,
    /// Bottom right in LTR locales.
    #[default]
    BottomEnd,
}

/// A toast to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast.
    id: ToastId,
    /// Variant (determines visual treatment and diagnostic handling).
    variant: ToastVariant,
    /// The display text. Not validated; shown as given.
    message: String,
    /// Screen anchor; `None` until adopted by a stack, which fills its default.
    position: Option<ToastPosition>,
    /// Display duration; `None` until adopted by a stack. Zero means sticky.
    duration: Option<Duration>,
    /// Whether a manual-dismiss affordance is offered.
    show_close: bool,
    /// When this toast was created.
    created_at: Instant,
    /// Diagnostic category for warning toasts.
    warning_kind: Option<WarningKind>,
    /// Diagnostic category for error toasts.
    error_kind: Option<ErrorKind>,
}

impl Toast {
    /// Creates a new toast with the given variant and message.
    ///
    /// Position and duration are left unset here; the stack fills them
    /// with its configured defaults when the toast is pushed.
    pub fn new(variant: ToastVariant, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            variant,
            message: message.into(),
            position: None,
            duration: None,
            show_close: true,
            created_at: Instant::now(),
            warning_kind: None,
            error_kind: None,
        }
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Info, message)
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, message)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, message)
    }

    /// Sets an explicit screen anchor, overriding the stack default.
    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets an explicit display duration, overriding the stack default.
    ///
    /// A zero duration makes the toast sticky: it stays until dismissed.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Makes the toast sticky: it stays until explicitly dismissed.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.with_duration(Duration::ZERO)
    }

    /// Hides the manual-dismiss affordance.
    #[must_use]
    pub fn without_close(mut self) -> Self {
        self.show_close = false;
        self
    }

    /// Sets the diagnostic category logged when this warning toast is pushed.
    #[must_use]
    pub fn with_warning_kind(mut self, kind: WarningKind) -> Self {
        self.warning_kind = Some(kind);
        self
    }

    /// Sets the diagnostic category logged when this error toast is pushed.
    #[must_use]
    pub fn with_error_kind(mut self, kind: ErrorKind) -> Self {
        self.error_kind = Some(kind);
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the variant.
    #[must_use]
    pub fn variant(&self) -> ToastVariant {
        self.variant
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the screen anchor, falling back to the crate-wide default
    /// when the toast has not been adopted by a stack yet.
    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position.unwrap_or_default()
    }

    /// Returns the raw display duration (zero for sticky toasts), falling
    /// back to [`DEFAULT_DURATION`] when the toast has not been adopted by
    /// a stack yet.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    /// Returns how long after creation the toast should be dismissed, or
    /// `None` for sticky toasts. Timer collaborators should schedule off
    /// this rather than branching on a raw zero duration.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        let duration = self.duration();
        if duration.is_zero() {
            None
        } else {
            Some(duration)
        }
    }

    /// Returns true if the toast persists until explicitly dismissed.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.duration().is_zero()
    }

    /// Returns whether a manual-dismiss affordance is offered.
    #[must_use]
    pub fn show_close(&self) -> bool {
        self.show_close
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this toast.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the diagnostic category for a warning toast, if one was set.
    #[must_use]
    pub fn warning_kind(&self) -> Option<WarningKind> {
        self.warning_kind
    }

    /// Returns the diagnostic category for an error toast, if one was set.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    /// Returns whether this toast's duration has elapsed at `now`.
    ///
    /// Sticky toasts never expire.
    #[must_use]
    pub fn should_auto_dismiss_at(&self, now: Instant) -> bool {
        match self.dismiss_after() {
            Some(d) => now.saturating_duration_since(self.created_at) >= d,
            None => false,
        }
    }

    /// Returns whether this toast's duration has elapsed by now.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.should_auto_dismiss_at(Instant::now())
    }

    /// Fills unset position and duration from the owning stack's defaults.
    pub(super) fn fill_defaults(&mut self, position: ToastPosition, duration: Duration) {
        self.position.get_or_insert(position);
        self.duration.get_or_insert(duration);
    }
}
