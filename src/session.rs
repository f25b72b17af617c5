// SPDX-License-Identifier: MPL-2.0
//! Session state owned by the application context.
//!
//! A [`Session`] bundles the pieces of per-run state the booking interface
//! works against: the toast stack, the diagnostics log, and the booking
//! policy. The application owns exactly one `Session`; components receive
//! mutable access through it rather than through globals.
//!
//! # Usage
//!
//! ```ignore
//! let mut session = Session::load();
//!
//! session.toasts_mut().show_success("Saved!");
//! session.tick();
//! ```
//!
//! # Design Considerations
//!
//! Construction applies the configuration once. Changing a setting at
//! runtime means building a new `Session` from the updated `Config`, which
//! keeps every component's settings immutable for its lifetime.

use crate::booking::{BookingPolicy, BookingRequest, Quote, QuoteError};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsLog, WarningKind};
use crate::domain::booking::{GuestCapacity, MinimumStay, ServiceFeePercent};
use crate::domain::diagnostics::EventCapacity;
use crate::domain::toast::ToastCapacity;
use crate::toast::{Toast, ToastStack};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Per-run state for the booking interface.
#[derive(Debug)]
pub struct Session {
    toasts: ToastStack,
    diagnostics: DiagnosticsLog,
    booking: BookingPolicy,
}

impl Session {
    /// Creates a session with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Builds a session from a loaded configuration.
    ///
    /// Out-of-range values are clamped by the domain newtypes, never
    /// rejected.
    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        let capacity =
            ToastCapacity::new(cfg.toast.max_toasts.unwrap_or(config::DEFAULT_MAX_TOASTS));
        let position = cfg.toast.default_position.unwrap_or_default();
        let duration = Duration::from_millis(
            cfg.toast
                .default_duration_ms
                .unwrap_or(config::DEFAULT_TOAST_DURATION_MS),
        );
        let mut toasts = ToastStack::with_defaults(capacity, position, duration);

        let diagnostics = DiagnosticsLog::new(EventCapacity::new(
            cfg.diagnostics
                .event_capacity
                .unwrap_or(config::DEFAULT_EVENT_CAPACITY),
        ));
        toasts.set_diagnostics(diagnostics.handle());

        let booking = BookingPolicy::new(
            ServiceFeePercent::new(
                cfg.booking
                    .service_fee_percent
                    .unwrap_or(config::DEFAULT_SERVICE_FEE_PERCENT),
            ),
            MinimumStay::new(cfg.booking.min_nights.unwrap_or(config::DEFAULT_MIN_NIGHTS)),
            GuestCapacity::new(cfg.booking.max_guests.unwrap_or(config::DEFAULT_MAX_GUESTS)),
        );

        Self {
            toasts,
            diagnostics,
            booking,
        }
    }

    /// Loads configuration from the default path and builds a session.
    ///
    /// A configuration problem is surfaced as a warning toast and recorded
    /// in the diagnostics log; defaults are used in its place.
    #[must_use]
    pub fn load() -> Self {
        Self::load_with_override(None)
    }

    /// Loads configuration from a custom directory and builds a session.
    #[must_use]
    pub fn load_with_override(base_dir: Option<PathBuf>) -> Self {
        let (cfg, warning) = config::load_with_override(base_dir);
        let mut session = Self::from_config(&cfg);
        if let Some(message) = warning {
            session
                .toasts
                .push(Toast::warning(message).with_warning_kind(WarningKind::Configuration));
        }
        session
    }

    /// Returns the toast stack.
    #[must_use]
    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    /// Returns the toast stack for mutation.
    pub fn toasts_mut(&mut self) -> &mut ToastStack {
        &mut self.toasts
    }

    /// Returns the diagnostics log.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    /// Returns the diagnostics log for mutation.
    pub fn diagnostics_mut(&mut self) -> &mut DiagnosticsLog {
        &mut self.diagnostics
    }

    /// Returns the booking policy.
    #[must_use]
    pub fn booking(&self) -> &BookingPolicy {
        &self.booking
    }

    /// Quotes a stay, surfacing a rejection as a warning toast.
    ///
    /// The rejection is also returned so callers can react to it (disable a
    /// submit button, highlight a field) without re-validating.
    pub fn request_quote(&mut self, request: &BookingRequest) -> Result<Quote, QuoteError> {
        match self.booking.quote(request) {
            Ok(quote) => Ok(quote),
            Err(error) => {
                let kind = match error {
                    QuoteError::Unavailable => WarningKind::Availability,
                    QuoteError::TooManyGuests { .. } | QuoteError::StayTooShort { .. } => {
                        WarningKind::Validation
                    }
                };
                self.toasts
                    .push(Toast::warning(error.to_string()).with_warning_kind(kind));
                Err(error)
            }
        }
    }

    /// Advances time-based state.
    ///
    /// Expires toasts whose display time is up and moves pending diagnostic
    /// events into the log. Call this from the application's periodic tick.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances time-based state against an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) {
        self.toasts.tick_at(now);
        self.diagnostics.process_pending();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BookingConfig, DiagnosticsConfig, ToastConfig};
    use crate::diagnostics::DiagnosticEventKind;
    use crate::toast::{ToastPosition, ToastVariant};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn available_stay() -> BookingRequest {
        BookingRequest {
            check_in: date(2026, 3, 10),
            check_out: date(2026, 3, 13),
            guests: 2,
            nightly_rate: 9500,
            available: true,
        }
    }

    #[test]
    fn from_config_applies_toast_settings() {
        let cfg = Config {
            toast: ToastConfig {
                max_toasts: Some(2),
                default_position: Some(ToastPosition::TopCenter),
                default_duration_ms: Some(1000),
            },
            ..Config::default()
        };
        let mut session = Session::from_config(&cfg);

        session.toasts_mut().show_info("a");
        session.toasts_mut().show_info("b");
        session.toasts_mut().show_info("c");

        assert_eq!(session.toasts().len(), 2);
        let toast = session.toasts().iter().next().expect("toast present");
        assert_eq!(toast.position(), ToastPosition::TopCenter);
        assert_eq!(toast.duration(), Duration::from_millis(1000));
    }

    #[test]
    fn from_config_clamps_out_of_range_values() {
        let cfg = Config {
            toast: ToastConfig {
                max_toasts: Some(0),
                ..ToastConfig::default()
            },
            booking: BookingConfig {
                service_fee_percent: Some(200),
                ..BookingConfig::default()
            },
            diagnostics: DiagnosticsConfig {
                event_capacity: Some(1),
            },
        };
        let mut session = Session::from_config(&cfg);

        session.toasts_mut().show_info("a");
        session.toasts_mut().show_info("b");
        assert_eq!(session.toasts().len(), 1, "zero capacity clamps to one");

        assert_eq!(session.booking().service_fee().value(), 100);
        assert_eq!(session.diagnostics().capacity().value(), 100);
    }

    #[test]
    fn load_with_override_from_empty_directory_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let session = Session::load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(session.toasts().is_empty());
        assert_eq!(session.booking().minimum_stay().nights(), 1);
        assert_eq!(session.toasts().capacity().value(), 5);
    }

    #[test]
    fn load_with_override_from_corrupted_config_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join("settings.toml"), "not = valid = toml")
            .expect("write file");

        let mut session = Session::load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(session.toasts().len(), 1);
        let toast = session.toasts().iter().next().expect("warning toast");
        assert_eq!(toast.variant(), ToastVariant::Warning);
        assert!(toast.message().contains("using defaults"));

        session.tick();
        assert_eq!(session.diagnostics().len(), 1);
        let event = session.diagnostics().iter().next().expect("event");
        match &event.kind {
            DiagnosticEventKind::Warning { event } => {
                assert_eq!(event.kind, WarningKind::Configuration);
            }
            other => panic!("expected warning event, got {other:?}"),
        }
    }

    #[test]
    fn request_quote_returns_priced_stay() {
        let mut session = Session::new();

        let quote = session
            .request_quote(&available_stay())
            .expect("stay should be quotable");

        assert_eq!(quote.nights, 3);
        assert_eq!(quote.subtotal, 28_500);
        assert_eq!(quote.service_fee, 2850);
        assert_eq!(quote.total, 31_350);
        assert!(session.toasts().is_empty(), "no toast on success");
    }

    #[test]
    fn request_quote_rejection_pushes_warning_toast_and_event() {
        let mut session = Session::new();
        let request = BookingRequest {
            available: false,
            ..available_stay()
        };

        let result = session.request_quote(&request);

        assert_eq!(result, Err(QuoteError::Unavailable));
        assert_eq!(session.toasts().len(), 1);
        let toast = session.toasts().iter().next().expect("warning toast");
        assert_eq!(toast.variant(), ToastVariant::Warning);

        session.tick();
        assert_eq!(session.diagnostics().len(), 1);
        let event = session.diagnostics().iter().next().expect("event");
        match &event.kind {
            DiagnosticEventKind::Warning { event } => {
                assert_eq!(event.kind, WarningKind::Availability);
            }
            other => panic!("expected warning event, got {other:?}"),
        }
    }

    #[test]
    fn too_many_guests_is_a_validation_warning() {
        let mut session = Session::new();
        let request = BookingRequest {
            guests: 7,
            ..available_stay()
        };

        let result = session.request_quote(&request);

        assert!(matches!(result, Err(QuoteError::TooManyGuests { .. })));
        session.tick();
        let event = session.diagnostics().iter().next().expect("event");
        match &event.kind {
            DiagnosticEventKind::Warning { event } => {
                assert_eq!(event.kind, WarningKind::Validation);
            }
            other => panic!("expected warning event, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_covers_the_whole_session() {
        let session = Session::new();
        let rendered = format!("{session:?}");

        assert!(rendered.contains("toasts"));
        assert!(rendered.contains("diagnostics"));
        assert!(rendered.contains("booking"));
    }

    #[test]
    fn tick_expires_toasts_and_drains_diagnostics() {
        let mut session = Session::new();
        session.toasts_mut().show_warning("slow network");
        let created = session
            .toasts()
            .iter()
            .next()
            .expect("toast present")
            .created_at();

        session.tick_at(created + Duration::from_secs(10));

        assert!(session.toasts().is_empty(), "expired toast is dismissed");
        assert_eq!(session.diagnostics().len(), 1, "warning event was drained");
    }
}
