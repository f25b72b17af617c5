// SPDX-License-Identifier: MPL-2.0
//! Message sanitization and warning/error kind definitions.
//!
//! This module provides:
//! - Kind enums for categorizing warnings and errors
//! - Message sanitization to remove sensitive data (guest PII)

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Warning and Error Kind Enums
// =============================================================================

/// Categories of warnings that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A listing is not available for the requested dates.
    Availability,
    /// A request failed validation (dates, guest count, ...).
    Validation,
    /// A network-related issue occurred.
    Network,
    /// A configuration issue was detected.
    Configuration,
    /// A requested feature is not wired up yet.
    FeatureUnavailable,
    /// Other warning kind not covered by specific categories.
    Other,
}

/// Categories of errors that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A network request failed outright.
    Network,
    /// Payment processing failed.
    Payment,
    /// A booking could not be completed.
    Booking,
    /// Input/output error (file read/write failures).
    Io,
    /// Internal application error.
    Internal,
    /// Other error kind not covered by specific categories.
    Other,
}

// =============================================================================
// Message Sanitization
// =============================================================================

/// Compiled regex pattern for email detection.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Matches the practical shape of an email address: local part with the
    // usual punctuation, an @, then a dotted domain with a 2+ letter TLD.
    // Loose match: may redact more than strict RFC addresses.
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email regex should compile")
});

/// Sanitizes a message by removing sensitive information.
///
/// Currently removes:
/// - Email addresses (guest and host contact details)
///
/// Addresses are replaced with an `<email>` placeholder to preserve message
/// structure while protecting user privacy.
///
/// # Examples
///
/// ```
/// use wanderstay_session::diagnostics::sanitize_message;
///
/// let msg = "Confirmation mail to anna.lind@example.com bounced";
/// assert_eq!(sanitize_message(msg), "Confirmation mail to <email> bounced");
///
/// let msg = "Listing is no longer available";
/// assert_eq!(sanitize_message(msg), "Listing is no longer available");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    EMAIL_PATTERN.replace_all(message, "<email>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // WarningKind Tests
    // =========================================================================

    #[test]
    fn warning_kind_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&WarningKind::Availability).unwrap(),
            "\"availability\""
        );
        assert_eq!(
            serde_json::to_string(&WarningKind::Validation).unwrap(),
            "\"validation\""
        );
        assert_eq!(
            serde_json::to_string(&WarningKind::Network).unwrap(),
            "\"network\""
        );
        assert_eq!(
            serde_json::to_string(&WarningKind::Configuration).unwrap(),
            "\"configuration\""
        );
        assert_eq!(
            serde_json::to_string(&WarningKind::FeatureUnavailable).unwrap(),
            "\"feature_unavailable\""
        );
        assert_eq!(
            serde_json::to_string(&WarningKind::Other).unwrap(),
            "\"other\""
        );
    }

    #[test]
    fn warning_kind_deserializes_from_snake_case() {
        assert_eq!(
            serde_json::from_str::<WarningKind>("\"availability\"").unwrap(),
            WarningKind::Availability
        );
        assert_eq!(
            serde_json::from_str::<WarningKind>("\"feature_unavailable\"").unwrap(),
            WarningKind::FeatureUnavailable
        );
    }

    // =========================================================================
    // ErrorKind Tests
    // =========================================================================

    #[test]
    fn error_kind_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::Network).unwrap(),
            "\"network\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorKind::Payment).unwrap(),
            "\"payment\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorKind::Booking).unwrap(),
            "\"booking\""
        );
        assert_eq!(serde_json::to_string(&ErrorKind::Io).unwrap(), "\"io\"");
        assert_eq!(
            serde_json::to_string(&ErrorKind::Internal).unwrap(),
            "\"internal\""
        );
        assert_eq!(serde_json::to_string(&ErrorKind::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn error_kind_deserializes_from_snake_case() {
        assert_eq!(
            serde_json::from_str::<ErrorKind>("\"payment\"").unwrap(),
            ErrorKind::Payment
        );
        assert_eq!(
            serde_json::from_str::<ErrorKind>("\"io\"").unwrap(),
            ErrorKind::Io
        );
    }

    // =========================================================================
    // Sanitizer Tests
    // =========================================================================

    #[test]
    fn sanitize_message_removes_plain_addresses() {
        let msg = "Confirmation mail to anna.lind@example.com bounced";
        assert_eq!(sanitize_message(msg), "Confirmation mail to <email> bounced");
    }

    #[test]
    fn sanitize_message_removes_addresses_with_plus_tags() {
        let msg = "Could not reach host+bookings@wanderstay.example";
        assert_eq!(sanitize_message(msg), "Could not reach <email>");
    }

    #[test]
    fn sanitize_message_removes_addresses_with_subdomains() {
        let msg = "Reply from guest@mail.hosts.example.co.uk timed out";
        assert_eq!(sanitize_message(msg), "Reply from <email> timed out");
    }

    #[test]
    fn sanitize_message_removes_multiple_addresses() {
        let msg = "Copy a@example.com and b@example.com on the invoice";
        assert_eq!(sanitize_message(msg), "Copy <email> and <email> on the invoice");
    }

    #[test]
    fn sanitize_message_preserves_messages_without_addresses() {
        let msg = "Listing is no longer available";
        assert_eq!(sanitize_message(msg), "Listing is no longer available");
    }

    #[test]
    fn sanitize_message_preserves_empty_messages() {
        assert_eq!(sanitize_message(""), "");
    }

    #[test]
    fn sanitize_message_handles_addresses_at_end() {
        let msg = "Payment receipt sent to pat@example.org";
        assert_eq!(sanitize_message(msg), "Payment receipt sent to <email>");
    }

    #[test]
    fn sanitize_message_handles_addresses_in_quotes() {
        let msg = "Guest \"kim@example.com\" cancelled the stay";
        assert_eq!(sanitize_message(msg), "Guest \"<email>\" cancelled the stay");
    }

    #[test]
    fn sanitize_message_ignores_bare_at_signs() {
        let msg = "Check-in @ 15:00 at the front desk";
        assert_eq!(sanitize_message(msg), "Check-in @ 15:00 at the front desk");
    }
}
