// SPDX-License-Identifier: MPL-2.0
//! Quote arithmetic and booking validation.
//!
//! A [`Quote`] is the price breakdown shown while a guest picks dates; it
//! is computed unconditionally so the display can update live. Submitting
//! a booking goes through [`BookingPolicy::quote`], which validates the
//! request first and only then prices it.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::booking::{GuestCapacity, MinimumStay, ServiceFeePercent};

/// Whole nights between check-in and check-out.
///
/// An empty or inverted date range counts as zero nights, never an error;
/// the caller decides whether zero nights is acceptable.
#[must_use]
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    u32::try_from(days.max(0)).unwrap_or(0)
}

/// Price breakdown for a stay, in integer minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Number of nights priced.
    pub nights: u32,
    /// Nightly rate times nights.
    pub subtotal: u64,
    /// Service fee on the subtotal, rounded half-up.
    pub service_fee: u64,
    /// Subtotal plus service fee.
    pub total: u64,
}

impl Quote {
    /// Prices a stay of `nights` at `nightly_rate` with the given fee.
    ///
    /// The fee is `subtotal × percent / 100` rounded half-up, so the fee
    /// line always matches what a guest would compute by hand.
    #[must_use]
    pub fn new(nights: u32, nightly_rate: u64, service_fee: ServiceFeePercent) -> Self {
        let subtotal = u64::from(nights) * nightly_rate;
        let fee = (subtotal * u64::from(service_fee.value()) + 50) / 100;

        Self {
            nights,
            subtotal,
            service_fee: fee,
            total: subtotal + fee,
        }
    }
}

/// A guest's booking request for a listing.
#[derive(Debug, Clone, Copy)]
pub struct BookingRequest {
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Morning of departure; not slept.
    pub check_out: NaiveDate,
    /// Total party size, adults and children.
    pub guests: u32,
    /// Listing rate per night, in minor currency units.
    pub nightly_rate: u64,
    /// Whether the listing is open for these dates.
    pub available: bool,
}

/// Why a booking request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    /// The listing is not available for the requested dates.
    Unavailable,
    /// The party does not fit the listing.
    TooManyGuests {
        /// Requested party size.
        guests: u32,
        /// What the listing accommodates.
        capacity: u32,
    },
    /// The stay is shorter than the listing requires.
    StayTooShort {
        /// Nights in the requested range.
        nights: u32,
        /// Nights the listing requires.
        minimum: u32,
    },
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::Unavailable => {
                write!(f, "This listing is not available for the selected dates")
            }
            QuoteError::TooManyGuests { guests, capacity } => {
                write!(f, "{guests} guests requested but the listing sleeps {capacity}")
            }
            QuoteError::StayTooShort { nights, minimum } => {
                write!(f, "Minimum stay is {minimum} nights, got {nights}")
            }
        }
    }
}

/// Listing policy a booking request is validated against.
///
/// Built once from configuration and fixed for the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingPolicy {
    /// Service fee charged on the subtotal.
    service_fee: ServiceFeePercent,
    /// Nights a booking must cover at least.
    minimum_stay: MinimumStay,
    /// Largest party the listing accepts.
    guest_capacity: GuestCapacity,
}

impl BookingPolicy {
    /// Creates a policy from explicit values.
    #[must_use]
    pub fn new(
        service_fee: ServiceFeePercent,
        minimum_stay: MinimumStay,
        guest_capacity: GuestCapacity,
    ) -> Self {
        Self {
            service_fee,
            minimum_stay,
            guest_capacity,
        }
    }

    /// Returns the service fee percentage.
    #[must_use]
    pub fn service_fee(&self) -> ServiceFeePercent {
        self.service_fee
    }

    /// Returns the minimum stay.
    #[must_use]
    pub fn minimum_stay(&self) -> MinimumStay {
        self.minimum_stay
    }

    /// Returns the guest capacity.
    #[must_use]
    pub fn guest_capacity(&self) -> GuestCapacity {
        self.guest_capacity
    }

    /// Validates a request and prices it.
    ///
    /// Checks availability, then party size, then stay length, and refuses
    /// on the first violation.
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] naming the first policy violation.
    pub fn quote(&self, request: &BookingRequest) -> Result<Quote, QuoteError> {
        if !request.available {
            return Err(QuoteError::Unavailable);
        }

        if !self.guest_capacity.accommodates(request.guests) {
            return Err(QuoteError::TooManyGuests {
                guests: request.guests,
                capacity: self.guest_capacity.value(),
            });
        }

        let nights = nights_between(request.check_in, request.check_out);
        if nights < self.minimum_stay.nights() {
            return Err(QuoteError::StayTooShort {
                nights,
                minimum: self.minimum_stay.nights(),
            });
        }

        Ok(Quote::new(nights, request.nightly_rate, self.service_fee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> BookingRequest {
        BookingRequest {
            check_in: date(2025, 7, 1),
            check_out: date(2025, 7, 5),
            guests: 2,
            nightly_rate: 12_000,
            available: true,
        }
    }

    #[test]
    fn nights_counts_whole_nights() {
        assert_eq!(nights_between(date(2025, 7, 1), date(2025, 7, 5)), 4);
        assert_eq!(nights_between(date(2025, 7, 1), date(2025, 7, 2)), 1);
    }

    #[test]
    fn nights_same_day_is_zero() {
        assert_eq!(nights_between(date(2025, 7, 1), date(2025, 7, 1)), 0);
    }

    #[test]
    fn nights_inverted_range_is_zero() {
        assert_eq!(nights_between(date(2025, 7, 5), date(2025, 7, 1)), 0);
    }

    #[test]
    fn nights_spans_month_boundary() {
        assert_eq!(nights_between(date(2025, 1, 30), date(2025, 2, 2)), 3);
    }

    #[test]
    fn quote_multiplies_rate_by_nights() {
        let quote = Quote::new(4, 12_000, ServiceFeePercent::new(10));
        assert_eq!(quote.subtotal, 48_000);
        assert_eq!(quote.service_fee, 4_800);
        assert_eq!(quote.total, 52_800);
    }

    #[test]
    fn fee_rounds_half_up() {
        // 125 * 10% = 12.5, rounds to 13
        let quote = Quote::new(1, 125, ServiceFeePercent::new(10));
        assert_eq!(quote.service_fee, 13);
        assert_eq!(quote.total, 138);
    }

    #[test]
    fn fee_rounds_down_below_half() {
        // 124 * 10% = 12.4, rounds to 12
        let quote = Quote::new(1, 124, ServiceFeePercent::new(10));
        assert_eq!(quote.service_fee, 12);
    }

    #[test]
    fn zero_fee_charges_nothing_extra() {
        let quote = Quote::new(3, 10_000, ServiceFeePercent::new(0));
        assert_eq!(quote.service_fee, 0);
        assert_eq!(quote.total, quote.subtotal);
    }

    #[test]
    fn zero_nights_quote_is_free() {
        let quote = Quote::new(0, 12_000, ServiceFeePercent::default());
        assert_eq!(quote.subtotal, 0);
        assert_eq!(quote.service_fee, 0);
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn policy_accepts_a_valid_request() {
        let policy = BookingPolicy::default();
        let quote = policy.quote(&request()).unwrap();

        assert_eq!(quote.nights, 4);
        assert_eq!(quote.total, 52_800);
    }

    #[test]
    fn policy_rejects_unavailable_listing() {
        let policy = BookingPolicy::default();
        let unavailable = BookingRequest {
            available: false,
            ..request()
        };

        assert_eq!(policy.quote(&unavailable), Err(QuoteError::Unavailable));
    }

    #[test]
    fn policy_rejects_oversized_party() {
        let policy = BookingPolicy::default();
        let crowd = BookingRequest {
            guests: 7,
            ..request()
        };

        assert_eq!(
            policy.quote(&crowd),
            Err(QuoteError::TooManyGuests {
                guests: 7,
                capacity: 6,
            })
        );
    }

    #[test]
    fn policy_rejects_short_stay() {
        let policy = BookingPolicy::new(
            ServiceFeePercent::default(),
            MinimumStay::new(7),
            GuestCapacity::default(),
        );

        assert_eq!(
            policy.quote(&request()),
            Err(QuoteError::StayTooShort {
                nights: 4,
                minimum: 7,
            })
        );
    }

    #[test]
    fn availability_is_checked_before_other_rules() {
        let policy = BookingPolicy::default();
        let hopeless = BookingRequest {
            guests: 30,
            available: false,
            ..request()
        };

        assert_eq!(policy.quote(&hopeless), Err(QuoteError::Unavailable));
    }

    #[test]
    fn quote_errors_display_for_the_user() {
        let err = QuoteError::StayTooShort {
            nights: 2,
            minimum: 3,
        };
        assert_eq!(format!("{err}"), "Minimum stay is 3 nights, got 2");

        let err = QuoteError::TooManyGuests {
            guests: 8,
            capacity: 6,
        };
        assert_eq!(
            format!("{err}"),
            "8 guests requested but the listing sleeps 6"
        );
    }
}
