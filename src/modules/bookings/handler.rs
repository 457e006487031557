use busline_kernel::settings::BookingSettings;
use thiserror::Error;

use super::form::{FormSurface, DESTINATION_FIELD, MESSAGE_ELEMENT, NAME_FIELD, SEATS_FIELD};
use super::models::{BookingInput, BookingResult};
use super::seats::parse_seat_count;

pub const REJECTION_MESSAGE: &str = "Please fill in all fields correctly.";

/// Why a submission was turned away. Never shown to the user; every variant
/// renders as [`REJECTION_MESSAGE`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidBookingInput {
    #[error("name is empty")]
    MissingName,
    #[error("destination is empty")]
    MissingDestination,
    #[error("seat count {raw:?} is not a positive number")]
    InvalidSeatCount { raw: String },
    #[error("fare for {seats} seats does not fit in a u128")]
    FareOverflow { seats: u128 },
}

/// Per-seat price and how to print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarePolicy {
    pub price_per_seat: u64,
    pub currency_symbol: String,
}

impl FarePolicy {
    pub fn fare_for(&self, seats: u128) -> Option<u128> {
        seats.checked_mul(u128::from(self.price_per_seat))
    }
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self::from(&BookingSettings::default())
    }
}

impl From<&BookingSettings> for FarePolicy {
    fn from(settings: &BookingSettings) -> Self {
        Self {
            price_per_seat: settings.price_per_seat,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }
}

/// Validates a booking, prices it and produces the confirmation text.
#[derive(Debug, Clone, Default)]
pub struct BookingFormHandler {
    policy: FarePolicy,
}

impl BookingFormHandler {
    pub fn new(policy: FarePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Check the raw fields and return the confirmed seat count and fare.
    pub fn validate(&self, input: &BookingInput) -> Result<(u128, u128), InvalidBookingInput> {
        if input.name.is_empty() {
            return Err(InvalidBookingInput::MissingName);
        }
        if input.destination.is_empty() {
            return Err(InvalidBookingInput::MissingDestination);
        }

        let seats =
            parse_seat_count(&input.seats_raw).ok_or_else(|| InvalidBookingInput::InvalidSeatCount {
                raw: input.seats_raw.clone(),
            })?;
        let fare = self
            .policy
            .fare_for(seats)
            .ok_or(InvalidBookingInput::FareOverflow { seats })?;

        Ok((seats, fare))
    }

    /// Evaluate one submission. Never fails; bad input becomes `Rejected`.
    pub fn evaluate(&self, input: &BookingInput) -> BookingResult {
        match self.validate(input) {
            Ok((seats, fare)) => {
                tracing::debug!(seats, fare, "booking confirmed");
                BookingResult::Confirmed {
                    name: input.name.clone(),
                    destination: input.destination.clone(),
                    seats,
                    fare,
                }
            }
            Err(reason) => {
                tracing::debug!(%reason, "booking rejected");
                BookingResult::Rejected
            }
        }
    }

    /// Text shown to the user for a result.
    pub fn render(&self, result: &BookingResult) -> String {
        match result {
            BookingResult::Confirmed {
                name,
                destination,
                seats,
                fare,
            } => format!(
                "Booking confirmed for {name} to {destination}. Seats: {seats}. Total fare: {}{fare}.",
                self.policy.currency_symbol
            ),
            BookingResult::Rejected => REJECTION_MESSAGE.to_string(),
        }
    }

    /// Read the booking fields off a surface, evaluate, and write the message.
    pub fn submit<S: FormSurface + ?Sized>(&self, surface: &mut S) -> BookingResult {
        let input = BookingInput::new(
            surface.field_value(NAME_FIELD),
            surface.field_value(DESTINATION_FIELD),
            surface.field_value(SEATS_FIELD),
        );

        let result = self.evaluate(&input);
        surface.set_display_text(MESSAGE_ELEMENT, &self.render(&result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::bookings::form::InMemoryForm;

    fn submit(name: &str, destination: &str, seats: &str) -> String {
        let handler = BookingFormHandler::default();
        let mut form = InMemoryForm::with_booking(name, destination, seats);
        handler.submit(&mut form);
        form.display_text(MESSAGE_ELEMENT)
            .expect("message written")
            .to_string()
    }

    #[test]
    fn valid_input_displays_confirmation_message() {
        assert_eq!(
            submit("Alice", "Paris", "3"),
            "Booking confirmed for Alice to Paris. Seats: 3. Total fare: $30."
        );
    }

    #[test]
    fn missing_name_displays_error_message() {
        assert_eq!(submit("", "Rome", "2"), REJECTION_MESSAGE);
    }

    #[test]
    fn missing_destination_displays_error_message() {
        assert_eq!(submit("Bob", "", "4"), REJECTION_MESSAGE);
    }

    #[test]
    fn seat_count_zero_displays_error_message() {
        assert_eq!(submit("Charlie", "Tokyo", "0"), REJECTION_MESSAGE);
    }

    #[test]
    fn fractional_seat_input_is_truncated() {
        assert_eq!(
            submit("Dana", "Berlin", "2.8"),
            "Booking confirmed for Dana to Berlin. Seats: 2. Total fare: $20."
        );
        assert_eq!(submit("Dana", "Berlin", "0.9"), REJECTION_MESSAGE);
    }

    #[test]
    fn negative_seat_input_displays_error_message() {
        assert_eq!(submit("Eve", "London", "-5"), REJECTION_MESSAGE);
    }

    #[test]
    fn non_numeric_seat_input_displays_error_message() {
        assert_eq!(submit("Frank", "Sydney", "abc"), REJECTION_MESSAGE);
    }

    #[test]
    fn whitespace_only_name_is_treated_as_valid() {
        assert_eq!(
            submit("   ", "Madrid", "2"),
            "Booking confirmed for     to Madrid. Seats: 2. Total fare: $20."
        );
    }

    #[test]
    fn very_large_seat_input_is_handled() {
        assert_eq!(
            submit("Grace", "New York", "1000000"),
            "Booking confirmed for Grace to New York. Seats: 1000000. Total fare: $10000000."
        );
    }

    #[test]
    fn seat_counts_past_u64_still_confirm() {
        assert_eq!(
            submit("Heidi", "Lima", "10000000000000000000"),
            "Booking confirmed for Heidi to Lima. Seats: 10000000000000000000. Total fare: $100000000000000000000."
        );
        assert_eq!(
            submit("Ivan", "Kyiv", "1e20"),
            "Booking confirmed for Ivan to Kyiv. Seats: 100000000000000000000. Total fare: $1000000000000000000000."
        );
    }

    #[test]
    fn special_characters_are_echoed_verbatim() {
        assert_eq!(
            submit("<b>Héloïse</b> & co", "São \"Paulo\"", "1"),
            "Booking confirmed for <b>Héloïse</b> & co to São \"Paulo\". Seats: 1. Total fare: $10."
        );
    }

    #[test]
    fn repeated_invalid_submission_is_idempotent() {
        let handler = BookingFormHandler::default();
        let mut form = InMemoryForm::with_booking("Frank", "Sydney", "abc");

        let first = handler.submit(&mut form);
        let first_text = form.display_text(MESSAGE_ELEMENT).map(str::to_owned);
        let second = handler.submit(&mut form);

        assert_eq!(first, BookingResult::Rejected);
        assert_eq!(first, second);
        assert_eq!(form.display_text(MESSAGE_ELEMENT).map(str::to_owned), first_text);
    }

    #[test]
    fn earlier_submissions_do_not_leak_into_later_ones() {
        let handler = BookingFormHandler::default();
        let mut form = InMemoryForm::with_booking("Alice", "Paris", "3");
        assert!(handler.submit(&mut form).is_confirmed());

        form.set_field(NAME_FIELD, "");
        assert_eq!(handler.submit(&mut form), BookingResult::Rejected);
        assert_eq!(form.display_text(MESSAGE_ELEMENT), Some(REJECTION_MESSAGE));
    }

    #[test]
    fn evaluate_carries_seats_and_fare() {
        let handler = BookingFormHandler::default();
        let result = handler.evaluate(&BookingInput::new("Alice", "Paris", "3"));
        assert_eq!(
            result,
            BookingResult::Confirmed {
                name: "Alice".to_string(),
                destination: "Paris".to_string(),
                seats: 3,
                fare: 30,
            }
        );
    }

    #[test]
    fn validate_reports_first_failing_rule() {
        let handler = BookingFormHandler::default();
        assert_eq!(
            handler.validate(&BookingInput::new("", "", "abc")),
            Err(InvalidBookingInput::MissingName)
        );
        assert_eq!(
            handler.validate(&BookingInput::new("Bob", "", "abc")),
            Err(InvalidBookingInput::MissingDestination)
        );
        assert_eq!(
            handler.validate(&BookingInput::new("Bob", "Oslo", "abc")),
            Err(InvalidBookingInput::InvalidSeatCount {
                raw: "abc".to_string()
            })
        );
    }

    #[test]
    fn configured_price_changes_the_fare() {
        let handler = BookingFormHandler::new(FarePolicy {
            price_per_seat: 25,
            currency_symbol: "€".to_string(),
        });
        let mut form = InMemoryForm::with_booking("Alice", "Paris", "3");
        handler.submit(&mut form);
        assert_eq!(
            form.display_text(MESSAGE_ELEMENT),
            Some("Booking confirmed for Alice to Paris. Seats: 3. Total fare: €75.")
        );
    }

    #[test]
    fn fare_overflow_is_rejected() {
        let handler = BookingFormHandler::new(FarePolicy {
            price_per_seat: u64::MAX,
            currency_symbol: "$".to_string(),
        });
        let seats = parse_seat_count("1e30").unwrap();
        assert_eq!(
            handler.validate(&BookingInput::new("Alice", "Paris", "1e30")),
            Err(InvalidBookingInput::FareOverflow { seats })
        );
    }
}
