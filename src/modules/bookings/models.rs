use serde::{Deserialize, Serialize};

/// Raw field values captured at submission time.
///
/// Nothing here is trimmed or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInput {
    pub name: String,
    pub destination: String,
    pub seats_raw: String,
}

impl BookingInput {
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        seats_raw: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            seats_raw: seats_raw.into(),
        }
    }
}

/// Outcome of evaluating one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum BookingResult {
    Confirmed {
        name: String,
        destination: String,
        seats: u128,
        fare: u128,
    },
    Rejected,
}

impl BookingResult {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingResult::Confirmed { .. })
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            BookingResult::Confirmed { .. } => "confirmed",
            BookingResult::Rejected => "rejected",
        }
    }
}

/// Fields posted by the HTML booking form. Absent keys read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingFormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub seats: String,
}

impl From<BookingFormFields> for BookingInput {
    fn from(fields: BookingFormFields) -> Self {
        BookingInput::new(fields.name, fields.destination, fields.seats)
    }
}

/// Seat count as sent by JSON clients: either the raw text or a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeatsField {
    Text(String),
    Number(serde_json::Number),
}

impl Default for SeatsField {
    fn default() -> Self {
        SeatsField::Text(String::new())
    }
}

impl SeatsField {
    pub fn into_raw(self) -> String {
        match self {
            SeatsField::Text(text) => text,
            SeatsField::Number(number) => number.to_string(),
        }
    }
}

/// Request body for the JSON quote endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub seats: SeatsField,
}

impl From<QuoteRequest> for BookingInput {
    fn from(request: QuoteRequest) -> Self {
        BookingInput::new(request.name, request.destination, request.seats.into_raw())
    }
}

/// Response body for the JSON quote endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub outcome: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<u128>,
}

impl QuoteResponse {
    pub fn new(result: &BookingResult, message: String) -> Self {
        let (seats, fare) = match result {
            BookingResult::Confirmed { seats, fare, .. } => (Some(*seats), Some(*fare)),
            BookingResult::Rejected => (None, None),
        };

        Self {
            outcome: result.outcome(),
            message,
            seats,
            fare,
        }
    }
}
