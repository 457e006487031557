use crate::utils::escape_html;

use super::form::{
    FormSurface, DESTINATION_FIELD, FORM_ID, MESSAGE_ELEMENT, NAME_FIELD, SEATS_FIELD,
};

/// Server-rendered booking page.
///
/// Holds the current field values and message; `render` escapes everything,
/// so interpolated names never become markup.
#[derive(Debug, Clone, Default)]
pub struct BookingPage {
    name: String,
    destination: String,
    seats: String,
    message: String,
}

impl BookingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(name: String, destination: String, seats: String) -> Self {
        Self {
            name,
            destination,
            seats,
            message: String::new(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Bus Ticket Booking</title>
</head>
<body>
<h1>Bus Ticket Booking</h1>
<form id="{form}" method="post">
<label for="{name_id}">Name</label>
<input type="text" id="{name_id}" name="{name_id}" value="{name}">
<label for="{destination_id}">Destination</label>
<input type="text" id="{destination_id}" name="{destination_id}" value="{destination}">
<label for="{seats_id}">Seats</label>
<input type="number" id="{seats_id}" name="{seats_id}" step="any" value="{seats}">
<button type="submit">Book</button>
</form>
<p id="{message_id}" role="status">{message}</p>
</body>
</html>
"#,
            form = FORM_ID,
            name_id = NAME_FIELD,
            destination_id = DESTINATION_FIELD,
            seats_id = SEATS_FIELD,
            message_id = MESSAGE_ELEMENT,
            name = escape_html(&self.name),
            destination = escape_html(&self.destination),
            seats = escape_html(&self.seats),
            message = escape_html(&self.message),
        )
    }
}

impl FormSurface for BookingPage {
    fn field_value(&self, id: &str) -> String {
        match id {
            NAME_FIELD => self.name.clone(),
            DESTINATION_FIELD => self.destination.clone(),
            SEATS_FIELD => self.seats.clone(),
            _ => String::new(),
        }
    }

    fn set_display_text(&mut self, id: &str, text: &str) {
        if id == MESSAGE_ELEMENT {
            self.message = text.to_string();
        }
    }
}
