use std::collections::HashMap;

pub const FORM_ID: &str = "bookingForm";
pub const NAME_FIELD: &str = "name";
pub const DESTINATION_FIELD: &str = "destination";
pub const SEATS_FIELD: &str = "seats";
pub const MESSAGE_ELEMENT: &str = "message";

/// Whatever hosts the booking form: a rendered page, a terminal, a test double.
pub trait FormSurface {
    /// Current contents of an input field; unknown fields read as empty.
    fn field_value(&self, id: &str) -> String;

    /// Replace the text shown by a display element.
    fn set_display_text(&mut self, id: &str, text: &str);
}

/// Form surface backed by plain maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForm {
    fields: HashMap<String, String>,
    displays: HashMap<String, String>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form with the three booking fields filled in.
    pub fn with_booking(name: &str, destination: &str, seats: &str) -> Self {
        let mut form = Self::new();
        form.set_field(NAME_FIELD, name);
        form.set_field(DESTINATION_FIELD, destination);
        form.set_field(SEATS_FIELD, seats);
        form
    }

    pub fn set_field(&mut self, id: &str, value: &str) {
        self.fields.insert(id.to_string(), value.to_string());
    }

    pub fn display_text(&self, id: &str) -> Option<&str> {
        self.displays.get(id).map(String::as_str)
    }
}

impl FormSurface for InMemoryForm {
    fn field_value(&self, id: &str) -> String {
        self.fields.get(id).cloned().unwrap_or_default()
    }

    fn set_display_text(&mut self, id: &str, text: &str) {
        self.displays.insert(id.to_string(), text.to_string());
    }
}
