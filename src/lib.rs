//! Busline application library
//!
//! The bus-seat booking form and the modules that host it.

pub mod modules;
pub mod server;
pub mod utils;

pub use modules::bookings::{
    form::{FormSurface, InMemoryForm, MESSAGE_ELEMENT},
    handler::{BookingFormHandler, FarePolicy, InvalidBookingInput, REJECTION_MESSAGE},
    models::{BookingInput, BookingResult},
};
