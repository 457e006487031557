use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use busline_http::error::AppError;
use serde_json::json;

use super::handler::BookingFormHandler;
use super::models::{BookingFormFields, BookingInput, QuoteRequest, QuoteResponse};
use super::page::BookingPage;

/// Router for the bookings module, relative to its mount point.
pub fn router(handler: Arc<BookingFormHandler>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/quote", post(quote))
        .route("/health", get(health_check))
        .with_state(handler)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "bookings module is healthy"
}

/// Blank booking form
async fn show_form() -> Html<String> {
    Html(BookingPage::new().render())
}

/// Form post: evaluate and re-render the page with the message filled in
async fn submit_form(
    State(handler): State<Arc<BookingFormHandler>>,
    form: Result<Form<BookingFormFields>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(fields) = form.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let mut page = BookingPage::with_fields(fields.name, fields.destination, fields.seats);
    let result = handler.submit(&mut page);

    tracing::info!(outcome = result.outcome(), "booking form submitted");

    Ok(Html(page.render()))
}

/// JSON quote: same evaluation, structured response
async fn quote(
    State(handler): State<Arc<BookingFormHandler>>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        AppError::bad_request_with(
            vec![json!({ "body": rejection.body_text() })],
            "invalid booking quote request",
        )
    })?;

    let input = BookingInput::from(request);
    let result = handler.evaluate(&input);
    let message = handler.render(&result);

    tracing::info!(outcome = result.outcome(), "booking quote evaluated");

    Ok(Json(QuoteResponse::new(&result, message)))
}
