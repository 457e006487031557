pub mod form;
pub mod handler;
pub mod models;
pub mod page;
pub mod routes;
pub mod seats;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use busline_kernel::{settings::BookingSettings, InitCtx, Module};
use serde_json::json;

use crate::utils;
use handler::{BookingFormHandler, FarePolicy};

/// Bus-seat booking form: HTML page, form post, and JSON quote endpoint
pub struct BookingsModule {
    handler: Arc<BookingFormHandler>,
}

impl BookingsModule {
    pub fn new(policy: FarePolicy) -> Self {
        Self {
            handler: Arc::new(BookingFormHandler::new(policy)),
        }
    }

    pub fn handler(&self) -> &BookingFormHandler {
        &self.handler
    }
}

#[async_trait]
impl Module for BookingsModule {
    fn name(&self) -> &'static str {
        "bookings"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let policy = self.handler.policy();
        if policy.price_per_seat == 0 {
            tracing::warn!(module = self.name(), "price_per_seat is 0; every fare will be free");
        }

        tracing::info!(
            module = self.name(),
            prefix = %utils::log_prefix(self.name()),
            environment = ?ctx.settings.environment,
            price_per_seat = policy.price_per_seat,
            currency = %policy.currency_symbol,
            "bookings module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.handler.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "": {
                    "get": {
                        "summary": "Booking form page",
                        "tags": ["Bookings"],
                        "responses": {
                            "200": {
                                "description": "HTML booking form",
                                "content": {
                                    "text/html": { "schema": { "type": "string" } }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Submit the booking form",
                        "tags": ["Bookings"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/x-www-form-urlencoded": {
                                    "schema": { "$ref": "#/components/schemas/BookingForm" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Booking page with the confirmation or rejection message",
                                "content": {
                                    "text/html": { "schema": { "type": "string" } }
                                }
                            },
                            "400": {
                                "description": "Body is not a urlencoded form",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/quote": {
                    "post": {
                        "summary": "Evaluate a booking and return the fare",
                        "tags": ["Bookings"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookingForm" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Confirmed or rejected booking",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookingQuote" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Malformed JSON body",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Bookings health check",
                        "tags": ["Bookings"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": { "schema": { "type": "string" } }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "BookingForm": {
                        "type": "object",
                        "properties": {
                            "name": {
                                "type": "string",
                                "description": "Passenger name, used verbatim"
                            },
                            "destination": {
                                "type": "string",
                                "description": "Destination, used verbatim"
                            },
                            "seats": {
                                "type": "string",
                                "description": "Seat count; fractions are floored"
                            }
                        }
                    },
                    "BookingQuote": {
                        "type": "object",
                        "properties": {
                            "outcome": {
                                "type": "string",
                                "enum": ["confirmed", "rejected"]
                            },
                            "message": {
                                "type": "string",
                                "description": "Text shown to the user"
                            },
                            "seats": {
                                "type": "integer",
                                "description": "Confirmed seat count"
                            },
                            "fare": {
                                "type": "integer",
                                "description": "Total fare in whole currency units"
                            }
                        },
                        "required": ["outcome", "message"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "bookings module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "bookings module stopped");
        Ok(())
    }
}

/// Create a new instance of the bookings module
pub fn create_module(settings: &BookingSettings) -> Arc<dyn Module> {
    Arc::new(BookingsModule::new(FarePolicy::from(settings)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use busline_kernel::settings::Settings;

    #[test]
    fn module_uses_configured_price() {
        let settings = BookingSettings {
            price_per_seat: 12,
            currency_symbol: "$".to_string(),
        };
        let module = BookingsModule::new(FarePolicy::from(&settings));
        assert_eq!(module.handler().policy().price_per_seat, 12);
    }

    #[tokio::test]
    async fn lifecycle_hooks_succeed() {
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };
        let module = create_module(&settings.booking);

        assert_eq!(module.name(), "bookings");
        module.init(&ctx).await.unwrap();
        module.start(&ctx).await.unwrap();
        module.stop().await.unwrap();
    }

    #[test]
    fn openapi_fragment_documents_quote_endpoint() {
        let module = create_module(&BookingSettings::default());
        let spec = module.openapi().unwrap();
        assert!(spec["paths"]["/quote"]["post"].is_object());
        assert!(spec["paths"][""]["post"].is_object());
    }
}
