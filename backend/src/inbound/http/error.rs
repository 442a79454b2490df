//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning domain
//! failures into consistent JSON responses and status codes. Most failures
//! are sent as `{"error": ...}`; the ticket status update reports failures as
//! `{"message": ...}` instead.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Message returned for request bodies that are not valid JSON.
pub const INVALID_JSON: &str = "Invalid JSON payload.";

/// Body key carrying the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Envelope {
    /// `{"error": ...}`
    Error,
    /// `{"message": ...}`
    Message,
}

/// Error body keyed by `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "User not found.")]
    pub error: String,
}

/// Body carrying only a `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Ticket deleted successfully.")]
    pub message: String,
}

/// Domain error paired with the envelope it is reported in.
#[derive(Debug, Clone)]
pub struct ApiError {
    error: Error,
    envelope: Envelope,
}

impl ApiError {
    /// Report the error under the `message` key.
    #[must_use]
    pub fn message_keyed(error: Error) -> Self {
        Self {
            error,
            envelope: Envelope::Message,
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self {
            error,
            envelope: Envelope::Error,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> String {
    if matches!(error.code(), ErrorCode::InternalError) {
        "Internal server error".to_owned()
    } else {
        error.message().to_owned()
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        let message = client_message(&self.error);
        match self.envelope {
            Envelope::Error => builder.json(ErrorBody { error: message }),
            Envelope::Message => builder.json(MessageBody { message }),
        }
    }
}

/// JSON extractor configuration rejecting malformed bodies with a 400.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use helpdesk::inbound::http::error::json_config;
///
/// let app = App::new().app_data(json_config());
/// ```
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "request body rejected");
        ApiError::from(Error::invalid_request(INVALID_JSON)).into()
    })
}
