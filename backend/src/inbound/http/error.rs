//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the `{success, message}` envelope
//! with consistent status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Generic message returned for unexpected failures. Internal detail is
/// logged, never sent to the client.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Wire envelope for failed requests.
#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    success: bool,
    message: &'a str,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::DuplicateRecord => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        SERVER_ERROR_MESSAGE
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), "request failed with internal error");
        }

        HttpResponse::build(self.status_code()).json(ErrorEnvelope {
            success: false,
            message: client_message(self),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    async fn body_json(error: &Error) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[rstest]
    #[case(Error::invalid_request("mobile number must be exactly 10 digits"), StatusCode::BAD_REQUEST)]
    #[case(Error::duplicate_record("Driver with this mobile or license already registered."), StatusCode::BAD_REQUEST)]
    #[case(Error::internal("pool checkout failed"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_codes_follow_the_taxonomy(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_rt::test]
    async fn duplicate_errors_keep_their_message() {
        let error = Error::duplicate_record("Passenger with this mobile number already registered.");
        let body = body_json(&error).await;

        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(
            body["message"],
            Value::String("Passenger with this mobile number already registered.".to_owned())
        );
    }

    #[actix_rt::test]
    async fn internal_errors_are_redacted() {
        let error = Error::internal("connection refused on 10.0.0.3:5432");
        let body = body_json(&error).await;

        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["message"], Value::String(SERVER_ERROR_MESSAGE.to_owned()));
    }
}
