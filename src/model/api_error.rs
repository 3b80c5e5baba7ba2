use super::ConversionError;
use anyhow::Error;
use rocket::{
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
};
use serde::Serialize;
use std::io::Cursor;
use tracing::error;

#[derive(Debug)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub error: Option<Error>,
}

#[derive(Serialize)]
struct ApiErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn custom(code: u16, message: &str) -> ApiError {
        ApiError {
            code,
            message: message.to_string(),
            error: None,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        if let Some(error) = self.error {
            error!(code = self.code, ?error, "Error from controller");
        }

        let body = serde_json::to_string(&ApiErrorBody {
            error: &self.message,
        })
        .map_err(|_| Status::InternalServerError)?;

        Response::build()
            .header(ContentType::JSON)
            .status(Status::new(self.code))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<Status> for ApiError {
    fn from(s: Status) -> Self {
        ApiError::custom(s.code, s.reason().unwrap_or(""))
    }
}

impl From<ConversionError> for ApiError {
    fn from(e: ConversionError) -> Self {
        let code = e.code();
        let message = e.to_string();

        let error = match e {
            ConversionError::Upstream(e) => Some(Error::new(e)),
            _ => None,
        };

        ApiError {
            code,
            message,
            error,
        }
    }
}
