use crate::reqres::ErrorResponse;
use rocket::{
    http::Status,
    response::{
        self,
        status::Custom,
        Responder,
    },
    serde::json::Json,
    Request,
};
use thiserror::Error;

/// Use for mapping errors in functions that can throw multiple errors.
///
/// The display text is what the client sees in `{"error": ...}`.
#[derive(Debug, Error, PartialEq)]
pub enum Kit8Error {
    /// Malformed path identifier or request body
    #[error("{0}")]
    Validation(String),
    /// Tenant context is missing, malformed or carried by a bad token
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    InvalidTransition(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Internal server error")]
    Internal,
}

impl Kit8Error {
    pub fn invalid_body() -> Self {
        Kit8Error::Validation(String::from("Invalid request body"))
    }

    pub fn invalid_id(entity: &str) -> Self {
        Kit8Error::Validation(format!("Invalid {} ID", entity))
    }

    pub fn status(&self) -> Status {
        match *self {
            Kit8Error::Validation(_) => Status::BadRequest,
            Kit8Error::Unauthorized => Status::Unauthorized,
            Kit8Error::NotFound(_) => Status::NotFound,
            Kit8Error::InvalidTransition(_) => Status::Conflict,
            Kit8Error::Configuration(_) | Kit8Error::Internal => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for Kit8Error {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            log::error!("request failed: {:?}", self);
        }
        Custom(
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
        .respond_to(request)
    }
}
