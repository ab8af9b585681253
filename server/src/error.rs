// error.rs
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use thiserror::Error;

use crate::util::RecipeId;

/// Error type for recipe operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Invalid recipe: {0}")]
    Validation(String),
    #[error("Recipe {0} does not exist")]
    NotFound(RecipeId),
    #[error("Request path id ({path}) and request body id ({body}) must match")]
    IdMismatch { path: RecipeId, body: RecipeId },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecipeError {
    pub fn status(&self) -> Status {
        match self {
            RecipeError::Validation(_) | RecipeError::IdMismatch { .. } => Status::BadRequest,
            RecipeError::NotFound(_) => Status::NotFound,
            RecipeError::Internal(_) => Status::InternalServerError,
        }
    }
}

/// JSON body sent back with every failed request.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(status: Status, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: status.code,
        }
    }
}

impl<'r> Responder<'r, 'static> for RecipeError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        (status, Json(ErrorBody::new(status, self.to_string()))).respond_to(req)
    }
}
