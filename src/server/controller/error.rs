use actix_web::{error, HttpResponse};
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use crate::server::model::StatusResponse;

pub(crate) const SAVE_FAILED_MSG: &str = "Failed to save order";

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("{message}")]
    BadRequest { message: String },
    #[display("{}", SAVE_FAILED_MSG)]
    SaveFailed,
    #[display("{message}")]
    ListFailed { message: String },
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::SaveFailed | CustomError::ListFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(StatusResponse::error(self.to_string()))
    }
}

/// Turns body deserialization failures into a JSON 400 instead of actix's plain text one.
pub(crate) fn json_error_handler(err: error::JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    CustomError::BadRequest {
        message: err.to_string(),
    }
    .into()
}
