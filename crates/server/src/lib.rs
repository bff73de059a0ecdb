use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod expense;
mod income;
mod server;

pub enum ServerError {
    Engine(EngineError),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidDate(_) | EngineError::InvalidId(_) => StatusCode::BAD_REQUEST,
        EngineError::MalformedDocument { .. }
        | EngineError::UnsupportedUri(_)
        | EngineError::Bson(_)
        | EngineError::Database(_)
        | EngineError::Mongo(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::InvalidDate(_) | EngineError::InvalidId(_) => err.to_string(),
        other => {
            tracing::error!("store error: {other}");
            "internal server error".to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_maps_to_400() {
        let res = ServerError::from(EngineError::InvalidDate("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let res = ServerError::from(EngineError::InvalidId("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_document_maps_to_500() {
        let res = ServerError::from(EngineError::MalformedDocument {
            id: "x".to_string(),
            reason: "missing field `category`".to_string(),
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_errors_hide_details() {
        let message =
            message_for_engine_error(EngineError::Bson("unexpected end of input".to_string()));
        assert_eq!(message, "internal server error");
    }
}
