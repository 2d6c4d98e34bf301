use crate::application::library::LibraryError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// ストアのエラーと入力不正をHTTPレスポンスへマッピングする。
#[derive(Debug)]
pub enum ApiError {
    /// ストア操作の失敗
    Library(LibraryError),
    /// リクエストが欠けている・解析できない
    InvalidRequest(String),
}

impl ApiError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest(message.into())
    }
}

impl From<LibraryError> for ApiError {
    fn from(err: LibraryError) -> Self {
        ApiError::Library(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - 入力不正
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),

            // 404 Not Found - タイトル・貸出が存在しない
            ApiError::Library(err @ LibraryError::BookNotFound) => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", err.to_string())
            }
            ApiError::Library(err @ LibraryError::NoLoansForBook) => {
                (StatusCode::NOT_FOUND, "NO_LOANS_FOR_BOOK", err.to_string())
            }
            ApiError::Library(err @ LibraryError::LoanNotFoundForBorrower) => {
                (StatusCode::NOT_FOUND, "LOAN_NOT_FOUND", err.to_string())
            }

            // 409 Conflict - 在庫なし
            ApiError::Library(err @ LibraryError::NoCopiesAvailable) => {
                (StatusCode::CONFLICT, "NO_COPIES_AVAILABLE", err.to_string())
            }
        };

        tracing::debug!(%status, error_type, "Request failed: {}", message);

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
