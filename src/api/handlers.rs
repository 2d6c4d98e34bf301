use crate::application::library::LibraryStore;
use crate::domain::{Book, Loan};
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookQuery, LoanRequest, MessageResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LibraryStore>,
}

impl AppState {
    pub fn new(store: LibraryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// リクエストボディの解析と必須項目の確認
///
/// Content-Type ヘッダーは見ずに、ボディをJSONとして解析する。
fn parse_loan_request(body: &[u8]) -> Result<LoanRequest, ApiError> {
    let req: LoanRequest = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ApiError::invalid_request("Invalid request body")
    })?;

    if !req.is_complete() {
        return Err(ApiError::invalid_request("Title and borrower are required"));
    }

    Ok(req)
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /Book?title=... - タイトルで書籍を取得
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookQuery>,
) -> Result<Json<Book>, ApiError> {
    let title = query
        .title
        .filter(|title| !title.is_empty())
        .ok_or_else(|| ApiError::invalid_request("Title query parameter is required"))?;

    let book = state.store.lookup(&title)?;

    Ok(Json(book))
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /Borrow - 書籍を貸し出す
///
/// 在庫がない場合は409を返す。
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Loan>), ApiError> {
    let req = parse_loan_request(&body)?;

    let loan = state.store.borrow(&req.title, &req.borrower)?;

    tracing::info!(
        title = %loan.book_title,
        borrower = %loan.name_of_borrower,
        return_date = %loan.return_date,
        "Book borrowed"
    );

    Ok((StatusCode::CREATED, Json(loan)))
}

/// POST /Extend - 貸出を延長
///
/// 現在の返却期限から3週間延長する。
pub async fn extend_loan(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Loan>, ApiError> {
    let req = parse_loan_request(&body)?;

    let loan = state.store.extend(&req.title, &req.borrower)?;

    tracing::info!(
        title = %loan.book_title,
        borrower = %loan.name_of_borrower,
        return_date = %loan.return_date,
        "Loan extended"
    );

    Ok(Json(loan))
}

/// POST /Return - 書籍を返却
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = parse_loan_request(&body)?;

    state.store.return_book(&req.title, &req.borrower)?;

    tracing::info!(title = %req.title, borrower = %req.borrower, "Book returned");

    Ok(Json(MessageResponse::returned(&req.title, &req.borrower)))
}
