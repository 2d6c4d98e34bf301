use serde::{Deserialize, Serialize};

/// 書籍取得のクエリパラメータ（GET /Book?title=...）
#[derive(Debug, Deserialize)]
pub struct BookQuery {
    pub title: Option<String>,
}

/// 貸出・延長・返却のリクエストボディ
///
/// 欠けたフィールドは空文字として扱い、`is_complete` で弾く。
#[derive(Debug, Clone, Deserialize)]
pub struct LoanRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub borrower: String,
}

impl LoanRequest {
    /// タイトルと借り手の両方が指定されているか
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.borrower.is_empty()
    }
}

/// 返却成功レスポンス（POST /Return）
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn returned(title: &str, borrower: &str) -> Self {
        Self {
            message: format!("Book '{}' successfully returned by {}", title, borrower),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
