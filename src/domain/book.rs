use serde::{Deserialize, Serialize};

/// 書籍 - カタログ上の1タイトル
///
/// タイトルが一意キー。大文字小文字の正規化は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub available_copies: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, available_copies: u32) -> Self {
        Self {
            title: title.into(),
            available_copies,
        }
    }

    /// 貸出可能な冊数が残っているか
    pub fn has_available_copy(&self) -> bool {
        self.available_copies > 0
    }
}

/// 起動時に投入されるカタログ
pub fn default_catalog() -> Vec<Book> {
    vec![Book::new("Go Programming", 3), Book::new("Clean Code", 2)]
}
