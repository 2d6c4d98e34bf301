use thiserror::Error;

/// 蔵書・貸出管理のエラー
///
/// いずれも呼び出し元に返される想定内のエラーで、プロセスを止めるものではない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// カタログにタイトルが存在しない
    #[error("Book not found")]
    BookNotFound,

    /// タイトルに対する貸出記録が存在しない
    #[error("No loans found for this book")]
    NoLoansForBook,

    /// 借り手に該当する貸出が存在しない
    #[error("No loan found for this borrower")]
    LoanNotFoundForBorrower,

    /// 貸出可能な冊数がない
    #[error("No copies available")]
    NoCopiesAvailable,
}

/// 蔵書管理の Result型
pub type Result<T> = std::result::Result<T, LibraryError>;
