use crate::domain::{Book, Loan, default_catalog};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{LibraryError, Result};

/// ロックで保護される状態
///
/// 書籍と貸出は常に同じロックの下で一緒に更新される。
#[derive(Debug, Default)]
struct Inventory {
    books: HashMap<String, Book>,
    loans: HashMap<String, Vec<Loan>>,
}

/// 蔵書と貸出のインメモリストア
///
/// 1つの RwLock で書籍マップと貸出マップをまとめて保護する。
/// - `lookup` / `loans` は共有ロック（並行に実行可能）
/// - `borrow` / `extend` / `return_book` は操作全体を排他ロックで実行する
///
/// どの操作もロック保持中にパニックしないため、ロックのポイズニングは無視して内部状態を使い続ける。
#[derive(Debug, Default)]
pub struct LibraryStore {
    inventory: RwLock<Inventory>,
}

impl LibraryStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定したカタログで初期化されたストアを作成
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books = books
            .into_iter()
            .map(|book| (book.title.clone(), book))
            .collect();

        Self {
            inventory: RwLock::new(Inventory {
                books,
                loans: HashMap::new(),
            }),
        }
    }

    /// 既定のカタログで初期化されたストアを作成
    pub fn seeded() -> Self {
        Self::with_books(default_catalog())
    }

    fn read(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inventory.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inventory.write().unwrap_or_else(|e| e.into_inner())
    }

    /// タイトル完全一致で書籍を取得する
    ///
    /// # エラー
    /// - BookNotFound: カタログに存在しない
    pub fn lookup(&self, title: &str) -> Result<Book> {
        self.read()
            .books
            .get(title)
            .cloned()
            .ok_or(LibraryError::BookNotFound)
    }

    /// 現在時刻で書籍を貸し出す
    pub fn borrow(&self, title: &str, borrower: &str) -> Result<Loan> {
        self.borrow_at(title, borrower, Utc::now())
    }

    /// 指定時刻で書籍を貸し出す
    ///
    /// 在庫の減算と貸出の追加は1つの排他ロック内で行われる。
    ///
    /// # エラー
    /// - BookNotFound: カタログに存在しない
    /// - NoCopiesAvailable: 貸出可能な冊数が0（状態は変更しない）
    pub fn borrow_at(
        &self,
        title: &str,
        borrower: &str,
        loaned_at: DateTime<Utc>,
    ) -> Result<Loan> {
        let mut inventory = self.write();

        let book = inventory
            .books
            .get_mut(title)
            .ok_or(LibraryError::BookNotFound)?;

        if !book.has_available_copy() {
            return Err(LibraryError::NoCopiesAvailable);
        }
        book.available_copies -= 1;

        let loan = Loan::new(title, borrower, loaned_at);
        inventory
            .loans
            .entry(title.to_string())
            .or_default()
            .push(loan.clone());

        Ok(loan)
    }

    /// 貸出を延長する
    ///
    /// 借り手名が最初に一致した貸出の返却期限を21日延ばし、更新後の貸出を返す。
    ///
    /// # エラー
    /// - NoLoansForBook: タイトルに貸出記録がない
    /// - LoanNotFoundForBorrower: 借り手に該当する貸出がない
    pub fn extend(&self, title: &str, borrower: &str) -> Result<Loan> {
        let mut inventory = self.write();

        let loans = inventory
            .loans
            .get_mut(title)
            .ok_or(LibraryError::NoLoansForBook)?;

        let loan = loans
            .iter_mut()
            .find(|loan| loan.is_borrowed_by(borrower))
            .ok_or(LibraryError::LoanNotFoundForBorrower)?;

        loan.extend();
        Ok(loan.clone())
    }

    /// 書籍を返却する
    ///
    /// 借り手名が最初に一致した貸出を削除し、在庫を1冊戻す。
    /// 削除は末尾要素との入れ替えで行うため、残りの貸出の順序は保証されない。
    ///
    /// # エラー
    /// - NoLoansForBook: タイトルに貸出記録がない
    /// - BookNotFound: カタログに存在しない
    /// - LoanNotFoundForBorrower: 借り手に該当する貸出がない
    pub fn return_book(&self, title: &str, borrower: &str) -> Result<()> {
        let mut guard = self.write();
        let inventory = &mut *guard;

        let loans = inventory
            .loans
            .get_mut(title)
            .ok_or(LibraryError::NoLoansForBook)?;

        let book = inventory
            .books
            .get_mut(title)
            .ok_or(LibraryError::BookNotFound)?;

        let index = loans
            .iter()
            .position(|loan| loan.is_borrowed_by(borrower))
            .ok_or(LibraryError::LoanNotFoundForBorrower)?;

        loans.swap_remove(index);
        book.available_copies = book.available_copies.saturating_add(1);

        Ok(())
    }

    /// タイトルの現在の貸出一覧（コピー）
    pub fn loans(&self, title: &str) -> Vec<Loan> {
        self.read().loans.get(title).cloned().unwrap_or_default()
    }

    /// テスト・初期化用：書籍レコードを登録または置き換える
    ///
    /// 貸出との対応関係は検証しない。
    pub fn put_book(&self, book: Book) {
        self.write().books.insert(book.title.clone(), book);
    }

    /// テスト・初期化用：貸出を直接追加する
    ///
    /// 在庫数は変更しない。
    pub fn put_loan(&self, loan: Loan) {
        self.write()
            .loans
            .entry(loan.book_title.clone())
            .or_default()
            .push(loan);
    }
}
