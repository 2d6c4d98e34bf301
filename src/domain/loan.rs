use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 28;

/// 1回の延長で追加される日数
pub const EXTENSION_DAYS: i64 = 21;

/// 貸出 - 1冊の書籍の1回の貸出
///
/// 同じ借り手が同じタイトルを複数冊借りることは妨げない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub book_title: String,
    pub name_of_borrower: String,
    pub loan_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
}

impl Loan {
    /// 純粋関数：新しい貸出を作成する
    ///
    /// 返却期限は貸出日 + 28日間。
    pub fn new(
        book_title: impl Into<String>,
        name_of_borrower: impl Into<String>,
        loan_date: DateTime<Utc>,
    ) -> Self {
        Self {
            book_title: book_title.into(),
            name_of_borrower: name_of_borrower.into(),
            loan_date,
            return_date: loan_date + Duration::days(LOAN_PERIOD_DAYS),
        }
    }

    /// 返却期限を延長する
    ///
    /// 現在時刻ではなく、現在の返却期限から21日間延ばす。
    pub fn extend(&mut self) {
        self.return_date += Duration::days(EXTENSION_DAYS);
    }

    pub fn is_borrowed_by(&self, borrower: &str) -> bool {
        self.name_of_borrower == borrower
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_new_loan_due_in_28_days() {
        let loan = Loan::new("Go Programming", "John", fixed_time());

        assert_eq!(loan.book_title, "Go Programming");
        assert_eq!(loan.name_of_borrower, "John");
        assert_eq!(loan.loan_date, fixed_time());
        assert_eq!(
            loan.return_date,
            Utc.with_ymd_and_hms(2024, 1, 29, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_extend_adds_21_days_to_current_return_date() {
        let mut loan = Loan::new("Go Programming", "John", fixed_time());
        let original = loan.return_date;

        loan.extend();
        assert_eq!(loan.return_date, original + Duration::days(21));

        // 2回目も現在の期限から加算される
        loan.extend();
        assert_eq!(loan.return_date, original + Duration::days(42));
        assert_eq!(loan.loan_date, fixed_time());
    }

    #[test]
    fn test_is_borrowed_by_is_case_sensitive() {
        let loan = Loan::new("Clean Code", "Jane Smith", fixed_time());

        assert!(loan.is_borrowed_by("Jane Smith"));
        assert!(!loan.is_borrowed_by("jane smith"));
    }

    #[test]
    fn test_loan_wire_format() {
        let loan = Loan::new("Clean Code", "Jane Smith", fixed_time());
        let json = serde_json::to_value(&loan).unwrap();

        assert_eq!(json["bookTitle"], "Clean Code");
        assert_eq!(json["nameOfBorrower"], "Jane Smith");
        assert_eq!(json["loanDate"], "2024-01-01T09:30:00Z");
        assert_eq!(json["returnDate"], "2024-01-29T09:30:00Z");
    }
}
