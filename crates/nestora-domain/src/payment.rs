//! Rent payment records and status derivation.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Settlement state of a single payment row.
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentStatus {
    /// Classifies a payment from the amount owed and the amount received.
    ///
    /// `Paid` when the payment covers the amount due, `Partial` when something
    /// positive but short was received, `Unpaid` otherwise.
    pub fn derive(amount_due: f64, amount_paid: f64) -> Result<Self, AmountError> {
        if !amount_due.is_finite() || amount_due < 0.0 {
            return Err(AmountError::InvalidDue(amount_due));
        }
        if !amount_paid.is_finite() || amount_paid < 0.0 {
            return Err(AmountError::InvalidPaid(amount_paid));
        }
        Ok(if amount_paid >= amount_due {
            PaymentStatus::Paid
        } else if amount_paid > 0.0 {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Unpaid
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-function form of [`PaymentStatus::derive`].
pub fn derive_status(amount_due: f64, amount_paid: f64) -> Result<PaymentStatus, AmountError> {
    PaymentStatus::derive(amount_due, amount_paid)
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Errors raised when an amount cannot take part in status derivation.
pub enum AmountError {
    InvalidDue(f64),
    InvalidPaid(f64),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidDue(value) => {
                write!(f, "amount due must be a non-negative number (got {value})")
            }
            AmountError::InvalidPaid(value) => {
                write!(f, "amount paid must be a non-negative number (got {value})")
            }
        }
    }
}

impl std::error::Error for AmountError {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
/// Calendar month a payment applies to, stored as the first day of that month.
pub struct RentMonth(NaiveDate);

impl RentMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, RentMonthError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(RentMonthError { year, month })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

}

impl fmt::Display for RentMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%b %Y"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Returned when a year/month pair does not name a calendar month.
pub struct RentMonthError {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for RentMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02} is not a valid month", self.year, self.month)
    }
}

impl std::error::Error for RentMonthError {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One recorded rent installment. Rows are append-only; corrections are new rows.
pub struct Payment {
    pub month: RentMonth,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub paid_date: Option<DateTime<Utc>>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub notes: String,
}

impl Payment {
    /// Builds a payment row whose status is derived from the two amounts.
    pub fn record(
        month: RentMonth,
        amount_due: f64,
        amount_paid: f64,
        paid_date: Option<DateTime<Utc>>,
        notes: impl Into<String>,
    ) -> Result<Self, AmountError> {
        let status = PaymentStatus::derive(amount_due, amount_paid)?;
        Ok(Self {
            month,
            amount_due,
            amount_paid,
            paid_date,
            status,
            notes: notes.into(),
        })
    }

    /// Portion of the amount due that was not covered. Overpayments yield zero.
    pub fn shortfall(&self) -> f64 {
        if self.amount_paid < self.amount_due {
            self.amount_due - self.amount_paid
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_classifies_amounts() {
        assert_eq!(PaymentStatus::derive(1000.0, 1000.0), Ok(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::derive(1000.0, 1200.0), Ok(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::derive(1000.0, 400.0), Ok(PaymentStatus::Partial));
        assert_eq!(PaymentStatus::derive(1000.0, 0.0), Ok(PaymentStatus::Unpaid));
    }

    #[test]
    fn zero_due_counts_as_paid() {
        assert_eq!(PaymentStatus::derive(0.0, 0.0), Ok(PaymentStatus::Paid));
    }

    #[test]
    fn derive_rejects_negative_due() {
        assert_eq!(
            PaymentStatus::derive(-1.0, 10.0),
            Err(AmountError::InvalidDue(-1.0))
        );
        assert!(PaymentStatus::derive(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn derive_rejects_negative_paid() {
        assert_eq!(
            PaymentStatus::derive(100.0, -5.0),
            Err(AmountError::InvalidPaid(-5.0))
        );
    }

    #[test]
    fn derive_matches_partition_over_grid() {
        let amounts = [0.0, 0.01, 1.0, 399.99, 400.0, 1000.0, 1000.01];
        for &due in &amounts {
            for &paid in &amounts {
                let status = derive_status(due, paid).unwrap();
                let expected = if paid >= due {
                    PaymentStatus::Paid
                } else if paid > 0.0 {
                    PaymentStatus::Partial
                } else {
                    PaymentStatus::Unpaid
                };
                assert_eq!(status, expected, "due={due} paid={paid}");
            }
        }
    }

    #[test]
    fn rent_month_rejects_invalid_month() {
        assert!(RentMonth::new(2024, 0).is_err());
        assert!(RentMonth::new(2024, 13).is_err());
        let month = RentMonth::new(2024, 2).unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "Feb 2024");
    }

    #[test]
    fn rent_month_serializes_as_iso_date() {
        let month = RentMonth::new(2024, 3).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-03-01\"");
    }

    #[test]
    fn unpaid_payment_serializes_null_paid_date() {
        let month = RentMonth::new(2024, 1).unwrap();
        let payment = Payment::record(month, 900.0, 0.0, None, "").unwrap();
        let json = serde_json::to_value(&payment).unwrap();
        assert!(json["paid_date"].is_null());
        assert_eq!(json["status"], "unpaid");
        assert_eq!(payment.shortfall(), 900.0);
    }
}
