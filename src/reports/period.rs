//! Date ranges and period bucketing.
//!
//! All report dates are interpreted in UTC; this is the service's
//! documented reporting timezone. Buckets are half-open intervals
//! `[bucket_start, bucket_start + length)`, so a transaction falls in
//! exactly one bucket and boundary timestamps are never double
//! counted.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::Transaction;

#[derive(Debug, Error, PartialEq)]
pub enum PeriodError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("unknown period keyword: {0} (expected today, week, month, or year)")]
    UnknownPeriod(String),

    #[error("date arithmetic overflow")]
    Overflow,
}

/// Inclusive calendar-date range. Single-date mode is range mode with
/// start == end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if end < start {
            return Err(PeriodError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        DateRange { start: date, end: date }
    }

    /// Resolve a named period (as the mobile client sends them)
    /// relative to `today`.
    pub fn named(period: &str, today: NaiveDate) -> Result<Self, PeriodError> {
        let days_back = match period {
            "today" => 0,
            "week" => 6,
            "month" => 29,
            "year" => 364,
            other => return Err(PeriodError::UnknownPeriod(other.to_string())),
        };
        let start = today
            .checked_sub_days(Days::new(days_back))
            .ok_or(PeriodError::Overflow)?;
        Ok(DateRange { start, end: today })
    }

    /// The equivalent half-open UTC window `[start 00:00, end+1d 00:00)`.
    pub fn window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), PeriodError> {
        let from = Utc
            .from_utc_datetime(&self.start.and_hms_opt(0, 0, 0).ok_or(PeriodError::Overflow)?);
        let end_next = self
            .end
            .checked_add_days(Days::new(1))
            .ok_or(PeriodError::Overflow)?;
        let to = Utc
            .from_utc_datetime(&end_next.and_hms_opt(0, 0, 0).ok_or(PeriodError::Overflow)?);
        Ok((from, to))
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        let day = ts.date_naive();
        day >= self.start && day <= self.end
    }
}

/// Period bucket granularity for periodic reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// The bucket a given calendar date belongs to, identified by the
    /// bucket's start date. Weeks start on Monday; months on the 1st.
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date,
            Granularity::Weekly => {
                let back = date.weekday().num_days_from_monday() as u64;
                date.checked_sub_days(Days::new(back)).unwrap_or(date)
            }
            Granularity::Monthly => {
                NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
            }
        }
    }
}

/// Group transactions into period buckets.
///
/// The result is a partition: every input transaction appears in
/// exactly one bucket, keyed and ordered by bucket start date.
pub fn bucket_transactions<'a>(
    transactions: &'a [Transaction],
    granularity: Granularity,
) -> BTreeMap<NaiveDate, Vec<&'a Transaction>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
    for tx in transactions {
        let key = granularity.bucket_start(tx.date.date_naive());
        buckets.entry(key).or_default().push(tx);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PaymentMethod, TransactionType};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn tx_on(date: DateTime<Utc>) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            tx_type: TransactionType::SalesPayment,
            amount: Decimal::ONE,
            method: PaymentMethod::Cash,
            transfer_to: None,
            date,
            reference: None,
            recorded_by: "tester".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_rejects_inverted_range() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(
            DateRange::new(start, end),
            Err(PeriodError::InvalidRange { start, end })
        );
    }

    #[test]
    fn test_single_date_is_degenerate_range() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let range = DateRange::single(day);
        assert_eq!(range, DateRange::new(day, day).unwrap());
    }

    #[test]
    fn test_named_periods() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            DateRange::named("today", today).unwrap(),
            DateRange::single(today)
        );
        assert_eq!(
            DateRange::named("week", today).unwrap().start,
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
        );
        assert!(matches!(
            DateRange::named("fortnight", today),
            Err(PeriodError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn test_window_is_half_open() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let range = DateRange::single(day);
        let (from, to) = range.window().unwrap();

        assert!(range.contains(from));
        // Exactly midnight of the next day is outside the window.
        assert!(!range.contains(to));
        assert_eq!(to - from, chrono::Duration::days(1));
    }

    #[test]
    fn test_weekly_bucket_starts_monday() {
        // 2025-06-15 is a Sunday; its week starts 2025-06-09.
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            Granularity::Weekly.bucket_start(sunday),
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
        );
        let monday = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(Granularity::Weekly.bucket_start(monday), monday);
    }

    #[test]
    fn test_monthly_bucket_starts_first() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            Granularity::Monthly.bucket_start(date),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_bucketing_is_a_partition() {
        let transactions: Vec<Transaction> = (0..10)
            .map(|i| {
                tx_on(
                    Utc.with_ymd_and_hms(2025, 6, 1 + i, if i % 2 == 0 { 0 } else { 23 }, 0, 0)
                        .unwrap(),
                )
            })
            .collect();

        for granularity in [Granularity::Daily, Granularity::Weekly, Granularity::Monthly] {
            let buckets = bucket_transactions(&transactions, granularity);
            let bucketed: usize = buckets.values().map(Vec::len).sum();
            assert_eq!(bucketed, transactions.len());

            // No transaction appears in two buckets.
            let mut seen = std::collections::HashSet::new();
            for bucket in buckets.values() {
                for tx in bucket {
                    assert!(seen.insert(tx.id));
                }
            }
        }
    }

    #[test]
    fn test_midnight_boundary_lands_in_one_daily_bucket() {
        let midnight = tx_on(Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap());
        let transactions = vec![midnight];
        let buckets = bucket_transactions(&transactions, Granularity::Daily);
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains_key(&NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    }
}
