//! Income/loss report bucketed by period.
//!
//! Groups income-type and expense-type transactions into daily, weekly,
//! or monthly buckets (UTC calendar, weeks starting Monday). Buckets
//! with no activity are omitted from the list but count as zero in the
//! range summary. Transfers are neither income nor loss and are
//! excluded entirely.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;
use crate::reports::period::{bucket_transactions, DateRange, Granularity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub total_income: Decimal,
    pub total_losses: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// Bucket start: the day itself, the week's Monday, or the 1st.
    pub date: NaiveDate,
    pub total_income: Decimal,
    pub total_losses: Decimal,
    pub net_income: Decimal,
    pub income: Vec<Transaction>,
    pub losses: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIncomeLossReport {
    pub summary: DailySummary,
    pub daily_reports: Vec<DailyReport>,
}

/// Compute per-bucket income and losses over a date range.
pub fn daily_income_loss(
    transactions: &[Transaction],
    range: &DateRange,
    granularity: Granularity,
) -> DailyIncomeLossReport {
    let in_range: Vec<Transaction> = transactions
        .iter()
        .filter(|t| range.contains(t.date) && (t.tx_type.is_income() || t.tx_type.is_expense()))
        .cloned()
        .collect();

    let mut total_income = Decimal::ZERO;
    let mut total_losses = Decimal::ZERO;
    let daily_reports: Vec<DailyReport> = bucket_transactions(&in_range, granularity)
        .into_iter()
        .map(|(date, bucket)| {
            let (income, losses): (Vec<Transaction>, Vec<Transaction>) = bucket
                .into_iter()
                .cloned()
                .partition(|t| t.tx_type.is_income());
            let bucket_income: Decimal = income.iter().map(|t| t.amount).sum();
            let bucket_losses: Decimal = losses.iter().map(|t| t.amount).sum();
            total_income += bucket_income;
            total_losses += bucket_losses;
            DailyReport {
                date,
                total_income: bucket_income,
                total_losses: bucket_losses,
                net_income: bucket_income - bucket_losses,
                income,
                losses,
            }
        })
        .collect();

    DailyIncomeLossReport {
        summary: DailySummary {
            total_income,
            total_losses,
            net_profit: total_income - total_losses,
        },
        daily_reports,
    }
}
