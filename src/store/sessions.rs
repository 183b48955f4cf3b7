//! Balance session store.
//!
//! Close is the one operation requiring mutual exclusion: the period
//! key is checked and the session inserted under a single write lock,
//! so concurrent closes for the same period have exactly one winner.

use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::BalanceSession;

#[derive(Debug, Error, PartialEq)]
pub enum SessionStoreError {
    #[error("a balance session already exists for period {start}..{end}")]
    DuplicatePeriod { start: String, end: String },
}

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<Vec<BalanceSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a closed session, failing if one already exists for the
    /// same (period_start, period_end). The check and the insert
    /// happen under one write lock; losers never overwrite the winner.
    pub async fn insert_closed(
        &self,
        session: BalanceSession,
    ) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.write().await;
        if guard.iter().any(|s| {
            s.period_start == session.period_start && s.period_end == session.period_end
        }) {
            return Err(SessionStoreError::DuplicatePeriod {
                start: session.period_start.to_string(),
                end: session.period_end.to_string(),
            });
        }
        guard.push(session);
        Ok(())
    }

    /// All sessions, newest close first.
    pub async fn list(&self) -> Vec<BalanceSession> {
        let guard = self.sessions.read().await;
        let mut sessions: Vec<BalanceSession> = guard.clone();
        sessions.sort_by(|a, b| b.closed_at.cmp(&a.closed_at));
        sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SessionStatus, SessionSummary};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn session(start: NaiveDate, end: NaiveDate) -> BalanceSession {
        BalanceSession {
            id: Uuid::new_v4(),
            period_start: start,
            period_end: end,
            status: SessionStatus::Closed,
            closed_at: Utc::now(),
            closed_by: "operator".to_string(),
            notes: None,
            seal_hash: "hash".to_string(),
            summary: SessionSummary {
                sales_total: Decimal::ZERO,
                sales_collected: Decimal::ZERO,
                sales_count: 0,
                procurement_total: Decimal::ZERO,
                procurement_count: 0,
                expenses_total: Decimal::ZERO,
                expenses_count: 0,
                net_balance: Decimal::ZERO,
                net_profit: Decimal::ZERO,
                liquid_total: Decimal::ZERO,
            },
        }
    }

    #[tokio::test]
    async fn test_duplicate_period_rejected() {
        let store = SessionStore::new();
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        store.insert_closed(session(start, end)).await.unwrap();
        assert!(matches!(
            store.insert_closed(session(start, end)).await,
            Err(SessionStoreError::DuplicatePeriod { .. })
        ));
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_periods_coexist() {
        let store = SessionStore::new();
        let june = session(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        );
        let july = session(
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
        );
        store.insert_closed(june).await.unwrap();
        store.insert_closed(july).await.unwrap();
        assert_eq!(store.list().await.len(), 2);
    }
}
