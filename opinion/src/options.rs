//! The seam between the adapter and the aggregation host.

use std::future::Future;

use alloy::rpc::types::Log;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::balances::Balances;
use crate::chains::Chain;
use crate::error::Result;
use crate::events::LogQuery;

/// Half-open time range `[start, end)` the host is computing dimensions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// The UTC calendar day `day`.
    #[must_use]
    pub fn for_day(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + TimeDelta::days(1),
        }
    }

    /// Build a window from unix timestamps in seconds.
    ///
    /// Returns `None` if either bound is out of range or `end < start`.
    #[must_use]
    pub fn from_timestamps(start: i64, end: i64) -> Option<Self> {
        let start = DateTime::from_timestamp(start, 0)?;
        let end = DateTime::from_timestamp(end, 0)?;
        (start <= end).then_some(Self { start, end })
    }

    /// Whether `at` falls inside the window.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// Whether the unix timestamp `secs` falls inside the window.
    #[must_use]
    pub fn contains_timestamp(&self, secs: u64) -> bool {
        i64::try_from(secs)
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, 0))
            .is_some_and(|at| self.contains(at))
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// Capabilities the host exposes to an adapter for one fetch cycle.
///
/// The host decides the chain and window, retrieves logs for it and owns the
/// accumulators. Implementations are expected to return only logs that
/// [`LogQuery::matches`] and that fall inside [`Self::window`].
pub trait FetchOptions {
    /// The chain being fetched.
    fn chain(&self) -> Chain;

    /// The window this fetch cycle covers.
    fn window(&self) -> TimeWindow;

    /// Retrieve every log matching `query` inside the window.
    ///
    /// # Errors
    ///
    /// Host failures are reported as
    /// [`Error::LogRetrieval`](crate::Error::LogRetrieval).
    fn get_logs(&self, query: LogQuery) -> impl Future<Output = Result<Vec<Log>>> + Send;

    /// A fresh, empty accumulator.
    fn create_balances(&self) -> Balances {
        Balances::new()
    }
}
