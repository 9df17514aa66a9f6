//! Stats page state: the selected period and the last loaded aggregates.
//!
//! A refresh is all-or-nothing. [`StatsState::finish`] receives the joined
//! result of the four calls; on failure the previous aggregates stay on
//! screen and only the loading flag is cleared.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::api::StatsBundle;
use crate::net::error::ApiError;
use crate::net::query::{PeriodParam, StatsQuery};
use crate::net::types::{ActivityData, CategoryCounts, DecisionsData, StatsSummary};

/// Period toggle offered by the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatsPeriod {
    Today,
    #[default]
    Week,
    Month,
}

impl StatsPeriod {
    pub const ALL: [Self; 3] = [Self::Today, Self::Week, Self::Month];

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Сегодня",
            Self::Week => "7 дней",
            Self::Month => "30 дней",
        }
    }

    pub fn param(self) -> PeriodParam {
        match self {
            Self::Today => PeriodParam::Today,
            Self::Week => PeriodParam::Week,
            Self::Month => PeriodParam::Month,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsState {
    pub period: StatsPeriod,
    pub loading: bool,
    pub summary: Option<StatsSummary>,
    pub activity: Vec<ActivityData>,
    pub decisions: Option<DecisionsData>,
    pub categories: CategoryCounts,
}

impl StatsState {
    /// Switch period. Returns `false` when `period` is already selected.
    pub fn select_period(&mut self, period: StatsPeriod) -> bool {
        if self.period == period {
            return false;
        }
        self.period = period;
        true
    }

    /// Mark a refresh as started and return its query.
    pub fn begin(&mut self) -> StatsQuery {
        self.loading = true;
        StatsQuery::for_period(self.period.param())
    }

    pub fn finish(&mut self, result: Result<StatsBundle, ApiError>) {
        if let Ok(bundle) = result {
            self.summary = Some(bundle.summary);
            self.activity = bundle.activity;
            self.decisions = Some(bundle.decisions);
            self.categories = bundle.categories;
        }
        self.loading = false;
    }
}
