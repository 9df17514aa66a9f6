//! REST client for the moderation service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! data loading only happens in the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! One call per logical operation, no retries, no caching, no timeout
//! override. Failures come back as `ApiError` and callers treat every variant
//! the same way: log and clear the loading indicator.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::query::{AdsQuery, StatsQuery};
use super::types::{
    ActionResponse, ActivityData, Advertisement, AdsResponse, CategoryCounts, DecisionsData, Moderator,
    ModerationRequest, StatsSummary,
};

/// Default API prefix; the host forwards it to the moderation service.
pub const DEFAULT_API_BASE: &str = "/api/v1";

pub(crate) const ADS_ENDPOINT: &str = "/ads";
pub(crate) const STATS_SUMMARY_ENDPOINT: &str = "/stats/summary";
pub(crate) const STATS_ACTIVITY_ENDPOINT: &str = "/stats/chart/activity";
pub(crate) const STATS_DECISIONS_ENDPOINT: &str = "/stats/chart/decisions";
pub(crate) const STATS_CATEGORIES_ENDPOINT: &str = "/stats/chart/categories";
pub(crate) const MODERATOR_ME_ENDPOINT: &str = "/moderators/me";

fn ad_endpoint(id: u64) -> String {
    format!("{ADS_ENDPOINT}/{id}")
}

fn approve_endpoint(id: u64) -> String {
    format!("{ADS_ENDPOINT}/{id}/approve")
}

fn reject_endpoint(id: u64) -> String {
    format!("{ADS_ENDPOINT}/{id}/reject")
}

fn request_changes_endpoint(id: u64) -> String {
    format!("{ADS_ENDPOINT}/{id}/request-changes")
}

/// The four stats aggregates fetched together by the stats page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsBundle {
    pub summary: StatsSummary,
    pub activity: Vec<ActivityData>,
    pub decisions: DecisionsData,
    pub categories: CategoryCounts,
}

/// Typed HTTP adapter bound to one base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiClient {
    /// Create a client for `base` (trailing slashes are stripped).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    #[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base)
    }

    /// `GET /ads` with paging, sort and the non-empty filters.
    pub async fn list_ads(&self, query: &AdsQuery) -> Result<AdsResponse, ApiError> {
        self.get_json(ADS_ENDPOINT, &query.to_pairs()).await
    }

    /// `GET /ads/:id`.
    pub async fn get_ad(&self, id: u64) -> Result<Advertisement, ApiError> {
        self.get_json(&ad_endpoint(id), &[]).await
    }

    /// `POST /ads/:id/approve`.
    pub async fn approve_ad(&self, id: u64) -> Result<ActionResponse, ApiError> {
        self.post_json::<(), _>(&approve_endpoint(id), None).await
    }

    /// `POST /ads/:id/reject`.
    pub async fn reject_ad(&self, id: u64, body: &ModerationRequest) -> Result<ActionResponse, ApiError> {
        self.post_json(&reject_endpoint(id), Some(body)).await
    }

    /// `POST /ads/:id/request-changes`.
    pub async fn request_changes(&self, id: u64, body: &ModerationRequest) -> Result<ActionResponse, ApiError> {
        self.post_json(&request_changes_endpoint(id), Some(body)).await
    }

    pub async fn stats_summary(&self, query: &StatsQuery) -> Result<StatsSummary, ApiError> {
        self.get_json(STATS_SUMMARY_ENDPOINT, &query.to_pairs()).await
    }

    pub async fn stats_activity(&self, query: &StatsQuery) -> Result<Vec<ActivityData>, ApiError> {
        self.get_json(STATS_ACTIVITY_ENDPOINT, &query.to_pairs()).await
    }

    pub async fn stats_decisions(&self, query: &StatsQuery) -> Result<DecisionsData, ApiError> {
        self.get_json(STATS_DECISIONS_ENDPOINT, &query.to_pairs()).await
    }

    pub async fn stats_categories(&self, query: &StatsQuery) -> Result<CategoryCounts, ApiError> {
        self.get_json(STATS_CATEGORIES_ENDPOINT, &query.to_pairs()).await
    }

    /// Issue all four stats calls at once and wait for every one of them.
    pub async fn fetch_stats(&self, query: &StatsQuery) -> Result<StatsBundle, ApiError> {
        join_stats(
            self.stats_summary(query),
            self.stats_activity(query),
            self.stats_decisions(query),
            self.stats_categories(query),
        )
        .await
    }

    /// `GET /moderators/me`.
    pub async fn current_moderator(&self) -> Result<Moderator, ApiError> {
        self.get_json(MODERATOR_ME_ENDPOINT, &[]).await
    }

    async fn get_json<T>(&self, endpoint: &str, query: &[(&'static str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(endpoint))
                .query(query.iter().map(|(key, value)| (*key, value.as_str())))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(endpoint, resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, query);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(endpoint));
            let sent = match body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| ApiError::Transport(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(endpoint, resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn decode_response<T>(endpoint: &str, resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !resp.ok() {
        return Err(ApiError::Status { endpoint: endpoint.to_owned(), status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Drive the four stats futures concurrently until all of them settle.
///
/// A failing call does not cancel its siblings; the first error (in
/// summary, activity, decisions, categories order) is returned once every
/// future has finished.
pub async fn join_stats<S, A, D, C>(summary: S, activity: A, decisions: D, categories: C) -> Result<StatsBundle, ApiError>
where
    S: Future<Output = Result<StatsSummary, ApiError>>,
    A: Future<Output = Result<Vec<ActivityData>, ApiError>>,
    D: Future<Output = Result<DecisionsData, ApiError>>,
    C: Future<Output = Result<CategoryCounts, ApiError>>,
{
    let (summary, activity, decisions, categories) = futures::join!(summary, activity, decisions, categories);
    Ok(StatsBundle { summary: summary?, activity: activity?, decisions: decisions?, categories: categories? })
}
