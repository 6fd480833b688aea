// Trending repositories feed.
// Searches GitHub for recently created popular repositories, caches the raw
// response per range and day, filters out noise, and converts to catalog projects.

pub mod filter;
pub mod range;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheEntry, MemoryCache, ResponseCache};
use crate::catalog::Project;
use crate::error::Result;
use crate::github::{RepositorySource, SearchQuery, SearchResponse};

pub use filter::{is_quality_repo, to_project};
pub use range::TimeRange;

/// Maximum projects in one trending response.
pub const TRENDING_LIMIT: usize = 40;

/// Raw results requested from the search API.
pub const SEARCH_PAGE_SIZE: u32 = 100;

/// Trending feed in the shape handed to the front ends.
///
/// On failure `projects` is empty and `error` is set; that means the feed is
/// unavailable, not that nothing is trending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingResponse {
    pub projects: Vec<Project>,
    pub time_range: String,
    /// Time of the request that produced this response. Set on cache hits too,
    /// so it is not the age of the underlying GitHub data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TrendingResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Search query for repositories created after the range's cutoff.
pub fn build_query(range: &TimeRange, now: DateTime<Utc>) -> SearchQuery {
    SearchQuery {
        q: format!(
            "created:>{} stars:>{}",
            range.cutoff(now).format("%Y-%m-%d"),
            filter::MIN_STARS
        ),
        sort: "stars".to_string(),
        order: "desc".to_string(),
        per_page: SEARCH_PAGE_SIZE,
    }
}

/// Serve `query` from the cache when fresh, otherwise fetch and store it.
///
/// Upstream errors are returned as-is and leave the cache untouched.
pub async fn fetch_with_cache<S, C>(
    source: &mut S,
    cache: &C,
    key: &str,
    query: &SearchQuery,
    now: DateTime<Utc>,
) -> Result<SearchResponse>
where
    S: RepositorySource + ?Sized,
    C: ResponseCache<SearchResponse> + ?Sized,
{
    if let Some(data) = cache.lookup(key, now) {
        tracing::debug!(key, "cache hit");
        return Ok(data);
    }

    tracing::debug!(key, "cache miss, fetching");
    let data = source.search_repositories(query).await?;
    cache.put(key, CacheEntry::new(data.clone(), now));
    Ok(data)
}

/// Quality-filtered, capped projects from a raw search response.
pub fn select_projects(response: &SearchResponse) -> Vec<Project> {
    response
        .items
        .iter()
        .filter(|repo| is_quality_repo(repo))
        .take(TRENDING_LIMIT)
        .map(to_project)
        .collect()
}

/// Build the trending feed for `range` as of `now`.
pub async fn trending<S, C>(
    source: &mut S,
    cache: &C,
    range: &TimeRange,
    now: DateTime<Utc>,
) -> TrendingResponse
where
    S: RepositorySource + ?Sized,
    C: ResponseCache<SearchResponse> + ?Sized,
{
    let key = range.cache_key(now);
    let query = build_query(range, now);

    match fetch_with_cache(source, cache, &key, &query, now).await {
        Ok(response) => {
            let projects = select_projects(&response);
            tracing::info!(
                range = %range,
                raw = response.items.len(),
                kept = projects.len(),
                "trending loaded"
            );
            TrendingResponse {
                projects,
                time_range: range.to_string(),
                cached_at: Some(now),
                error: None,
            }
        }
        Err(e) => {
            tracing::error!(range = %range, error = %e, "failed to fetch trending");
            TrendingResponse {
                projects: Vec::new(),
                time_range: range.to_string(),
                cached_at: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// A repository source paired with the process-wide response cache.
pub struct TrendingService<S> {
    source: S,
    cache: MemoryCache<SearchResponse>,
}

impl<S: RepositorySource> TrendingService<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, MemoryCache::default())
    }

    pub fn with_cache(source: S, cache: MemoryCache<SearchResponse>) -> Self {
        Self { source, cache }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &MemoryCache<SearchResponse> {
        &self.cache
    }

    pub async fn fetch(&mut self, range: &TimeRange) -> TrendingResponse {
        trending(&mut self.source, &self.cache, range, Utc::now()).await
    }
}
