// GitHub API endpoint functions.
// Typed methods for repository search and repository lookup.

use async_trait::async_trait;

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Repository, SearchResponse};

/// Parameters for `GET /search/repositories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search qualifiers, e.g. `created:>2026-10-12 stars:>50`.
    pub q: String,
    pub sort: String,
    pub order: String,
    pub per_page: u32,
}

impl SearchQuery {
    fn params(&self) -> [(&'static str, String); 4] {
        [
            ("q", self.q.clone()),
            ("sort", self.sort.clone()),
            ("order", self.order.clone()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Upstream that can answer repository searches.
#[async_trait]
pub trait RepositorySource: Send {
    async fn search_repositories(&mut self, query: &SearchQuery) -> Result<SearchResponse>;
}

/// Upstream that can look up a single repository by owner and name.
#[async_trait]
pub trait RepositoryLookup: Send {
    async fn get_repository(&mut self, owner: &str, name: &str) -> Result<Repository>;
}

impl GitHubClient {
    /// Search public repositories.
    pub async fn search(&mut self, query: &SearchQuery) -> Result<SearchResponse> {
        let response = self
            .get_with_params("/search/repositories", &query.params())
            .await?;
        let body: SearchResponse = response.json().await?;
        Ok(body)
    }

    /// Get a specific repository.
    pub async fn get_repo(&mut self, owner: &str, repo: &str) -> Result<Repository> {
        let response = self.get(&format!("/repos/{}/{}", owner, repo)).await?;
        let repository: Repository = response.json().await?;
        Ok(repository)
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn search_repositories(&mut self, query: &SearchQuery) -> Result<SearchResponse> {
        self.search(query).await
    }
}

#[async_trait]
impl RepositoryLookup for GitHubClient {
    async fn get_repository(&mut self, owner: &str, name: &str) -> Result<Repository> {
        self.get_repo(owner, name).await
    }
}
