// GitHub API module.
// Provides the client, endpoints, and response types used by trending and star refresh.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use endpoints::{RepositoryLookup, RepositorySource, SearchQuery};
pub use types::*;
