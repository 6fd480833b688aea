// Runtime configuration.
// Read from the environment; CLI flags override individual fields.

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::github::GitHubClient;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// GitHub token; requests are anonymous without one.
    pub github_token: Option<String>,
    /// Catalog file to load instead of the builtin dataset.
    pub catalog_path: Option<PathBuf>,
    /// GitHub API root, for Enterprise installs or proxies.
    pub api_base: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            github_token: non_empty_var("GITHUB_TOKEN"),
            catalog_path: non_empty_var("GITGOD_CATALOG").map(PathBuf::from),
            api_base: non_empty_var("GITGOD_API_BASE"),
        }
    }

    /// The configured catalog file, or the builtin dataset.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Catalog::from_path(path)
            }
            None => Catalog::builtin(),
        }
    }

    pub fn github_client(&self) -> Result<GitHubClient> {
        let client = GitHubClient::new(self.github_token.as_deref())?;
        Ok(match &self.api_base {
            Some(base) => client.with_base_url(base.as_str()),
            None => client,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
