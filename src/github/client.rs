// GitHub API HTTP client.
// Handles optional authentication, rate limit tracking, and status mapping.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{GitGodError, Result};

use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with optional authentication and rate limit tracking.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    authenticated: bool,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a client. Without a token requests are anonymous and get the
    /// lower unauthenticated rate limit.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| GitGodError::Other(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gitgod"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GitGodError::Api)?;

        Ok(Self {
            client,
            base_url: GITHUB_API_BASE.to_string(),
            authenticated: token.is_some(),
            rate_limit: RateLimit::default(),
        })
    }

    /// Point the client at another API root (GitHub Enterprise, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&mut self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;

        self.update_rate_limit(&response);
        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &mut self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).query(params).send().await?;

        self.update_rate_limit(&response);
        Self::check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        let headers = response.headers();

        if let Some(limit) = header_u64(headers, "x-ratelimit-limit") {
            self.rate_limit.limit = limit;
        }
        if let Some(remaining) = header_u64(headers, "x-ratelimit-remaining") {
            self.rate_limit.remaining = remaining;
        }
        if let Some(reset) = header_u64(headers, "x-ratelimit-reset") {
            self.rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS) {
            if let Some(error) = rate_limit_error(response.headers()) {
                return Err(error);
            }
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(GitGodError::Unauthorized),
            StatusCode::NOT_FOUND => Err(GitGodError::NotFound(response.url().to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(status = status.as_u16(), %body, "GitHub request failed");
                Err(GitGodError::Status(status.as_u16()))
            }
        }
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// `RateLimited` when these headers report an exhausted quota.
/// Responses without `x-ratelimit-remaining` are not treated as rate limited.
fn rate_limit_error(headers: &HeaderMap) -> Option<GitGodError> {
    if header_u64(headers, "x-ratelimit-remaining")? != 0 {
        return None;
    }

    let reset_at = header_u64(headers, "x-ratelimit-reset")
        .and_then(|reset| chrono::DateTime::from_timestamp(reset as i64, 0))
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    Some(GitGodError::RateLimited { reset_at })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_client() {
        let client = GitHubClient::new(None).unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.rate_limit().remaining, 0);
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = GitHubClient::new(Some("ghp_test"))
            .unwrap()
            .with_base_url("http://localhost:8080/api/v3/");
        assert!(client.is_authenticated());
        assert_eq!(client.base_url, "http://localhost:8080/api/v3");
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_exhausted_quota_is_rate_limited() {
        let error = rate_limit_error(&headers(&[
            ("x-ratelimit-remaining", "0"),
            ("x-ratelimit-reset", "3600"),
        ]));
        assert!(matches!(
            error,
            Some(GitGodError::RateLimited { ref reset_at }) if reset_at == "01:00:00"
        ));
    }

    #[test]
    fn test_forbidden_without_rate_headers_is_not_rate_limited() {
        assert!(rate_limit_error(&headers(&[])).is_none());
        assert!(rate_limit_error(&headers(&[("x-ratelimit-remaining", "12")])).is_none());
    }

    #[test]
    fn test_missing_reset_is_unknown() {
        let error = rate_limit_error(&headers(&[("x-ratelimit-remaining", "0")]));
        assert!(matches!(
            error,
            Some(GitGodError::RateLimited { ref reset_at }) if reset_at == "unknown"
        ));
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        assert!(GitHubClient::new(Some("bad\ntoken")).is_err());
    }
}
