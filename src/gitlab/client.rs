//! GitLab HTTP client for API interactions

use log::debug;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::api;
use crate::error::{GitlabError, Result};

/// GitLab API client
pub struct GitlabClient {
    client: Client,
    token: String,
    /// API root, e.g. `https://gitlab.com/api/v4`
    base_url: String,
}

impl GitlabClient {
    /// Create a new client for the given instance URL
    pub fn new(token: String, gitlab_url: &str) -> Result<Self> {
        let parsed = Url::parse(gitlab_url).map_err(|e| {
            GitlabError::Config(format!("Invalid GitLab URL '{}': {}", gitlab_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GitlabError::Config(format!(
                "Invalid GitLab URL '{}': scheme must be http or https",
                gitlab_url
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("gitlab-tool/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            token,
            base_url: format!("{}{}", gitlab_url.trim_end_matches('/'), api::BASE_PATH),
        })
    }

    /// API root URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a project resource
    pub(crate) fn project_url(&self, project_id: u64) -> String {
        format!("{}/{}/{}", self.base_url, api::PROJECTS, project_id)
    }

    /// Create a GET request builder with the token header
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header(api::TOKEN_HEADER, &self.token)
    }

    /// Turn a non-success response into an error
    pub(crate) async fn check_status(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable response body: {}>", e));

        // 403 is what GitLab returns for a token lacking the required scope
        if matches!(status.as_u16(), 401 | 403) {
            return Err(GitlabError::Unauthorized(format!(
                "token rejected while fetching {} (status {})",
                error_context,
                status.as_u16()
            )));
        }

        Err(GitlabError::Api {
            status: status.as_u16(),
            message: format!("Failed to fetch {}: {}", error_context, body.trim()),
        })
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.check_status(response, error_context).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            GitlabError::Json(format!("Failed to parse {}: {}", error_context, e))
        })
    }

    /// Fetch only the first page of a list endpoint
    pub async fn fetch_first_page<T>(&self, url: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let page_url = paged_url(url, 1);
        debug!("Fetching {} from: {}", error_context, page_url);

        let response = self.get(&page_url).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// Fetch all pages of a list endpoint, one request at a time
    ///
    /// Follows the `x-next-page` header until it is empty. Items keep the
    /// order in which the API returned them.
    pub async fn fetch_all_pages<T>(&self, url: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut page = 1u32;

        loop {
            let page_url = paged_url(url, page);
            debug!("Fetching page {} of {} from: {}", page, error_context, page_url);

            let response = self.get(&page_url).send().await?;
            let next_page = next_page(&response);

            let page_context = format!("{} (page {})", error_context, page);
            let items: Vec<T> = self.parse_api_response(response, &page_context).await?;
            debug!("Page {} returned {} items", page, items.len());
            all_items.extend(items);

            match next_page {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    /// Stream a response body into `sink`, returning the number of bytes written
    pub(crate) async fn download_to(
        &self,
        url: &str,
        error_context: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64> {
        debug!("Downloading {} from: {}", error_context, url);

        let response = self.get(url).send().await?;
        let mut response = self.check_status(response, error_context).await?;

        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            sink.write_all(&chunk).await.map_err(|e| GitlabError::Io {
                message: format!("Failed to write {}: {}", error_context, e),
            })?;
            written += chunk.len() as u64;
        }
        sink.flush().await.map_err(|e| GitlabError::Io {
            message: format!("Failed to flush {}: {}", error_context, e),
        })?;

        debug!("Downloaded {} bytes of {}", written, error_context);
        Ok(written)
    }
}

/// Append pagination parameters to a URL that may already carry a query
fn paged_url(url: &str, page: u32) -> String {
    let separator = if url.contains('?') { "&" } else { "?" };
    format!(
        "{}{}per_page={}&page={}",
        url,
        separator,
        api::DEFAULT_PAGE_SIZE,
        page
    )
}

/// Read the next page number; absent or empty on the last page
fn next_page(response: &Response) -> Option<u32> {
    response
        .headers()
        .get(api::NEXT_PAGE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
impl GitlabClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(uri: &str) -> Self {
        Self::new("test-token".to_string(), uri).unwrap()
    }
}
