use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;

use crate::constants::{ACCEPT_HEADER, APP_USER_AGENT, GITHUB_API_URL, REQUEST_TIMEOUT_SECS};
use crate::error::{GithubError, GithubResult};
use crate::logging::log_debug;
use crate::models::*;

/// Collection URL for a kind of item, plus the item number when one is
/// requested. Whether the number names an existing item is the
/// server's business.
pub fn item_url(coords: &RepoCoordinates, kind: ItemKind, number: Option<u64>) -> String {
    let mut url = format!(
        "{}/repos/{}/{}/{}",
        GITHUB_API_URL,
        coords.owner,
        coords.repo,
        kind.path_segment()
    );
    if let Some(number) = number {
        url.push_str(&format!("/{}", number));
    }
    url
}

/// The comments sub-resource of one item.
pub fn comments_url(coords: &RepoCoordinates, kind: ItemKind, number: u64) -> String {
    format!("{}/comments", item_url(coords, kind, Some(number)))
}

pub struct GithubClient {
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        // GitHub rejects requests without a User-Agent
        headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET the queried items: one when a number was given, the whole
    /// collection otherwise. Anything but 200 yields no entity.
    pub async fn fetch_items(
        &self,
        coords: &RepoCoordinates,
        query: &ItemQuery,
    ) -> GithubResult<ItemPayload> {
        let url = item_url(coords, query.kind, query.number);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        log_debug(&format!("GET {} -> {}", url, status));
        if status != StatusCode::OK {
            return Err(GithubError::RequestFailed { status });
        }
        if query.number.is_some() {
            Ok(ItemPayload::Single(response.json::<Issue>().await?))
        } else {
            Ok(ItemPayload::List(response.json::<Vec<Issue>>().await?))
        }
    }

    pub async fn fetch_comments(
        &self,
        coords: &RepoCoordinates,
        kind: ItemKind,
        number: u64,
    ) -> GithubResult<Vec<Comment>> {
        let url = comments_url(coords, kind, number);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        log_debug(&format!("GET {} -> {}", url, status));
        if status != StatusCode::OK {
            return Err(GithubError::RequestFailed { status });
        }
        Ok(response.json::<Vec<Comment>>().await?)
    }

    /// POST a new issue to the collection URL with basic auth. Only 201
    /// counts as success.
    pub async fn create_issue(
        &self,
        coords: &RepoCoordinates,
        kind: ItemKind,
        new_issue: &NewIssue,
        credentials: &Credentials,
    ) -> GithubResult<CreatedItem> {
        let url = item_url(coords, kind, None);
        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .json(new_issue)
            .send()
            .await?;
        let status = response.status();
        log_debug(&format!("POST {} -> {}", url, status));
        if status != StatusCode::CREATED {
            return Err(GithubError::RequestFailed { status });
        }
        Ok(response.json::<CreatedItem>().await?)
    }

    pub async fn create_comment(
        &self,
        coords: &RepoCoordinates,
        kind: ItemKind,
        number: u64,
        new_comment: &NewComment,
        credentials: &Credentials,
    ) -> GithubResult<CreatedComment> {
        let url = comments_url(coords, kind, number);
        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .json(new_comment)
            .send()
            .await?;
        let status = response.status();
        log_debug(&format!("POST {} -> {}", url, status));
        if status != StatusCode::CREATED {
            return Err(GithubError::RequestFailed { status });
        }
        Ok(response.json::<CreatedComment>().await?)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> RepoCoordinates {
        RepoCoordinates::new("rust-lang", "cargo")
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(
            item_url(&coords(), ItemKind::Issues, None),
            "https://api.github.com/repos/rust-lang/cargo/issues"
        );
    }

    #[test]
    fn test_item_url_with_number() {
        assert_eq!(
            item_url(&coords(), ItemKind::Pulls, Some(7)),
            "https://api.github.com/repos/rust-lang/cargo/pulls/7"
        );
    }

    #[test]
    fn test_comments_url() {
        assert_eq!(
            comments_url(&coords(), ItemKind::Issues, 42),
            "https://api.github.com/repos/rust-lang/cargo/issues/42/comments"
        );
    }
}
