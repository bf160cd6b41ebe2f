use std::sync::Arc;

use crate::client::GithubClient;
use crate::config::default_coordinates;
use crate::error::GithubResult;
use crate::git;
use crate::logging::log_info;
use crate::models::RepoCoordinates;

/// Central context for CLI operations: the repository every request
/// targets plus the shared HTTP client. Resolved once in `main` and
/// passed to each handler.
pub struct CliContext {
    coords: RepoCoordinates,
    client: Arc<GithubClient>,
}

impl CliContext {
    /// Resolve the target repository: explicit flags first, then the
    /// configured defaults, then the local checkout's fetch remote.
    /// Both halves must resolve before any URL is built.
    pub fn resolve(owner: Option<&str>, repo: Option<&str>) -> GithubResult<Self> {
        let coords = match (owner, repo) {
            (Some(owner), Some(repo)) => RepoCoordinates::new(owner, repo),
            _ => {
                let (default_owner, default_repo) = default_coordinates();
                let owner = owner.map(str::to_string).or(default_owner);
                let repo = repo.map(str::to_string).or(default_repo);
                match (owner, repo) {
                    (Some(owner), Some(repo)) => RepoCoordinates::new(owner, repo),
                    _ => git::infer_coordinates()?,
                }
            }
        };

        log_info(&format!("operating on {}", coords));

        Ok(Self {
            coords,
            client: Arc::new(GithubClient::new()),
        })
    }

    pub fn coords(&self) -> &RepoCoordinates {
        &self.coords
    }

    pub fn client(&self) -> Arc<GithubClient> {
        self.client.clone()
    }
}

/// Builder for contexts with known coordinates, bypassing resolution.
pub struct CliContextBuilder {
    owner: Option<String>,
    repo: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            owner: None,
            repo: None,
        }
    }

    pub fn with_coordinates(mut self, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self.repo = Some(repo.into());
        self
    }

    pub fn build(self) -> GithubResult<CliContext> {
        CliContext::resolve(self.owner.as_deref(), self.repo.as_deref())
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
