use std::process::Command;

use crate::error::{ErrorContext, GithubError, GithubResult};
use crate::logging::log_debug;
use crate::models::RepoCoordinates;

/// Deduce the owner and repository from the local checkout's fetch
/// remote. Any shortfall is a configuration error; callers stop before
/// touching the network.
pub fn infer_coordinates() -> GithubResult<RepoCoordinates> {
    let output = Command::new("git")
        .args(["remote", "-v"])
        .output()
        .context("could not run git to list remotes")?;

    if !output.status.success() {
        return Err(GithubError::Config(
            "git could not list remotes; run inside a repository or pass --owner/--repo".to_string(),
        ));
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    let url = first_fetch_url(&listing).ok_or_else(|| {
        GithubError::Config("no fetch remote configured; pass --owner/--repo".to_string())
    })?;

    log_debug(&format!("inferring repository from remote {}", url));

    parse_remote_url(url).ok_or_else(|| {
        GithubError::Config(format!(
            "could not read owner/repository from remote URL '{}'",
            url
        ))
    })
}

/// URL column of the first `(fetch)` line of `git remote -v`.
fn first_fetch_url(listing: &str) -> Option<&str> {
    listing
        .lines()
        .find(|line| line.ends_with("(fetch)"))
        .and_then(|line| line.split_whitespace().nth(1))
}

/// Split the remote URL on `/` and require exactly five segments:
/// scheme, empty, host, owner, repository. The repository keeps its
/// name with the `.git` extension stripped.
fn parse_remote_url(url: &str) -> Option<RepoCoordinates> {
    let segments: Vec<&str> = url.trim().split('/').collect();
    if segments.len() != 5 {
        return None;
    }
    let owner = segments[3];
    let repo = segments[4].trim_end_matches(".git");
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some(RepoCoordinates::new(owner, repo))
}
