use reqwest::StatusCode;

use crate::error::{ErrorContext, GithubError};
use crate::github_error;

#[test]
fn test_not_found_names_the_problem() {
    let error = GithubError::RequestFailed {
        status: StatusCode::NOT_FOUND,
    };
    let message = error.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("not found"));
}

#[test]
fn test_authentication_failures() {
    let unauthorized = GithubError::RequestFailed {
        status: StatusCode::UNAUTHORIZED,
    };
    assert!(unauthorized.to_string().contains("Failed to authenticate"));

    let forbidden = GithubError::RequestFailed {
        status: StatusCode::FORBIDDEN,
    };
    assert!(forbidden
        .to_string()
        .contains("too many authentication errors"));
}

#[test]
fn test_unexpected_status_is_generic() {
    let error = GithubError::RequestFailed {
        status: StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = error.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("Unknown error"));
}

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let github_result = result.context("Failed to read config file");
    match github_result {
        Err(GithubError::Config(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected GithubError::Config"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("owner not resolved");

    match result {
        Err(GithubError::Config(msg)) => assert_eq!(msg, "owner not resolved"),
        _ => panic!("Expected GithubError::Config"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let github_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

    match github_result {
        Err(GithubError::Config(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected GithubError::Config"),
    }
}

#[test]
fn test_github_error_macro() {
    let error = github_error!(MissingInput, "a number is required");
    match error {
        GithubError::MissingInput(msg) => assert_eq!(msg, "a number is required"),
        _ => panic!("Expected GithubError::MissingInput"),
    }

    let error = github_error!(Config, "unresolved: {}", "owner");
    match error {
        GithubError::Config(msg) => assert_eq!(msg, "unresolved: owner"),
        _ => panic!("Expected GithubError::Config"),
    }
}
