use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("request failed ({}): {}", .status.as_u16(), status_message(.status))]
    RequestFailed { status: StatusCode },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GithubResult<T> = Result<T, GithubError>;

/// Human-readable diagnostic for a non-2xx response, keyed by status code.
fn status_message(status: &StatusCode) -> String {
    match status.as_u16() {
        401 => "Failed to authenticate.".to_string(),
        403 => "Forbidden access due to too many authentication errors.".to_string(),
        404 => "The requested item was not found.".to_string(),
        _ => "Unknown error.".to_string(),
    }
}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> GithubResult<T>;
    fn with_context<F>(self, f: F) -> GithubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> GithubResult<T> {
        self.map_err(|e| GithubError::Config(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> GithubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GithubError::Config(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> GithubResult<T> {
        self.ok_or_else(|| GithubError::Config(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> GithubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| GithubError::Config(f()))
    }
}

#[macro_export]
macro_rules! github_error {
    ($error_type:ident, $msg:expr) => {
        GithubError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        GithubError::$error_type(format!($fmt, $($arg)*))
    };
}
