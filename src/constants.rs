pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const CONFIG_FILE: &str = ".github-tools-config.json";

pub const APP_USER_AGENT: &str = concat!("github-tools/", env!("CARGO_PKG_VERSION"));
pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Body rendering
pub const FOLD_WIDTH: usize = 72;
pub const BODY_INDENT: usize = 4;
