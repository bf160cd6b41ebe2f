use serde::{Deserialize, Serialize};

/// Payload for creating an issue.
#[derive(Debug, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}

/// Payload for creating a comment on an item.
#[derive(Debug, Serialize)]
pub struct NewComment {
    pub body: String,
}

/// The field read back from a 201 response to an issue creation.
#[derive(Debug, Deserialize)]
pub struct CreatedItem {
    pub number: u64,
}

/// The field read back from a 201 response to a comment creation.
#[derive(Debug, Deserialize)]
pub struct CreatedComment {
    pub id: u64,
}

/// Basic-auth credentials, collected interactively per invocation.
/// Never persisted and never logged.
pub struct Credentials {
    pub username: String,
    pub password: String,
}
