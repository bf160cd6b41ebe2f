use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Comment {
    pub id: u64,
    pub body: Option<String>,
    pub created_at: String,
    // Deleted accounts leave comments without an author
    pub user: Option<super::User>,
}
