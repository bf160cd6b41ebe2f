use serde::{Deserialize, Serialize};

/// An issue or pull request as returned by the REST API, reduced to the
/// fields the tool renders.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub comments: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Label {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Milestone {
    pub title: Option<String>,
}

/// A GET against the item endpoint yields one item when a number was
/// given and a list otherwise.
#[derive(Debug)]
pub enum ItemPayload {
    Single(Issue),
    List(Vec<Issue>),
}
