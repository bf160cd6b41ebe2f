use std::fmt;

/// The kind of item a query targets, matching the REST path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Issues,
    Pulls,
}

impl ItemKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ItemKind::Issues => "issues",
            ItemKind::Pulls => "pulls",
        }
    }

    /// Singular noun for user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            ItemKind::Issues => "issue",
            ItemKind::Pulls => "pull request",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "issues" => Ok(ItemKind::Issues),
            "pulls" => Ok(ItemKind::Pulls),
            other => Err(format!("unknown item kind '{}'", other)),
        }
    }
}

/// What one invocation asks for: which endpoint, optionally which item,
/// and whether the comments sub-resource is wanted.
#[derive(Debug, Clone)]
pub struct ItemQuery {
    pub kind: ItemKind,
    pub number: Option<u64>,
    pub comments: bool,
}

impl ItemQuery {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            number: None,
            comments: false,
        }
    }

    pub fn with_number(mut self, number: Option<u64>) -> Self {
        self.number = number;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }
}
