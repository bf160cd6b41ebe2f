pub mod github_client;

pub use github_client::{comments_url, item_url, GithubClient};
