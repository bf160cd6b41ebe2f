pub mod fold;
pub mod issues;
pub mod utils;

pub use fold::{fold, format_body, normalize_whitespace};
pub use issues::{format_comment, format_issue, print_comments_for_item, print_items, sort_by_number};
pub use utils::{format_timestamp, truncate};
