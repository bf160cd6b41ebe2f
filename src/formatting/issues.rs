use colored::*;

use super::fold::format_body;
use super::utils::format_timestamp;
use crate::models::{Comment, Issue, ItemKind, ItemPayload};

const NO_MILESTONE: &str = "No milestone set.";

fn format_state(state: &str) -> ColoredString {
    match state {
        "open" => state.green(),
        "closed" => state.red(),
        _ => state.normal(),
    }
}

fn heading(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Issues => "Issue",
        ItemKind::Pulls => "Pull request",
    }
}

/// Label names flattened to displayable strings, with a placeholder for
/// labels the API returns without a name.
fn label_names(issue: &Issue) -> Vec<String> {
    issue
        .labels
        .iter()
        .map(|l| l.name.clone().unwrap_or_else(|| "(unnamed)".to_string()))
        .collect()
}

pub fn format_issue(kind: ItemKind, issue: &Issue) -> String {
    let milestone = issue
        .milestone
        .as_ref()
        .and_then(|m| m.title.clone())
        .unwrap_or_else(|| NO_MILESTONE.to_string());

    let labels = label_names(issue);
    let labels = if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    };

    format!(
        "\n{} #{}: ({}) {}\n\n{}\n\nLabels: {}\nMilestone: {}\nComments: {}\n--------",
        heading(kind),
        issue.number.to_string().blue().bold(),
        format_state(&issue.state),
        issue.title.bold(),
        format_body(issue.body.as_deref().unwrap_or("")),
        labels,
        milestone,
        issue.comments,
    )
}

pub fn format_comment(comment: &Comment) -> String {
    let login = comment
        .user
        .as_ref()
        .map(|u| u.login.as_str())
        .unwrap_or("unknown");

    format!(
        "\nComment #{}: {} @ {}\n\n{}\n--------",
        comment.id.to_string().blue(),
        login.cyan(),
        format_timestamp(&comment.created_at).dimmed(),
        format_body(comment.body.as_deref().unwrap_or("")),
    )
}

/// Stable ascending sort on the item number.
pub fn sort_by_number(items: &mut [Issue]) {
    items.sort_by_key(|issue| issue.number);
}

pub fn print_items(kind: ItemKind, payload: ItemPayload) {
    match payload {
        ItemPayload::Single(issue) => println!("{}", format_issue(kind, &issue)),
        ItemPayload::List(mut issues) => {
            if issues.is_empty() {
                println!("{}", format!("No {} found.", kind).dimmed());
                return;
            }
            sort_by_number(&mut issues);
            for issue in &issues {
                println!("{}", format_issue(kind, issue));
            }
        }
    }
}

pub fn print_comments_for_item(kind: ItemKind, issue: &Issue, comments: &[Comment]) {
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "Comments for {} #{}: {}\n\n{}",
        kind.noun(),
        issue.number.to_string().blue().bold(),
        issue.title.bold(),
        format_body(issue.body.as_deref().unwrap_or("")),
    );
    println!("{}", "─".repeat(16).dimmed());

    for comment in comments {
        println!("{}", format_comment(comment));
    }
    println!("\nTotal comments: {}", comments.len());
}
