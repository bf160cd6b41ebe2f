use serde_json::json;

use github_tools::client::{comments_url, item_url};
use github_tools::formatting::{fold, format_body, format_issue, normalize_whitespace, sort_by_number};
use github_tools::models::{Comment, Issue, ItemKind, ItemQuery, RepoCoordinates};

#[test]
fn test_fold_empty_string() {
    assert_eq!(fold("", 72), vec![String::new()]);
}

#[test]
fn test_fold_rejoins_to_input() {
    let input = "a body of text that should survive folding at any width without loss";
    for width in [5usize, 9, 24, 72] {
        assert_eq!(fold(input, width).join(" "), input);
    }
}

#[test]
fn test_endpoint_urls() {
    let coords = RepoCoordinates::new("octocat", "hello-world");

    assert_eq!(
        item_url(&coords, ItemKind::Issues, None),
        "https://api.github.com/repos/octocat/hello-world/issues"
    );
    assert_eq!(
        item_url(&coords, ItemKind::Pulls, Some(7)),
        "https://api.github.com/repos/octocat/hello-world/pulls/7"
    );
    assert_eq!(
        comments_url(&coords, ItemKind::Issues, 42),
        "https://api.github.com/repos/octocat/hello-world/issues/42/comments"
    );
}

#[test]
fn test_query_defaults() {
    let query = ItemQuery::new(ItemKind::Issues);
    assert!(query.number.is_none());
    assert!(!query.comments);
}

#[test]
fn test_issue_listing_parses_sorts_and_renders() {
    colored::control::set_override(false);

    let payload = json!([
        {
            "number": 5,
            "title": "Trailing whitespace in output",
            "state": "open",
            "body": "Lines written by the renderer keep their trailing spaces.",
            "labels": [{"name": "bug"}],
            "milestone": null,
            "comments": 1
        },
        {
            "number": 1,
            "title": "Add a --version flag",
            "state": "closed",
            "body": null,
            "labels": [],
            "milestone": {"title": "v1.0"},
            "comments": 0
        },
        {
            "number": 3,
            "title": "Document the comments flag",
            "state": "open",
            "body": "The README never mentions -c.",
            "labels": [{"name": "docs"}],
            "milestone": null,
            "comments": 4
        }
    ]);

    let mut issues: Vec<Issue> = serde_json::from_value(payload).unwrap();
    sort_by_number(&mut issues);

    let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 3, 5]);

    let rendered = format_issue(ItemKind::Issues, &issues[0]);
    assert!(rendered.contains("Issue #1: (closed) Add a --version flag"));
    assert!(rendered.contains("Milestone: v1.0"));

    let rendered = format_issue(ItemKind::Issues, &issues[1]);
    assert!(rendered.contains("Milestone: No milestone set."));
}

#[test]
fn test_comment_parses_at_the_boundary() {
    let comment: Comment = serde_json::from_value(json!({
        "id": 77,
        "body": "A   body\nwith\n\nragged   whitespace.",
        "created_at": "2020-02-02T02:02:02Z",
        "user": {"login": "someone"}
    }))
    .unwrap();

    let body = format_body(comment.body.as_deref().unwrap());
    assert_eq!(body, "    A body with ragged whitespace.");
}

#[test]
fn test_normalize_collapses_all_whitespace() {
    assert_eq!(normalize_whitespace("a\n\n  b\tc"), "a b c");
}
