use crate::cli_context::CliContext;
use crate::error::GithubResult;
use crate::formatting::issues::{print_comments_for_item, sort_by_number};
use crate::models::{ItemPayload, ItemQuery};

/// Show comments for one item, or for every item in the collection
/// when no number was given.
pub async fn handle_comments(context: &CliContext, query: &ItemQuery) -> GithubResult<()> {
    let client = context.client();
    let coords = context.coords();

    match client.fetch_items(coords, query).await? {
        ItemPayload::Single(issue) => {
            let comments = client.fetch_comments(coords, query.kind, issue.number).await?;
            print_comments_for_item(query.kind, &issue, &comments);
        }
        ItemPayload::List(mut issues) => {
            sort_by_number(&mut issues);
            for issue in &issues {
                let comments = client.fetch_comments(coords, query.kind, issue.number).await?;
                print_comments_for_item(query.kind, issue, &comments);
            }
        }
    }

    Ok(())
}
