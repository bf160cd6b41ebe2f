use crate::cli_context::CliContext;
use crate::error::GithubResult;
use crate::formatting::issues::print_items;
use crate::models::ItemQuery;

/// List the queried collection, or show one item when a number was
/// given. List output is sorted ascending by number before rendering.
pub async fn handle_items(context: &CliContext, query: &ItemQuery) -> GithubResult<()> {
    let payload = context.client().fetch_items(context.coords(), query).await?;
    print_items(query.kind, payload);
    Ok(())
}
