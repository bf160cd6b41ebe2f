use std::io::{self, BufRead, Write};

use colored::*;

use crate::cli_context::CliContext;
use crate::error::{GithubError, GithubResult};
use crate::models::{Credentials, ItemKind, ItemQuery, NewComment, NewIssue};

/// Create an issue, or a comment on an existing item when the comments
/// flag is set. All input is collected interactively; credentials are
/// asked for last and never stored.
pub async fn handle_post(context: &CliContext, query: &ItemQuery) -> GithubResult<()> {
    if query.comments {
        let number = query.number.ok_or_else(|| {
            GithubError::MissingInput(
                "an item number is required to post a comment; use -n/--number".to_string(),
            )
        })?;
        post_comment(context, query.kind, number).await
    } else {
        post_issue(context, query.kind).await
    }
}

async fn post_issue(context: &CliContext, kind: ItemKind) -> GithubResult<()> {
    let title = prompt_line("Issue Title: ")?;
    println!("Issue Text: (empty line to finish)");
    let body = read_body_until_blank(&mut io::stdin().lock())?;
    let credentials = prompt_credentials()?;

    println!("\nPosting data...");
    let created = context
        .client()
        .create_issue(context.coords(), kind, &NewIssue { title, body }, &credentials)
        .await?;

    println!(
        "{} Issue #{} created.",
        "✅".green(),
        created.number.to_string().blue().bold()
    );
    Ok(())
}

async fn post_comment(context: &CliContext, kind: ItemKind, number: u64) -> GithubResult<()> {
    println!("Comment Text: (empty line to finish)");
    let body = read_body_until_blank(&mut io::stdin().lock())?;
    let credentials = prompt_credentials()?;

    println!("\nPosting data...");
    let created = context
        .client()
        .create_comment(context.coords(), kind, number, &NewComment { body }, &credentials)
        .await?;

    println!(
        "{} Comment #{} added to {} #{}.",
        "✅".green(),
        created.id.to_string().blue(),
        kind.noun(),
        number
    );
    Ok(())
}

fn prompt_line(prompt: &str) -> GithubResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_credentials() -> GithubResult<Credentials> {
    println!("Login credentials to GitHub:");
    let username = prompt_line("Login: ")?;
    let password = rpassword::prompt_password("Password: ")?;
    Ok(Credentials { username, password })
}

/// Collect body lines until the first empty line (or end of input).
/// Each line is trimmed; the result joins them with newlines.
fn read_body_until_blank<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut body = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        body.push(trimmed.to_string());
    }
    Ok(body.join("\n"))
}
