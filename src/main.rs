use std::process;

use clap::{Arg, ArgMatches, Command};
use colored::*;

use github_tools::cli_context::CliContext;
use github_tools::commands::{comments, items, post};
use github_tools::error::{GithubError, GithubResult};
use github_tools::logging::{init_logging, log_error};
use github_tools::models::{ItemKind, ItemQuery};

#[tokio::main]
async fn main() {
    // Logging is best-effort; the tool works without a log file.
    let _ = init_logging();

    let app = Command::new("ghtools")
        .about("GitHub project tools - read and post issues, pull requests and comments from the command line")
        .version("1.0.0")
        .arg(
            Arg::new("item")
                .value_name("ITEM")
                .help("The item to run against: 'issues' (project issues) or 'pulls' (pull requests)")
                .value_parser(["issues", "pulls"])
                .default_value("issues")
                .index(1)
        )
        .arg(
            Arg::new("owner")
                .long("owner")
                .short('o')
                .value_name("OWNER")
                .help("The repository owner, as shown in the URL")
        )
        .arg(
            Arg::new("repo")
                .long("repo")
                .short('r')
                .value_name("REPO")
                .help("The repository name, as shown in the URL")
        )
        .arg(
            Arg::new("number")
                .long("number")
                .short('n')
                .value_name("NUMBER")
                .help("Query the item with this number")
                .value_parser(clap::value_parser!(u64))
        )
        .arg(
            Arg::new("comments")
                .long("comments")
                .short('c')
                .help("Query the comments for an item")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("post")
                .long("post")
                .short('p')
                .help("Post a new issue or comment")
                .action(clap::ArgAction::SetTrue)
        );

    let matches = app.get_matches();

    if let Err(e) = run(&matches).await {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

async fn run(matches: &ArgMatches) -> GithubResult<()> {
    let kind: ItemKind = matches
        .get_one::<String>("item")
        .map(|s| s.as_str())
        .unwrap_or("issues")
        .parse()
        .map_err(GithubError::Config)?;

    let query = ItemQuery::new(kind)
        .with_number(matches.get_one::<u64>("number").copied())
        .with_comments(matches.get_flag("comments"));

    // Coordinates resolve before anything touches the network.
    let context = CliContext::resolve(
        matches.get_one::<String>("owner").map(|s| s.as_str()),
        matches.get_one::<String>("repo").map(|s| s.as_str()),
    )?;

    if matches.get_flag("post") {
        post::handle_post(&context, &query).await
    } else if query.comments {
        comments::handle_comments(&context, &query).await
    } else {
        items::handle_items(&context, &query).await
    }
}
