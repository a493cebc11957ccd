//! CLI for Pocketbook project access checks.
//!
//! Pipeline: load store -> fetch project -> guard / validate -> classify -> print.

use clap::{Parser, Subcommand};
use pocketbook_access::{classify_error, ProjectLink};
use pocketbook_core::{AccessResult, PocketbookResult, ProjectType};
use pocketbook_store::{JsonFileSource, ProjectSource};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pocketbook", version, about = "Project access checks for Pocketbook")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a user's access to one project.
    Check {
        /// JSON export of project records.
        #[arg(short, long, env = "POCKETBOOK_STORE")]
        store: PathBuf,

        #[arg(short, long)]
        project: String,

        #[arg(short, long, env = "POCKETBOOK_USER")]
        user: String,

        /// Fail unless the project has this type (loan, splitwise, general).
        #[arg(long)]
        expect: Option<ProjectType>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Guard a page load of a `/dashboard/{type}/{id}` path.
    Guard {
        #[arg(short, long, env = "POCKETBOOK_STORE")]
        store: PathBuf,

        #[arg(long)]
        path: String,

        #[arg(short, long, env = "POCKETBOOK_USER")]
        user: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the projects a user can open, with their links.
    List {
        #[arg(short, long, env = "POCKETBOOK_STORE")]
        store: PathBuf,

        #[arg(short, long, env = "POCKETBOOK_USER")]
        user: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the canonical URL for a project type and id.
    Url {
        /// Unrecognised types resolve to the dashboard root.
        #[arg(short = 't', long = "type")]
        project_type: String,

        #[arg(long)]
        id: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedProject {
    #[serde(flatten)]
    link: ProjectLink,
    is_owner: bool,
    has_access: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            store,
            project,
            user,
            expect,
            json,
        } => {
            let source = JsonFileSource::load(&store).await?;
            tracing::info!(project = %project, user = %user, expect = ?expect, "checking access");
            let outcome =
                pocketbook_access::fetch_and_validate(&source, &project, &user, expect).await;
            report(outcome, json)
        }

        Commands::Guard {
            store,
            path,
            user,
            json,
        } => {
            let source = JsonFileSource::load(&store).await?;
            tracing::info!(path = %path, user = %user, "guarding route");
            let outcome = pocketbook_access::guard_request(&source, &path, &user).await;
            report(outcome, json)
        }

        Commands::List { store, user, json } => {
            let source = JsonFileSource::load(&store).await?;
            let projects = source.list_projects().await?;
            let results = pocketbook_access::accessible_projects(&projects, &user);
            tracing::info!(user = %user, listed = results.len(), "listing complete");

            let rows: Vec<ListedProject> = results
                .iter()
                .filter_map(|r| {
                    let record = source.get(&r.project.id)?;
                    Some(ListedProject {
                        link: pocketbook_access::project_link(record),
                        is_owner: r.project.is_owner,
                        has_access: r.has_access,
                    })
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    let role = match (row.is_owner, row.has_access) {
                        (true, _) => "owner",
                        (false, true) => "member",
                        (false, false) => "visitor",
                    };
                    println!(
                        "{:<10} {:<8} {:<32} {}",
                        row.link.display_name, role, row.link.title, row.link.url
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Url { project_type, id } => {
            if project_type.parse::<ProjectType>().is_err() {
                tracing::warn!(project_type = %project_type, "unknown project type, using dashboard root");
            }
            println!("{}", pocketbook_access::resolve_raw_url(&project_type, &id));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints the access result, or the classified failure with exit status 1.
fn report(
    outcome: PocketbookResult<AccessResult>,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match outcome {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let p = &result.project;
                println!(
                    "ok  {} \"{}\" ({}) owner={} access={}",
                    p.id, p.title, p.project_type, p.is_owner, result.has_access
                );
                println!(
                    "    {}",
                    pocketbook_access::resolve_project_url(p.project_type, &p.id)
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let classified = classify_error(&err);
            tracing::info!(error = %err, kind = %classified.kind, "request rejected");
            if json {
                println!("{}", serde_json::to_string_pretty(&classified)?);
            } else {
                eprintln!("{classified}");
            }
            Ok(ExitCode::from(1))
        }
    }
}
