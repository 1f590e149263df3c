use clap::Parser;
use colored::*;
use portfolio_projects::cli::Cli;
use portfolio_projects::error::{PortfolioError, Result};
use portfolio_projects::github::GitHubClient;
use portfolio_projects::models::{DisplayGroup, ProjectRecord};
use portfolio_projects::{load_projects, ProjectsView};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.token.trim().is_empty() {
        return Err(PortfolioError::EnvError("GITHUB_TOKEN is empty".to_string()));
    }

    let identifiers = cli.identifiers()?;
    let client = GitHubClient::with_base_url(cli.token.clone(), &cli.api_url)?;

    let view = load_projects(&client, &identifiers).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    match view {
        ProjectsView::Loaded(groups) => {
            println!("{}", "Projects".bold().green());
            println!("{}\n", "=".repeat(50).dimmed());
            for group in &groups {
                render_group(group);
            }
        }
        ProjectsView::Failed(message) => {
            eprintln!("{}", message.red());
        }
    }

    Ok(())
}

fn render_group(group: &DisplayGroup) {
    for record in group.records() {
        render_record(record);
    }
    println!("{}", "-".repeat(50).dimmed());
}

fn render_record(record: &ProjectRecord) {
    match record.role.label() {
        Some(label) => println!("{} {}", record.title.bold(), format!("({})", label).dimmed()),
        None => println!("{}", record.title.bold()),
    }
    println!("  {}", record.description);
    if !record.technologies.is_empty() {
        println!("  {}", record.technologies.join(", ").cyan());
    }
    println!("  ★ {}  ⑂ {}  {}", record.stars, record.forks, record.link.underline());
}
