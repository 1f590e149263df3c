use crate::error::Result;
use crate::github::API_BASE_URL;
use crate::identifier::Identifier;
use clap::Parser;

/// Repositories shown on the portfolio, in display order
pub const DEFAULT_REPOSITORIES: &[&str] = &[
    "chari00001/customizable-nextjs-template",
    "chari00001/redit-frontend",
    "chari00001/AlisWeb-Vue",
    "chari00001/Monilas-IMS-Backend",
    "chari00001/Monilas-IMS-Frontend",
    "chari00001/BookStore-Java-Backend",
    "chari00001/BookStore-Next-Frontend",
    "chari00001/HepsiSurda-Backend",
    "chari00001/HepsiSurda-Frontend",
    "chari00001/KTUFacto",
];

#[derive(Parser)]
#[command(name = "portfolio-projects")]
#[command(about = "Portfolio Projects - Fetches GitHub repositories and pairs frontend/backend halves")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub token sent as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub API base URL
    #[arg(long, default_value = API_BASE_URL)]
    pub api_url: String,

    /// Repository to include (owner/name); replaces the built-in list when given
    #[arg(long = "repo")]
    pub repos: Vec<String>,

    /// Print display groups as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn identifiers(&self) -> Result<Vec<Identifier>> {
        if self.repos.is_empty() {
            default_identifiers()
        } else {
            self.repos.iter().map(|r| r.parse()).collect()
        }
    }
}

pub fn default_identifiers() -> Result<Vec<Identifier>> {
    DEFAULT_REPOSITORIES.iter().map(|r| r.parse()).collect()
}
