use crate::error::{PortfolioError, Result};
use crate::fetcher::{fetch_all, FetchOutcome};
use crate::github::GitHubClient;
use crate::grouping::group;
use crate::identifier::Identifier;
use crate::models::DisplayGroup;
use crate::normalize::normalize;
use serde::Serialize;
use tracing::{error, info};

/// What the presentation layer receives for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ProjectsView {
    Loaded(Vec<DisplayGroup>),
    /// User-facing message; no groups are shown
    Failed(String),
}

impl ProjectsView {
    pub fn groups(&self) -> &[DisplayGroup] {
        match self {
            ProjectsView::Loaded(groups) => groups.as_slice(),
            ProjectsView::Failed(_) => &[],
        }
    }
}

/// Normalize and group already-fetched outcomes
pub fn build_groups(outcomes: Vec<FetchOutcome>) -> Result<Vec<DisplayGroup>> {
    let records = outcomes
        .into_iter()
        .map(|outcome| outcome.into_raw().map(|raw| normalize(&raw)))
        .collect::<Result<Vec<_>>>()?;

    Ok(group(records))
}

/// Run one fetch, normalize and group cycle. Nothing is cached between runs.
pub async fn load_projects(client: &GitHubClient, identifiers: &[Identifier]) -> ProjectsView {
    let outcomes = fetch_all(client, identifiers).await;

    match build_groups(outcomes) {
        Ok(groups) => {
            info!(groups = groups.len(), "Built project display groups");
            ProjectsView::Loaded(groups)
        }
        // Unreachable with validated identifiers: fallback URLs always build
        Err(e) => {
            error!(error = %e, "Failed to build project display groups");
            ProjectsView::Failed(PortfolioError::LoadFailed.to_string())
        }
    }
}
