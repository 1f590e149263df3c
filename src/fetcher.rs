use crate::error::Result;
use crate::github::GitHubClient;
use crate::identifier::Identifier;
use crate::types::RawMetadata;
use futures::future::join_all;
use tracing::{info, warn};

/// Description shown on a card whose metadata could not be fetched
pub const FALLBACK_DESCRIPTION: &str = "details failed to load";

/// Result of fetching one identifier
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Ok(RawMetadata),
    Fallback {
        identifier: Identifier,
        reason: String,
    },
}

impl FetchOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }

    /// Metadata to display, synthesizing a placeholder for failed fetches
    pub fn into_raw(self) -> Result<RawMetadata> {
        match self {
            FetchOutcome::Ok(metadata) => Ok(metadata),
            FetchOutcome::Fallback { identifier, .. } => Ok(RawMetadata {
                name: identifier.name().to_string(),
                description: Some(FALLBACK_DESCRIPTION.to_string()),
                html_url: identifier.html_url()?.to_string(),
                topics: Some(Vec::new()),
                language: None,
                stargazers_count: 0,
                forks_count: 0,
            }),
        }
    }
}

/// Counts of genuine and synthesized outcomes in one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub fetched: usize,
    pub fallbacks: usize,
}

impl FetchSummary {
    pub fn from_outcomes(outcomes: &[FetchOutcome]) -> Self {
        let fallbacks = outcomes.iter().filter(|o| o.is_fallback()).count();
        FetchSummary {
            fetched: outcomes.len() - fallbacks,
            fallbacks,
        }
    }
}

async fn fetch_one(client: &GitHubClient, identifier: &Identifier) -> FetchOutcome {
    match client.get_repository(identifier).await {
        Ok(metadata) => FetchOutcome::Ok(metadata),
        Err(e) => {
            warn!(identifier = %identifier, error = %e, "Failed to fetch repository metadata");
            FetchOutcome::Fallback {
                identifier: identifier.clone(),
                reason: e.to_string(),
            }
        }
    }
}

/// Fetch every identifier concurrently.
///
/// The returned outcomes line up with `identifiers` one-to-one regardless of
/// the order in which responses arrive. Individual failures become
/// [`FetchOutcome::Fallback`] and never abort the others.
pub async fn fetch_all(client: &GitHubClient, identifiers: &[Identifier]) -> Vec<FetchOutcome> {
    let outcomes = join_all(identifiers.iter().map(|id| fetch_one(client, id))).await;

    let summary = FetchSummary::from_outcomes(&outcomes);
    info!(
        fetched = summary.fetched,
        fallbacks = summary.fallbacks,
        "Fetched repository metadata"
    );

    outcomes
}
