use crate::models::{ProjectRecord, Role};
use crate::types::RawMetadata;

/// Description used when the repository has none (or an empty one)
pub const NO_DESCRIPTION: &str = "no description";

/// Title with its last `-` segment removed, or the whole title if it has no dash
pub fn base_name(title: &str) -> &str {
    match title.rfind('-') {
        Some(idx) => &title[..idx],
        None => title,
    }
}

fn technologies(raw: &RawMetadata) -> Vec<String> {
    match (&raw.topics, &raw.language) {
        (Some(topics), _) if !topics.is_empty() => topics.clone(),
        (_, Some(language)) => vec![language.clone()],
        _ => Vec::new(),
    }
}

/// Map remote metadata (genuine or fallback) onto a project card
pub fn normalize(raw: &RawMetadata) -> ProjectRecord {
    let description = raw
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    ProjectRecord {
        title: raw.name.clone(),
        description,
        technologies: technologies(raw),
        link: raw.html_url.clone(),
        github: raw.html_url.clone(),
        stars: raw.stargazers_count,
        forks: raw.forks_count,
        base_name: base_name(&raw.name).to_string(),
        role: Role::from_title(&raw.name),
    }
}
