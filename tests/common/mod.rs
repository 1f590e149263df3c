#![allow(dead_code)]

use httpmock::MockServer;
use portfolio_projects::github::GitHubClient;
use portfolio_projects::models::{ProjectRecord, Role};
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test_token";

pub struct TestContext {
    pub server: MockServer,
    pub client: GitHubClient,
}

impl TestContext {
    pub async fn new() -> anyhow::Result<Self> {
        let server = MockServer::start_async().await;
        let client = GitHubClient::with_base_url(TEST_TOKEN.to_string(), &server.base_url())?;
        Ok(TestContext { server, client })
    }
}

/// Repository payload shaped like the GitHub API response
pub fn repo_json(owner: &str, name: &str) -> Value {
    json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "description": format!("{} description", name),
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "topics": ["react", "typescript"],
        "language": "TypeScript",
        "stargazers_count": 12,
        "forks_count": 3,
        "private": false
    })
}

pub fn record(title: &str) -> ProjectRecord {
    let base_name = match title.rfind('-') {
        Some(idx) => title[..idx].to_string(),
        None => title.to_string(),
    };
    ProjectRecord {
        title: title.to_string(),
        description: String::new(),
        technologies: Vec::new(),
        link: format!("https://github.com/owner/{}", title),
        github: format!("https://github.com/owner/{}", title),
        stars: 0,
        forks: 0,
        base_name,
        role: Role::from_title(title),
    }
}
