use crate::error::{PortfolioError, Result};
use std::fmt;
use std::str::FromStr;
use url::Url;

const GITHUB_WEB_URL: &str = "https://github.com/";

/// Repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    owner: String,
    name: String,
}

impl Identifier {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Last path segment, used as the repository name when nothing else is known
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the metadata resource relative to the API root
    pub fn api_path(&self) -> String {
        format!("repos/{}/{}", self.owner, self.name)
    }

    /// Canonical web URL of the repository
    pub fn html_url(&self) -> Result<Url> {
        let base = Url::parse(GITHUB_WEB_URL)?;
        Ok(base.join(&format!("{}/{}", self.owner, self.name))?)
    }
}

// GitHub owner and repository names are limited to this alphabet
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

impl FromStr for Identifier {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        match parts.as_slice() {
            [owner, name] if is_valid_segment(owner) && is_valid_segment(name) => Ok(Identifier {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(PortfolioError::InvalidIdentifier(format!(
                "expected owner/name, got: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
