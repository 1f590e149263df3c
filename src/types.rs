use serde::{Deserialize, Deserializer, Serialize};

// GitHub API response structures

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`.
///
/// Only the fields read by the pipeline are modelled; everything beyond
/// `name` may be missing or null in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks_count: u32,
}

// `default` alone only covers a missing key, not an explicit null
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
