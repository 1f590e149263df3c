use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Which half of a split project a repository is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Frontend,
    Backend,
    None,
}

impl Role {
    /// Derive the role from a repository title's suffix
    pub fn from_title(title: &str) -> Self {
        if title.ends_with("Frontend") {
            Role::Frontend
        } else if title.ends_with("Backend") {
            Role::Backend
        } else {
            Role::None
        }
    }

    /// The role a pairing partner must have, if any
    pub fn counterpart(self) -> Option<Role> {
        match self {
            Role::Frontend => Some(Role::Backend),
            Role::Backend => Some(Role::Frontend),
            Role::None => None,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Role::Frontend => Some("Frontend"),
            Role::Backend => Some("Backend"),
            Role::None => None,
        }
    }
}

/// Normalized project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub github: String,
    pub stars: u32,
    pub forks: u32,
    pub base_name: String,
    pub role: Role,
}

/// One or two records rendered side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayGroup {
    Single(ProjectRecord),
    /// Frontend/backend halves sharing a base name, in encounter order
    Pair(ProjectRecord, ProjectRecord),
}

impl DisplayGroup {
    pub fn records(&self) -> Vec<&ProjectRecord> {
        match self {
            DisplayGroup::Single(record) => vec![record],
            DisplayGroup::Pair(first, second) => vec![first, second],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DisplayGroup::Single(_) => 1,
            DisplayGroup::Pair(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_records(self) -> Vec<ProjectRecord> {
        match self {
            DisplayGroup::Single(record) => vec![record],
            DisplayGroup::Pair(first, second) => vec![first, second],
        }
    }
}

// Serialized as a plain array so consumers see `[record]` or `[record, record]`
impl Serialize for DisplayGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for record in self.records() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}
