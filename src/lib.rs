pub mod cli;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod grouping;
pub mod identifier;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use error::{PortfolioError, Result};
pub use pipeline::{load_projects, ProjectsView};
