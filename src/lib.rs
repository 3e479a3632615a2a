pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DirectoryConfig;

pub use adapters::source::{FileSource, HttpSource};
pub use crate::core::{directory::Directory, search_engine::evaluate};
pub use domain::model::{Advocate, ExperienceLevel, PaginationResult, SearchPage, SearchQuery, SearchRequest, SearchResponse};
pub use utils::error::{DirectoryError, Result};
