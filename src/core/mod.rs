pub mod directory;
pub mod normalize;
pub mod pagination;
pub mod search_engine;

pub use crate::domain::model::{
    Advocate, ExperienceLevel, PaginationResult, SearchPage, SearchQuery, SearchRequest,
    SearchResponse,
};
pub use crate::domain::ports::{AdvocateSource, ConfigProvider};
pub use crate::utils::error::Result;
