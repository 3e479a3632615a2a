use crate::core::search_engine::evaluate;
use crate::core::{Advocate, AdvocateSource, Result, SearchPage, SearchQuery};
use crate::utils::error::DirectoryError;
use crate::utils::validation::{validate_non_empty_string, validate_phone_number};
use std::sync::Arc;

/// The process-wide advocate collection. Loaded once, never mutated, cheap to clone.
#[derive(Debug, Clone)]
pub struct Directory {
    advocates: Arc<[Advocate]>,
}

impl Directory {
    pub fn new(advocates: Vec<Advocate>) -> Result<Self> {
        for (index, advocate) in advocates.iter().enumerate() {
            validate_advocate(advocate).map_err(|e| DirectoryError::ValidationError {
                message: format!("advocate #{}: {}", index, e),
            })?;
        }

        Ok(Self {
            advocates: advocates.into(),
        })
    }

    pub async fn load<S: AdvocateSource + ?Sized>(source: &S) -> Result<Self> {
        tracing::info!("📥 Loading advocates from {}", source.describe());
        let advocates = source.load().await?;
        let directory = Self::new(advocates)?;
        tracing::info!("✅ Loaded {} advocates", directory.len());
        Ok(directory)
    }

    pub fn advocates(&self) -> &[Advocate] {
        &self.advocates
    }

    pub fn len(&self) -> usize {
        self.advocates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advocates.is_empty()
    }

    pub fn search(&self, query: &SearchQuery) -> SearchPage<'_> {
        evaluate(&self.advocates, query)
    }
}

fn validate_advocate(advocate: &Advocate) -> Result<()> {
    validate_non_empty_string("firstName", &advocate.first_name)?;
    validate_non_empty_string("lastName", &advocate.last_name)?;
    validate_phone_number("phoneNumber", advocate.phone_number)?;
    Ok(())
}
