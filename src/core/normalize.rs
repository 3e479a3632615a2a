use crate::domain::model::{ExperienceLevel, SearchQuery, SearchRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
use std::num::NonZeroUsize;

impl SearchRequest {
    /// Apply the documented defaults. Never fails: a non-positive `limit` falls back
    /// to the default and an unrecognized experience level disables that filter.
    pub fn normalize(&self) -> SearchQuery {
        let limit = self
            .limit
            .filter(|limit| *limit > 0)
            .and_then(|limit| usize::try_from(limit).ok())
            .and_then(NonZeroUsize::new)
            .unwrap_or(DEFAULT_LIMIT);

        SearchQuery {
            search_term: self.search_term.clone().unwrap_or_default(),
            page: self.page.unwrap_or(DEFAULT_PAGE),
            limit,
            specialties: self.specialties.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            degree: self.degree.clone().unwrap_or_default(),
            experience_level: parse_experience_level(self.experience_level.as_deref()),
        }
    }
}

fn parse_experience_level(raw: Option<&str>) -> Option<ExperienceLevel> {
    let raw = raw.filter(|value| !value.is_empty())?;
    match raw.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            // 未知等級視同未篩選
            tracing::warn!("Ignoring unknown experience level filter: {:?}", raw);
            None
        }
    }
}
