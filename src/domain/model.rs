use crate::utils::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// One entry of the directory. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    /// 10 位數字，引擎不做比對
    pub phone_number: u64,
}

impl Advocate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fixed experience tiers over `yearsOfExperience`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Emerging,
    Established,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Emerging,
        ExperienceLevel::Established,
        ExperienceLevel::Expert,
    ];

    /// Inclusive bounds; `None` upper bound means open-ended.
    pub fn bounds(self) -> (u32, Option<u32>) {
        match self {
            ExperienceLevel::Emerging => (0, Some(3)),
            ExperienceLevel::Established => (4, Some(7)),
            ExperienceLevel::Expert => (8, None),
        }
    }

    pub fn contains(self, years: u32) -> bool {
        let (min, max) = self.bounds();
        years >= min && max.map_or(true, |max| years <= max)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Emerging => "emerging",
            ExperienceLevel::Established => "established",
            ExperienceLevel::Expert => "expert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Emerging => "Emerging (0-3 years of experience)",
            ExperienceLevel::Established => "Established (4-7 years of experience)",
            ExperienceLevel::Expert => "Expert (8+ years of experience)",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "emerging" => Ok(ExperienceLevel::Emerging),
            "established" => Ok(ExperienceLevel::Established),
            "expert" => Ok(ExperienceLevel::Expert),
            other => Err(DirectoryError::ValidationError {
                message: format!("Unknown experience level: {:?}", other),
            }),
        }
    }
}

/// Search request as it arrives on the wire. Absent and `null` fields both fall
/// back to their defaults during [`SearchRequest::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
}

impl SearchRequest {
    /// Parse a request body. Only a JSON object is accepted; serde would otherwise
    /// fill the fields positionally from an array.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let invalid = |message: String| DirectoryError::InvalidRequestBody { message };

        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| invalid(e.to_string()))?;
        if !value.is_object() {
            return Err(invalid("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = Some(specialties.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = Some(degree.into());
        self
    }

    pub fn with_experience_level(mut self, level: impl Into<String>) -> Self {
        self.experience_level = Some(level.into());
        self
    }
}

/// A fully defaulted request, ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search_term: String,
    /// Reported back verbatim as `currentPage`, even when out of range.
    pub page: i64,
    pub limit: NonZeroUsize,
    pub specialties: Vec<String>,
    pub city: String,
    pub degree: String,
    pub experience_level: Option<ExperienceLevel>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            specialties: Vec::new(),
            city: String::new(),
            degree: String::new(),
            experience_level: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    pub current_page: i64,
    pub total_pages: usize,
    pub total_count: usize,
    pub limit: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationResult {
    /// 1-based inclusive range of the rows on this page, `None` when the page is empty.
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.current_page < 1 {
            return None;
        }
        let page = usize::try_from(self.current_page).ok()?;
        let start = (page - 1).checked_mul(self.limit)?.checked_add(1)?;
        if start > self.total_count {
            return None;
        }
        let end = page.saturating_mul(self.limit).min(self.total_count);
        Some((start, end))
    }
}

/// One page of results, borrowing from the directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage<'a> {
    pub data: Vec<&'a Advocate>,
    pub pagination: PaginationResult,
}

/// Owned form of the search response body, used by clients of the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<Advocate>,
    pub pagination: PaginationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_buckets_partition_years() {
        for years in 0..=40 {
            let matching: Vec<_> = ExperienceLevel::ALL
                .into_iter()
                .filter(|level| level.contains(years))
                .collect();
            assert_eq!(matching.len(), 1, "years {} in {:?}", years, matching);
        }
        assert!(ExperienceLevel::Emerging.contains(3));
        assert!(ExperienceLevel::Established.contains(4));
        assert!(ExperienceLevel::Established.contains(7));
        assert!(ExperienceLevel::Expert.contains(8));
        assert!(ExperienceLevel::Expert.contains(u32::MAX));
    }

    #[test]
    fn test_experience_level_parsing() {
        assert_eq!("expert".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Expert);
        assert_eq!(" Emerging ".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Emerging);
        assert!("senior".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn test_search_request_defaults_from_empty_json() {
        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, SearchRequest::default());

        let request: SearchRequest =
            serde_json::from_str(r#"{"searchTerm": null, "page": 2, "unknown": true}"#).unwrap();
        assert_eq!(request.search_term, None);
        assert_eq!(request.page, Some(2));
    }

    #[test]
    fn test_search_request_rejects_wrong_types() {
        assert!(serde_json::from_str::<SearchRequest>(r#"{"page": "two"}"#).is_err());
        assert!(serde_json::from_str::<SearchRequest>(r#"{"specialties": "Bipolar"}"#).is_err());
        assert!(serde_json::from_str::<SearchRequest>("42").is_err());
    }

    #[test]
    fn test_from_json_accepts_only_objects() {
        let request = SearchRequest::from_json(br#"{"searchTerm": "jane", "page": 2}"#).unwrap();
        assert_eq!(request.search_term.as_deref(), Some("jane"));
        assert_eq!(request.page, Some(2));

        for body in [r#"["jane"]"#, "[]", r#"["jane", 2]"#, "42", "", "null"] {
            let err = SearchRequest::from_json(body.as_bytes()).unwrap_err();
            assert!(matches!(err, DirectoryError::InvalidRequestBody { .. }));
        }
    }

    #[test]
    fn test_advocate_serializes_camel_case() {
        let advocate = Advocate {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            city: "Austin".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["Bipolar".to_string()],
            years_of_experience: 5,
            phone_number: 5551234567,
        };
        let value = serde_json::to_value(&advocate).unwrap();
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["yearsOfExperience"], 5);
        assert_eq!(value["phoneNumber"], 5551234567u64);
    }

    #[test]
    fn test_showing_range() {
        let pagination = PaginationResult {
            current_page: 3,
            total_pages: 3,
            total_count: 25,
            limit: 10,
            has_next_page: false,
            has_previous_page: true,
        };
        assert_eq!(pagination.showing_range(), Some((21, 25)));

        let beyond = PaginationResult {
            current_page: 4,
            ..pagination
        };
        assert_eq!(beyond.showing_range(), None);

        let before = PaginationResult {
            current_page: 0,
            ..pagination
        };
        assert_eq!(before.showing_range(), None);
    }
}
