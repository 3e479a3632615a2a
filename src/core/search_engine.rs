//! Filter and paginate the advocate directory.
//!
//! Every string comparison is case-insensitive substring containment. Case folding
//! uses `str::to_lowercase` (Unicode default lowercase mapping, locale independent),
//! so locale-specific rules such as Turkish dotted/dotless `i` are not applied.
//! Phone numbers are never matched.

use crate::core::pagination::paginate;
use crate::domain::model::{Advocate, ExperienceLevel, SearchPage, SearchQuery};

/// Run a query over `records`, preserving their order.
pub fn evaluate<'a>(records: &'a [Advocate], query: &SearchQuery) -> SearchPage<'a> {
    let criteria = Criteria::from_query(query);

    let mut matched: Vec<&Advocate> = records
        .iter()
        .filter(|advocate| criteria.matches(advocate))
        .collect();

    let (window, pagination) = paginate(matched.len(), query.page, query.limit);
    let data = matched.drain(window).collect();

    SearchPage { data, pagination }
}

/// Filter values folded to lowercase once per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    search_term: String,
    city: String,
    degree: String,
    specialties: Vec<String>,
    experience_level: Option<ExperienceLevel>,
}

impl Criteria {
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            search_term: query.search_term.to_lowercase(),
            city: query.city.to_lowercase(),
            degree: query.degree.to_lowercase(),
            specialties: query.specialties.iter().map(|s| s.to_lowercase()).collect(),
            experience_level: query.experience_level,
        }
    }

    pub fn matches(&self, advocate: &Advocate) -> bool {
        self.matches_search_term(advocate)
            && self.matches_city(advocate)
            && self.matches_degree(advocate)
            && self.matches_specialties(advocate)
            && self.matches_experience(advocate)
    }

    /// Free text over names, city, degree, specialties and the decimal digits of
    /// `yearsOfExperience` (so "1" matches 1, 10 and 21).
    pub fn matches_search_term(&self, advocate: &Advocate) -> bool {
        let term = self.search_term.as_str();
        term.is_empty()
            || contains_folded(&advocate.first_name, term)
            || contains_folded(&advocate.last_name, term)
            || contains_folded(&advocate.city, term)
            || contains_folded(&advocate.degree, term)
            || advocate
                .specialties
                .iter()
                .any(|specialty| contains_folded(specialty, term))
            || advocate.years_of_experience.to_string().contains(term)
    }

    pub fn matches_city(&self, advocate: &Advocate) -> bool {
        self.city.is_empty() || contains_folded(&advocate.city, &self.city)
    }

    pub fn matches_degree(&self, advocate: &Advocate) -> bool {
        self.degree.is_empty() || contains_folded(&advocate.degree, &self.degree)
    }

    /// Each requested specialty must be contained in at least one of the advocate's.
    pub fn matches_specialties(&self, advocate: &Advocate) -> bool {
        self.specialties.iter().all(|wanted| {
            advocate
                .specialties
                .iter()
                .any(|specialty| contains_folded(specialty, wanted))
        })
    }

    pub fn matches_experience(&self, advocate: &Advocate) -> bool {
        self.experience_level
            .map_or(true, |level| level.contains(advocate.years_of_experience))
    }
}

/// `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SearchRequest;

    fn advocate(first: &str, last: &str, city: &str, degree: &str, specialties: &[&str], years: u32) -> Advocate {
        Advocate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            years_of_experience: years,
            phone_number: 5550001111,
        }
    }

    fn names(page: &SearchPage<'_>) -> Vec<String> {
        page.data.iter().map(|a| a.first_name.clone()).collect()
    }

    fn sample() -> Vec<Advocate> {
        vec![
            advocate("Jane", "Doe", "Austin", "MD", &["Bipolar", "LGBTQ"], 5),
            advocate("John", "Smith", "New York", "PhD", &["Trauma & PTSD"], 12),
            advocate("Alice", "Johnson", "Los Angeles", "MSW", &["Eating disorders", "Coaching"], 1),
            advocate("Bob", "Stone", "Austin", "PhD", &["Life coaching"], 21),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let records = sample();
        let page = evaluate(&records, &SearchQuery::default());
        assert_eq!(names(&page), vec!["Jane", "John", "Alice", "Bob"]);
        assert_eq!(page.pagination.total_count, 4);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_search_term_matches_each_field() {
        let records = sample();
        let search = |term: &str| names(&evaluate(&records, &SearchRequest::default().with_search_term(term).normalize()));

        assert_eq!(search("JANE"), vec!["Jane"]);
        assert_eq!(search("johnson"), vec!["Alice"]);
        assert_eq!(search("john"), vec!["John", "Alice"]);
        assert_eq!(search("york"), vec!["John"]);
        assert_eq!(search("msw"), vec!["Alice"]);
        assert_eq!(search("ptsd"), vec!["John"]);
    }

    #[test]
    fn test_search_term_matches_experience_digits() {
        let records = sample();
        let query = SearchRequest::default().with_search_term("1").normalize();
        // 12, 1 and 21 all contain the digit
        assert_eq!(names(&evaluate(&records, &query)), vec!["John", "Alice", "Bob"]);
    }

    #[test]
    fn test_phone_number_is_not_searchable() {
        let records = sample();
        let query = SearchRequest::default().with_search_term("5550001111").normalize();
        assert!(evaluate(&records, &query).data.is_empty());
    }

    #[test]
    fn test_city_and_degree_are_substring_filters() {
        let records = sample();
        let query = SearchRequest::default().with_city("aus").with_degree("phd").normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Bob"]);

        // 子字串比對會有誤判，這是預期行為
        let query = SearchRequest::default().with_degree("D").normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Jane", "John", "Bob"]);
    }

    #[test]
    fn test_specialties_require_all() {
        let records = sample();
        let query = SearchRequest::default()
            .with_specialties(["bipolar", "lgbtq"])
            .normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Jane"]);

        let query = SearchRequest::default()
            .with_specialties(["bipolar", "coaching"])
            .normalize();
        assert!(evaluate(&records, &query).data.is_empty());

        let query = SearchRequest::default().with_specialties(["coaching"]).normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_specialty_entry_is_literal() {
        let records = vec![
            advocate("Jane", "Doe", "Austin", "MD", &["Bipolar"], 5),
            advocate("Nora", "Blank", "Austin", "MD", &[], 5),
        ];
        let query = SearchRequest::default().with_specialties([""]).normalize();
        // "" is contained in any specialty, but needs at least one to exist
        assert_eq!(names(&evaluate(&records, &query)), vec!["Jane"]);
    }

    #[test]
    fn test_experience_level_filter() {
        let records = sample();
        let by_level = |level: &str| {
            names(&evaluate(&records, &SearchRequest::default().with_experience_level(level).normalize()))
        };
        assert_eq!(by_level("emerging"), vec!["Alice"]);
        assert_eq!(by_level("established"), vec!["Jane"]);
        assert_eq!(by_level("expert"), vec!["John", "Bob"]);
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let records = sample();
        let query = SearchRequest::default()
            .with_city("austin")
            .with_experience_level("expert")
            .with_search_term("coach")
            .normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Bob"]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let records = vec![
            advocate("Inês", "Araújo", "ÉVORA", "MD", &["Ansiedade"], 4),
            advocate("Jane", "Doe", "Austin", "MD", &["Bipolar"], 5),
        ];

        let query = SearchRequest::default().with_city("évora").normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Inês"]);

        let query = SearchRequest::default().with_search_term("INÊS").normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Inês"]);

        let query = SearchRequest::default().with_search_term("araÚjo").normalize();
        assert_eq!(names(&evaluate(&records, &query)), vec!["Inês"]);
    }

    #[test]
    fn test_pagination_window() {
        let records = sample();
        let query = SearchRequest::default().with_page(2).with_limit(3).normalize();
        let page = evaluate(&records, &query);
        assert_eq!(names(&page), vec!["Bob"]);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_previous_page);
        assert!(!page.pagination.has_next_page);
    }
}
