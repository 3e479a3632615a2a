use crate::domain::model::SearchQuery;

/// `(555) 555-5555`, or `None` unless the number has exactly 10 digits.
pub fn format_phone_number(phone_number: u64) -> Option<String> {
    let digits = phone_number.to_string();
    if digits.len() != 10 {
        return None;
    }
    Some(format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

/// Human readable summary of the active filters, e.g.
/// "Showing Expert (8+ years of experience) advocates in Austin with MD degree".
pub fn describe_search(query: &SearchQuery) -> String {
    let mut active_filters = Vec::new();

    if !query.city.is_empty() {
        active_filters.push(format!("in {}", query.city));
    }
    if !query.degree.is_empty() {
        active_filters.push(format!("with {} degree", query.degree));
    }
    if !query.specialties.is_empty() {
        active_filters.push(format!("specializing in {}", query.specialties.join(", ")));
    }

    let subject = match query.experience_level {
        Some(level) => format!("{} advocates", level.label()),
        None if active_filters.is_empty() => return "Showing all advocates".to_string(),
        None => "advocates".to_string(),
    };

    if active_filters.is_empty() {
        format!("Showing {}", subject)
    } else {
        format!("Showing {} {}", subject, active_filters.join(" "))
    }
}
