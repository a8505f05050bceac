//! Fuzzy station name matching.

/// Whether a provider station name and a user query refer to the same station.
///
/// Both sides are trimmed and lowercased (Unicode-aware), then the match
/// succeeds if either contains the other. No tokenization or edit distance is
/// applied, so nested names ("Ростов" / "Ростов-на-Дону") match each other.
///
/// # Examples
///
/// ```
/// use route_server::segment::matches;
///
/// assert!(matches("Москва Пассажирская", "москва"));
/// assert!(matches("москва", "Москва Пассажирская"));
/// assert!(!matches("Тверь", "москва"));
/// ```
pub fn matches(candidate: &str, query: &str) -> bool {
    let candidate = candidate.trim().to_lowercase();
    let query = query.trim().to_lowercase();

    candidate.contains(&query) || query.contains(&candidate)
}
