use reelog_models::Review;

/// True when the review's searchable text contains the query.
///
/// The haystack joins title, year, summary, then every tag with single
/// spaces; matching is a case-insensitive unanchored substring test. An
/// empty query matches every record.
pub fn matches_query(review: &Review, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let mut parts = vec![
        review.title.clone(),
        review.year.clone().unwrap_or_default(),
        review.summary.clone().unwrap_or_default(),
    ];
    parts.extend(review.tags.iter().cloned());

    let haystack = parts.join(" ").to_lowercase();
    haystack.contains(&query.to_lowercase())
}

/// Retain only the reviews matching the query. The input is untouched.
pub fn filter_reviews(reviews: &[Review], query: &str) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| matches_query(review, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(title: &str, year: Option<&str>, summary: Option<&str>, tags: &[&str]) -> Review {
        Review {
            title: title.to_string(),
            year: year.map(str::to_string),
            summary: summary.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Review::default()
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query(&Review::default(), ""));
        assert!(matches_query(&review("A", None, None, &[]), ""));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let r = review("Blade Runner", None, None, &[]);
        assert!(matches_query(&r, "blade"));
        assert!(matches_query(&r, "RUNNER"));
        assert!(!matches_query(&r, "alien"));
    }

    #[test]
    fn test_matches_year_summary_and_tags() {
        let r = review("A", Some("1982"), Some("A replicant hunt."), &["noir", "scifi"]);
        assert!(matches_query(&r, "1982"));
        assert!(matches_query(&r, "replicant"));
        assert!(matches_query(&r, "noir"));
        assert!(matches_query(&r, "scifi"));
    }

    #[test]
    fn test_substring_is_unanchored() {
        let r = review("Blade Runner", None, None, &[]);
        assert!(matches_query(&r, "ade run"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let reviews = vec![
            review("Blade Runner", Some("1982"), None, &["scifi"]),
            review("Heat", Some("1995"), None, &["crime"]),
            review("Alien", Some("1979"), None, &["scifi"]),
        ];
        let once = filter_reviews(&reviews, "scifi");
        let twice = filter_reviews(&once, "scifi");
        assert_eq!(once.len(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_b_retains_only_b() {
        let reviews = vec![
            review("A", Some("2020"), None, &[]),
            review("B", Some("2021"), None, &[]),
        ];
        let filtered = filter_reviews(&reviews, "b");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "B");
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let reviews = vec![
            review("C", None, None, &["x"]),
            review("A", None, None, &[]),
            review("B", None, None, &["x"]),
        ];
        let filtered = filter_reviews(&reviews, "x");
        assert_eq!(filtered[0].title, "C");
        assert_eq!(filtered[1].title, "B");
    }
}
