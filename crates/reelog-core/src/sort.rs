use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reelog_models::Review;

/// Sort order for the review list. `Newest` is the selector's default and
/// the fallback for unrecognized tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    Rating,
    Title,
    #[default]
    Newest,
}

impl SortMode {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "rating" => SortMode::Rating,
            "title" => SortMode::Title,
            _ => SortMode::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Rating => "rating",
            SortMode::Title => "title",
            SortMode::Newest => "newest",
        }
    }
}

/// Parse a watched-on date. Accepts RFC 3339, `YYYY-MM-DD`, and
/// `YYYY-MM-DD HH:MM:SS`.
pub fn parse_watched_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    None
}

// Unparseable or absent dates count as the epoch, so they sink to the end
// of a newest-first ordering.
fn watched_timestamp(review: &Review) -> i64 {
    review
        .watched_on
        .as_deref()
        .and_then(parse_watched_date)
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

/// Return a new, reordered sequence; the input is untouched. All three
/// orderings are stable, so ties keep their input order.
pub fn sort_reviews(reviews: &[Review], mode: SortMode) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    match mode {
        SortMode::Rating => {
            sorted.sort_by(|a, b| {
                b.rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.rating.unwrap_or(0.0))
            });
        }
        SortMode::Title => {
            sorted.sort_by_cached_key(|review| review.title.to_lowercase());
        }
        SortMode::Newest => {
            sorted.sort_by_key(|review| std::cmp::Reverse(watched_timestamp(review)));
        }
    }
    sorted
}
