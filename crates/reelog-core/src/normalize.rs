use reelog_models::{Meta, Review};
use serde_json::Value;
use tracing::debug;

/// The full record set plus metadata, loaded once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
    pub reviews: Vec<Review>,
    pub meta: Meta,
}

/// Extract reviews and metadata from an arbitrary parsed document.
///
/// Never fails: a non-array `reviews` field yields an empty record set, a
/// missing `updated` field yields "unknown", and a non-object entry in the
/// reviews array becomes an empty record.
pub fn normalize(document: &Value) -> Library {
    let reviews: Vec<Review> = match document.get("reviews").and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    };

    let meta = Meta {
        updated: document
            .get("updated")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
    };

    debug!(reviews = reviews.len(), updated = %meta.updated, "normalized review document");
    Library { reviews, meta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_well_formed_document() {
        let library = normalize(&json!({
            "updated": "2024-01-01",
            "reviews": [
                { "title": "A", "rating": 9 },
                { "title": "B" }
            ]
        }));
        assert_eq!(library.meta.updated, "2024-01-01");
        assert_eq!(library.reviews.len(), 2);
        assert_eq!(library.reviews[0].title, "A");
        assert_eq!(library.reviews[0].rating, Some(9.0));
        assert_eq!(library.reviews[1].rating, None);
    }

    #[test]
    fn test_non_array_reviews_yields_empty_set() {
        let library = normalize(&json!({ "updated": "x", "reviews": "oops" }));
        assert!(library.reviews.is_empty());
        assert_eq!(library.meta.updated, "x");
    }

    #[test]
    fn test_missing_fields_degrade() {
        let library = normalize(&json!({}));
        assert!(library.reviews.is_empty());
        assert_eq!(library.meta.updated, "unknown");
    }

    #[test]
    fn test_non_object_entry_becomes_empty_record() {
        let library = normalize(&json!({ "reviews": [42, { "title": "A" }] }));
        assert_eq!(library.reviews.len(), 2);
        assert_eq!(library.reviews[0], Review::default());
        assert_eq!(library.reviews[1].title, "A");
    }

    #[test]
    fn test_non_object_document() {
        let library = normalize(&json!([1, 2, 3]));
        assert!(library.reviews.is_empty());
        assert_eq!(library.meta.updated, "unknown");
    }
}
