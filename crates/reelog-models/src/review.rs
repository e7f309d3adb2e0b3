use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One review entry from the source document. Every field is best-effort:
/// a wrong-typed field degrades to the field's default instead of failing
/// the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(deserialize_with = "lenient_opt_f64", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(
        rename = "watchedOn",
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub watched_on: Option<String>,
    #[serde(deserialize_with = "lenient_strings", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Coerce a scalar JSON value to text. Objects and arrays are not text-like.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string(&value).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string(&value))
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(coerce_string).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let review: Review = serde_json::from_value(json!({
            "title": "Blade Runner",
            "year": 1982,
            "rating": 9.5,
            "summary": "Still holds up.",
            "watchedOn": "2024-02-01",
            "tags": ["scifi", "noir"]
        }))
        .unwrap();

        assert_eq!(review.title, "Blade Runner");
        assert_eq!(review.year.as_deref(), Some("1982"));
        assert_eq!(review.rating, Some(9.5));
        assert_eq!(review.summary.as_deref(), Some("Still holds up."));
        assert_eq!(review.watched_on.as_deref(), Some("2024-02-01"));
        assert_eq!(review.tags, vec!["scifi", "noir"]);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let review: Review = serde_json::from_value(json!({})).unwrap();
        assert_eq!(review, Review::default());
        assert!(review.title.is_empty());
        assert!(review.tags.is_empty());
    }

    #[test]
    fn test_year_accepts_string_or_number() {
        let from_number: Review = serde_json::from_value(json!({ "year": 2020 })).unwrap();
        let from_string: Review = serde_json::from_value(json!({ "year": "2020" })).unwrap();
        assert_eq!(from_number.year, from_string.year);
    }

    #[test]
    fn test_wrong_typed_fields_degrade_per_field() {
        let review: Review = serde_json::from_value(json!({
            "title": { "nested": true },
            "year": [2020],
            "rating": "not a number",
            "tags": "scifi"
        }))
        .unwrap();

        assert!(review.title.is_empty());
        assert!(review.year.is_none());
        assert!(review.rating.is_none());
        assert!(review.tags.is_empty());
    }

    #[test]
    fn test_rating_parses_numeric_string() {
        let review: Review = serde_json::from_value(json!({ "rating": "7.5" })).unwrap();
        assert_eq!(review.rating, Some(7.5));
    }

    #[test]
    fn test_tags_skip_non_textual_entries() {
        let review: Review =
            serde_json::from_value(json!({ "tags": ["scifi", 4, { "bad": true }, "drama"] }))
                .unwrap();
        assert_eq!(review.tags, vec!["scifi", "4", "drama"]);
    }

    #[test]
    fn test_serialize_uses_watched_on_wire_name() {
        let review = Review {
            title: "A".to_string(),
            watched_on: Some("2024-02-01".to_string()),
            ..Review::default()
        };
        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["watchedOn"], "2024-02-01");
        assert!(value.get("rating").is_none());
    }
}
