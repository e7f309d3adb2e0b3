use serde::{Deserialize, Serialize};

/// Document-level metadata: when the source document was last refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    #[serde(default = "unknown_updated")]
    pub updated: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            updated: unknown_updated(),
        }
    }
}

fn unknown_updated() -> String {
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_updated_is_unknown() {
        assert_eq!(Meta::default().updated, "unknown");
    }

    #[test]
    fn test_missing_updated_defaults_to_unknown() {
        let meta: Meta = serde_json::from_value(json!({})).unwrap();
        assert_eq!(meta.updated, "unknown");
    }
}
