//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted short code to long URL mapping.
///
/// Mappings are created exactly once and are never updated or deleted. The
/// short code functions as the primary key.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Mapping {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub short_code: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = Mapping::new(
            "AbC123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(mapping.short_code, "AbC123");
        assert_eq!(mapping.long_url, "https://example.com");
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_new_mapping_creation() {
        let new_mapping = NewMapping {
            short_code: "xyz789".to_string(),
            long_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_mapping.short_code, "xyz789");
        assert_eq!(new_mapping.long_url, "https://rust-lang.org");
    }
}
