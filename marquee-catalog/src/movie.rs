use serde::Serialize;

use crate::CatalogError;

/// Accepted classification codes
pub const RATINGS: [&str; 6] = ["AA", "A", "B", "B15", "C", "D"];

/// A new movie before submission to the catalog service
#[derive(Debug, Clone, Serialize)]
pub struct MovieDraft {
    pub title: String,
    pub duration_min: i32,
    pub rating: String,
    pub genre: String,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
}

impl MovieDraft {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::InvalidField {
                field: "title",
                reason: "must not be empty".to_string(),
            });
        }
        if self.duration_min <= 0 {
            return Err(CatalogError::InvalidField {
                field: "duration_min",
                reason: format!("must be positive, got {}", self.duration_min),
            });
        }
        if !RATINGS.contains(&self.rating.as_str()) {
            return Err(CatalogError::InvalidField {
                field: "rating",
                reason: format!("{} is not one of {}", self.rating, RATINGS.join(", ")),
            });
        }
        Ok(())
    }
}

/// Partial update for an existing movie
#[derive(Debug, Clone, Default, Serialize)]
pub struct MovieUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now_showing: Option<bool>,
}

impl MovieUpdate {
    /// Update that pulls a movie off the billboard
    pub fn retire() -> Self {
        Self {
            now_showing: Some(false),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MovieDraft {
        MovieDraft {
            title: "The Seventh Seal".to_string(),
            duration_min: 96,
            rating: "B".to_string(),
            genre: "Drama".to_string(),
            synopsis: None,
            poster_url: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_title() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(matches!(
            d.validate(),
            Err(CatalogError::InvalidField { field: "title", .. })
        ));
    }

    #[test]
    fn test_rejects_nonpositive_duration() {
        let mut d = draft();
        d.duration_min = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_rating() {
        let mut d = draft();
        d.rating = "PG-13".to_string();
        assert!(matches!(
            d.validate(),
            Err(CatalogError::InvalidField { field: "rating", .. })
        ));
    }
}
