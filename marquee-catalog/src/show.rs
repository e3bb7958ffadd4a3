use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::CatalogError;

/// A new show before submission to the scheduling service. The server
/// enforces the same checks; validating here saves the round trip.
#[derive(Debug, Clone, Serialize)]
pub struct ShowDraft {
    pub movie_id: i64,
    pub room_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub base_price_cents: i64,
}

impl ShowDraft {
    /// `today` is injected so validation stays deterministic under test
    pub fn validate(&self, today: NaiveDate) -> Result<(), CatalogError> {
        if self.date < today {
            return Err(CatalogError::InvalidField {
                field: "date",
                reason: format!("{} is in the past", self.date),
            });
        }
        if self.base_price_cents <= 0 {
            return Err(CatalogError::InvalidField {
                field: "base_price_cents",
                reason: format!("must be positive, got {}", self.base_price_cents),
            });
        }
        Ok(())
    }
}

/// Partial update for a scheduled show
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShowUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price_cents: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: NaiveDate) -> ShowDraft {
        ShowDraft {
            movie_id: 1,
            room_id: 1,
            date,
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            base_price_cents: 8500,
        }
    }

    #[test]
    fn test_future_show_accepted() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(draft(today.succ_opt().unwrap()).validate(today).is_ok());
        // Same-day shows are fine too
        assert!(draft(today).validate(today).is_ok());
    }

    #[test]
    fn test_past_show_rejected() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let yesterday = today.pred_opt().unwrap();
        assert!(matches!(
            draft(yesterday).validate(today),
            Err(CatalogError::InvalidField { field: "date", .. })
        ));
    }

    #[test]
    fn test_free_show_rejected() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut d = draft(today);
        d.base_price_cents = 0;
        assert!(d.validate(today).is_err());
    }
}
