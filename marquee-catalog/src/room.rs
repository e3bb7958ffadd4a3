use std::collections::BTreeMap;

use marquee_core::seat::RemoteSeatState;
use serde::Serialize;

use crate::CatalogError;

/// A new room before submission to the catalog service
#[derive(Debug, Clone, Serialize)]
pub struct RoomDraft {
    pub name: String,
    pub capacity: i32,
}

impl RoomDraft {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidField {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.capacity <= 0 {
            return Err(CatalogError::InvalidField {
                field: "capacity",
                reason: format!("must be positive, got {}", self.capacity),
            });
        }
        Ok(())
    }
}

/// One seat position in a layout under construction
#[derive(Debug, Clone, Copy)]
struct SeatSlot {
    number: i32,
    enabled: bool,
}

/// Client-side editor for a room's seat grid. All edits are local; the
/// grid only reaches the configuration API when [`RoomLayout::into_batch`]
/// produces the creation payload. The server rejects reconfiguration of
/// rooms with upcoming shows, so nothing here needs to re-check that.
#[derive(Debug, Clone)]
pub struct RoomLayout {
    room_id: i64,
    rows: BTreeMap<String, Vec<SeatSlot>>,
}

impl RoomLayout {
    /// Empty layout for a room
    pub fn new(room_id: i64) -> Self {
        Self {
            room_id,
            rows: BTreeMap::new(),
        }
    }

    /// Uniform grid: `num_rows` lettered rows (A, B, ...) of
    /// `seats_per_row` seats each
    pub fn grid(room_id: i64, num_rows: u8, seats_per_row: i32) -> Result<Self, CatalogError> {
        if num_rows == 0 || num_rows > 26 {
            return Err(CatalogError::InvalidField {
                field: "num_rows",
                reason: format!("must be between 1 and 26, got {num_rows}"),
            });
        }
        let mut layout = Self::new(room_id);
        for i in 0..num_rows {
            let letter = ((b'A' + i) as char).to_string();
            layout.add_row(&letter, seats_per_row)?;
        }
        Ok(layout)
    }

    /// Add a lettered row. Duplicate letters are rejected, matching the
    /// configuration service.
    pub fn add_row(&mut self, letter: &str, seats_per_row: i32) -> Result<(), CatalogError> {
        if seats_per_row <= 0 {
            return Err(CatalogError::InvalidField {
                field: "seats_per_row",
                reason: format!("must be positive, got {seats_per_row}"),
            });
        }
        if self.rows.contains_key(letter) {
            return Err(CatalogError::DuplicateRow(letter.to_string()));
        }
        let slots = (1..=seats_per_row)
            .map(|number| SeatSlot {
                number,
                enabled: true,
            })
            .collect();
        self.rows.insert(letter.to_string(), slots);
        Ok(())
    }

    pub fn remove_row(&mut self, letter: &str) -> Result<(), CatalogError> {
        self.rows
            .remove(letter)
            .map(|_| ())
            .ok_or_else(|| CatalogError::RowNotFound(letter.to_string()))
    }

    /// Mark a single seat sellable or blocked
    pub fn set_seat_enabled(
        &mut self,
        row: &str,
        number: i32,
        enabled: bool,
    ) -> Result<(), CatalogError> {
        let slots = self
            .rows
            .get_mut(row)
            .ok_or_else(|| CatalogError::RowNotFound(row.to_string()))?;
        let slot = slots
            .iter_mut()
            .find(|s| s.number == number)
            .ok_or_else(|| CatalogError::SeatNotFound(format!("{row}{number}")))?;
        slot.enabled = enabled;
        Ok(())
    }

    pub fn seat_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn row_letters(&self) -> Vec<&str> {
        self.rows.keys().map(String::as_str).collect()
    }

    /// Emit the creation batch the configuration API expects
    pub fn into_batch(self) -> SeatBatch {
        let mut seats = Vec::with_capacity(self.seat_count());
        for (row, slots) in &self.rows {
            for slot in slots {
                seats.push(SeatSpec {
                    row: row.clone(),
                    number: slot.number,
                    state: if slot.enabled {
                        RemoteSeatState::Available
                    } else {
                        RemoteSeatState::Disabled
                    },
                });
            }
        }
        SeatBatch {
            room_id: self.room_id,
            seats,
        }
    }
}

/// Wire payload replacing a room's whole seat grid
#[derive(Debug, Clone, Serialize)]
pub struct SeatBatch {
    pub room_id: i64,
    pub seats: Vec<SeatSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatSpec {
    pub row: String,
    pub number: i32,
    pub state: RemoteSeatState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_generation() {
        let layout = RoomLayout::grid(1, 3, 10).unwrap();
        assert_eq!(layout.seat_count(), 30);
        assert_eq!(layout.row_letters(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_row_rejected() {
        let mut layout = RoomLayout::grid(1, 2, 5).unwrap();
        let result = layout.add_row("A", 5);
        assert!(matches!(result, Err(CatalogError::DuplicateRow(_))));
    }

    #[test]
    fn test_remove_missing_row() {
        let mut layout = RoomLayout::grid(1, 1, 4).unwrap();
        assert!(layout.remove_row("Z").is_err());
        layout.remove_row("A").unwrap();
        assert_eq!(layout.seat_count(), 0);
    }

    #[test]
    fn test_disabled_seat_lands_in_batch() {
        let mut layout = RoomLayout::grid(7, 1, 3).unwrap();
        layout.set_seat_enabled("A", 2, false).unwrap();

        let batch = layout.into_batch();
        assert_eq!(batch.room_id, 7);
        assert_eq!(batch.seats.len(), 3);
        let a2 = batch
            .seats
            .iter()
            .find(|s| s.row == "A" && s.number == 2)
            .unwrap();
        assert_eq!(a2.state, RemoteSeatState::Disabled);
        let a1 = batch
            .seats
            .iter()
            .find(|s| s.row == "A" && s.number == 1)
            .unwrap();
        assert_eq!(a1.state, RemoteSeatState::Available);
    }

    #[test]
    fn test_unknown_seat_rejected() {
        let mut layout = RoomLayout::grid(1, 1, 3).unwrap();
        assert!(matches!(
            layout.set_seat_enabled("A", 9, false),
            Err(CatalogError::SeatNotFound(_))
        ));
    }
}
