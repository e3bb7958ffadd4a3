use std::collections::BTreeMap;

use marquee_core::seat::{RemoteSeatState, SeatId, SeatRecord, UnavailableSeat};
use serde::Serialize;

/// Client-local seat state, mirrored against remote truth on each check.
/// `Occupied` and `Disabled` are terminal and can never enter the
/// selection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Selected,
    Reserved,
    Sold,
    Occupied,
    Disabled,
}

impl SeatStatus {
    pub fn is_selectable(self) -> bool {
        matches!(self, SeatStatus::Available)
    }

    fn from_remote(state: RemoteSeatState) -> Self {
        match state {
            RemoteSeatState::Available => SeatStatus::Available,
            // A hold by another session renders the same as sold
            RemoteSeatState::Held | RemoteSeatState::Occupied => SeatStatus::Occupied,
            RemoteSeatState::Disabled => SeatStatus::Disabled,
        }
    }
}

/// One seat as the renderer sees it
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeatView {
    pub id: SeatId,
    pub row: String,
    pub number: i32,
    pub status: SeatStatus,
}

impl SeatView {
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }
}

/// The seat grid for one show plus the operator's ordered selection.
/// Owned by exactly one session; remote state is only mirrored here.
#[derive(Debug, Default)]
pub struct SeatMap {
    seats: BTreeMap<SeatId, SeatView>,
    selection: Vec<SeatId>,
}

impl SeatMap {
    pub fn from_records(records: Vec<SeatRecord>) -> Self {
        let seats = records
            .into_iter()
            .map(|r| {
                (
                    r.id,
                    SeatView {
                        id: r.id,
                        row: r.row,
                        number: r.number,
                        status: SeatStatus::from_remote(r.state),
                    },
                )
            })
            .collect();
        Self {
            seats,
            selection: Vec::new(),
        }
    }

    /// Flip a seat in or out of the selection. Returns whether the seat
    /// is selected afterwards. Toggling a seat that is not selectable is
    /// a no-op, never an error.
    pub fn toggle(&mut self, seat_id: SeatId) -> bool {
        let Some(view) = self.seats.get_mut(&seat_id) else {
            return false;
        };
        match view.status {
            SeatStatus::Available => {
                view.status = SeatStatus::Selected;
                self.selection.push(seat_id);
                true
            }
            SeatStatus::Selected => {
                view.status = SeatStatus::Available;
                self.selection.retain(|id| *id != seat_id);
                false
            }
            _ => false,
        }
    }

    /// Selection in the order the operator picked the seats
    pub fn selection(&self) -> &[SeatId] {
        &self.selection
    }

    pub fn status(&self, seat_id: SeatId) -> Option<SeatStatus> {
        self.seats.get(&seat_id).map(|v| v.status)
    }

    pub fn view(&self, seat_id: SeatId) -> Option<&SeatView> {
        self.seats.get(&seat_id)
    }

    pub fn seat_by_label(&self, label: &str) -> Option<&SeatView> {
        self.seats
            .values()
            .find(|v| v.label().eq_ignore_ascii_case(label))
    }

    /// Grid grouped by row letter, each row sorted by seat number
    pub fn by_rows(&self) -> BTreeMap<&str, Vec<&SeatView>> {
        let mut rows: BTreeMap<&str, Vec<&SeatView>> = BTreeMap::new();
        for view in self.seats.values() {
            rows.entry(view.row.as_str()).or_default().push(view);
        }
        for seats in rows.values_mut() {
            seats.sort_by_key(|v| v.number);
        }
        rows
    }

    /// Selection-ordered ids currently held as reserved
    pub fn reserved_seats(&self) -> Vec<SeatId> {
        self.selection
            .iter()
            .copied()
            .filter(|id| self.status(*id) == Some(SeatStatus::Reserved))
            .collect()
    }

    /// Mirror freshly reported conflicts: update remote state and drop
    /// the seats from the selection. Untouched seats keep their state.
    pub(crate) fn apply_conflicts(&mut self, conflicts: &[UnavailableSeat]) {
        for conflict in conflicts {
            if let Some(view) = self.seats.get_mut(&conflict.id) {
                view.status = SeatStatus::from_remote(conflict.state);
            }
            self.selection.retain(|id| *id != conflict.id);
        }
    }

    pub(crate) fn mark_reserved(&mut self, seat_ids: &[SeatId]) {
        for id in seat_ids {
            if let Some(view) = self.seats.get_mut(id) {
                if view.status == SeatStatus::Selected {
                    view.status = SeatStatus::Reserved;
                }
            }
        }
    }

    pub(crate) fn mark_sold(&mut self, seat_id: SeatId) {
        if let Some(view) = self.seats.get_mut(&seat_id) {
            if view.status == SeatStatus::Reserved {
                view.status = SeatStatus::Sold;
                self.selection.retain(|id| *id != seat_id);
            }
        }
    }

    /// Back out of the whole selection, returning every selected seat to
    /// available
    pub(crate) fn deselect_all(&mut self) {
        for id in std::mem::take(&mut self.selection) {
            if let Some(view) = self.seats.get_mut(&id) {
                if view.status == SeatStatus::Selected {
                    view.status = SeatStatus::Available;
                }
            }
        }
    }

    /// Return reserved seats to available locally, yielding their ids in
    /// selection order for the remote release
    pub(crate) fn release_reserved(&mut self) -> Vec<SeatId> {
        let released = self.reserved_seats();
        for id in &released {
            if let Some(view) = self.seats.get_mut(id) {
                view.status = SeatStatus::Available;
            }
        }
        self.selection.retain(|id| !released.contains(id));
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: SeatId, row: &str, number: i32, state: RemoteSeatState) -> SeatRecord {
        SeatRecord {
            id,
            row: row.to_string(),
            number,
            state,
        }
    }

    fn map() -> SeatMap {
        SeatMap::from_records(vec![
            record(1, "A", 1, RemoteSeatState::Available),
            record(2, "A", 2, RemoteSeatState::Available),
            record(3, "B", 3, RemoteSeatState::Occupied),
            record(4, "B", 4, RemoteSeatState::Disabled),
            record(5, "C", 1, RemoteSeatState::Held),
        ])
    }

    #[test]
    fn test_remote_states_map_to_terminal_statuses() {
        let map = map();
        assert_eq!(map.status(1), Some(SeatStatus::Available));
        assert_eq!(map.status(3), Some(SeatStatus::Occupied));
        assert_eq!(map.status(4), Some(SeatStatus::Disabled));
        // A foreign hold renders as occupied
        assert_eq!(map.status(5), Some(SeatStatus::Occupied));
    }

    #[test]
    fn test_toggle_only_selects_available_seats() {
        let mut map = map();
        assert!(!map.toggle(3));
        assert!(!map.toggle(4));
        assert!(!map.toggle(5));
        assert!(!map.toggle(99));
        assert!(map.selection().is_empty());

        assert!(map.toggle(1));
        assert_eq!(map.selection(), &[1]);
        assert_eq!(map.status(1), Some(SeatStatus::Selected));
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut map = map();
        map.toggle(2);
        map.toggle(1);
        assert_eq!(map.selection(), &[2, 1]);

        map.toggle(2);
        assert_eq!(map.selection(), &[1]);
        assert_eq!(map.status(2), Some(SeatStatus::Available));
    }

    #[test]
    fn test_apply_conflicts_deselects_only_conflicting_seats() {
        let mut map = map();
        map.toggle(1);
        map.toggle(2);

        map.apply_conflicts(&[UnavailableSeat {
            id: 2,
            row: "A".to_string(),
            number: 2,
            state: RemoteSeatState::Occupied,
        }]);

        assert_eq!(map.selection(), &[1]);
        assert_eq!(map.status(2), Some(SeatStatus::Occupied));
        assert_eq!(map.status(1), Some(SeatStatus::Selected));
    }

    #[test]
    fn test_release_reserved_returns_seats_to_available() {
        let mut map = map();
        map.toggle(1);
        map.toggle(2);
        map.mark_reserved(&[1, 2]);
        map.mark_sold(1);

        let released = map.release_reserved();
        assert_eq!(released, vec![2]);
        assert_eq!(map.status(1), Some(SeatStatus::Sold));
        assert_eq!(map.status(2), Some(SeatStatus::Available));
        assert!(map.selection().is_empty());
    }

    #[test]
    fn test_seat_by_label() {
        let map = map();
        assert_eq!(map.seat_by_label("a2").map(|v| v.id), Some(2));
        assert_eq!(map.seat_by_label("Z9"), None);
    }
}
