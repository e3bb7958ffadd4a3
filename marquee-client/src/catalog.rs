use std::sync::Arc;

use marquee_catalog::movie::{MovieDraft, MovieUpdate};
use marquee_catalog::room::{RoomDraft, SeatBatch};
use marquee_catalog::show::{ShowDraft, ShowUpdate};
use marquee_core::seat::{RemoteSeatState, SeatRecord};
use marquee_core::show::{Movie, Room, Show, ShowSummary};
use serde::Serialize;

use crate::http::{Acknowledgement, ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct SeatStateUpdate {
    state: RemoteSeatState,
}

/// Catalog endpoints: movies, rooms and their seat grids, shows. All
/// writes are admin-gated server-side; a 403 surfaces as
/// [`ApiError::Status`].
pub struct CatalogApi {
    api: Arc<ApiClient>,
}

impl CatalogApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    // -- movies

    pub async fn movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.api.get("/movies").await
    }

    pub async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, ApiError> {
        self.api.post("/movies", draft).await
    }

    pub async fn update_movie(&self, movie_id: i64, update: &MovieUpdate) -> Result<Movie, ApiError> {
        self.api.patch(&format!("/movies/{movie_id}"), update).await
    }

    pub async fn delete_movie(&self, movie_id: i64) -> Result<(), ApiError> {
        let _: Acknowledgement = self.api.delete(&format!("/movies/{movie_id}")).await?;
        Ok(())
    }

    // -- rooms and seat grids

    pub async fn rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.api.get("/rooms").await
    }

    pub async fn create_room(&self, draft: &RoomDraft) -> Result<Room, ApiError> {
        self.api.post("/rooms", draft).await
    }

    /// Replace a room's whole seat grid. The service rejects this while
    /// the room has upcoming shows.
    pub async fn submit_layout(&self, batch: &SeatBatch) -> Result<(), ApiError> {
        let _: Acknowledgement = self
            .api
            .post(&format!("/rooms/{}/seats", batch.room_id), batch)
            .await?;
        Ok(())
    }

    pub async fn room_seats(&self, room_id: i64) -> Result<Vec<SeatRecord>, ApiError> {
        self.api.get(&format!("/rooms/{room_id}/seats")).await
    }

    /// Flip one seat between available and disabled
    pub async fn set_seat_state(
        &self,
        room_id: i64,
        seat_id: i64,
        state: RemoteSeatState,
    ) -> Result<(), ApiError> {
        let _: Acknowledgement = self
            .api
            .patch(
                &format!("/rooms/{room_id}/seats/{seat_id}"),
                &SeatStateUpdate { state },
            )
            .await?;
        Ok(())
    }

    // -- shows

    pub async fn shows(&self) -> Result<Vec<ShowSummary>, ApiError> {
        self.api.get("/shows").await
    }

    pub async fn show(&self, show_id: i64) -> Result<ShowSummary, ApiError> {
        self.api.get(&format!("/shows/{show_id}")).await
    }

    pub async fn schedule_show(&self, draft: &ShowDraft) -> Result<Show, ApiError> {
        self.api.post("/shows", draft).await
    }

    pub async fn update_show(&self, show_id: i64, update: &ShowUpdate) -> Result<Show, ApiError> {
        self.api.patch(&format!("/shows/{show_id}"), update).await
    }

    pub async fn cancel_show(&self, show_id: i64) -> Result<(), ApiError> {
        let _: Acknowledgement = self.api.delete(&format!("/shows/{show_id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_state_update_shape() {
        let update = SeatStateUpdate {
            state: RemoteSeatState::Disabled,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["state"], "DISABLED");
    }

    #[test]
    fn test_show_summary_shape() {
        let summary: ShowSummary = serde_json::from_str(
            r#"{
                "id": 3,
                "movie_title": "Metropolis",
                "room_name": "Room 1",
                "date": "2025-07-04",
                "time": "19:30:00",
                "base_price_cents": 8500
            }"#,
        )
        .unwrap();
        assert_eq!(summary.movie_title, "Metropolis");
        assert_eq!(summary.base_price_cents, 8500);
    }
}
