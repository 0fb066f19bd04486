use super::api::{ApiError, ApiSuccess};
use crate::domain::models::{
    DimensionCannotBeZeroError, GenerateDungeonRequest, SavedDungeon, Stage,
};
use crate::domain::ports::DungeonService;
use crate::inbound::AppState;

use dungeon_core::{Dungeon, DungeonConfig};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The response body data field for a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveDungeonResponseData {
    message: String,
}

/// The body of a dungeon save request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDungeonHttpRequestBody {
    stage: u32,
    dungeon_data: Dungeon,
}

impl SaveDungeonHttpRequestBody {
    /// Converts the HTTP request body into a domain document.
    fn into_domain(self) -> SavedDungeon {
        SavedDungeon::new(Stage::new(self.stage), self.dungeon_data)
    }
}

/// Save the dungeon state for a stage.
///
/// # Responses
///
/// - 200 OK: the state was persisted.
/// - 500 Internal server error: the state could not be written to the store.
pub(super) async fn save_dungeon_handler<DS: DungeonService>(
    State(state): State<AppState<DS>>,
    Json(body): Json<SaveDungeonHttpRequestBody>,
) -> Result<ApiSuccess<SaveDungeonResponseData>, ApiError> {
    let saved = body.into_domain();
    let stage = saved.stage();

    state
        .dungeon_service
        .save_dungeon(&saved)
        .await
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                SaveDungeonResponseData {
                    message: format!("Dungeon for stage {} saved successfully", stage.raw()),
                },
            )
        })
}

/// Load the dungeon state previously saved for a stage.
///
/// # Responses
///
/// - 200 OK: the saved state, exactly as it was stored.
/// - 404 Not found: nothing was ever saved for this stage.
pub(super) async fn load_dungeon_handler<DS: DungeonService>(
    State(state): State<AppState<DS>>,
    Path(stage): Path<u32>,
) -> Result<ApiSuccess<SavedDungeon>, ApiError> {
    state
        .dungeon_service
        .load_dungeon(Stage::new(stage))
        .await
        .map_err(ApiError::from)
        .map(|saved| ApiSuccess::new(StatusCode::OK, saved))
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseGenerateDungeonHttpRequestError {
    #[error(transparent)]
    Dimensions(#[from] DimensionCannotBeZeroError),
}

impl From<ParseGenerateDungeonHttpRequestError> for ApiError {
    fn from(e: ParseGenerateDungeonHttpRequestError) -> Self {
        Self::UnprocessableEntity(e.to_string())
    }
}

/// The body of a dungeon generation request. Omitted fields fall back to the
/// dimensions the game client uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDungeonHttpRequestBody {
    #[serde(default = "default_rooms")]
    rooms_x: usize,
    #[serde(default = "default_rooms")]
    rooms_y: usize,
    #[serde(default = "default_room_width")]
    room_width: usize,
    #[serde(default = "default_room_height")]
    room_height: usize,
    #[serde(default)]
    seed: Option<u64>,
}

fn default_rooms() -> usize {
    DungeonConfig::default().rooms_x
}

fn default_room_width() -> usize {
    DungeonConfig::default().room_width
}

fn default_room_height() -> usize {
    DungeonConfig::default().room_height
}

impl GenerateDungeonHttpRequestBody {
    /// Converts the HTTP request body into a domain request.
    fn try_into_domain(
        self,
    ) -> Result<GenerateDungeonRequest, ParseGenerateDungeonHttpRequestError> {
        if self.rooms_x == 0 || self.rooms_y == 0 || self.room_width == 0 || self.room_height == 0
        {
            return Err(ParseGenerateDungeonHttpRequestError::Dimensions(
                DimensionCannotBeZeroError,
            ));
        }

        let config = DungeonConfig {
            rooms_x: self.rooms_x,
            rooms_y: self.rooms_y,
            room_width: self.room_width,
            room_height: self.room_height,
            ..DungeonConfig::default()
        };

        Ok(GenerateDungeonRequest::new(config, self.seed))
    }
}

/// Generate a fresh [Dungeon].
///
/// # Responses
///
/// - 201 Created: the generated [Dungeon].
/// - 422 Unprocessable entity: the request had invalid dimensions.
pub(super) async fn generate_dungeon_handler<DS: DungeonService>(
    State(state): State<AppState<DS>>,
    Json(body): Json<GenerateDungeonHttpRequestBody>,
) -> Result<ApiSuccess<Dungeon>, ApiError> {
    let domain_req = body.try_into_domain()?;

    state
        .dungeon_service
        .generate_dungeon(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|dungeon| ApiSuccess::new(StatusCode::CREATED, dungeon))
}
