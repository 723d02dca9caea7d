use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use premier_app::{
    command_handlers::{
        AddPlayerCommandHandler, DeletePlayerByNameCommandHandler, DeletePlayerCommandHandler,
        UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{AddPlayer, DeletePlayer, DeletePlayerByName, UpdatePlayer},
        queries::{GetPlayerById, GetPlayerByName, GetPlayerStats, ListPlayers},
    },
    queries_handlers::{
        GetPlayerByIdHandler, GetPlayerByNameHandler, GetPlayerStatsHandler, ListPlayersHandler,
    },
};
use premier_types::{
    filter::PlayerFilter,
    player::{NewPlayer, Player, PlayerPatch},
    stats::PlayerStats,
};

use crate::{handlers::ApiError, http::AppState};

pub const PLAYER_DELETED: &str = "Player deleted successfully";

/// GET /api/v1/player - list players, optionally filtered by team, name, position or nation
pub async fn list_players(
    State(state): State<AppState>,
    Query(filter): Query<PlayerFilter>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = state
        .app_bus
        .query(ListPlayers { filter }, ListPlayersHandler::new())
        .await?;

    Ok(Json(players))
}

/// GET /api/v1/player/stats
pub async fn player_stats(State(state): State<AppState>) -> Result<Json<PlayerStats>, ApiError> {
    let stats = state
        .app_bus
        .query(GetPlayerStats, GetPlayerStatsHandler::new())
        .await?;

    Ok(Json(stats))
}

/// GET /api/v1/player/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .app_bus
        .query(GetPlayerById { id }, GetPlayerByIdHandler::new())
        .await?;

    Ok(Json(player))
}

/// GET /api/v1/player/name/{name}
pub async fn get_player_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = state
        .app_bus
        .query(GetPlayerByName { name }, GetPlayerByNameHandler::new())
        .await?;

    Ok(Json(player))
}

/// POST /api/v1/player
pub async fn add_player(
    State(state): State<AppState>,
    WithRejection(Json(player), _): WithRejection<Json<NewPlayer>, ApiError>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let created = state
        .app_bus
        .execute(AddPlayer { player }, AddPlayerCommandHandler::new())
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/player - 404 when the id is unknown
pub async fn update_player(
    State(state): State<AppState>,
    WithRejection(Json(patch), _): WithRejection<Json<PlayerPatch>, ApiError>,
) -> Result<Json<Player>, ApiError> {
    let updated = state
        .app_bus
        .execute(UpdatePlayer { patch }, UpdatePlayerCommandHandler::new())
        .await?;

    Ok(Json(updated))
}

/// DELETE /api/v1/player/{id} - unknown ids still answer 200
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state
        .app_bus
        .execute(DeletePlayer { id }, DeletePlayerCommandHandler::new())
        .await?;

    Ok(PLAYER_DELETED)
}

/// DELETE /api/v1/player/name/{name}
pub async fn delete_player_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<&'static str, ApiError> {
    state
        .app_bus
        .execute(
            DeletePlayerByName { name },
            DeletePlayerByNameCommandHandler::new(),
        )
        .await?;

    Ok(PLAYER_DELETED)
}
