//! Board game JSON API handlers.
//!
//! These handlers use repository trait objects for database access.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use boardgames_core::inventory::{
    BoardGame, CreateBoardGameRequest, Developer, UpdateBoardGameRequest,
};

use crate::{handlers::AppError, state::AppState};

/// List all board games (GET /api/boardgames).
pub async fn list_board_games(
    State(state): State<AppState>,
) -> Result<Json<Vec<BoardGame>>, AppError> {
    Ok(Json(state.board_game_repo.list_board_games().await?))
}

/// Create a board game and link its developers (POST /api/boardgames).
///
/// Developers are matched by name and created when missing.
pub async fn create_board_game(
    State(state): State<AppState>,
    Json(payload): Json<CreateBoardGameRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request = payload.validate()?;

    let id = state
        .board_game_repo
        .insert_board_game(
            &request.name,
            request.rating,
            request.description.as_deref(),
            &request.developers,
        )
        .await?;

    tracing::info!(
        board_game_id = id,
        name = %request.name,
        developers = request.developers.len(),
        "Created board game"
    );

    let board_game = state
        .board_game_repo
        .get_board_game(id)
        .await?
        .ok_or_else(|| AppError::not_found("BoardGame", id))?;

    Ok((StatusCode::CREATED, Json(board_game)))
}

/// Get a single board game by ID (GET /api/boardgames/{id}).
pub async fn get_board_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BoardGame>, AppError> {
    state
        .board_game_repo
        .get_board_game(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("BoardGame", id))
}

/// Update a board game by ID (PUT /api/boardgames/{id}).
pub async fn update_board_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBoardGameRequest>,
) -> Result<Json<BoardGame>, AppError> {
    let request = payload.validate()?;

    let updated = state
        .board_game_repo
        .update_board_game(
            id,
            &request.name,
            request.rating,
            request.description.as_deref(),
        )
        .await?;
    if !updated {
        return Err(AppError::not_found("BoardGame", id));
    }

    tracing::info!(board_game_id = id, "Updated board game");

    Ok(Json(BoardGame {
        id,
        name: request.name,
        rating: request.rating,
        description: request.description,
    }))
}

/// Delete a board game by ID (DELETE /api/boardgames/{id}).
///
/// Also deletes every developer link to it. Developers themselves stay.
pub async fn delete_board_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.board_game_repo.delete_board_game(id).await? {
        return Err(AppError::not_found("BoardGame", id));
    }

    tracing::info!(board_game_id = id, "Deleted board game and its links");

    Ok(StatusCode::NO_CONTENT)
}

/// List the developers of a board game (GET /api/boardgames/{id}/developers).
pub async fn list_board_game_developers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Developer>>, AppError> {
    if state.board_game_repo.get_board_game(id).await?.is_none() {
        return Err(AppError::not_found("BoardGame", id));
    }

    Ok(Json(state.developer_repo.developers_by_board_game(id).await?))
}
