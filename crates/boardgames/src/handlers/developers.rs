//! Developer JSON API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use boardgames_core::inventory::{
    BoardGame, CreateDeveloperRequest, Developer, UpdateDeveloperRequest,
};

use crate::{handlers::AppError, state::AppState};

/// List all developers (GET /api/developers).
pub async fn list_developers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Developer>>, AppError> {
    Ok(Json(state.developer_repo.list_developers().await?))
}

/// Create a developer and link their board games (POST /api/developers).
pub async fn create_developer(
    State(state): State<AppState>,
    Json(payload): Json<CreateDeveloperRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request = payload.validate()?;

    let id = state
        .developer_repo
        .insert_developer(&request.name, &request.board_games)
        .await?;

    tracing::info!(
        developer_id = id,
        name = %request.name,
        board_games = request.board_games.len(),
        "Created developer"
    );

    Ok((StatusCode::CREATED, Json(Developer::new(id, request.name))))
}

/// Get a single developer by ID (GET /api/developers/{id}).
pub async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Developer>, AppError> {
    state
        .developer_repo
        .get_developer(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Developer", id))
}

/// Rename a developer and replace their board games (PUT /api/developers/{id}).
pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateDeveloperRequest>,
) -> Result<Json<Developer>, AppError> {
    let request = payload.validate()?;

    let updated = state
        .developer_repo
        .update_developer(id, &request.name, &request.board_games)
        .await?;
    if !updated {
        return Err(AppError::not_found("Developer", id));
    }

    tracing::info!(
        developer_id = id,
        board_games = request.board_games.len(),
        "Updated developer"
    );

    Ok(Json(Developer::new(id, request.name)))
}

/// Delete a developer by ID (DELETE /api/developers/{id}).
pub async fn delete_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.developer_repo.delete_developer(id).await? {
        return Err(AppError::not_found("Developer", id));
    }

    tracing::info!(developer_id = id, "Deleted developer and their links");

    Ok(StatusCode::NO_CONTENT)
}

/// List a developer's board games (GET /api/developers/{id}/boardgames).
pub async fn list_developer_board_games(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<BoardGame>>, AppError> {
    if state.developer_repo.get_developer(id).await?.is_none() {
        return Err(AppError::not_found("Developer", id));
    }

    Ok(Json(state.board_game_repo.board_games_by_developer(id).await?))
}
