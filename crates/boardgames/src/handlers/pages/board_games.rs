use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use boardgames_core::inventory::{BoardGame, Developer, InventoryError};

use super::{not_found_page, HtmlTemplate};
use crate::{handlers::AppError, models::BoardGameForm, state::AppState};

#[derive(Template)]
#[template(path = "board_games.html")]
struct BoardGameListTemplate {
    board_games: Vec<BoardGame>,
}

#[derive(Template)]
#[template(path = "board_game.html")]
struct BoardGameDetailTemplate {
    board_game: BoardGame,
    developers: Vec<Developer>,
}

/// Add/edit form. Field values are kept as text so a rejected submission
/// comes back exactly as typed.
#[derive(Template, Default)]
#[template(path = "board_game_form.html")]
struct BoardGameFormTemplate {
    heading: &'static str,
    action: String,
    name: String,
    rating: String,
    description: String,
    developers: String,
    show_developers: bool,
    error: Option<String>,
}

impl BoardGameFormTemplate {
    fn add() -> Self {
        Self {
            heading: "Add board game",
            action: "/boardgames".to_string(),
            show_developers: true,
            ..Default::default()
        }
    }

    fn edit(id: i64) -> Self {
        Self {
            heading: "Edit board game",
            action: format!("/boardgames/{id}/edit"),
            ..Default::default()
        }
    }

    fn with_board_game(mut self, board_game: &BoardGame) -> Self {
        self.name = board_game.name.clone();
        self.rating = board_game.rating.map(|r| r.to_string()).unwrap_or_default();
        self.description = board_game.description.clone().unwrap_or_default();
        self
    }

    fn with_form(mut self, form: &BoardGameForm) -> Self {
        self.name = form.name.clone();
        self.rating = form.rating.clone();
        self.description = form.description.clone().unwrap_or_default();
        self.developers = form.developers.clone();
        self
    }

    /// Renders the form again with a 400 status.
    fn rejected(mut self, error: InventoryError) -> Response {
        tracing::debug!(error = %error, "Board game form rejected");
        self.error = Some(error.to_string());
        (StatusCode::BAD_REQUEST, HtmlTemplate(self)).into_response()
    }
}

/// GET /boardgames
pub async fn list_board_games(State(state): State<AppState>) -> Result<Response, AppError> {
    let board_games = state.board_game_repo.list_board_games().await?;

    Ok(HtmlTemplate(BoardGameListTemplate { board_games }).into_response())
}

/// GET /boardgames/{id} - the board game and everyone who worked on it.
pub async fn board_game_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(board_game) = state.board_game_repo.get_board_game(id).await? else {
        return Ok(not_found_page("board game", id));
    };
    let developers = state.developer_repo.developers_by_board_game(id).await?;

    Ok(HtmlTemplate(BoardGameDetailTemplate {
        board_game,
        developers,
    })
    .into_response())
}

/// GET /boardgames/add
pub async fn add_board_game_form() -> Response {
    HtmlTemplate(BoardGameFormTemplate::add()).into_response()
}

/// POST /boardgames
pub async fn create_board_game(
    State(state): State<AppState>,
    Form(form): Form<BoardGameForm>,
) -> Result<Response, AppError> {
    let template = BoardGameFormTemplate::add().with_form(&form);
    let request = match form
        .into_create_request()
        .and_then(|request| request.validate())
    {
        Ok(request) => request,
        Err(err) => return Ok(template.rejected(err)),
    };

    let id = state
        .board_game_repo
        .insert_board_game(
            &request.name,
            request.rating,
            request.description.as_deref(),
            &request.developers,
        )
        .await?;

    tracing::info!(board_game_id = id, name = %request.name, "Created board game");

    Ok(Redirect::to("/").into_response())
}

/// GET /boardgames/{id}/edit
pub async fn edit_board_game_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(board_game) = state.board_game_repo.get_board_game(id).await? else {
        return Ok(not_found_page("board game", id));
    };

    Ok(HtmlTemplate(BoardGameFormTemplate::edit(id).with_board_game(&board_game)).into_response())
}

/// POST /boardgames/{id}/edit
pub async fn update_board_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<BoardGameForm>,
) -> Result<Response, AppError> {
    let template = BoardGameFormTemplate::edit(id).with_form(&form);
    let request = match form
        .into_update_request()
        .and_then(|request| request.validate())
    {
        Ok(request) => request,
        Err(err) => return Ok(template.rejected(err)),
    };

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
        return Ok(not_found_page("board game", id));
    }

    tracing::info!(board_game_id = id, "Updated board game");

    Ok(Redirect::to(&format!("/boardgames/{id}")).into_response())
}

/// POST /boardgames/{id}/delete
pub async fn delete_board_game(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    if !state.board_game_repo.delete_board_game(id).await? {
        return Ok(not_found_page("board game", id));
    }

    tracing::info!(board_game_id = id, "Deleted board game and its links");

    Ok(Redirect::to("/").into_response())
}
