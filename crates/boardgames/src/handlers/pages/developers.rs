use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use boardgames_core::inventory::{BoardGame, Developer, InventoryError};

use super::{not_found_page, HtmlTemplate};
use crate::{
    handlers::AppError,
    models::{board_game_lines, DeveloperForm},
    state::AppState,
};

#[derive(Template)]
#[template(path = "developers.html")]
struct DeveloperListTemplate {
    developers: Vec<Developer>,
}

#[derive(Template)]
#[template(path = "developer.html")]
struct DeveloperDetailTemplate {
    developer: Developer,
    board_games: Vec<BoardGame>,
}

#[derive(Template, Default)]
#[template(path = "developer_form.html")]
struct DeveloperFormTemplate {
    heading: &'static str,
    action: String,
    name: String,
    board_games: String,
    error: Option<String>,
}

impl DeveloperFormTemplate {
    fn add() -> Self {
        Self {
            heading: "Add developer",
            action: "/developers".to_string(),
            ..Default::default()
        }
    }

    fn edit(id: i64) -> Self {
        Self {
            heading: "Edit developer",
            action: format!("/developers/{id}/edit"),
            ..Default::default()
        }
    }

    fn with_form(mut self, form: &DeveloperForm) -> Self {
        self.name = form.name.clone();
        self.board_games = form.board_games.clone();
        self
    }

    fn rejected(mut self, error: InventoryError) -> Response {
        tracing::debug!(error = %error, "Developer form rejected");
        self.error = Some(error.to_string());
        (StatusCode::BAD_REQUEST, HtmlTemplate(self)).into_response()
    }
}

/// GET /developers
pub async fn list_developers(State(state): State<AppState>) -> Result<Response, AppError> {
    let developers = state.developer_repo.list_developers().await?;

    Ok(HtmlTemplate(DeveloperListTemplate { developers }).into_response())
}

/// GET /developers/{id}
pub async fn developer_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(developer) = state.developer_repo.get_developer(id).await? else {
        return Ok(not_found_page("developer", id));
    };
    let board_games = state.board_game_repo.board_games_by_developer(id).await?;

    Ok(HtmlTemplate(DeveloperDetailTemplate {
        developer,
        board_games,
    })
    .into_response())
}

/// GET /developers/add
pub async fn add_developer_form() -> Response {
    HtmlTemplate(DeveloperFormTemplate::add()).into_response()
}

/// POST /developers
///
/// Board games named in the form are reused when they already exist.
pub async fn create_developer(
    State(state): State<AppState>,
    Form(form): Form<DeveloperForm>,
) -> Result<Response, AppError> {
    let template = DeveloperFormTemplate::add().with_form(&form);
    let request = match form
        .into_create_request()
        .and_then(|request| request.validate())
    {
        Ok(request) => request,
        Err(err) => return Ok(template.rejected(err)),
    };

    let id = state
        .developer_repo
        .insert_developer(&request.name, &request.board_games)
        .await?;

    tracing::info!(developer_id = id, name = %request.name, "Created developer");

    Ok(Redirect::to("/").into_response())
}

/// GET /developers/{id}/edit
pub async fn edit_developer_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(developer) = state.developer_repo.get_developer(id).await? else {
        return Ok(not_found_page("developer", id));
    };
    let board_games = state.board_game_repo.board_games_by_developer(id).await?;

    let template = DeveloperFormTemplate {
        name: developer.name,
        board_games: board_game_lines(&board_games),
        ..DeveloperFormTemplate::edit(id)
    };

    Ok(HtmlTemplate(template).into_response())
}

/// POST /developers/{id}/edit - renames and replaces every board game link.
pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeveloperForm>,
) -> Result<Response, AppError> {
    let template = DeveloperFormTemplate::edit(id).with_form(&form);
    let request = match form
        .into_update_request()
        .and_then(|request| request.validate())
    {
        Ok(request) => request,
        Err(err) => return Ok(template.rejected(err)),
    };

    let updated = state
        .developer_repo
        .update_developer(id, &request.name, &request.board_games)
        .await?;
    if !updated {
        return Ok(not_found_page("developer", id));
    }

    tracing::info!(
        developer_id = id,
        board_games = request.board_games.len(),
        "Updated developer"
    );

    Ok(Redirect::to(&format!("/developers/{id}")).into_response())
}

/// POST /developers/{id}/delete
pub async fn delete_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    if !state.developer_repo.delete_developer(id).await? {
        return Ok(not_found_page("developer", id));
    }

    tracing::info!(developer_id = id, "Deleted developer and their links");

    Ok(Redirect::to("/").into_response())
}
