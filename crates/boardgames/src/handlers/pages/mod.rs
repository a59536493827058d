//! Server-rendered HTML pages.
//!
//! Validation failures re-render the submitted form with a message; storage
//! failures go through [`AppError`](crate::handlers::AppError). Successful
//! form posts answer with `303 See Other`.

mod board_games;
mod developers;

pub use board_games::{
    add_board_game_form, board_game_detail, create_board_game, delete_board_game,
    edit_board_game_form, list_board_games, update_board_game,
};
pub use developers::{
    add_developer_form, create_developer, delete_developer, developer_detail,
    edit_developer_form, list_developers, update_developer,
};

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use boardgames_core::inventory::{BoardGame, Developer};

use crate::{handlers::AppError, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Index page listing both entity types.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    board_games: Vec<BoardGame>,
    developers: Vec<Developer>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    entity: &'static str,
    id: i64,
}

/// 404 page for a missing board game or developer.
fn not_found_page(entity: &'static str, id: i64) -> Response {
    tracing::debug!(entity, id, "Page not found");
    (StatusCode::NOT_FOUND, HtmlTemplate(NotFoundTemplate { entity, id })).into_response()
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let board_games = state.board_game_repo.list_board_games().await?;
    let developers = state.developer_repo.list_developers().await?;

    Ok(HtmlTemplate(IndexTemplate {
        board_games,
        developers,
    })
    .into_response())
}
