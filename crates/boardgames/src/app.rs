use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{board_games, developers, health, pages},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let api_routes = Router::new()
        // Board game routes
        .route(
            "/boardgames",
            get(board_games::list_board_games).post(board_games::create_board_game),
        )
        .route(
            "/boardgames/{id}",
            get(board_games::get_board_game)
                .put(board_games::update_board_game)
                .delete(board_games::delete_board_game),
        )
        .route(
            "/boardgames/{id}/developers",
            get(board_games::list_board_game_developers),
        )
        // Developer routes
        .route(
            "/developers",
            get(developers::list_developers).post(developers::create_developer),
        )
        .route(
            "/developers/{id}",
            get(developers::get_developer)
                .put(developers::update_developer)
                .delete(developers::delete_developer),
        )
        .route(
            "/developers/{id}/boardgames",
            get(developers::list_developer_board_games),
        );

    // HTML pages
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route(
            "/boardgames",
            get(pages::list_board_games).post(pages::create_board_game),
        )
        .route("/boardgames/add", get(pages::add_board_game_form))
        .route("/boardgames/{id}", get(pages::board_game_detail))
        .route(
            "/boardgames/{id}/edit",
            get(pages::edit_board_game_form).post(pages::update_board_game),
        )
        .route("/boardgames/{id}/delete", post(pages::delete_board_game))
        .route(
            "/developers",
            get(pages::list_developers).post(pages::create_developer),
        )
        .route("/developers/add", get(pages::add_developer_form))
        .route("/developers/{id}", get(pages::developer_detail))
        .route(
            "/developers/{id}/edit",
            get(pages::edit_developer_form).post(pages::update_developer),
        )
        .route("/developers/{id}/delete", post(pages::delete_developer));

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
