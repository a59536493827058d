//! SQLite repository implementation.
//!
//! Implements the repository traits from `boardgames_core::storage` using SQLite.
//! Every write runs inside a single `rusqlite::Transaction`, which rolls back
//! when dropped without `commit`, so an early `?` leaves no partial rows.

use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use boardgames_core::inventory::{BoardGame, BoardGameDescriptor, Developer};
use boardgames_core::storage::{
    BoardGameRepository, DeveloperRepository, RepositoryError, Result,
};

use super::conversions::{row_to_board_game, row_to_developer};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Finds a board game by name, inserting it from the descriptor when missing.
fn resolve_board_game_id(
    conn: &rusqlite::Connection,
    descriptor: &BoardGameDescriptor,
) -> rusqlite::Result<i64> {
    let existing = conn
        .query_row(
            schema::SELECT_BOARD_GAME_ID_BY_NAME,
            [&descriptor.name],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            conn.execute(
                schema::INSERT_BOARD_GAME,
                rusqlite::params![descriptor.name, descriptor.rating, descriptor.description],
            )?;
            Ok(conn.last_insert_rowid())
        }
    }
}

/// Finds a developer by name, inserting them when missing.
fn resolve_developer_id(conn: &rusqlite::Connection, name: &str) -> rusqlite::Result<i64> {
    let existing = conn
        .query_row(schema::SELECT_DEVELOPER_ID_BY_NAME, [name], |row| row.get(0))
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            conn.execute(schema::INSERT_DEVELOPER, [name])?;
            Ok(conn.last_insert_rowid())
        }
    }
}

/// Resolves every descriptor and links it to the developer.
fn link_board_games(
    conn: &rusqlite::Connection,
    developer_id: i64,
    board_games: &[BoardGameDescriptor],
) -> rusqlite::Result<()> {
    for descriptor in board_games {
        let board_game_id = resolve_board_game_id(conn, descriptor)?;
        conn.execute(
            schema::INSERT_ASSOCIATION,
            rusqlite::params![developer_id, board_game_id],
        )?;
    }
    Ok(())
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for both entity types.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// BoardGameRepository implementation
// ============================================================================

#[async_trait]
impl BoardGameRepository for SqliteRepository {
    async fn list_board_games(&self) -> Result<Vec<BoardGame>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_BOARD_GAMES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_board_game).map_err(wrap_err)?;

                let mut games = Vec::new();
                for row_result in rows {
                    games.push(row_result.map_err(wrap_err)?);
                }
                Ok(games)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "BoardGame"))
    }

    async fn get_board_game(&self, id: i64) -> Result<Option<BoardGame>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_BOARD_GAME_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_board_game) {
                    Ok(game) => Ok(Some(game)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "BoardGame"))
    }

    async fn board_games_by_developer(&self, developer_id: i64) -> Result<Vec<BoardGame>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_BOARD_GAMES_BY_DEVELOPER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([developer_id], row_to_board_game)
                    .map_err(wrap_err)?;

                let mut games = Vec::new();
                for row_result in rows {
                    games.push(row_result.map_err(wrap_err)?);
                }
                Ok(games)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "BoardGame"))
    }

    async fn insert_board_game(
        &self,
        name: &str,
        rating: Option<f64>,
        description: Option<&str>,
        developer_names: &[String],
    ) -> Result<i64> {
        let name = name.to_string();
        let description = description.map(str::to_string);
        let developer_names = developer_names.to_vec();

        let id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(
                    schema::INSERT_BOARD_GAME,
                    rusqlite::params![name, rating, description],
                )
                .map_err(wrap_err)?;
                let board_game_id = tx.last_insert_rowid();

                for developer_name in &developer_names {
                    let developer_id =
                        resolve_developer_id(&tx, developer_name).map_err(wrap_err)?;
                    tx.execute(
                        schema::INSERT_ASSOCIATION,
                        rusqlite::params![developer_id, board_game_id],
                    )
                    .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(board_game_id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "BoardGame"))?;

        tracing::debug!(board_game_id = id, "Inserted board game");
        Ok(id)
    }

    async fn update_board_game(
        &self,
        id: i64,
        name: &str,
        rating: Option<f64>,
        description: Option<&str>,
    ) -> Result<bool> {
        let name = name.to_string();
        let description = description.map(str::to_string);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_BOARD_GAME,
                        rusqlite::params![id, name, rating, description],
                    )
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "BoardGame"))
    }

    async fn delete_board_game(&self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(schema::DELETE_ASSOCIATIONS_FOR_BOARD_GAME, [id])
                    .map_err(wrap_err)?;
                let rows = tx
                    .execute(schema::DELETE_BOARD_GAME, [id])
                    .map_err(wrap_err)?;

                tx.commit().map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "BoardGame"))?;

        tracing::debug!(board_game_id = id, deleted, "Deleted board game");
        Ok(deleted)
    }
}

// ============================================================================
// DeveloperRepository implementation
// ============================================================================

#[async_trait]
impl DeveloperRepository for SqliteRepository {
    async fn health_check(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::CHECK_DEVELOPERS_READABLE)
                    .map_err(wrap_err)?;
                stmt.exists([]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))
    }

    async fn list_developers(&self) -> Result<Vec<Developer>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_DEVELOPERS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_developer).map_err(wrap_err)?;

                let mut developers = Vec::new();
                for row_result in rows {
                    developers.push(row_result.map_err(wrap_err)?);
                }
                Ok(developers)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))
    }

    async fn get_developer(&self, id: i64) -> Result<Option<Developer>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_DEVELOPER_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_developer) {
                    Ok(developer) => Ok(Some(developer)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))
    }

    async fn developers_by_board_game(&self, board_game_id: i64) -> Result<Vec<Developer>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_DEVELOPERS_BY_BOARD_GAME)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([board_game_id], row_to_developer)
                    .map_err(wrap_err)?;

                let mut developers = Vec::new();
                for row_result in rows {
                    developers.push(row_result.map_err(wrap_err)?);
                }
                Ok(developers)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))
    }

    async fn insert_developer(
        &self,
        name: &str,
        board_games: &[BoardGameDescriptor],
    ) -> Result<i64> {
        let name = name.to_string();
        let board_games = board_games.to_vec();
        let game_count = board_games.len();

        let id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(schema::INSERT_DEVELOPER, [&name])
                    .map_err(wrap_err)?;
                let developer_id = tx.last_insert_rowid();

                link_board_games(&tx, developer_id, &board_games).map_err(wrap_err)?;

                tx.commit().map_err(wrap_err)?;
                Ok(developer_id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))?;

        tracing::debug!(developer_id = id, board_games = game_count, "Inserted developer");
        Ok(id)
    }

    async fn update_developer(
        &self,
        id: i64,
        name: &str,
        board_games: &[BoardGameDescriptor],
    ) -> Result<bool> {
        let name = name.to_string();
        let board_games = board_games.to_vec();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let rows = tx
                    .execute(schema::UPDATE_DEVELOPER_NAME, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Ok(false);
                }

                tx.execute(schema::DELETE_ASSOCIATIONS_FOR_DEVELOPER, [id])
                    .map_err(wrap_err)?;
                link_board_games(&tx, id, &board_games).map_err(wrap_err)?;

                tx.commit().map_err(wrap_err)?;
                Ok(true)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))
    }

    async fn delete_developer(&self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(schema::DELETE_ASSOCIATIONS_FOR_DEVELOPER, [id])
                    .map_err(wrap_err)?;
                let rows = tx
                    .execute(schema::DELETE_DEVELOPER, [id])
                    .map_err(wrap_err)?;

                tx.commit().map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Developer"))?;

        tracing::debug!(developer_id = id, deleted, "Deleted developer");
        Ok(deleted)
    }
}
