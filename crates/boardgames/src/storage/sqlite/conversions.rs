//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without the repository.

use boardgames_core::inventory::{BoardGame, Developer};
use rusqlite::Row;

/// Convert a SQLite row to a BoardGame.
///
/// Expected columns: boardgame_id, boardgame_name, boardgame_rating, boardgame_desc
pub fn row_to_board_game(row: &Row) -> rusqlite::Result<BoardGame> {
    Ok(BoardGame {
        id: row.get(0)?,
        name: row.get(1)?,
        rating: row.get(2)?,
        description: row.get(3)?,
    })
}

/// Convert a SQLite row to a Developer.
///
/// Expected columns: developer_id, developer_name
pub fn row_to_developer(row: &Row) -> rusqlite::Result<Developer> {
    Ok(Developer {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_row_to_board_game_with_all_columns() {
        let conn = Connection::open_in_memory().unwrap();
        let game = conn
            .query_row(
                "SELECT 7, 'Catan', 8.1, 'Trade and build'",
                [],
                row_to_board_game,
            )
            .unwrap();

        assert_eq!(
            game,
            BoardGame::new(7, "Catan")
                .with_rating(8.1)
                .with_description("Trade and build")
        );
    }

    #[test]
    fn test_row_to_board_game_with_nulls() {
        let conn = Connection::open_in_memory().unwrap();
        let game = conn
            .query_row("SELECT 1, 'Agricola', NULL, NULL", [], row_to_board_game)
            .unwrap();

        assert_eq!(game, BoardGame::new(1, "Agricola"));
    }

    #[test]
    fn test_row_to_board_game_integer_rating() {
        // NUMERIC columns may hand back integers for whole numbers.
        let conn = Connection::open_in_memory().unwrap();
        let game = conn
            .query_row("SELECT 1, 'Azul', 8, NULL", [], row_to_board_game)
            .unwrap();

        assert_eq!(game.rating, Some(8.0));
    }

    #[test]
    fn test_row_to_developer() {
        let conn = Connection::open_in_memory().unwrap();
        let developer = conn
            .query_row("SELECT 3, 'Klaus Teuber'", [], row_to_developer)
            .unwrap();

        assert_eq!(developer, Developer::new(3, "Klaus Teuber"));
    }

    #[test]
    fn test_row_to_developer_rejects_null_name() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.query_row("SELECT 3, NULL", [], row_to_developer);

        assert!(result.is_err());
    }
}
