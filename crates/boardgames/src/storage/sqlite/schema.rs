//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// Foreign keys are off by default in SQLite and must be enabled per connection.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

/// SQL statement to create all tables.
///
/// The join table has no `ON DELETE CASCADE`: the repository removes
/// association rows itself before deleting either side.
pub const CREATE_TABLES: &str = r#"
-- Board games table
CREATE TABLE IF NOT EXISTS boardgames (
    boardgame_id INTEGER PRIMARY KEY AUTOINCREMENT,
    boardgame_name TEXT NOT NULL UNIQUE,
    boardgame_rating REAL,
    boardgame_desc TEXT
);

-- Developers table
CREATE TABLE IF NOT EXISTS developers (
    developer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    developer_name TEXT NOT NULL UNIQUE
);

-- Developer <-> board game join table
CREATE TABLE IF NOT EXISTS developers_board_games (
    developer_id INTEGER NOT NULL,
    boardgame_id INTEGER NOT NULL,
    PRIMARY KEY (developer_id, boardgame_id),
    FOREIGN KEY (developer_id) REFERENCES developers(developer_id),
    FOREIGN KEY (boardgame_id) REFERENCES boardgames(boardgame_id)
);

CREATE INDEX IF NOT EXISTS idx_developers_board_games_boardgame_id
    ON developers_board_games(boardgame_id);
"#;

// Board game queries
pub const SELECT_ALL_BOARD_GAMES: &str = r#"
SELECT boardgame_id, boardgame_name, boardgame_rating, boardgame_desc
FROM boardgames
ORDER BY boardgame_id
"#;

pub const SELECT_BOARD_GAME_BY_ID: &str = r#"
SELECT boardgame_id, boardgame_name, boardgame_rating, boardgame_desc
FROM boardgames
WHERE boardgame_id = ?1
"#;

pub const SELECT_BOARD_GAME_ID_BY_NAME: &str = r#"
SELECT boardgame_id
FROM boardgames
WHERE boardgame_name = ?1
"#;

pub const INSERT_BOARD_GAME: &str = r#"
INSERT INTO boardgames (boardgame_name, boardgame_rating, boardgame_desc)
VALUES (?1, ?2, ?3)
"#;

pub const UPDATE_BOARD_GAME: &str = r#"
UPDATE boardgames
SET boardgame_name = ?2, boardgame_rating = ?3, boardgame_desc = ?4
WHERE boardgame_id = ?1
"#;

pub const DELETE_BOARD_GAME: &str = r#"
DELETE FROM boardgames
WHERE boardgame_id = ?1
"#;

pub const SELECT_BOARD_GAMES_BY_DEVELOPER: &str = r#"
SELECT bg.boardgame_id, bg.boardgame_name, bg.boardgame_rating, bg.boardgame_desc
FROM boardgames bg
INNER JOIN developers_board_games dbg ON bg.boardgame_id = dbg.boardgame_id
WHERE dbg.developer_id = ?1
ORDER BY bg.boardgame_id
"#;

// Developer queries
pub const CHECK_DEVELOPERS_READABLE: &str = r#"
SELECT 1 FROM developers LIMIT 1
"#;

pub const SELECT_ALL_DEVELOPERS: &str = r#"
SELECT developer_id, developer_name
FROM developers
ORDER BY developer_id
"#;

pub const SELECT_DEVELOPER_BY_ID: &str = r#"
SELECT developer_id, developer_name
FROM developers
WHERE developer_id = ?1
"#;

pub const SELECT_DEVELOPER_ID_BY_NAME: &str = r#"
SELECT developer_id
FROM developers
WHERE developer_name = ?1
"#;

pub const INSERT_DEVELOPER: &str = r#"
INSERT INTO developers (developer_name)
VALUES (?1)
"#;

pub const UPDATE_DEVELOPER_NAME: &str = r#"
UPDATE developers
SET developer_name = ?2
WHERE developer_id = ?1
"#;

pub const DELETE_DEVELOPER: &str = r#"
DELETE FROM developers
WHERE developer_id = ?1
"#;

pub const SELECT_DEVELOPERS_BY_BOARD_GAME: &str = r#"
SELECT d.developer_id, d.developer_name
FROM developers d
INNER JOIN developers_board_games dbg ON d.developer_id = dbg.developer_id
WHERE dbg.boardgame_id = ?1
ORDER BY d.developer_id
"#;

// Association queries
pub const INSERT_ASSOCIATION: &str = r#"
INSERT INTO developers_board_games (developer_id, boardgame_id)
VALUES (?1, ?2)
"#;

pub const DELETE_ASSOCIATIONS_FOR_DEVELOPER: &str = r#"
DELETE FROM developers_board_games
WHERE developer_id = ?1
"#;

pub const DELETE_ASSOCIATIONS_FOR_BOARD_GAME: &str = r#"
DELETE FROM developers_board_games
WHERE boardgame_id = ?1
"#;
