mod board_game;
mod developer;

pub use board_game::BoardGameForm;
pub use developer::{board_game_lines, DeveloperForm};
