pub mod board_games;
pub mod developers;
pub mod error;
pub mod health;
pub mod pages;

pub use error::AppError;
