mod error;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::InventoryError;
pub use mock_data::demo_catalog;
pub use operations::{
    normalize_description, parse_board_game_lines, parse_developer_names, parse_rating,
    validate_board_game_name, validate_descriptor, validate_developer_name, validate_rating,
};
pub use requests::{
    CreateBoardGameRequest, CreateDeveloperRequest, UpdateBoardGameRequest,
    UpdateDeveloperRequest,
};
pub use types::{Association, BoardGame, BoardGameDescriptor, Developer};
