//! Centralized error types for the dungeon game.
//!
//! Level and grid errors are programming or content errors and are fatal;
//! collaborator failures (audio, assets) are reported through [`AssetError`]
//! and handled softly by the frontends.

use std::io;

/// Main error type for the dungeon game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Level parsing error: {0}")]
    LevelParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for level construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character {symbol:?} at row {row}, column {column}")]
    UnknownCharacter { symbol: char, row: usize, column: usize },

    #[error("Row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Level has no rows")]
    EmptyLevel,

    #[error("{what} placed outside the grid at ({x}, {y})")]
    PlacementOutOfBounds { what: &'static str, x: i32, y: i32 },
}

/// Errors related to grid lookups.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: usize, height: usize },

    #[error("Level index {0} does not exist")]
    NoSuchLevel(usize),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
