//! This module contains the tile alphabet and the grid a level is played on.

pub mod grid;
pub mod parser;
pub mod tile;

pub use grid::Grid;
pub use parser::LevelParser;
pub use tile::{Tile, Traversal};
