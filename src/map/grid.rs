use std::fmt;

use glam::IVec2;

use crate::error::MapError;
use crate::map::tile::Tile;

/// A mutable, rectangular grid of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
    width: usize,
}

impl Grid {
    /// Builds a grid from rows the parser has already checked for equal length.
    pub(crate) fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.rows.len()
    }

    /// Returns the tile at `pos`, or `None` when it lies outside the grid.
    pub fn get(&self, pos: IVec2) -> Option<Tile> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.rows[pos.y as usize][pos.x as usize])
    }

    /// Bounds-checked lookup; an out-of-grid position is an error, never a silent default.
    pub fn tile(&self, pos: IVec2) -> Result<Tile, MapError> {
        self.get(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Replaces the tile at `pos`.
    pub fn set(&mut self, pos: IVec2, tile: Tile) -> Result<(), MapError> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        self.rows[pos.y as usize][pos.x as usize] = tile;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over every cell with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (IVec2::new(x as i32, y as i32), *tile))
        })
    }

    fn out_of_bounds(&self, pos: IVec2) -> MapError {
        MapError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.rows.len(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for tile in row {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::parser::LevelParser;

    fn sample() -> Grid {
        LevelParser::parse_grid(&["###", "#.€", "###"]).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let grid = sample();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn test_lookup_in_and_out_of_bounds() {
        let grid = sample();
        assert_eq!(grid.get(IVec2::new(2, 1)), Some(Tile::Coin));
        assert_eq!(grid.get(IVec2::new(3, 1)), None);
        assert_eq!(grid.get(IVec2::new(-1, 0)), None);
        assert_eq!(
            grid.tile(IVec2::new(1, 11)),
            Err(MapError::OutOfBounds {
                x: 1,
                y: 11,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_set_mutates_in_place() {
        let mut grid = sample();
        grid.set(IVec2::new(2, 1), Tile::Floor).unwrap();
        assert_eq!(grid.get(IVec2::new(2, 1)), Some(Tile::Floor));
        assert!(grid.set(IVec2::new(5, 5), Tile::Floor).is_err());
    }

    #[test]
    fn test_display_matches_source() {
        assert_eq!(sample().to_string(), "###\n#.€\n###\n");
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = sample();
        let coin = grid.cells().find(|(_, t)| *t == Tile::Coin).map(|(p, _)| p);
        assert_eq!(coin, Some(IVec2::new(2, 1)));
        assert_eq!(grid.cells().count(), 9);
    }
}
