//! Level parsing: turns the literal row strings of a level into a [`Grid`].

use crate::error::ParseError;
use crate::map::grid::Grid;
use crate::map::tile::Tile;

/// Parser for converting raw level layouts into grids.
pub struct LevelParser;

impl LevelParser {
    /// Parses a single character into a tile.
    ///
    /// `row` and `column` are only used to describe the failure.
    pub fn parse_character(c: char, row: usize, column: usize) -> Result<Tile, ParseError> {
        Tile::from_char(c).ok_or(ParseError::UnknownCharacter { symbol: c, row, column })
    }

    /// Parses a raw layout into a grid.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, if any row differs in length from
    /// the first, or if a character is outside the tile alphabet.
    pub fn parse_grid<S: AsRef<str>>(raw: &[S]) -> Result<Grid, ParseError> {
        let mut rows = Vec::with_capacity(raw.len());
        let mut expected = None;

        for (y, line) in raw.iter().enumerate() {
            let row = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(x, c)| Self::parse_character(c, y, x))
                .collect::<Result<Vec<_>, _>>()?;

            let expected = *expected.get_or_insert(row.len());
            if row.len() != expected {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        if rows.is_empty() || expected == Some(0) {
            return Err(ParseError::EmptyLevel);
        }

        Ok(Grid::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character() {
        assert_eq!(LevelParser::parse_character('#', 0, 0), Ok(Tile::Wall));
        assert_eq!(LevelParser::parse_character('€', 0, 0), Ok(Tile::Coin));
        assert_eq!(
            LevelParser::parse_character('Z', 4, 7),
            Err(ParseError::UnknownCharacter {
                symbol: 'Z',
                row: 4,
                column: 7
            })
        );
    }

    #[test]
    fn test_coin_symbol_counts_as_one_column() {
        let grid = LevelParser::parse_grid(&["#€€#"]).unwrap();
        assert_eq!(grid.width(), 4);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let result = LevelParser::parse_grid(&["####", "#..#", "###"]);
        assert_eq!(
            result,
            Err(ParseError::RaggedRow {
                row: 2,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_empty_level_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(LevelParser::parse_grid(&empty), Err(ParseError::EmptyLevel));
        assert_eq!(LevelParser::parse_grid(&["", ""]), Err(ParseError::EmptyLevel));
    }

    #[test]
    fn test_unknown_symbol_reports_position() {
        let result = LevelParser::parse_grid(&["###", "#u#"]);
        assert!(matches!(
            result,
            Err(ParseError::UnknownCharacter {
                symbol: 'u',
                row: 1,
                column: 1
            })
        ));
    }
}
