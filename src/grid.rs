// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, error::EngineError, matrix};

// Immutable board snapshot. 0 is an empty cell, otherwise an alphabet tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dim: matrix::Dim,
    tiles: Box<[u8]>,
}

#[inline(always)]
fn is_empty_char(c: char) -> bool {
    matches!(c, '.' | '_' | '-' | '*' | ' ')
}

impl Grid {
    pub fn new(dim: matrix::Dim, tiles: Box<[u8]>) -> Result<Grid, EngineError> {
        if dim.rows <= 0 || dim.cols <= 0 {
            return Err(EngineError::MalformedBoard(format!(
                "board must have at least one row and column, found {}x{}",
                dim.rows, dim.cols
            )));
        }
        if tiles.len() != dim.area() {
            return Err(EngineError::MalformedBoard(format!(
                "{}x{} board needs {} cells, found {}",
                dim.rows,
                dim.cols,
                dim.area(),
                tiles.len()
            )));
        }
        Ok(Grid { dim, tiles })
    }

    pub fn empty(dim: matrix::Dim) -> Grid {
        Grid {
            dim,
            tiles: vec![0u8; dim.area()].into_boxed_slice(),
        }
    }

    // One string per row. Letters are tiles, see is_empty_char for blanks.
    pub fn from_rows<S: AsRef<str>>(
        alphabet: &alphabet::Alphabet<'_>,
        rows: &[S],
    ) -> Result<Grid, EngineError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if num_rows > i8::MAX as usize || num_cols > i8::MAX as usize {
            return Err(EngineError::MalformedBoard(format!(
                "{}x{} board is too large",
                num_rows, num_cols
            )));
        }
        let mut tiles = Vec::with_capacity(num_rows * num_cols);
        for (row_num, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let row_len = row.chars().count();
            if row_len != num_cols {
                return Err(EngineError::MalformedBoard(format!(
                    "row {} (0-based) has {} cells, expected {}",
                    row_num, row_len, num_cols
                )));
            }
            for (col_num, c) in row.chars().enumerate() {
                if is_empty_char(c) {
                    tiles.push(0);
                } else if let Some(tile) = alphabet.tile_of(c) {
                    tiles.push(tile);
                } else {
                    return Err(EngineError::MalformedBoard(format!(
                        "row {} col {} (0-based): invalid tile {:?}",
                        row_num, col_num, c
                    )));
                }
            }
        }
        Grid::new(
            matrix::Dim {
                rows: num_rows as i8,
                cols: num_cols as i8,
            },
            tiles.into_boxed_slice(),
        )
    }

    // Blank lines are skipped, so a trailing newline is harmless.
    pub fn from_file<P: AsRef<std::path::Path>>(
        alphabet: &alphabet::Alphabet<'_>,
        path: P,
    ) -> error::Returns<Grid> {
        let giant_string = std::fs::read_to_string(path.as_ref())?;
        let rows = giant_string
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();
        let grid = Grid::from_rows(alphabet, &rows)?;
        log::debug!(
            "read {}x{} board with {} tiles from {}",
            grid.dim.rows,
            grid.dim.cols,
            grid.num_tiles(),
            path.as_ref().display()
        );
        Ok(grid)
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    #[inline(always)]
    pub fn row_len(&self, _row: i8) -> i8 {
        self.dim.cols
    }

    #[inline(always)]
    pub fn cell_at(&self, row: i8, col: i8) -> u8 {
        self.tiles[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.cell_at(row, col) != 0
    }

    pub fn check_position(&self, pos: matrix::Position) -> Result<(), EngineError> {
        if self.dim.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::InvalidPosition {
                row: pos.row,
                col: pos.col,
                rows: self.dim.rows,
                cols: self.dim.cols,
            })
        }
    }

    pub fn try_cell_at(&self, pos: matrix::Position) -> Result<u8, EngineError> {
        self.check_position(pos)?;
        Ok(self.cell_at(pos.row, pos.col))
    }

    // The len cells starting at (row, col), clipped to the row.
    #[inline(always)]
    pub fn row_slice(&self, row: i8, col: i8, len: i8) -> &[u8] {
        let start = self.dim.at_row_col(row, col);
        let end_col = std::cmp::min(col as i16 + len as i16, self.dim.cols as i16) as i8;
        let end = self.dim.at_row_col(row, end_col);
        &self.tiles[start..end]
    }

    pub fn transpose(&self) -> Grid {
        Grid {
            dim: self.dim.transposed(),
            tiles: self.dim.transpose_cells(&self.tiles),
        }
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.iter().filter(|&&t| t != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|&t| t == 0)
    }

    // Hypothetical board with word written across from (row, col). Cells
    // already occupied keep their tile.
    pub fn with_word_across(&self, row: i8, col: i8, word: &[u8]) -> Grid {
        let mut tiles = self.tiles.clone();
        let strider = self.dim.across(row);
        for (i, &tile) in (col..self.dim.cols).zip(word.iter()) {
            let at = strider.at(i);
            if tiles[at] == 0 {
                tiles[at] = tile;
            }
        }
        Grid {
            dim: self.dim,
            tiles,
        }
    }

    pub fn with_word(&self, pos: matrix::Position, down: bool, word: &[u8]) -> Grid {
        if down {
            self.transpose()
                .with_word_across(pos.col, pos.row, word)
                .transpose()
        } else {
            self.with_word_across(pos.row, pos.col, word)
        }
    }
}
