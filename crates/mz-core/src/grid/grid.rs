//! Bounds-checked cell grid

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, CellTags, Direction, GridPos};

/// Rectangular array of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-open grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::open(); rows * cols],
        }
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        if self.in_bounds(row, col) {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at (row, col), `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.idx(row, col).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.idx(row, col).map(|idx| &mut self.cells[idx])
    }

    pub fn at(&self, pos: GridPos) -> Option<&Cell> {
        self.get(pos.row, pos.col)
    }

    /// Replace the cell at (row, col). Returns `false` (and does nothing)
    /// when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.get_mut(row, col) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Clear `tags` from the cell at (row, col).
    ///
    /// Returns whether the cell carried any of them.
    pub fn remove_tags(&mut self, row: usize, col: usize, tags: CellTags) -> bool {
        match self.get_mut(row, col) {
            Some(cell) if cell.tags.intersects(tags) => {
                cell.tags.remove(tags);
                true
            }
            _ => false,
        }
    }

    /// Neighbour of `pos` in `dir`, if it lies inside the grid
    pub fn neighbor(&self, pos: GridPos, dir: Direction) -> Option<GridPos> {
        pos.step(dir)
            .filter(|next| self.in_bounds(next.row, next.col))
    }

    /// All cells with their positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (GridPos::new(idx / cols, idx % cols), cell))
    }

    /// Positions of cells carrying every tag in `tags`
    pub fn positions_with(&self, tags: CellTags) -> Vec<GridPos> {
        self.iter()
            .filter(|(_, cell)| cell.has(tags))
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count_with(&self, tags: CellTags) -> usize {
        self.cells.iter().filter(|cell| cell.has(tags)).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
