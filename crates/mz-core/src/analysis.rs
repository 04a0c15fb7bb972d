//! Connectivity analysis
//!
//! Two breadth-first distance maps, one from the entrance and one from the
//! exit, combined into a traversal score.
//!
//! The score is the largest `from_entrance + from_exit` over cells reached by
//! both fills. It is an upper-bound difficulty estimate used to seed move
//! budgets, **not** the shortest entrance-to-exit path: in a branchy maze a
//! dead end far from both doors scores well above the direct route.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::grid::{CellTags, Direction, Grid, GridPos};

/// Step counts from one flood-fill source, `None` where unreached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMap {
    rows: usize,
    cols: usize,
    steps: Vec<Option<u32>>,
}

impl DistanceMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            steps: vec![None; rows * cols],
        }
    }

    fn idx(&self, pos: GridPos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Distance recorded at `pos`, `None` if unreached or out of bounds
    pub fn get(&self, pos: GridPos) -> Option<u32> {
        self.idx(pos).and_then(|idx| self.steps[idx])
    }

    /// Record `steps` at `pos` when it beats what is already there.
    /// Returns whether the entry changed.
    fn improve(&mut self, pos: GridPos, steps: u32) -> bool {
        let Some(idx) = self.idx(pos) else {
            return false;
        };
        match self.steps[idx] {
            Some(known) if known <= steps => false,
            _ => {
                self.steps[idx] = Some(steps);
                true
            }
        }
    }

    pub fn reached(&self) -> usize {
        self.steps.iter().filter(|s| s.is_some()).count()
    }
}

/// Flood fill from every cell in `sources` at distance 0.
///
/// A cell is recorded only if it is passable and no shorter distance is
/// known. Cells carrying `target` are recorded but not expanded: the fill
/// stops at the opposite landmark.
pub fn flood_fill(grid: &Grid, sources: &[GridPos], target: CellTags) -> DistanceMap {
    let (rows, cols) = grid.dimensions();
    let mut map = DistanceMap::new(rows, cols);
    let mut queue: VecDeque<(GridPos, u32)> = sources.iter().map(|&pos| (pos, 0)).collect();

    while let Some((pos, steps)) = queue.pop_front() {
        let Some(cell) = grid.at(pos) else {
            continue;
        };
        if !cell.is_passable() || !map.improve(pos, steps) {
            continue;
        }
        if cell.has(target) {
            continue;
        }
        for dir in Direction::iter() {
            if let Some(next) = grid.neighbor(pos, dir) {
                queue.push_back((next, steps + 1));
            }
        }
    }

    map
}

/// Result of analysing a finished grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub from_entrance: DistanceMap,
    pub from_exit: DistanceMap,
    /// Largest combined distance; `None` if no cell is reached from both doors
    pub score: Option<u32>,
    /// First cell (row-major) achieving `score`
    pub deepest: Option<GridPos>,
}

impl Analysis {
    /// Whether the entrance fill reached an exit cell
    pub fn is_connected(&self, grid: &Grid) -> bool {
        grid.positions_with(CellTags::EXIT)
            .into_iter()
            .any(|pos| self.from_entrance.get(pos).is_some())
    }
}

/// Door cells on one boundary row, scanning the non-corner columns
fn boundary_doors(grid: &Grid, row: usize, tag: CellTags) -> Vec<GridPos> {
    let cols = grid.cols();
    (1..cols.saturating_sub(1))
        .map(|col| GridPos::new(row, col))
        .filter(|pos| grid.at(*pos).is_some_and(|cell| cell.has(tag)))
        .collect()
}

/// Run both fills and derive the traversal score.
///
/// The entrance is looked up on the bottom row, the exit on the top row.
pub fn analyze(grid: &Grid) -> Analysis {
    let bottom = grid.rows().saturating_sub(1);
    let entrances = boundary_doors(grid, bottom, CellTags::ENTRANCE);
    let exits = boundary_doors(grid, 0, CellTags::EXIT);

    let from_entrance = flood_fill(grid, &entrances, CellTags::EXIT);
    let from_exit = flood_fill(grid, &exits, CellTags::ENTRANCE);

    let mut score = None;
    let mut deepest = None;
    for (pos, _) in grid.iter() {
        let (Some(a), Some(b)) = (from_entrance.get(pos), from_exit.get(pos)) else {
            continue;
        };
        let total = a + b;
        if score.is_none_or(|best| total > best) {
            score = Some(total);
            deepest = Some(pos);
        }
    }

    Analysis {
        from_entrance,
        from_exit,
        score,
        deepest,
    }
}
