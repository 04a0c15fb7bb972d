//! Maze assembly
//!
//! Runs the stages in order: boundary, recursive division, hazards,
//! collectibles, then connectivity analysis.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, Analysis};
use crate::config::MazeConfig;
use crate::consts::MOVE_BUDGET_OFFSET;
use crate::error::{MazeError, Result};
use crate::generation::{partition, place_boundary, scatter, Junction, MarkerKind, Region};
use crate::grid::{CellTags, Grid, GridPos};
use crate::rng::GameRng;

/// A generated maze and its traversal score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,
    grid: Grid,
    entrance: GridPos,
    exit: GridPos,
    junctions: Vec<Junction>,
    hazards: Vec<GridPos>,
    collectibles: Vec<GridPos>,
    score: Option<u32>,
    deepest: Option<GridPos>,
}

/// Reject anything smaller than one room per side
fn validate(width: i64, height: i64) -> Result<(usize, usize)> {
    let invalid = || MazeError::InvalidDimensions { width, height };
    if width < 1 || height < 1 {
        return Err(invalid());
    }
    let w = usize::try_from(width).map_err(|_| invalid())?;
    let h = usize::try_from(height).map_err(|_| invalid())?;
    Ok((w, h))
}

impl Maze {
    /// Build a `width` x `height` maze with the default marker counts
    pub fn generate(width: i64, height: i64, rng: &mut GameRng) -> Result<Self> {
        Self::from_config(&MazeConfig::new(width, height), rng)
    }

    /// Build a maze from `config`, drawing from `rng`.
    ///
    /// `config.seed` is ignored here; the caller owns the RNG.
    pub fn from_config(config: &MazeConfig, rng: &mut GameRng) -> Result<Self> {
        let (width, height) = validate(config.width, config.height)?;

        let mut grid = Grid::new(2 * height + 1, 2 * width + 1);
        let doors = place_boundary(&mut grid, width, rng);
        let junctions = partition(&mut grid, Region::interior(width, height), rng);
        let hazards = scatter(
            &mut grid,
            MarkerKind::Hazard,
            config.hazard_count,
            width,
            height,
            rng,
        );
        let collectibles = scatter(
            &mut grid,
            MarkerKind::Collectible,
            config.collectible_count,
            width,
            height,
            rng,
        );

        let Analysis { score, deepest, .. } = analyze(&grid);
        debug!(
            "generated {}x{} maze: {} crosses, {} hazards, {} collectibles, score {:?}",
            width,
            height,
            junctions.len(),
            hazards.len(),
            collectibles.len(),
            score
        );

        Ok(Self {
            width,
            height,
            grid,
            entrance: doors.entrance,
            exit: doors.exit,
            junctions,
            hazards,
            collectibles,
            score,
            deepest,
        })
    }

    /// Build a maze with an RNG seeded from `config.seed`, or from entropy
    pub fn build(config: &MazeConfig) -> Result<Self> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::from_config(config, &mut rng)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entrance(&self) -> GridPos {
        self.entrance
    }

    pub fn exit(&self) -> GridPos {
        self.exit
    }

    /// Every wall cross drawn during division
    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Hazard placements in draw order (repeats included)
    pub fn hazards(&self) -> &[GridPos] {
        &self.hazards
    }

    /// Collectible placements in draw order (repeats included)
    pub fn collectibles(&self) -> &[GridPos] {
        &self.collectibles
    }

    /// Traversal score: see [`crate::analysis`] for why this is an estimate
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// Cell where the score was found
    pub fn deepest(&self) -> Option<GridPos> {
        self.deepest
    }

    /// Steps a walker starts with: the score minus the two doors
    pub fn move_budget(&self) -> Option<i64> {
        self.score.map(|s| i64::from(s) - MOVE_BUDGET_OFFSET)
    }

    /// Run the analysis again on the current grid
    pub fn analysis(&self) -> Analysis {
        analyze(&self.grid)
    }

    /// Recompute the score after the grid changed
    pub fn reanalyze(&mut self) -> Option<u32> {
        let Analysis { score, deepest, .. } = analyze(&self.grid);
        self.score = score;
        self.deepest = deepest;
        score
    }

    /// Clear a beaten hazard so the cell becomes open.
    /// Returns `false` if there was no hazard at `pos`.
    pub fn defeat_hazard(&mut self, pos: GridPos) -> bool {
        let has_hazard = self
            .grid
            .at(pos)
            .is_some_and(|cell| cell.has(CellTags::HAZARD));
        has_hazard && self.grid.remove_tags(pos.row, pos.col, CellTags::HAZARD | CellTags::WALL)
    }

    /// Pick up a collectible. Returns `false` if there was none at `pos`.
    pub fn take_collectible(&mut self, pos: GridPos) -> bool {
        self.grid.remove_tags(pos.row, pos.col, CellTags::COLLECTIBLE)
    }
}
