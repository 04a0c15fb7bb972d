//! mz-core: recursive-division maze generation
//!
//! Builds a rectangular maze with one entrance (bottom edge) and one exit
//! (top edge), divides the interior recursively while always leaving three
//! of four gaps in every wall cross, scatters hazards and collectibles, and
//! scores the result with two breadth-first distance maps.
//!
//! The crate has no I/O. Rendering, movement and combat live in whatever
//! consumes [`Maze`].
//!
//! ```
//! use mz_core::{GameRng, Maze};
//!
//! let mut rng = GameRng::new(42);
//! let maze = Maze::generate(8, 6, &mut rng).unwrap();
//! assert_eq!(maze.grid().dimensions(), (13, 17));
//! ```

pub mod analysis;
pub mod generation;
pub mod grid;

mod config;
mod consts;
mod error;
mod maze;
mod rng;

pub use analysis::{analyze, flood_fill, Analysis, DistanceMap};
pub use config::MazeConfig;
pub use consts::*;
pub use error::{MazeError, Result};
pub use grid::{Cell, CellTags, Direction, Grid, GridPos, SpaceIndex, WallIndex};
pub use maze::Maze;
pub use rng::GameRng;
