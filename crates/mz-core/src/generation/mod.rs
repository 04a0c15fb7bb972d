//! Maze generation stages
//!
//! Boundary stamping, recursive division, then marker scattering. Each stage
//! mutates the grid in place and draws from the caller's RNG.

mod boundary;
mod hazard;
mod partition;
mod region;

pub use boundary::{place_boundary, Doors};
pub use hazard::{scatter, MarkerKind};
pub use partition::{partition, split_line, Junction, GAP_FLAGS};
pub use region::Region;
