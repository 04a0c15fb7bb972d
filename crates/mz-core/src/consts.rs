//! Generation defaults

/// Hazard markers scattered over the room grid
pub const DEFAULT_HAZARD_COUNT: usize = 200;

/// Collectible markers scattered over the room grid
pub const DEFAULT_COLLECTIBLE_COUNT: usize = 5;

/// Steps subtracted from the traversal score to seed a move budget
/// (the two door cells are not moves).
pub const MOVE_BUDGET_OFFSET: i64 = 2;
