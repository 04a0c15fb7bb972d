//! End-to-end maze scenarios

use mz_core::{
    analyze, Cell, CellTags, GameRng, GridPos, Maze, MazeConfig, MazeError,
    DEFAULT_COLLECTIBLE_COUNT, DEFAULT_HAZARD_COUNT,
};

#[test]
fn test_one_by_one_maze() {
    let mut rng = GameRng::new(99);
    let maze = Maze::generate(1, 1, &mut rng).unwrap();
    let analysis = maze.analysis();
    let centre = GridPos::new(1, 1);

    assert_eq!(maze.grid().dimensions(), (3, 3));
    assert_eq!(analysis.from_entrance.get(centre), Some(1));
    assert_eq!(analysis.from_exit.get(centre), Some(1));
    assert_eq!(maze.score(), Some(2));
    assert_eq!(maze.move_budget(), Some(0));
}

#[test]
fn test_one_by_one_maze_without_markers() {
    let config = MazeConfig::new(1, 1).with_markers(0, 0);
    let mut rng = GameRng::new(5);
    let maze = Maze::from_config(&config, &mut rng).unwrap();
    assert_eq!(maze.grid().to_string(), "#<#\n#.#\n#>#");
    assert_eq!(maze.score(), Some(2));
}

#[test]
fn test_rejects_empty_dimensions() {
    let mut rng = GameRng::new(0);
    assert!(matches!(
        Maze::generate(0, 5, &mut rng),
        Err(MazeError::InvalidDimensions { width: 0, height: 5 })
    ));
    assert!(matches!(
        Maze::generate(4, -2, &mut rng),
        Err(MazeError::InvalidDimensions { width: 4, height: -2 })
    ));
}

#[test]
fn test_default_marker_counts() {
    let mut rng = GameRng::new(31);
    let maze = Maze::generate(20, 15, &mut rng).unwrap();
    assert_eq!(maze.hazards().len(), DEFAULT_HAZARD_COUNT);
    assert_eq!(maze.collectibles().len(), DEFAULT_COLLECTIBLE_COUNT);
    for pos in maze.collectibles() {
        assert!(maze.grid().at(*pos).is_some_and(|c| c.has(CellTags::COLLECTIBLE)));
    }
}

#[test]
fn test_hazards_block_traversal() {
    // a single column of rooms is one corridor; any hazard cuts it
    let config = MazeConfig::new(1, 6).with_markers(0, 0);
    let mut rng = GameRng::new(2);
    let mut maze = Maze::from_config(&config, &mut rng).unwrap();
    assert_eq!(maze.score(), Some(12));

    let mut grid = maze.grid().clone();
    grid.set(7, 1, Cell::hazard());
    let analysis = analyze(&grid);
    assert!(!analysis.is_connected(&grid));
    assert_eq!(analysis.score, None);

    // the maze itself is untouched until a consumer mutates it
    assert_eq!(maze.reanalyze(), Some(12));
}

#[test]
fn test_analysis_is_idempotent() {
    let mut rng = GameRng::new(404);
    let maze = Maze::generate(16, 12, &mut rng).unwrap();
    let first = analyze(maze.grid());
    let second = analyze(maze.grid());
    assert_eq!(first, second);
    assert_eq!(first.score, maze.score());
    assert_eq!(first.deepest, maze.deepest());
}

#[test]
fn test_deepest_cell_is_reached_from_both_doors() {
    let config = MazeConfig::new(12, 10).with_markers(0, 0);
    let mut rng = GameRng::new(8);
    let maze = Maze::from_config(&config, &mut rng).unwrap();
    let analysis = maze.analysis();
    let deepest = maze.deepest().unwrap();
    let total = analysis.from_entrance.get(deepest).unwrap() + analysis.from_exit.get(deepest).unwrap();
    assert_eq!(Some(total), maze.score());
}

#[test]
fn test_render_rows_match_grid() {
    let mut rng = GameRng::new(17);
    let maze = Maze::generate(9, 4, &mut rng).unwrap();
    let text = maze.grid().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|l| l.chars().count() == 19));
    assert_eq!(lines[0].matches('<').count(), 1);
    assert_eq!(lines[8].matches('>').count(), 1);
}

#[test]
fn test_config_from_json_builds_maze() {
    let config = MazeConfig::from_json(
        r#"{"width": 6, "height": 3, "hazard_count": 0, "collectible_count": 2, "seed": 7}"#,
    )
    .unwrap();
    let a = Maze::build(&config).unwrap();
    let b = Maze::build(&config).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.collectibles().len(), 2);
    assert!(a.analysis().is_connected(a.grid()));
}
