//! # theseus
//!
//! Maze solving on raster images. A maze drawing or photograph is
//! interpreted as a [MazeGrid] by classifying each pixel against a
//! [MazePalette], solved by
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! or by the left-hand
//! [wall follower](https://en.wikipedia.org/wiki/Maze-solving_algorithm#Wall_follower)
//! rule, and the found route is painted back onto a copy of the image.
//! Breadth-first search returns a shortest route; the wall follower trades
//! optimality for a trace that stays on the wall reachable from the start,
//! which only works out on simply connected mazes.
mod bfs;

pub mod clean;
pub mod direction;
pub mod maze_grid;
pub mod solver;

pub use clean::clean_maze;
pub use direction::{Direction, CARDINAL};
pub use maze_grid::{CellKind, MazeCell, MazeGrid, MazePalette, WHITE};

use grid_util::Point;

/// Paints `path` onto a copy of `grid` in the palette's solution color and
/// restores the start color on the path head, which the trace painted over.
/// The input grid is left untouched.
pub fn render_solution(grid: &MazeGrid, path: &[Point]) -> MazeGrid {
    let mut solution = grid.clone();
    for &point in path {
        solution.paint(point, grid.palette().solution);
    }
    if let Some(&head) = path.first() {
        if grid.classify(head) == Some(CellKind::Start) {
            solution.paint(head, grid.palette().start);
        }
    }
    solution
}
