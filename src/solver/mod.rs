use std::str::FromStr;

use anyhow::bail;
use grid_util::Point;

use crate::maze_grid::MazeGrid;
use crate::render_solution;

pub mod shortest_path;
pub mod wall_follower;

pub use shortest_path::ShortestPathSolver;
pub use wall_follower::WallFollowerSolver;

/// Common interface of the maze solving strategies. A solver reads the grid
/// without mutating it and reports the route it found as an ordered list of
/// points from the start cell up to, but not including, the finish cell.
/// [None] means the grid has no start or finish marker, or no route the
/// strategy can find.
pub trait MazeSolver {
    fn solve(&self, grid: &MazeGrid) -> Option<Vec<Point>>;

    /// Solves the maze and renders the found route onto a copy of the grid.
    fn generate_solution(&self, grid: &MazeGrid) -> Option<MazeGrid> {
        self.solve(grid).map(|path| render_solution(grid, &path))
    }
}

/// Identifier selecting a solving strategy at the outer boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverKind {
    ShortestPath,
    WallFollower,
}

impl FromStr for SolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<SolverKind, Self::Err> {
        match s {
            "shortest-path" => Ok(SolverKind::ShortestPath),
            "wall-follower" => Ok(SolverKind::WallFollower),
            other => bail!("Solver '{}' not recognized.", other),
        }
    }
}

/// Constructs the solver implementing the given strategy.
pub fn make_solver(kind: SolverKind) -> Box<dyn MazeSolver> {
    match kind {
        SolverKind::ShortestPath => Box::new(ShortestPathSolver::new()),
        SolverKind::WallFollower => Box::new(WallFollowerSolver::new()),
    }
}
