use grid_util::Point;
use log::info;

use crate::bfs::bfs;
use crate::direction::CARDINAL;
use crate::maze_grid::{CellKind, MazeGrid};
use crate::solver::MazeSolver;

/// Breadth-first maze solver. Guaranteed to return a shortest route if one
/// exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestPathSolver;

impl ShortestPathSolver {
    pub fn new() -> ShortestPathSolver {
        ShortestPathSolver
    }
}

impl MazeSolver for ShortestPathSolver {
    fn solve(&self, grid: &MazeGrid) -> Option<Vec<Point>> {
        let (width, height) = grid.dimensions();
        let mut start = None;
        let mut finish = None;
        // A full row-major scan that keeps overwriting: with duplicate
        // markers the last match in scan order is the one used.
        for y in 0..height {
            for x in 0..width {
                let point = Point::new(x, y);
                match grid.classify(point) {
                    Some(CellKind::Start) => start = Some(point),
                    Some(CellKind::Finish) => finish = Some(point),
                    _ => {}
                }
            }
        }
        let (start, finish) = match (start, finish) {
            (Some(start), Some(finish)) => (start, finish),
            _ => {
                info!("Grid has no start or no finish cell");
                return None;
            }
        };
        let result = bfs(
            &start,
            |&point| {
                CARDINAL
                    .iter()
                    .map(|direction| direction.step(point))
                    .filter(|&neighbor| {
                        !matches!(grid.classify(neighbor), None | Some(CellKind::Wall))
                    })
                    .collect::<Vec<Point>>()
            },
            |&point| point == finish,
        );
        match result {
            Some((mut path, step_count)) => {
                info!("Found a {} step route from {} to {}", step_count, start, finish);
                // The finish cell itself is not part of the reported route.
                path.pop();
                Some(path)
            }
            None => {
                info!("No route from {} to {} exists", start, finish);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_grid::MazePalette;

    fn grid_from(rows: &[&str]) -> MazeGrid {
        MazeGrid::from_rows(rows, MazePalette::default())
    }

    #[test]
    fn solves_a_corridor() {
        //  S . . F  becomes a 3 step route ending next to the finish.
        let grid = grid_from(&[
            "######", //
            "#S..F#", //
            "######",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        assert_eq!(
            path,
            vec![Point::new(1, 1), Point::new(2, 1), Point::new(3, 1)]
        );
    }

    #[test]
    fn adjacent_start_and_finish_give_a_single_step() {
        let grid = grid_from(&[
            "####", //
            "#SF#", //
            "####",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        assert_eq!(path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn route_length_matches_bfs_distance() {
        let grid = grid_from(&[
            "#######", //
            "#S..#.#", //
            "##..#F#", //
            "#...#.#", //
            "#.....#", //
            "#######",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        // Distance from (1,1) to (5,2): right twice, down three, right
        // twice, up twice.
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Point::new(1, 1));
    }

    #[test]
    fn walls_are_never_crossed() {
        let grid = grid_from(&[
            "#####", //
            "#S#F#", //
            "#.#.#", //
            "#...#", //
            "#####",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        for point in &path {
            assert_ne!(grid.classify(*point), Some(CellKind::Wall));
        }
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn missing_start_or_finish_is_no_solution() {
        let solver = ShortestPathSolver::new();
        let no_finish = grid_from(&["###", "#S#", "###"]);
        assert!(solver.solve(&no_finish).is_none());
        let no_start = grid_from(&["###", "#F#", "###"]);
        assert!(solver.solve(&no_start).is_none());
    }

    #[test]
    fn unreachable_finish_is_no_solution() {
        let grid = grid_from(&[
            "#####", //
            "#S#F#", //
            "#####",
        ]);
        assert!(ShortestPathSolver::new().solve(&grid).is_none());
    }

    /// On a fully open square every route is tied; FIFO expansion in the
    /// canonical direction order must pick the staircase hugging the top and
    /// right edges.
    #[test]
    fn equal_routes_resolve_in_discovery_order() {
        let grid = grid_from(&[
            "S..", //
            "...", //
            "..F",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
            ]
        );
    }

    /// The locating scan keeps overwriting on duplicates, so of two start
    /// markers the later one in row-major order is used.
    #[test]
    fn duplicate_starts_use_the_last_in_scan_order() {
        let grid = grid_from(&[
            "#####", //
            "#S..#", //
            "#...#", //
            "#S.F#", //
            "#####",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        assert_eq!(path, vec![Point::new(1, 3), Point::new(2, 3)]);
    }

    /// Same for finish markers; the earlier one is then an ordinary
    /// traversable cell the route may pass through.
    #[test]
    fn duplicate_finishes_use_the_last_in_scan_order() {
        let grid = grid_from(&[
            "#####", //
            "#S.F#", //
            "#...#", //
            "#..F#", //
            "#####",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(3, 2),
            ]
        );
    }

    #[test]
    fn solution_marks_are_traversable() {
        // A stale solution trail from an earlier render is open space to the
        // search, only walls block.
        let grid = grid_from(&[
            "######", //
            "#S++F#", //
            "######",
        ]);
        let path = ShortestPathSolver::new().solve(&grid).unwrap();
        assert_eq!(path.len(), 3);
    }
}
