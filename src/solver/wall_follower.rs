use grid_util::Point;
use log::{info, warn};

use crate::direction::Direction;
use crate::maze_grid::{CellKind, MazeCell, MazeGrid};
use crate::solver::MazeSolver;

/// The paired headings of the follower: the direction of travel and the side
/// the traced wall is on. With the wall under the left hand, the wall side is
/// always a quarter turn counter-clockwise from the travel direction, and
/// both turn operations preserve that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowState {
    pub travel: Direction,
    pub wall: Direction,
}

impl FollowState {
    /// The state entered on meeting the first wall: traveling right along a
    /// wall above.
    pub fn initial() -> FollowState {
        FollowState {
            travel: Direction::Right,
            wall: Direction::Up,
        }
    }

    /// Both headings a quarter turn clockwise, for inner corners.
    pub fn turned_clockwise(self) -> FollowState {
        FollowState {
            travel: self.travel.clockwise(),
            wall: self.wall.clockwise(),
        }
    }

    /// Both headings a quarter turn counter-clockwise, for outer corners.
    pub fn turned_counterclockwise(self) -> FollowState {
        FollowState {
            travel: self.travel.counterclockwise(),
            wall: self.wall.counterclockwise(),
        }
    }
}

/// Left-hand wall following maze solver. Only valid for simply connected
/// mazes where the wall reachable from the start also touches the finish;
/// the returned route is generally not the shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallFollowerSolver;

impl WallFollowerSolver {
    pub fn new() -> WallFollowerSolver {
        WallFollowerSolver
    }
}

/// Scans for the start cell ring by ring: the top row left to right, the
/// remaining right column top to bottom, the remaining bottom row right to
/// left, the remaining left column bottom to top, then the next ring inward.
/// The first start cell met in this order is used.
fn find_start_spiral(grid: &MazeGrid) -> Option<MazeCell> {
    let (width, height) = grid.dimensions();
    let (mut left, mut right) = (0, width - 1);
    let (mut top, mut bottom) = (0, height - 1);
    let start_at = |x: i32, y: i32| {
        grid.cell(Point::new(x, y))
            .filter(|cell| cell.kind == CellKind::Start)
    };
    while left <= right && top <= bottom {
        for x in left..=right {
            if let Some(start) = start_at(x, top) {
                return Some(start);
            }
        }
        for y in (top + 1)..=bottom {
            if let Some(start) = start_at(right, y) {
                return Some(start);
            }
        }
        if bottom > top {
            for x in (left..right).rev() {
                if let Some(start) = start_at(x, bottom) {
                    return Some(start);
                }
            }
        }
        if right > left {
            for y in ((top + 1)..bottom).rev() {
                if let Some(start) = start_at(left, y) {
                    return Some(start);
                }
            }
        }
        left += 1;
        right -= 1;
        top += 1;
        bottom -= 1;
    }
    None
}

impl MazeSolver for WallFollowerSolver {
    fn solve(&self, grid: &MazeGrid) -> Option<Vec<Point>> {
        let start = match find_start_spiral(grid) {
            Some(start) => start,
            None => {
                info!("Grid has no start cell");
                return None;
            }
        };
        let mut path: Vec<Point> = Vec::new();
        let mut current = start;
        // Probe upward from the start until a wall blocks the way. Cells are
        // added to the route when stepped off, so the finish never is.
        loop {
            if current.kind == CellKind::Finish {
                info!("Met the finish at {} while probing upward", current.point);
                return Some(path);
            }
            match grid.neighbor(&current, Direction::Up) {
                None => {
                    warn!("Probe from {} left the grid without meeting a wall", start.point);
                    return None;
                }
                Some(above) if above.kind == CellKind::Wall => break,
                Some(above) => {
                    path.push(current.point);
                    current = above;
                }
            }
        }
        // The wall-adjacent cell anchors the trace; coming back to it means
        // the wall was circumnavigated without meeting the finish.
        let anchor = current.point;
        let mut state = FollowState::initial();
        loop {
            debug_assert_eq!(state.wall, state.travel.counterclockwise());
            if current.kind == CellKind::Finish {
                info!(
                    "Reached the finish at {} after {} trace steps",
                    current.point,
                    path.len()
                );
                return Some(path);
            }
            // Inner corners: turn clockwise until the cell ahead is no wall.
            let mut turns = 0;
            let ahead = loop {
                let ahead = grid.neighbor(&current, state.travel);
                match ahead {
                    Some(cell) if cell.kind == CellKind::Wall => {
                        state = state.turned_clockwise();
                        turns += 1;
                        if turns == 4 {
                            warn!("Walled in on all four sides at {}", current.point);
                            return None;
                        }
                    }
                    _ => break ahead,
                }
            };
            let next = match ahead {
                Some(next) => next,
                None => {
                    warn!("Wall trace left the grid at {}", current.point);
                    return None;
                }
            };
            // Outer corners: when no wall continues on the wall side of the
            // next cell, wrap counter-clockwise around the receding wall.
            match grid.neighbor(&next, state.wall) {
                Some(side) if side.kind == CellKind::Wall => {}
                _ => state = state.turned_counterclockwise(),
            }
            path.push(current.point);
            current = next;
            if current.point == anchor {
                info!("Wall trace returned to its anchor at {}", anchor);
                return None;
            }
        }
    }
}
