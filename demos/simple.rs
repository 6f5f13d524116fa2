use theseus::solver::{MazeSolver, ShortestPathSolver};
use theseus::{render_solution, MazeGrid, MazePalette};

// In this example a maze with shape
// #####
// #S  #
// # # #
// #  F#
// #####
// S marks the start
// F marks the finish
// is solved with the breadth first strategy and printed with the route
// marked as +.
fn main() {
    let grid = MazeGrid::from_rows(
        &[
            "#####", //
            "#S..#", //
            "#.#.#", //
            "#..F#", //
            "#####",
        ],
        MazePalette::default(),
    );
    let solver = ShortestPathSolver::new();
    if let Some(path) = solver.solve(&grid) {
        println!("A route has been found:");
        for point in &path {
            println!("{:?}", point);
        }
        println!("{}", render_solution(&grid, &path));
    }
}
