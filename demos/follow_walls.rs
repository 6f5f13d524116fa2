use theseus::solver::{MazeSolver, WallFollowerSolver};
use theseus::{render_solution, MazeGrid, MazePalette};

// In this example a maze with shape
// #######
// #S    #
// ##### #
// #F    #
// #######
// is walked with the left hand kept on the wall, and the walk is printed
// with every visited cell marked as +.
fn main() {
    let grid = MazeGrid::from_rows(
        &[
            "#######", //
            "#S....#", //
            "#####.#", //
            "#F....#", //
            "#######",
        ],
        MazePalette::default(),
    );
    let solver = WallFollowerSolver::new();
    if let Some(path) = solver.solve(&grid) {
        println!("The wall led to the finish in {} steps:", path.len());
        println!("{}", render_solution(&grid, &path));
    }
}
