//! Snaps a photographed or otherwise noisy maze image to the reference
//! colors, so the exact-match classification in [MazeGrid](crate::MazeGrid)
//! becomes reliable.

use image::{Rgb, RgbImage};

use crate::maze_grid::{MazeGrid, WHITE};

/// Produces a copy of the grid's image with every pixel replaced by the
/// nearest of the wall, start and finish colors plus plain white. The
/// solution color is not a snap target, so leftover solution trails from an
/// earlier render collapse onto whichever reference color is closest.
pub fn clean_maze(grid: &MazeGrid) -> RgbImage {
    let palette = grid.palette();
    let targets = [palette.wall, palette.start, palette.finish, WHITE];
    let mut cleaned = grid.image().clone();
    for pixel in cleaned.pixels_mut() {
        *pixel = nearest_color(&targets, *pixel);
    }
    cleaned
}

/// The target closest to `color` by the Euclidean metric on RGB. An exact
/// match wins outright; among equidistant targets the earliest wins.
fn nearest_color(targets: &[Rgb<u8>], color: Rgb<u8>) -> Rgb<u8> {
    let mut nearest = color;
    let mut nearest_distance = i32::MAX;
    for &target in targets {
        if target == color {
            return target;
        }
        // Comparing squared distances orders the same as the square roots.
        let distance = color_distance_squared(color, target);
        if distance < nearest_distance {
            nearest = target;
            nearest_distance = distance;
        }
    }
    nearest
}

fn color_distance_squared(a: Rgb<u8>, b: Rgb<u8>) -> i32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    dr * dr + dg * dg + db * db
}
