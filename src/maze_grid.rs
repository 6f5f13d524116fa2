use core::fmt;

use grid_util::Point;
use image::{Rgb, RgbImage};

use crate::direction::Direction;

/// The background color any unclassified pixel is treated as.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Classification of a single grid cell, derived from its pixel color by
/// exact match against the palette. Any unmatched color is open space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Start,
    Finish,
    Solution,
    Open,
}

/// The four reference colors distinguishing maze features in an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazePalette {
    pub wall: Rgb<u8>,
    pub start: Rgb<u8>,
    pub finish: Rgb<u8>,
    pub solution: Rgb<u8>,
}

impl Default for MazePalette {
    /// Black walls, a red start, a blue finish and a half-intensity green
    /// solution trail.
    fn default() -> MazePalette {
        MazePalette {
            wall: Rgb([0, 0, 0]),
            start: Rgb([255, 0, 0]),
            finish: Rgb([0, 0, 255]),
            solution: Rgb([0, 128, 0]),
        }
    }
}

impl MazePalette {
    /// Classifies a color. When reference colors coincide, the earlier kind
    /// in [CellKind] order wins.
    pub fn classify(&self, color: Rgb<u8>) -> CellKind {
        if color == self.wall {
            CellKind::Wall
        } else if color == self.start {
            CellKind::Start
        } else if color == self.finish {
            CellKind::Finish
        } else if color == self.solution {
            CellKind::Solution
        } else {
            CellKind::Open
        }
    }
}

/// A single classified grid position. Cells are derived from the grid on
/// demand and never stored; the pixel buffer stays the source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeCell {
    pub point: Point,
    pub kind: CellKind,
}

/// [MazeGrid] wraps a decoded maze image together with the [MazePalette]
/// used to interpret it. Every coordinate access is bounds checked; lookups
/// outside the image yield [None] instead of failing.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    image: RgbImage,
    palette: MazePalette,
}

impl MazeGrid {
    pub fn new(image: RgbImage, palette: MazePalette) -> MazeGrid {
        MazeGrid { image, palette }
    }

    /// Builds a grid from rows of glyphs using the same mapping as the
    /// [Display](fmt::Display) rendering: `#` wall, `S` start, `F` finish,
    /// `+` solution, anything else open. Rows shorter than the longest row
    /// are padded with open space.
    pub fn from_rows(rows: &[&str], palette: MazePalette) -> MazeGrid {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut image = RgbImage::from_pixel(width as u32, rows.len() as u32, WHITE);
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let color = match glyph {
                    '#' => palette.wall,
                    'S' => palette.start,
                    'F' => palette.finish,
                    '+' => palette.solution,
                    _ => WHITE,
                };
                image.put_pixel(x as u32, y as u32, color);
            }
        }
        MazeGrid::new(image, palette)
    }

    /// Grid dimensions as (width, height).
    pub fn dimensions(&self) -> (i32, i32) {
        (self.image.width() as i32, self.image.height() as i32)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
    }

    /// The cell classification at `point`, or [None] if out of bounds.
    pub fn classify(&self, point: Point) -> Option<CellKind> {
        if self.in_bounds(point.x, point.y) {
            let color = *self.image.get_pixel(point.x as u32, point.y as u32);
            Some(self.palette.classify(color))
        } else {
            None
        }
    }

    /// The classified cell at `point`, or [None] if out of bounds.
    pub fn cell(&self, point: Point) -> Option<MazeCell> {
        self.classify(point).map(|kind| MazeCell { point, kind })
    }

    /// The cell adjacent to `cell` in the given direction, or [None] if it
    /// would fall outside the grid.
    pub fn neighbor(&self, cell: &MazeCell, direction: Direction) -> Option<MazeCell> {
        self.cell(direction.step(cell.point))
    }

    /// Overwrites the pixel at `point`. Writes outside the grid are ignored.
    pub fn paint(&mut self, point: Point, color: Rgb<u8>) {
        if self.in_bounds(point.x, point.y) {
            self.image.put_pixel(point.x as u32, point.y as u32, color);
        }
    }

    pub fn palette(&self) -> &MazePalette {
        &self.palette
    }

    /// The underlying pixel buffer.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes the grid, returning the pixel buffer for encoding.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.dimensions();
        for y in 0..height {
            for x in 0..width {
                let glyph = match self.classify(Point::new(x, y)) {
                    Some(CellKind::Wall) => '#',
                    Some(CellKind::Start) => 'S',
                    Some(CellKind::Finish) => 'F',
                    Some(CellKind::Solution) => '+',
                    Some(CellKind::Open) | None => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> MazeGrid {
        MazeGrid::from_rows(
            &[
                "####", //
                "#S.#", //
                "#.F#", //
                "####",
            ],
            MazePalette::default(),
        )
    }

    #[test]
    fn classifies_by_exact_color() {
        let grid = sample_grid();
        assert_eq!(grid.classify(Point::new(0, 0)), Some(CellKind::Wall));
        assert_eq!(grid.classify(Point::new(1, 1)), Some(CellKind::Start));
        assert_eq!(grid.classify(Point::new(2, 2)), Some(CellKind::Finish));
        assert_eq!(grid.classify(Point::new(2, 1)), Some(CellKind::Open));
    }

    #[test]
    fn near_palette_colors_are_open() {
        let palette = MazePalette::default();
        assert_eq!(palette.classify(Rgb([1, 0, 0])), CellKind::Open);
        assert_eq!(palette.classify(Rgb([254, 0, 0])), CellKind::Open);
        assert_eq!(palette.classify(Rgb([0, 128, 0])), CellKind::Solution);
    }

    #[test]
    fn out_of_bounds_lookups_are_absent() {
        let grid = sample_grid();
        assert_eq!(grid.classify(Point::new(-1, 0)), None);
        assert_eq!(grid.classify(Point::new(0, -1)), None);
        assert_eq!(grid.classify(Point::new(4, 0)), None);
        assert_eq!(grid.classify(Point::new(0, 4)), None);
        assert!(grid.cell(Point::new(17, 17)).is_none());
    }

    #[test]
    fn neighbor_follows_directions_and_edges() {
        let grid = sample_grid();
        let start = grid.cell(Point::new(1, 1)).unwrap();
        let right = grid.neighbor(&start, Direction::Right).unwrap();
        assert_eq!(right.point, Point::new(2, 1));
        assert_eq!(right.kind, CellKind::Open);

        let corner = grid.cell(Point::new(0, 0)).unwrap();
        assert!(grid.neighbor(&corner, Direction::Up).is_none());
        assert!(grid.neighbor(&corner, Direction::Left).is_none());
        assert!(grid.neighbor(&corner, Direction::Right).is_some());
    }

    #[test]
    fn paint_is_bounds_checked() {
        let mut grid = sample_grid();
        let solution = grid.palette().solution;
        grid.paint(Point::new(2, 1), solution);
        assert_eq!(grid.classify(Point::new(2, 1)), Some(CellKind::Solution));
        // Writes outside the grid are dropped.
        grid.paint(Point::new(-1, -1), solution);
        grid.paint(Point::new(100, 0), solution);
        assert_eq!(grid.dimensions(), (4, 4));
    }

    #[test]
    fn display_round_trips_through_from_rows() {
        let rows = [
            "#####", //
            "#S.+#", //
            "#.#F#", //
            "#####",
        ];
        let grid = MazeGrid::from_rows(&rows, MazePalette::default());
        let rendered = grid.to_string();
        let rendered_rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rendered_rows, rows);
    }

    #[test]
    fn short_rows_are_padded_open() {
        let grid = MazeGrid::from_rows(&["##", "#"], MazePalette::default());
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.classify(Point::new(1, 1)), Some(CellKind::Open));
    }

    #[test]
    fn empty_grid_has_no_cells() {
        let grid = MazeGrid::from_rows(&[], MazePalette::default());
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(grid.cell(Point::new(0, 0)).is_none());
    }
}
