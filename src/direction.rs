use grid_util::Point;

/// The four cardinal directions, in clockwise order starting from
/// [Up](Direction::Up). The y-axis points down, matching image row order, so
/// [Up](Direction::Up) decreases y and [Down](Direction::Down) increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// All directions in the canonical neighbor expansion order.
pub const CARDINAL: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// The point one cell away from `point` in this direction.
    pub fn step(self, point: Point) -> Point {
        match self {
            Direction::Up => Point::new(point.x, point.y - 1),
            Direction::Right => Point::new(point.x + 1, point.y),
            Direction::Down => Point::new(point.x, point.y + 1),
            Direction::Left => Point::new(point.x - 1, point.y),
        }
    }

    /// The direction a quarter turn clockwise from this one.
    pub fn clockwise(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The direction a quarter turn counter-clockwise from this one.
    pub fn counterclockwise(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }
}
