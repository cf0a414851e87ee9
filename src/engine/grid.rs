//! Board geometry: cell size, board bounds and wraparound.

use std::ops::RangeInclusive;

/// Side length of one cell, in board units.
pub const CELL_SIZE: i32 = 20;

/// Side length of the square board, in board units.
pub const BOARD_SIZE: i32 = 600;

/// A position on the board. Both coordinates are multiples of the cell size.
///
/// The origin is the top-left corner and `y` grows downwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Facing of a segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Displacement of a single step of `distance` units in this direction.
    pub fn offset(&self, distance: i32) -> (i32, i32) {
        match self {
            Direction::Left => (-distance, 0),
            Direction::Right => (distance, 0),
            Direction::Up => (0, -distance),
            Direction::Down => (0, distance),
        }
    }
}

/// Cell size and board bounds, plus the wraparound policy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    cell_size: i32,
    board_size: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(CELL_SIZE, BOARD_SIZE)
    }
}

impl Grid {
    /// `board_size` must be a positive multiple of `cell_size`.
    pub const fn new(cell_size: i32, board_size: i32) -> Self {
        Grid {
            cell_size,
            board_size,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// Number of cells along one side of the board.
    pub fn cells_per_side(&self) -> i32 {
        self.board_size / self.cell_size
    }

    /// Coordinate of the last valid cell along either axis.
    pub fn last_cell(&self) -> i32 {
        self.board_size - self.cell_size
    }

    /// Cell indices food may be placed on. The outer ring of cells is kept clear.
    pub fn food_columns(&self) -> RangeInclusive<i32> {
        1..=self.cells_per_side() - 2
    }

    /// Number of cells food may be placed on.
    pub fn food_cell_count(&self) -> usize {
        let side = self.food_columns().count();
        side * side
    }

    /// Moves `from` one cell towards `direction` and wraps the result back onto the board.
    pub fn step(&self, from: Point, direction: Direction) -> Point {
        let (dx, dy) = direction.offset(self.cell_size);
        self.wrap(Point::new(from.x + dx, from.y + dy))
    }

    /// Reaching the far edge maps to 0, going below 0 maps to the last cell.
    pub fn wrap(&self, point: Point) -> Point {
        Point::new(self.wrap_axis(point.x), self.wrap_axis(point.y))
    }

    fn wrap_axis(&self, value: i32) -> i32 {
        if value >= self.board_size {
            0
        } else if value < 0 {
            self.last_cell()
        } else {
            value
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.board_size).contains(&point.x) && (0..self.board_size).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_thirty_cells_wide() {
        let grid = Grid::default();
        assert_eq!(grid.cells_per_side(), 30);
        assert_eq!(grid.last_cell(), 580);
        assert_eq!(grid.food_columns(), 1..=28);
        assert_eq!(grid.food_cell_count(), 28 * 28);
    }

    #[test]
    fn step_moves_one_cell() {
        let grid = Grid::default();
        let from = Point::new(100, 300);

        assert_eq!(grid.step(from, Direction::Right), Point::new(120, 300));
        assert_eq!(grid.step(from, Direction::Left), Point::new(80, 300));
        assert_eq!(grid.step(from, Direction::Up), Point::new(100, 280));
        assert_eq!(grid.step(from, Direction::Down), Point::new(100, 320));
    }

    #[test]
    fn step_wraps_on_all_four_edges() {
        let grid = Grid::default();

        assert_eq!(
            grid.step(Point::new(580, 300), Direction::Right),
            Point::new(0, 300)
        );
        assert_eq!(
            grid.step(Point::new(0, 300), Direction::Left),
            Point::new(580, 300)
        );
        assert_eq!(
            grid.step(Point::new(100, 580), Direction::Down),
            Point::new(100, 0)
        );
        assert_eq!(
            grid.step(Point::new(100, 0), Direction::Up),
            Point::new(100, 580)
        );
    }

    #[test]
    fn wrap_leaves_points_on_the_board_alone() {
        let grid = Grid::default();
        for point in [Point::new(0, 0), Point::new(580, 580), Point::new(300, 20)] {
            assert_eq!(grid.wrap(point), point);
            assert!(grid.contains(point));
        }
        assert!(!grid.contains(Point::new(600, 0)));
        assert!(!grid.contains(Point::new(0, -20)));
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}
