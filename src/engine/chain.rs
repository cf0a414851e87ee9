//! The snake body: an ordered chain of segments with lagged propagation and growth.

use super::{Direction, Grid, Point};

/// One occupied cell of the snake.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Segment {
    pub position: Point,
    /// Only consulted when the chain grows from this segment.
    pub facing: Direction,
}

impl Segment {
    pub const fn new(position: Point, facing: Direction) -> Self {
        Segment { position, facing }
    }
}

/// Ordered segments, head first.
///
/// Never empty. Each body segment holds the position and facing its predecessor had one
/// tick earlier.
#[derive(Clone, Debug)]
pub struct Chain {
    grid: Grid,
    segments: Vec<Segment>,
    // Pre-tick copy of `segments`, reused between ticks.
    snapshot: Vec<Segment>,
}

impl Chain {
    /// Creates a single-segment chain facing right.
    pub fn new(grid: Grid, start: Point) -> Self {
        Chain {
            grid,
            segments: vec![Segment::new(start, Direction::default())],
            snapshot: Vec::new(),
        }
    }

    /// Builds a chain from existing segments. Returns `None` if `segments` is empty.
    pub fn from_segments(grid: Grid, segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Chain {
            grid,
            segments,
            snapshot: Vec::new(),
        })
    }

    /// Clears the chain back to a single head segment at `start`.
    pub fn reset(&mut self, start: Point) {
        self.segments.clear();
        self.segments.push(Segment::new(start, Direction::default()));
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn tail(&self) -> Segment {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True if any segment, head included, sits on `point`.
    pub fn occupies(&self, point: Point) -> bool {
        self.segments.iter().any(|segment| segment.position == point)
    }

    /// Advances the chain by one tick.
    ///
    /// Every body segment takes its predecessor's pre-tick position and facing, then the
    /// head turns to `requested` (if any), steps one cell and wraps. No turn is refused,
    /// including a full reversal.
    ///
    /// Returns `true` when a two-segment chain moved its head onto the cell its tail
    /// occupied before the tick.
    pub fn propagate(&mut self, requested: Option<Direction>) -> bool {
        let tail_before = self.tail().position;

        self.snapshot.clear();
        self.snapshot.extend_from_slice(&self.segments);
        for (segment, predecessor) in self.segments.iter_mut().skip(1).zip(&self.snapshot) {
            *segment = *predecessor;
        }

        let head = &mut self.segments[0];
        if let Some(direction) = requested {
            head.facing = direction;
        }
        head.position = self.grid.step(head.position, head.facing);
        debug_assert!(self.grid.contains(head.position));

        self.segments.len() == 2 && self.segments[0].position == tail_before
    }

    /// Appends a segment one cell behind the tail, against the tail's facing.
    pub fn grow(&mut self) {
        let tail = self.tail();
        let position = self.grid.step(tail.position, tail.facing.opposite());
        debug_assert!(self.grid.contains(position));
        self.segments.push(Segment::new(position, tail.facing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(segments: &[(i32, i32, Direction)]) -> Chain {
        let segments = segments
            .iter()
            .map(|&(x, y, facing)| Segment::new(Point::new(x, y), facing))
            .collect();
        Chain::from_segments(Grid::default(), segments).unwrap()
    }

    fn positions(chain: &Chain) -> Vec<Point> {
        chain.segments().iter().map(|s| s.position).collect()
    }

    #[test]
    fn empty_chain_is_rejected() {
        assert!(Chain::from_segments(Grid::default(), Vec::new()).is_none());
    }

    #[test]
    fn single_head_moves_right() {
        let mut chain = Chain::new(Grid::default(), Point::new(100, 300));

        let flagged = chain.propagate(Some(Direction::Right));

        assert!(!flagged);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head().position, Point::new(120, 300));
    }

    #[test]
    fn missing_input_keeps_heading() {
        let mut chain = chain(&[(100, 300, Direction::Down)]);

        chain.propagate(None);
        chain.propagate(None);

        assert_eq!(chain.head().position, Point::new(100, 340));
        assert_eq!(chain.head().facing, Direction::Down);
    }

    #[test]
    fn body_follows_with_one_tick_lag() {
        let mut chain = chain(&[
            (140, 300, Direction::Right),
            (120, 300, Direction::Right),
            (100, 300, Direction::Right),
        ]);

        chain.propagate(Some(Direction::Up));

        assert_eq!(
            positions(&chain),
            vec![
                Point::new(140, 280),
                Point::new(140, 300),
                Point::new(120, 300),
            ]
        );
        assert_eq!(chain.segments()[0].facing, Direction::Up);
        // The second segment copies the head's facing from before the turn.
        assert_eq!(chain.segments()[1].facing, Direction::Right);

        chain.propagate(None);

        assert_eq!(chain.segments()[1].position, Point::new(140, 280));
        assert_eq!(chain.segments()[1].facing, Direction::Up);
        assert_eq!(chain.segments()[2].position, Point::new(140, 300));
    }

    #[test]
    fn length_is_unchanged_by_propagation() {
        let mut chain = chain(&[
            (200, 200, Direction::Left),
            (220, 200, Direction::Left),
            (240, 200, Direction::Left),
            (260, 200, Direction::Left),
        ]);

        for direction in [None, Some(Direction::Up), Some(Direction::Right), None] {
            chain.propagate(direction);
            assert_eq!(chain.len(), 4);
        }
    }

    #[test]
    fn two_segment_reversal_is_flagged() {
        let mut chain = chain(&[(120, 300, Direction::Right), (100, 300, Direction::Right)]);

        let flagged = chain.propagate(Some(Direction::Left));

        assert!(flagged);
        assert_eq!(chain.head().position, Point::new(100, 300));
        assert_eq!(chain.tail().position, Point::new(120, 300));
    }

    #[test]
    fn reversal_flag_needs_exactly_two_segments() {
        let mut single = chain(&[(120, 300, Direction::Right)]);
        assert!(!single.propagate(Some(Direction::Left)));

        let mut three = chain(&[
            (140, 300, Direction::Right),
            (120, 300, Direction::Right),
            (100, 300, Direction::Right),
        ]);
        assert!(!three.propagate(Some(Direction::Left)));
    }

    #[test]
    fn head_wraps_across_the_right_edge() {
        let mut chain = chain(&[(580, 300, Direction::Right)]);

        chain.propagate(Some(Direction::Right));

        assert_eq!(chain.head().position, Point::new(0, 300));
    }

    #[test]
    fn segments_stay_on_the_board_while_wrapping() {
        let mut chain = chain(&[(0, 0, Direction::Left)]);
        chain.grow();
        chain.grow();

        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            for _ in 0..35 {
                chain.propagate(Some(direction));
                assert!(
                    chain
                        .segments()
                        .iter()
                        .all(|segment| chain.grid().contains(segment.position)),
                    "left the board: {:?}",
                    chain.segments()
                );
            }
        }
    }

    #[test]
    fn grow_extends_against_tail_facing() {
        let cases = [
            (Direction::Down, Point::new(200, 180)),
            (Direction::Up, Point::new(200, 220)),
            (Direction::Right, Point::new(180, 200)),
            (Direction::Left, Point::new(220, 200)),
        ];

        for (facing, expected) in cases {
            let mut chain = chain(&[(200, 200, facing)]);

            chain.grow();

            assert_eq!(chain.len(), 2);
            assert_eq!(chain.tail().position, expected);
            assert_eq!(chain.tail().facing, facing);
        }
    }

    #[test]
    fn grown_segment_wraps_onto_the_board() {
        let mut chain = chain(&[(0, 300, Direction::Right)]);

        chain.grow();

        assert_eq!(chain.tail().position, Point::new(580, 300));
    }

    #[test]
    fn reset_leaves_a_single_head() {
        let mut chain = chain(&[
            (140, 300, Direction::Up),
            (140, 320, Direction::Up),
            (140, 340, Direction::Up),
        ]);

        chain.reset(Point::new(100, 300));

        assert_eq!(chain.len(), 1);
        assert_eq!(
            chain.head(),
            Segment::new(Point::new(100, 300), Direction::Right)
        );
    }

    #[test]
    fn occupies_checks_every_segment() {
        let chain = chain(&[(140, 300, Direction::Right), (120, 300, Direction::Right)]);

        assert!(chain.occupies(Point::new(140, 300)));
        assert!(chain.occupies(Point::new(120, 300)));
        assert!(!chain.occupies(Point::new(100, 300)));
    }
}
