//! Self-collision detection.

use super::Chain;

/// Returns true if the head shares a cell with any body segment.
pub fn has_self_collision(chain: &Chain) -> bool {
    let head = chain.head().position;
    chain.segments()[1..]
        .iter()
        .any(|segment| segment.position == head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, Grid, Point, Segment};

    fn chain_at(points: &[(i32, i32)]) -> Chain {
        let segments = points
            .iter()
            .map(|&(x, y)| Segment::new(Point::new(x, y), Direction::Right))
            .collect();
        Chain::from_segments(Grid::default(), segments).unwrap()
    }

    #[test]
    fn lone_head_never_collides() {
        let grid = Grid::default();
        for x in (0..grid.board_size()).step_by(grid.cell_size() as usize) {
            for y in (0..grid.board_size()).step_by(grid.cell_size() as usize) {
                assert!(!has_self_collision(&chain_at(&[(x, y)])));
            }
        }
    }

    #[test]
    fn head_on_any_body_segment_collides() {
        assert!(has_self_collision(&chain_at(&[
            (100, 100),
            (100, 100),
            (120, 100),
        ])));
        assert!(has_self_collision(&chain_at(&[
            (100, 100),
            (120, 100),
            (120, 120),
            (100, 120),
            (100, 100),
        ])));
    }

    #[test]
    fn distinct_cells_do_not_collide() {
        assert!(!has_self_collision(&chain_at(&[
            (100, 100),
            (120, 100),
            (140, 100),
        ])));
    }

    #[test]
    fn turning_into_own_body_collides_after_propagation() {
        // Turning up from (100,120) runs into the body trailing through (100,100).
        let mut chain = chain_at(&[(100, 120), (120, 120), (120, 100), (100, 100), (80, 100)]);

        chain.propagate(Some(Direction::Up));

        assert!(has_self_collision(&chain));
    }
}
