//! Food placement.

use rand::Rng;

use super::{Chain, Grid, Point};

/// Samples interior cells uniformly until one is not covered by `chain`.
///
/// The outer ring of cells is never chosen. There is no retry cap: this only terminates if
/// at least one interior cell is free.
pub fn place_food<R: Rng>(chain: &Chain, grid: &Grid, rng: &mut R) -> Point {
    let cell = grid.cell_size();
    loop {
        let candidate = Point::new(
            rng.random_range(grid.food_columns()) * cell,
            rng.random_range(grid.food_columns()) * cell,
        );
        if !chain.occupies(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, Segment};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn food_lands_inside_the_margin() {
        let grid = Grid::default();
        let chain = Chain::new(grid, Point::new(100, 300));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let food = place_food(&chain, &grid, &mut rng);
            assert!((20..=560).contains(&food.x), "x out of range: {food:?}");
            assert!((20..=560).contains(&food.y), "y out of range: {food:?}");
            assert_eq!(food.x % 20, 0);
            assert_eq!(food.y % 20, 0);
            assert_ne!(food, chain.head().position);
        }
    }

    #[test]
    fn food_finds_the_only_free_interior_cell() {
        let grid = Grid::default();
        let free = Point::new(340, 220);
        let segments: Vec<Segment> = grid
            .food_columns()
            .flat_map(|y| grid.food_columns().map(move |x| Point::new(x * 20, y * 20)))
            .filter(|point| *point != free)
            .map(|point| Segment::new(point, Direction::Right))
            .collect();
        assert_eq!(segments.len(), grid.food_cell_count() - 1);
        let chain = Chain::from_segments(grid, segments).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..3 {
            assert_eq!(place_food(&chain, &grid, &mut rng), free);
        }
    }
}
