use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::GameError;
use crate::geometry::{Bounds, Point};

/// Picks food cells. Holds the one random source of the process, so it
/// outlives every game played in a session.
pub struct FoodPlacer<R: Rng = StdRng> {
    bounds: Bounds,
    rng: R,
}

impl FoodPlacer<StdRng> {
    pub fn from_entropy(bounds: Bounds) -> Self {
        FoodPlacer::new(bounds, StdRng::from_entropy())
    }
}

impl<R: Rng> FoodPlacer<R> {
    pub fn new(bounds: Bounds, rng: R) -> Self {
        FoodPlacer { bounds, rng }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// A uniformly random interior cell for which `occupied` is false.
    pub fn place<F>(&mut self, occupied: F) -> Result<Point, GameError>
    where
        F: Fn(&Point) -> bool,
    {
        let choices: Vec<Point> = self.bounds.interior().filter(|p| !occupied(p)).collect();
        choices.choose(&mut self.rng).copied().ok_or(GameError::BoardFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placer(bounds: Bounds) -> FoodPlacer {
        FoodPlacer::new(bounds, StdRng::seed_from_u64(7))
    }

    #[test]
    fn food_stays_in_the_interior() {
        let bounds = Bounds::new(20, 10);
        let mut placer = placer(bounds);
        for _ in 0..200 {
            let p = placer.place(|_| false).unwrap();
            assert!(bounds.in_interior(p));
        }
    }

    #[test]
    fn food_avoids_occupied_cells() {
        let bounds = Bounds::new(6, 5);
        let mut placer = placer(bounds);
        let free = Point::new(3, 2);
        for _ in 0..50 {
            assert_eq!(placer.place(|p| *p != free).unwrap(), free);
        }
    }

    #[test]
    fn full_board_is_reported() {
        let mut placer = placer(Bounds::new(5, 5));
        assert_eq!(placer.place(|_| true), Err(GameError::BoardFull));
    }

    #[test]
    fn every_free_cell_can_be_picked() {
        let bounds = Bounds::new(4, 4);
        let mut placer = placer(bounds);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(placer.place(|_| false).unwrap());
        }
        assert_eq!(seen.len(), 4);
    }
}
