use crate::geometry::{Bounds, Rect, CELL_SIZE};

use rand::Rng;

/// A single piece of food. Eating it replaces it with a fresh one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Food {
    rect: Rect,
}

impl Food {
    /// Random placement anywhere inside the canvas. The snake's cells are
    /// not excluded and the position isn't snapped to the grid.
    pub fn spawn<R: Rng>(bounds: &Bounds, rng: &mut R) -> Self {
        let x = rng.gen_range(0..bounds.width() - CELL_SIZE);
        let y = rng.gen_range(0..bounds.height() - CELL_SIZE);
        Food::at(x, y)
    }

    pub fn at(x: i32, y: i32) -> Self {
        Food { rect: Rect::cell(x, y) }
    }

    pub fn x(&self) -> i32 {
        self.rect.x
    }

    pub fn y(&self) -> i32 {
        self.rect.y
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_spawn_stays_inside_bounds() {
        let bounds = Bounds::new(400, 300).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let food = Food::spawn(&bounds, &mut rng);
            assert!((0..380).contains(&food.x()));
            assert!((0..280).contains(&food.y()));
        }
    }

    #[test]
    fn test_spawn_on_smallest_canvas() {
        let bounds = Bounds::new(21, 21).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(Food::spawn(&bounds, &mut rng), Food::at(0, 0));
    }

    #[test]
    fn test_food_is_one_cell() {
        let food = Food::at(13, 57);
        assert_eq!(food.rect(), Rect::new(13, 57, CELL_SIZE, CELL_SIZE));
    }
}
