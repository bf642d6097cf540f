use crate::food::Food;
use crate::geometry::Bounds;
use crate::input::Command;
use crate::snake::{Direction, Snake};

use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

const INITIAL_SNAKE_LENGTH: usize = 3;

/// What happened during a single tick.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub ate_food: bool,
    pub died: bool,
}

/// One game session: the snake, the food it's chasing and the score.
pub struct GameState {
    bounds: Bounds,
    snake: Snake,
    food: Food,
    score: u32,
    rng: StdRng,
}

impl GameState {
    pub fn new(bounds: Bounds) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: Bounds, mut rng: StdRng) -> Self {
        let (x, y) = bounds.center();
        let snake = Snake::new(x, y, Direction::Right, INITIAL_SNAKE_LENGTH);
        let food = Food::spawn(&bounds, &mut rng);

        info!("new game on a {}x{} canvas", bounds.width(), bounds.height());
        GameState { bounds, snake, food, score: 0, rng }
    }

    pub fn handle_input(&mut self, command: Command) {
        self.snake.handle_command(command);
    }

    /// Food is checked against the head before the snake moves.
    pub fn tick(&mut self) -> TickReport {
        if self.is_over() {
            warn!("tick requested after game over");
            return TickReport::default();
        }

        let ate_food = self.snake.check_food_collision(&self.food);
        if ate_food {
            self.score += 1;
            self.food = Food::spawn(&self.bounds, &mut self.rng);
            info!("food eaten, score {}", self.score);
        }

        self.snake.advance(&self.bounds);

        let died = self.snake.is_dead();
        if died {
            info!("game over with score {} and length {}", self.score, self.snake.len());
        }

        TickReport { ate_food, died }
    }

    pub fn is_over(&self) -> bool {
        self.snake.is_dead()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Segment;

    fn state() -> GameState {
        GameState::with_seed(Bounds::new(400, 400).unwrap(), 42)
    }

    fn head(state: &GameState) -> (i32, i32) {
        let head = state.snake().head();
        (head.x, head.y)
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
        assert_eq!(state.snake().len(), 3);
        assert_eq!(head(&state), (200, 200));
        assert_eq!(state.snake().direction(), Direction::Right);
    }

    #[test]
    fn test_tick_moves_without_eating() {
        let mut state = state();
        state.food = Food::at(0, 0);

        let report = state.tick();

        assert_eq!(report, TickReport { ate_food: false, died: false });
        assert_eq!(head(&state), (220, 200));
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_food_checked_before_the_move() {
        let mut state = state();
        state.food = Food::at(220, 200);

        // the cell only touches the head's, nothing is eaten yet
        let report = state.tick();
        assert!(!report.ate_food);
        assert_eq!(head(&state), (220, 200));
        assert_eq!(state.score(), 0);

        let report = state.tick();
        assert!(report.ate_food);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(head(&state), (240, 200));

        let food = state.food();
        assert!((0..380).contains(&food.x()));
        assert!((0..380).contains(&food.y()));
    }

    #[test]
    fn test_eating_under_the_head() {
        let mut state = state();
        state.food = Food::at(200, 200);

        let report = state.tick();

        assert!(report.ate_food);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(head(&state), (220, 200));
    }

    #[test]
    fn test_each_meal_scores_once() {
        let mut state = state();

        for expected in 1..=3 {
            let (x, y) = head(&state);
            state.food = Food::at(x, y);
            state.tick();
            assert_eq!(state.score(), expected);
            assert_eq!(state.snake().len(), 3 + expected as usize);
        }
    }

    #[test]
    fn test_input_is_forwarded() {
        let mut state = state();
        state.food = Food::at(0, 0);

        state.handle_input(Command::Left);
        assert_eq!(state.snake().direction(), Direction::Right);

        state.handle_input(Command::Down);
        state.tick();
        assert_eq!(head(&state), (200, 220));

        state.handle_input(Command::Grow);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = state();
        state.food = Food::at(0, 0);
        state.snake = Snake::from_segments(vec![
            Segment::new(100, 100, Direction::Up),
            Segment::new(100, 80, Direction::Down),
            Segment::new(100, 100, Direction::Down),
        ])
        .unwrap();

        let report = state.tick();
        assert!(report.died);
        assert!(state.is_over());

        let body = state.snake().segments().to_vec();
        assert_eq!(state.tick(), TickReport::default());
        assert!(state.is_over());
        assert_eq!(state.snake().segments(), &body[..]);
    }

    #[test]
    fn test_pausing_ends_the_game_after_two_ticks() {
        let mut state = state();
        state.food = Food::at(0, 0);
        state.handle_input(Command::Pause);

        assert!(!state.tick().died);
        assert!(state.tick().died);
        assert_eq!(head(&state), (200, 200));
    }

    #[test]
    fn test_seeded_games_place_food_identically() {
        let bounds = Bounds::new(640, 480).unwrap();
        let a = GameState::with_seed(bounds, 9);
        let b = GameState::with_seed(bounds, 9);
        assert_eq!(a.food(), b.food());
    }
}
