//! Grid-movement engine behind Neon Snake.
//!
//! The board wraps: leaving one edge re-enters on the opposite edge. The only
//! way to lose is running into the body.

use super::{Cell, Direction};
use crate::rng::GameRng;
use std::collections::VecDeque;

pub const GRID_SIZE: i32 = 20;
pub const FOOD_REWARD: u32 = 10;
pub const START_CELL: Cell = Cell::new(10, 10);
pub const START_HEADING: Direction = Direction::Up;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome
{
    Moved,
    Ate,
    Died,
    /// The engine is already dead; nothing changed.
    Halted,
}

#[derive(Clone, Debug)]
pub struct SnakeEngine
{
    body: VecDeque<Cell>,
    heading: Direction,
    pending: Direction,
    food: Option<Cell>,
    score: u32,
    alive: bool,
    rng: GameRng,
}

impl SnakeEngine
{
    pub fn new(rng: GameRng) -> Self
    {
        let mut engine = Self {
            body: VecDeque::new(),
            heading: START_HEADING,
            pending: START_HEADING,
            food: None,
            score: 0,
            alive: true,
            rng,
        };
        engine.reset();
        engine
    }

    pub fn reset(&mut self)
    {
        self.body.clear();
        self.body.push_back(START_CELL);
        self.heading = START_HEADING;
        self.pending = START_HEADING;
        self.score = 0;
        self.alive = true;
        self.food = self.place_food();
    }

    pub fn body(&self) -> impl Iterator<Item = Cell> + '_
    {
        self.body.iter().copied()
    }

    pub fn length(&self) -> usize
    {
        self.body.len()
    }

    pub fn head(&self) -> Cell
    {
        self.body.front().copied().unwrap_or(START_CELL)
    }

    pub fn food(&self) -> Option<Cell>
    {
        self.food
    }

    pub fn score(&self) -> u32
    {
        self.score
    }

    pub fn is_alive(&self) -> bool
    {
        self.alive
    }

    pub fn heading(&self) -> Direction
    {
        self.heading
    }

    pub fn occupies(&self, cell: Cell) -> bool
    {
        self.body.contains(&cell)
    }

    /// Queues `direction` for the next tick.
    ///
    /// Checked against the heading of the last tick, not the queued one, so
    /// two quick turns cannot fold the snake back onto its neck.
    pub fn set_direction(&mut self, direction: Direction) -> bool
    {
        if !self.alive || direction == self.heading.opposite() {
            return false;
        }
        self.pending = direction;
        true
    }

    pub fn tick(&mut self) -> TickOutcome
    {
        if !self.alive {
            return TickOutcome::Halted;
        }

        let head = self.head();
        let (dx, dy) = self.pending.delta();
        let next = Cell::new(
            (head.x + dx).rem_euclid(GRID_SIZE),
            (head.y + dy).rem_euclid(GRID_SIZE),
        );
        self.heading = self.pending;

        if self.occupies(next) {
            self.alive = false;
            tracing::info!(score = self.score, length = self.body.len(), "snake collided");
            return TickOutcome::Died;
        }

        self.body.push_front(next);
        if self.food == Some(next) {
            self.score += FOOD_REWARD;
            self.food = self.place_food();
            tracing::debug!(score = self.score, length = self.body.len(), "food eaten");
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    #[cfg(test)]
    pub(crate) fn with_body(body: &[(i32, i32)], heading: Direction, food: Option<(i32, i32)>) -> Self
    {
        let mut engine = Self::new(GameRng::new(3));
        engine.body = body.iter().map(|&(x, y)| Cell::new(x, y)).collect();
        engine.heading = heading;
        engine.pending = heading;
        engine.food = food.map(|(x, y)| Cell::new(x, y));
        engine
    }

    fn place_food(&mut self) -> Option<Cell>
    {
        let free: Vec<Cell> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        self.rng.pick(&free)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use proptest::prelude::*;

    fn direction_strategy() -> impl Strategy<Value = Direction>
    {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    #[test]
    fn starts_at_origin_heading_up()
    {
        let engine = SnakeEngine::new(GameRng::new(11));
        assert_eq!(engine.body().collect::<Vec<_>>(), vec![START_CELL]);
        assert_eq!(engine.heading(), Direction::Up);
        assert_eq!(engine.score(), 0);
        assert!(engine.is_alive());
        let food = engine.food().expect("empty board has room for food");
        assert_ne!(food, START_CELL);
    }

    #[test]
    fn eating_grows_and_scores()
    {
        let mut engine = SnakeEngine::with_body(&[(10, 10)], Direction::Up, Some((10, 9)));

        assert_eq!(engine.tick(), TickOutcome::Ate);
        assert_eq!(
            engine.body().collect::<Vec<_>>(),
            vec![Cell::new(10, 9), Cell::new(10, 10)]
        );
        assert_eq!(engine.score(), 10);
        assert!(engine.is_alive());
        let food = engine.food().expect("food relocated");
        assert!(!engine.occupies(food));
    }

    #[test]
    fn plain_move_keeps_length()
    {
        let mut engine = SnakeEngine::with_body(&[(5, 5), (5, 6), (5, 7)], Direction::Up, Some((0, 0)));

        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(
            engine.body().collect::<Vec<_>>(),
            vec![Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)]
        );
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn edges_wrap_around()
    {
        let mut engine = SnakeEngine::with_body(&[(0, 0)], Direction::Up, Some((5, 5)));
        engine.tick();
        assert_eq!(engine.head(), Cell::new(0, GRID_SIZE - 1));

        engine.set_direction(Direction::Left);
        engine.tick();
        assert_eq!(engine.head(), Cell::new(GRID_SIZE - 1, GRID_SIZE - 1));

        engine.set_direction(Direction::Down);
        engine.tick();
        assert_eq!(engine.head(), Cell::new(GRID_SIZE - 1, 0));

        engine.set_direction(Direction::Right);
        engine.tick();
        assert_eq!(engine.head(), Cell::new(0, 0));
        assert!(engine.is_alive());
    }

    #[test]
    fn reversal_is_ignored()
    {
        let mut engine = SnakeEngine::with_body(&[(5, 5), (5, 6)], Direction::Up, None);
        assert!(!engine.set_direction(Direction::Down));
        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(engine.head(), Cell::new(5, 4));
    }

    #[test]
    fn two_turns_in_one_tick_cannot_reverse()
    {
        let mut engine = SnakeEngine::with_body(&[(5, 5), (5, 6), (5, 7)], Direction::Up, None);
        assert!(engine.set_direction(Direction::Left));
        assert!(!engine.set_direction(Direction::Down));
        engine.tick();
        assert_eq!(engine.head(), Cell::new(4, 5));
        assert!(engine.is_alive());
    }

    #[test]
    fn running_into_body_is_terminal()
    {
        // Head at (5,5) heading left into a loop that returns to (4,5).
        let mut engine = SnakeEngine::with_body(
            &[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)],
            Direction::Left,
            Some((0, 0)),
        );
        let before: Vec<Cell> = engine.body().collect();

        assert_eq!(engine.tick(), TickOutcome::Died);
        assert!(!engine.is_alive());
        assert_eq!(engine.body().collect::<Vec<_>>(), before);

        assert_eq!(engine.tick(), TickOutcome::Halted);
        assert!(!engine.set_direction(Direction::Up));
        assert_eq!(engine.body().collect::<Vec<_>>(), before);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn full_board_leaves_no_food()
    {
        let mut cells = Vec::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                cells.push((x, y));
            }
        }
        let mut engine = SnakeEngine::with_body(&cells, Direction::Right, None);
        assert_eq!(engine.place_food(), None);
        assert_eq!(engine.tick(), TickOutcome::Died);
    }

    #[test]
    fn food_goes_to_the_only_free_cell()
    {
        let mut cells = Vec::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if (x, y) != (7, 3) {
                    cells.push((x, y));
                }
            }
        }
        let mut engine = SnakeEngine::with_body(&cells, Direction::Right, None);
        assert_eq!(engine.place_food(), Some(Cell::new(7, 3)));
    }

    #[test]
    fn reset_restores_start_state()
    {
        let mut engine = SnakeEngine::with_body(&[(5, 5), (5, 6)], Direction::Left, Some((4, 5)));
        engine.tick();
        engine.reset();
        assert_eq!(engine.body().collect::<Vec<_>>(), vec![START_CELL]);
        assert_eq!(engine.heading(), START_HEADING);
        assert_eq!(engine.score(), 0);
        assert!(engine.is_alive());
    }

    proptest! {
        #[test]
        fn length_and_score_move_together(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(proptest::option::of(direction_strategy()), 1..300),
        ) {
            let mut engine = SnakeEngine::new(GameRng::new(seed));
            for input in inputs {
                if let Some(direction) = input {
                    engine.set_direction(direction);
                }
                let len = engine.length();
                let score = engine.score();
                let was_alive = engine.is_alive();

                match engine.tick() {
                    TickOutcome::Ate => {
                        prop_assert_eq!(engine.length(), len + 1);
                        prop_assert_eq!(engine.score(), score + FOOD_REWARD);
                    }
                    TickOutcome::Moved | TickOutcome::Died => {
                        prop_assert!(was_alive);
                        prop_assert_eq!(engine.length(), len);
                        prop_assert_eq!(engine.score(), score);
                    }
                    TickOutcome::Halted => {
                        prop_assert!(!was_alive);
                        prop_assert_eq!(engine.length(), len);
                        prop_assert_eq!(engine.score(), score);
                    }
                }

                if let Some(food) = engine.food() {
                    prop_assert!(!engine.occupies(food));
                }
                let mut cells: Vec<Cell> = engine.body().collect();
                cells.sort_by_key(|cell| (cell.x, cell.y));
                cells.dedup();
                prop_assert_eq!(cells.len(), engine.length());
            }
        }
    }
}
