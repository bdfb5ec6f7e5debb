use clap::ValueEnum;
use rand::Rng;

use oro_engine::game::{Direction, GameState, Point};
use oro_engine::session::DirectionSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BotType {
    Efficient,
    Random,
}

pub struct BotController {
    bot_type: BotType,
}

impl BotController {
    pub fn new(bot_type: BotType) -> Self {
        Self { bot_type }
    }

    fn efficient(state: &GameState) -> Option<Direction> {
        let head = state.snake().head();
        let food = state.food();

        let mut best = None;
        let mut best_distance = usize::MAX;
        for direction in Self::candidate_directions(state.direction()) {
            let next = state.grid().step(head, direction);
            if !Self::is_safe(state, next) {
                continue;
            }
            let distance = Self::wrapped_manhattan(next, food, state);
            if distance < best_distance {
                best_distance = distance;
                best = Some(direction);
            }
        }

        best.or_else(|| Self::random(state))
    }

    fn random(state: &GameState) -> Option<Direction> {
        let head = state.snake().head();
        let safe: Vec<Direction> = Self::candidate_directions(state.direction())
            .into_iter()
            .filter(|direction| Self::is_safe(state, state.grid().step(head, *direction)))
            .collect();

        if safe.is_empty() {
            Some(state.direction())
        } else {
            let mut rng = rand::rng();
            Some(safe[rng.random_range(0..safe.len())])
        }
    }

    fn candidate_directions(current: Direction) -> Vec<Direction> {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .filter(|direction| !direction.is_opposite(&current))
        .collect()
    }

    // The tail cell counts as free: it vacates on the same tick unless the
    // snake grows, which is rare enough for a heuristic.
    fn is_safe(state: &GameState, pos: Point) -> bool {
        !state.snake().contains(&pos) || pos == state.snake().tail()
    }

    fn wrapped_manhattan(a: Point, b: Point, state: &GameState) -> usize {
        let grid = state.grid();
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.min(grid.cols - dx) + dy.min(grid.rows - dy)
    }
}

impl DirectionSource for BotController {
    fn next_direction(&mut self, state: &GameState) -> Option<Direction> {
        match self.bot_type {
            BotType::Efficient => Self::efficient(state),
            BotType::Random => Self::random(state),
        }
    }
}
