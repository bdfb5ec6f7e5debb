use std::time::Duration;

use crate::grid::GridDimensions;
use crate::log;
use super::input::InputQueue;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, Phase, Point, SegmentMove, TickEffect, TickOutcome};

pub const SPAWN_CELL: Point = Point { x: 10, y: 10 };
pub const INITIAL_FOOD_CELL: Point = Point { x: 15, y: 15 };
pub const DEFAULT_DIRECTION: Direction = Direction::Right;

const FOOD_RESAMPLE_LIMIT: u32 = 1000;

#[derive(Clone, Debug)]
pub struct GameState {
    grid: GridDimensions,
    snake: Snake,
    food: Point,
    direction: Direction,
    input_queue: InputQueue,
    phase: Phase,
    level: u32,
    best_level: u32,
    speed_ms: u32,
    settings: GameSettings,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        let grid = GridDimensions::new(settings.cols as usize, settings.rows as usize);
        Self {
            grid,
            snake: Snake::new(grid.clamp(SPAWN_CELL)),
            food: grid.clamp(INITIAL_FOOD_CELL),
            direction: DEFAULT_DIRECTION,
            input_queue: InputQueue::new(settings.input_queue_capacity as usize, DEFAULT_DIRECTION),
            phase: Phase::Idle,
            level: 1,
            best_level: 0,
            speed_ms: settings.initial_speed_ms,
            settings,
        }
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::default();
        }

        if let Some(direction) = self.input_queue.pop() {
            self.direction = direction;
        }

        let prev_body: Vec<Point> = self.snake.cells().copied().collect();
        let new_head = self.grid.step(prev_body[0], self.direction);

        let mut outcome = TickOutcome::default();

        if self.snake.contains(&new_head) {
            self.phase = Phase::GameOver;
            self.best_level = self.best_level.max(self.level);
            log!(
                "Game over: hit own body at ({}, {}), level {}, best {}",
                new_head.x,
                new_head.y,
                self.level,
                self.best_level
            );
            outcome.effects.push(TickEffect::GameOver {
                level: self.level,
                best_level: self.best_level,
            });
            return outcome;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        let last = *prev_body.last().expect("snake body is never empty");
        outcome.moves.push(SegmentMove {
            index: 0,
            from: prev_body[0],
            to: new_head,
        });
        for index in 1..self.snake.len() {
            // Follow the leader: each segment moves into the cell the segment
            // ahead of it occupied last tick. A segment added by growth this
            // tick stays put at the old tail.
            outcome.moves.push(SegmentMove {
                index,
                from: prev_body.get(index).copied().unwrap_or(last),
                to: prev_body[index - 1],
            });
        }

        if ate {
            self.level += 1;
            self.speed_ms = self
                .settings
                .min_speed_ms
                .max(self.speed_ms.saturating_sub(self.settings.speed_decrement_ms));
            self.food = self.place_food(rng);
            outcome.effects.push(TickEffect::FoodEaten {
                level: self.level,
                speed_ms: self.speed_ms,
            });
        }

        outcome
    }

    fn place_food(&self, rng: &mut SessionRng) -> Point {
        let mut attempts = 0u32;
        loop {
            let candidate = Point::new(
                rng.random_range(0..self.grid.cols),
                rng.random_range(0..self.grid.rows),
            );
            attempts += 1;
            if !self.snake.contains(&candidate) {
                log!("Food spawned at ({}, {})", candidate.x, candidate.y);
                return candidate;
            }
            // Liveness wins near full occupancy: after enough failed samples
            // the last candidate is accepted even if it lands on the snake.
            if attempts > FOOD_RESAMPLE_LIMIT {
                log!(
                    "Food placement gave up after {} attempts, accepting ({}, {})",
                    attempts,
                    candidate.x,
                    candidate.y
                );
                return candidate;
            }
        }
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            log!("Game started on {}x{} grid", self.grid.cols, self.grid.rows);
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.clamp(SPAWN_CELL));
        self.food = self.grid.clamp(INITIAL_FOOD_CELL);
        self.direction = DEFAULT_DIRECTION;
        self.input_queue.reset(DEFAULT_DIRECTION);
        self.phase = Phase::Idle;
        self.level = 1;
        self.speed_ms = self.settings.initial_speed_ms;
    }

    pub fn push_direction(&mut self, direction: Direction) {
        if self.phase != Phase::Running {
            return;
        }
        self.input_queue.push(direction);
    }

    // Applied between ticks by the session loop; clamping each axis
    // independently can leave overlapping body cells, which the engine
    // tolerates rather than ending the run.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        let grid = GridDimensions::new(cols, rows);
        if grid == self.grid {
            return;
        }
        self.grid = grid;
        self.snake.clamp_into(grid);
        self.food = grid.clamp(self.food);
        log!("Grid resized to {}x{}", grid.cols, grid.rows);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn best_level(&self) -> u32 {
        self.best_level
    }

    pub fn set_best_level(&mut self, best_level: u32) {
        self.best_level = self.best_level.max(best_level);
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms as u64)
    }

    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[cfg(test)]
    fn set_body(&mut self, cells: &[Point]) {
        // Cells are head-first, matching the body order.
        let mut snake = Snake::new(*cells.last().expect("test body must not be empty"));
        for cell in cells[..cells.len() - 1].iter().rev() {
            snake.advance(*cell, true);
        }
        self.snake = snake;
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }
}
