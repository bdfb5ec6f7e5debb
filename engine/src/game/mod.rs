mod input;
mod motion;
mod session_rng;
mod settings;
mod snake;
mod state;
mod types;

pub use input::InputQueue;
pub use motion::{
    MotionInterpolator, PixelPos, SegmentAnimation, CELL_SIZE_PX, animation_duration,
};
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use state::{DEFAULT_DIRECTION, GameState, INITIAL_FOOD_CELL, SPAWN_CELL};
pub use types::{Direction, Phase, Point, SegmentMove, TickEffect, TickOutcome};
