pub mod clock;
pub mod config;
pub mod game;
pub mod grid;
pub mod logger;
pub mod score;
pub mod session;

pub use clock::GameClock;
pub use game::{
    Direction, GameSettings, GameState, MotionInterpolator, Phase, PixelPos, Point, SegmentMove,
    SessionRng, Snake, TickEffect, TickOutcome,
};
pub use grid::GridDimensions;
pub use score::{BestScoreStore, FileBestScoreStore, ScoreStoreError};
pub use session::{DirectionSource, GameObserver, SessionCommand, run_session};
