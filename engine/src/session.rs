use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::clock::GameClock;
use crate::game::{Direction, GameState, Phase, SessionRng, TickEffect, TickOutcome};
use crate::log;
use crate::score::BestScoreStore;

// The loop polls well above any playable tick rate; GameClock decides when
// a poll becomes a tick.
const POLL_INTERVAL: Duration = Duration::from_millis(4);

#[derive(Clone, Copy, Debug)]
pub enum SessionCommand {
    Turn(Direction),
    Pause,
    Resume,
    Resize { cols: usize, rows: usize },
    Quit,
}

pub trait GameObserver {
    fn on_tick(
        &mut self,
        state: &GameState,
        outcome: &TickOutcome,
    ) -> impl Future<Output = ()> + Send;

    fn on_game_over(&mut self, level: u32, best_level: u32) -> impl Future<Output = ()> + Send;
}

// Supplies a direction ahead of each tick, the way a player (or bot) would.
pub trait DirectionSource {
    fn next_direction(&mut self, state: &GameState) -> Option<Direction>;
}

pub async fn run_session<O: GameObserver>(
    mut state: GameState,
    mut commands: mpsc::UnboundedReceiver<SessionCommand>,
    mut rng: SessionRng,
    mut controller: Option<&mut dyn DirectionSource>,
    score_store: Option<&dyn BestScoreStore>,
    observer: &mut O,
) -> GameState {
    state.start();
    let mut clock = GameClock::new(state.tick_interval());
    let mut poll = tokio::time::interval(POLL_INTERVAL);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = poll.tick() => {
                if state.phase() != Phase::Running {
                    continue;
                }
                if !clock.should_tick(Instant::now()) {
                    continue;
                }

                if let Some(controller) = controller.as_deref_mut()
                    && let Some(direction) = controller.next_direction(&state)
                {
                    state.push_direction(direction);
                }

                let outcome = state.tick(&mut rng);

                // Effects run here, after the transition, never inside it.
                for effect in &outcome.effects {
                    match effect {
                        TickEffect::FoodEaten { speed_ms, .. } => {
                            clock.set_interval(Duration::from_millis(*speed_ms as u64));
                        }
                        TickEffect::GameOver { best_level, .. } => {
                            if let Some(store) = score_store
                                && let Err(e) = store.save(*best_level)
                            {
                                log!("Failed to persist best level: {}", e);
                            }
                        }
                    }
                }

                observer.on_tick(&state, &outcome).await;

                if state.phase() == Phase::GameOver {
                    observer.on_game_over(state.level(), state.best_level()).await;
                    return state;
                }
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    return state;
                };
                match command {
                    SessionCommand::Turn(direction) => state.push_direction(direction),
                    SessionCommand::Pause => state.pause(),
                    SessionCommand::Resume => {
                        state.resume();
                        clock.rearm();
                    }
                    SessionCommand::Resize { cols, rows } => state.resize(cols, rows),
                    SessionCommand::Quit => return state,
                }
            }
        }
    }
}
