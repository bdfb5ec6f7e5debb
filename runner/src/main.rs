mod bot;
mod config;

use clap::Parser;
use tokio::sync::mpsc;

use oro_engine::game::{
    GameState, MotionInterpolator, SessionRng, TickEffect, TickOutcome, animation_duration,
};
use oro_engine::score::{BestScoreStore, FileBestScoreStore};
use oro_engine::session::{GameObserver, SessionCommand, run_session};
use oro_engine::{log, logger};

#[derive(Parser)]
#[command(name = "oro_runner")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Seed for the food placement RNG; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "efficient")]
    bot: bot::BotType,

    /// Stop after this many ticks; 0 plays until game over.
    #[arg(long, default_value_t = 0)]
    max_ticks: u64,
}

struct LoggingObserver {
    interpolator: MotionInterpolator,
    ticks: u64,
    max_ticks: u64,
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl GameObserver for LoggingObserver {
    async fn on_tick(&mut self, state: &GameState, outcome: &TickOutcome) {
        self.ticks += 1;

        let duration = animation_duration(state.speed_ms());
        self.interpolator.begin_tick(&outcome.moves, duration);

        for effect in &outcome.effects {
            if let TickEffect::FoodEaten { level, speed_ms } = effect {
                let head = state.snake().head();
                let midpoint = self.interpolator.sample(duration / 2);
                log!(
                    "Level {}: ate at ({}, {}), speed {} ms, head mid-animation at ({:.1}, {:.1})",
                    level,
                    head.x,
                    head.y,
                    speed_ms,
                    midpoint[0].x,
                    midpoint[0].y
                );
            }
        }

        if self.max_ticks > 0 && self.ticks >= self.max_ticks {
            let _ = self.commands.send(SessionCommand::Quit);
        }
    }

    async fn on_game_over(&mut self, level: u32, best_level: u32) {
        log!(
            "Game over after {} ticks: level {}, best {}",
            self.ticks,
            level,
            best_level
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager().get_config()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let mut state = GameState::new(config.game);

    let store = FileBestScoreStore::new(&config.scores.location);
    match store.load() {
        Ok(Some(best)) => {
            log!("Loaded best level {} from {}", best, config.scores.location);
            state.set_best_level(best);
        }
        Ok(None) => {}
        Err(e) => log!("Failed to load best level: {}", e),
    }
    let score_store: Option<&dyn BestScoreStore> = if config.scores.save {
        Some(&store)
    } else {
        None
    };

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let mut observer = LoggingObserver {
        interpolator: MotionInterpolator::new(state.grid(), state.snake().head()),
        ticks: 0,
        max_ticks: args.max_ticks,
        commands: command_tx,
    };
    let mut controller = bot::BotController::new(args.bot);

    let final_state = run_session(
        state,
        command_rx,
        rng,
        Some(&mut controller),
        score_store,
        &mut observer,
    )
    .await;

    log!(
        "Run finished at level {} (best {})",
        final_state.level(),
        final_state.best_level()
    );

    Ok(())
}
