use clap::{Args, Parser, Subcommand};
use tokio::time::Duration;

use duel::{
    init_logging, run_local,
    supervisor::{play_child, play_parent, ChildCommand, DEFAULT_REAP_GRACE},
    GameConfig, GameOutcome, Variant, DEFAULT_MAX_ATTEMPTS_PER_SHIP, DEFAULT_MAX_FLEET_RESTARTS,
};

#[derive(Parser)]
#[command(author, version, about = "Two random players fight a game of Battleship over a pair of pipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    variant: Variant,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS_PER_SHIP, help = "Placement attempts per ship before the fleet starts over")]
    max_attempts: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_FLEET_RESTARTS, help = "Fleet restarts before placement gives up")]
    max_restarts: usize,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        let fleet = self
            .variant
            .fleet()
            .with_max_attempts(self.max_attempts)
            .with_max_restarts(self.max_restarts);
        GameConfig::new(self.variant)
            .with_fleet(fleet)
            .with_seed(self.seed)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play with the opponent in a separate child process.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Milliseconds to wait for the child to exit before killing it")]
        reap_grace_ms: Option<u64>,
    },
    /// Play with both sides in this process.
    Local {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Child side of `play`; talks to the parent over stdin/stdout.
    #[command(hide = true)]
    Child {
        #[command(flatten)]
        game: GameArgs,
    },
}

fn announce(config: &GameConfig) {
    let size = config.variant.board_size();
    log::info!("Starting {} game on a {}x{} board...", config.variant, size, size);
    if let Some(s) = config.seed {
        log::info!("Using fixed seed: {} (game will be reproducible)", s);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game, reap_grace_ms } => {
            let config = game.config();
            announce(&config);
            let grace = reap_grace_ms.map_or(DEFAULT_REAP_GRACE, Duration::from_millis);
            let command = ChildCommand::current_exe()?.child_args(&config);
            let report = play_parent(&config, &command, grace).await?;
            if report.parent.outcome == GameOutcome::Abandoned {
                log::warn!("Game ended without a winner");
            }
        }
        Commands::Local { game } => {
            let config = game.config();
            announce(&config);
            let report = run_local(&config).await?;
            match report.winner() {
                Some(winner) => log::info!(
                    "{} won after {} guesses",
                    winner,
                    report.parent.guesses_sent + report.child.guesses_sent
                ),
                None => log::warn!("Game ended without a winner"),
            }
        }
        Commands::Child { game } => {
            let config = game.config();
            let report = play_child(&config).await?;
            log::debug!("Child finished: {:?}", report.outcome);
        }
    }
    Ok(())
}
