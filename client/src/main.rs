mod config;
mod console;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::games::SessionRng;
use common::games::tictactoe::{
    DifficultySetting, DifficultyTier, HeuristicLadder, TicTacToeGameState,
    TicTacToeSessionSettings,
};
use common::{log, logger};

use config::{Config, get_config_manager};

#[derive(Parser, Debug)]
#[command(name = "tictactoe_console", about = "Play Tic-Tac-Toe against the computer")]
struct Args {
    /// Named difficulty: random, easy, medium, hard, smart, unbeatable
    #[arg(long, conflicts_with = "mistake_probability")]
    difficulty: Option<DifficultyTier>,

    /// Custom chance (0..=1) that the computer plays a heuristic move
    #[arg(long)]
    mistake_probability: Option<f64>,

    /// Heuristic used for mistakes with --mistake-probability
    #[arg(long, requires = "mistake_probability")]
    ladder: Option<HeuristicLadder>,

    #[arg(long)]
    seed: Option<u64>,

    /// YAML config file (defaults to tictactoe_console_config.yaml next to the binary)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log engine decisions to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn resolve_difficulty(args: &Args, config: &Config) -> DifficultySetting {
    if let Some(mistake_probability) = args.mistake_probability {
        return DifficultySetting::Custom {
            mistake_probability,
            ladder: args.ladder.unwrap_or_default(),
        };
    }
    match args.difficulty {
        Some(tier) => DifficultySetting::Tier(tier),
        None => config.difficulty.clone(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config: Config = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()).get_config()?,
        None => get_config_manager().get_config()?,
    };

    let difficulty = resolve_difficulty(&args, &config);
    let settings = TicTacToeSessionSettings::from_setting(config.human_mark, &difficulty)?;
    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!("Starting game with seed {}", rng.seed());
    println!("Difficulty: {}", settings.profile);
    println!(
        "You play {}, the computer plays {}. You move first.",
        settings.human_mark.symbol(),
        settings.computer_mark().symbol()
    );

    let mut game = TicTacToeGameState::new(settings, rng);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    console::run_console_game(&mut game, &mut input, &mut output)?;

    Ok(())
}
