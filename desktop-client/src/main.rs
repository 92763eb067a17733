mod config;
mod local_game;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::config::ConfigManager;
use common::games::SessionRng;
use common::{log, logger};

use config::{Config, get_config_manager};
use local_game::LocalGame;
use ui::TicTacToeApp;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_desktop", about = "Tic-Tac-Toe against the computer")]
struct Args {
    #[arg(long)]
    seed: Option<u64>,

    /// YAML config file (defaults to tictactoe_desktop_config.yaml next to the binary)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config: Config = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()).get_config()?,
        None => get_config_manager().get_config()?,
    };
    log!("Loaded config: {:?}", config);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let local_game = LocalGame::new(
        config.difficulty,
        config.human_mark,
        Duration::from_millis(config.computer_delay_ms as u64),
        rng,
    )?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 600.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(local_game)))),
    )?;

    Ok(())
}
