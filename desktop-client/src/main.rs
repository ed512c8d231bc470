mod config;
mod console;
mod self_play_runner;
mod ui;

use clap::Parser;
use common::{log, logger};

use config::{get_config_manager, get_config_manager_for_path};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play Tic-Tac-Toe against minimax and alpha-beta")]
struct Args {
    /// Play in the terminal instead of opening a window
    #[arg(long)]
    console: bool,

    /// Run AI-vs-AI games and exit
    #[arg(long, value_name = "GAMES")]
    self_play: Option<u32>,

    /// Path to the YAML config file
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(games) = args.self_play {
        self_play_runner::run_self_play(games)?;
        return Ok(());
    }

    let config_manager = match &args.config {
        Some(path) => get_config_manager_for_path(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config()?;
    log!(
        "Loaded config: human plays {}, first player {:?}, AI delay {} ms",
        config.human_mark,
        config.first_player,
        config.ai_delay_ms
    );

    if args.console {
        console::run_console_game(&config)?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_min_inner_size([560.0, 400.0])
            .with_title("Tic-Tac-Toe AI Comparison"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe AI Comparison",
        options,
        Box::new(move |cc| {
            let app = TicTacToeApp::new(cc.egui_ctx.clone(), &config)?;
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
