mod config;
mod game_runner;
mod input;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::Symbol;
use common::logger::{self, LogSink};
use common::log;

use config::{PacingConfig, get_config_manager};
use game_runner::{GameRunner, Presenter};
use ui::BoardView;

#[derive(Clone, Copy, ValueEnum)]
enum SymbolArg {
    X,
    O,
}

impl From<SymbolArg> for Symbol {
    fn from(arg: SymbolArg) -> Self {
        match arg {
            SymbolArg::X => Symbol::X,
            SymbolArg::O => Symbol::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tic_tac_toe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Config file, defaults to tic_tac_toe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Symbol for the first game, skipping the selection prompt
    #[arg(long, value_enum)]
    symbol: Option<SymbolArg>,

    /// Show every move immediately
    #[arg(long)]
    no_delay: bool,

    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    if let Some(path) = &args.log_file {
        logger::init_logger(prefix, LogSink::append_to_file(path)?);
    } else if args.verbose {
        logger::init_logger(prefix, LogSink::Stderr);
    }

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config()?;
    log!("Loaded config from {}", config_manager.content_provider().file_path().display());

    let pacing = if args.no_delay {
        PacingConfig::instant()
    } else {
        config.pacing
    };
    let initial_symbol = args.symbol.map(Symbol::from).or(config.preferred_symbol);

    let presenter = Presenter::new(BoardView::new(config.show_cell_numbers), pacing, std::io::stdout());
    let mut runner = GameRunner::new(presenter);
    runner.run(initial_symbol).await?;

    log!("Bye");
    Ok(())
}
