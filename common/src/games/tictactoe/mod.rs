mod board;
mod bot_controller;
mod game_state;
mod observer;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, CENTER_CELL};
pub use bot_controller::{
    COMPUTER_WIN_SCORE, NEUTRAL_SCORE, SEARCH_DEPTH, Score, SearchResult, USER_WIN_SCORE,
    calculate_computer_move, search,
};
pub use game_state::TicTacToeGame;
pub use observer::{GameEvent, GameObserver};
pub use types::{GameResult, Mark, PlayerSymbols, Symbol, TurnState};
pub use win_detector::{WINNING_LINES, WinningLine, check_game_result, check_win};
