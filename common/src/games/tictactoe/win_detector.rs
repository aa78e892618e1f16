use super::board::Board;
use super::types::{GameResult, PlayerSymbols, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    pub const fn new(cells: [usize; 3]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

pub fn check_win(board: &Board, symbol: Symbol) -> Option<WinningLine> {
    board.winner(symbol)
}

/// Terminal check in fixed order: user win, computer win, draw.
pub fn check_game_result(board: &Board, symbols: PlayerSymbols) -> (GameResult, Option<WinningLine>) {
    if let Some(line) = check_win(board, symbols.user) {
        return (GameResult::Win(symbols.user), Some(line));
    }
    if let Some(line) = check_win(board, symbols.computer) {
        return (GameResult::Win(symbols.computer), Some(line));
    }
    if board.is_full() {
        return (GameResult::Draw, None);
    }
    (GameResult::InProgress, None)
}
