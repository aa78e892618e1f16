use super::board::{Board, CENTER_CELL};
use super::types::{PlayerSymbols, Symbol};

pub type Score = i32;

pub const COMPUTER_WIN_SCORE: Score = 1;
pub const USER_WIN_SCORE: Score = -1;
pub const NEUTRAL_SCORE: Score = 0;

/// Plies searched for every computer move after the opening.
pub const SEARCH_DEPTH: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub score: Score,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self { index: None, score }
    }
}

/// Picks the computer's next cell: the center while it is free, otherwise the
/// result of a `SEARCH_DEPTH` minimax search. `None` only on a full board.
pub fn calculate_computer_move(board: &Board, symbols: PlayerSymbols) -> Option<usize> {
    if board.is_empty(CENTER_CELL) {
        return Some(CENTER_CELL);
    }

    let mut scratch = *board;
    search(&mut scratch, symbols, symbols.computer, SEARCH_DEPTH).index
}

/// Depth-limited minimax scored from the computer's side.
///
/// Cells are tried in ascending order and a later cell only replaces the
/// current best on a strictly better score, so ties go to the lowest index for
/// both players. Every placement is undone before returning.
pub fn search(board: &mut Board, symbols: PlayerSymbols, to_move: Symbol, depth: usize) -> SearchResult {
    if board.winner(symbols.user).is_some() {
        return SearchResult::leaf(USER_WIN_SCORE);
    }
    if board.winner(symbols.computer).is_some() {
        return SearchResult::leaf(COMPUTER_WIN_SCORE);
    }
    if board.is_full() {
        return SearchResult::leaf(NEUTRAL_SCORE);
    }

    if depth == 0 {
        return SearchResult::leaf(NEUTRAL_SCORE);
    }

    let is_maximizing = to_move == symbols.computer;
    let mut best: Option<SearchResult> = None;

    for index in board.empty_cells() {
        board.place(index, to_move);
        let score = search(board, symbols, to_move.opponent(), depth - 1).score;
        board.clear(index);

        let improves = match best {
            None => true,
            Some(current) if is_maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(SearchResult {
                index: Some(index),
                score,
            });
        }
    }

    best.unwrap_or(SearchResult::leaf(NEUTRAL_SCORE))
}
