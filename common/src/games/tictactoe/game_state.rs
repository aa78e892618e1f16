use crate::log;
use super::board::{Board, CELL_COUNT};
use super::bot_controller::calculate_computer_move;
use super::observer::GameObserver;
use super::types::{GameResult, Mark, PlayerSymbols, Symbol, TurnState};
use super::win_detector::{WinningLine, check_game_result};

/// One game against the computer, from symbol selection to game over.
///
/// All board mutations go through the controller, which reports them to the
/// observer in the order they happen.
#[derive(Debug)]
pub struct TicTacToeGame<O: GameObserver> {
    board: Board,
    symbols: Option<PlayerSymbols>,
    turn: TurnState,
    result: GameResult,
    winning_line: Option<WinningLine>,
    last_move: Option<usize>,
    observer: O,
}

impl<O: GameObserver> TicTacToeGame<O> {
    pub fn new(observer: O) -> Self {
        Self {
            board: Board::new(),
            symbols: None,
            turn: TurnState::SymbolSelection,
            result: GameResult::InProgress,
            winning_line: None,
            last_move: None,
            observer,
        }
    }

    /// Starts the game with the user playing `symbol`. X always opens, so
    /// picking O lets the computer move before this returns.
    pub fn select_symbol(&mut self, symbol: Symbol) -> bool {
        if self.turn != TurnState::SymbolSelection {
            return false;
        }

        let symbols = PlayerSymbols::for_user(symbol);
        self.symbols = Some(symbols);
        log!("Game started: user plays {}, computer plays {}", symbols.user, symbols.computer);

        if symbols.computer == Symbol::X {
            self.begin_computer_turn(symbols);
        } else {
            self.begin_user_turn(symbols);
        }
        true
    }

    /// Applies the user's mark and answers with the computer's move. Requests
    /// outside the user's turn or on a marked cell are ignored.
    pub fn request_user_move(&mut self, index: usize) -> bool {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);

        let Some(symbols) = self.symbols else {
            return false;
        };
        if self.turn != TurnState::WaitingForUser || !self.board.is_empty(index) {
            return false;
        }

        self.apply_move(index, symbols.user);
        if self.finish_if_terminal(symbols) {
            return true;
        }

        self.begin_computer_turn(symbols);
        true
    }

    pub fn request_reset(&mut self) {
        self.board.reset();
        self.symbols = None;
        self.turn = TurnState::SymbolSelection;
        self.result = GameResult::InProgress;
        self.winning_line = None;
        self.last_move = None;
        log!("Game reset");
        self.observer.on_reset();
    }

    fn begin_user_turn(&mut self, symbols: PlayerSymbols) {
        self.turn = TurnState::WaitingForUser;
        self.observer.on_turn_changed(symbols.user);
    }

    fn begin_computer_turn(&mut self, symbols: PlayerSymbols) {
        self.turn = TurnState::ComputerThinking;
        self.observer.on_turn_changed(symbols.computer);

        // The terminal check before every computer turn keeps the board non-full here.
        let Some(index) = calculate_computer_move(&self.board, symbols) else {
            log!("Computer has no move on a full board");
            return;
        };
        log!("Computer plays {} at cell {}", symbols.computer, index);

        self.apply_move(index, symbols.computer);
        if !self.finish_if_terminal(symbols) {
            self.begin_user_turn(symbols);
        }
    }

    fn apply_move(&mut self, index: usize, symbol: Symbol) {
        self.board.place(index, symbol);
        self.last_move = Some(index);
        self.observer.on_cell_changed(index, symbol);
    }

    fn finish_if_terminal(&mut self, symbols: PlayerSymbols) -> bool {
        let (result, winning_line) = check_game_result(&self.board, symbols);
        if !result.is_terminal() {
            return false;
        }

        self.turn = TurnState::GameOver;
        self.result = result;
        self.winning_line = winning_line;
        log!("Game over after {} moves: {:?}", self.board.mark_count(), result);
        self.observer.on_game_over(result, winning_line);
        true
    }

    /// The symbol expected to act now, if any.
    pub fn current_turn(&self) -> Option<Symbol> {
        let symbols = self.symbols?;
        match self.turn {
            TurnState::WaitingForUser => Some(symbols.user),
            TurnState::ComputerThinking => Some(symbols.computer),
            TurnState::SymbolSelection | TurnState::GameOver => None,
        }
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.turn == TurnState::GameOver
    }

    pub fn board_snapshot(&self) -> [Mark; CELL_COUNT] {
        self.board.snapshot()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn symbols(&self) -> Option<PlayerSymbols> {
        self.symbols
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn result_text(&self) -> Option<String> {
        self.result.result_text()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
