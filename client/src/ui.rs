use common::games::tictactoe::{
    BOARD_SIZE, CELL_COUNT, GameObserver, GameResult, Mark, PlayerSymbols, Symbol, WinningLine,
};

pub const INTRO_TEXT: &str = "Pick your symbol: x or o (X moves first)";

/// Terminal mirror of the board, kept up to date from controller notifications.
#[derive(Debug, Clone)]
pub struct BoardView {
    marks: [Mark; CELL_COUNT],
    active: Option<Symbol>,
    highlighted: Option<WinningLine>,
    show_cell_numbers: bool,
}

impl BoardView {
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            marks: [Mark::Empty; CELL_COUNT],
            active: None,
            highlighted: None,
            show_cell_numbers,
        }
    }

    #[cfg(test)]
    pub fn marks(&self) -> &[Mark; CELL_COUNT] {
        &self.marks
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<Symbol> {
        self.active
    }

    fn render_cell(&self, index: usize) -> String {
        let text = match self.marks[index] {
            Mark::X => "X".to_string(),
            Mark::O => "O".to_string(),
            Mark::Empty if self.show_cell_numbers => (index + 1).to_string(),
            Mark::Empty => " ".to_string(),
        };
        match self.highlighted {
            Some(line) if line.contains(index) => format!("[{}]", text),
            _ => format!(" {} ", text),
        }
    }

    pub fn render_board(&self) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| self.render_cell(row * BOARD_SIZE + col))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---+---+---\n")
    }

    /// Both symbols side by side, the active one bracketed.
    pub fn render_turn_indicator(&self, symbols: PlayerSymbols) -> String {
        let badge = |symbol: Symbol| {
            let owner = if symbol == symbols.user { "you" } else { "computer" };
            if self.active == Some(symbol) {
                format!("[{} {}]", symbol, owner)
            } else {
                format!(" {} {} ", symbol, owner)
            }
        };
        format!("Turn: {}  {}", badge(Symbol::X), badge(Symbol::O))
    }
}

impl GameObserver for BoardView {
    fn on_cell_changed(&mut self, index: usize, symbol: Symbol) {
        self.marks[index] = symbol.into();
    }

    fn on_turn_changed(&mut self, active: Symbol) {
        self.active = Some(active);
    }

    fn on_game_over(&mut self, _result: GameResult, winning_line: Option<WinningLine>) {
        self.active = None;
        self.highlighted = winning_line;
    }

    fn on_reset(&mut self) {
        *self = Self::new(self.show_cell_numbers);
    }
}

pub fn render_result(result: GameResult) -> String {
    let text = result.result_text().unwrap_or_default();
    format!("*** {} ***\nPress r to play again or q to quit", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::GameEvent;

    fn view_after(events: &[GameEvent]) -> BoardView {
        let mut view = BoardView::new(true);
        for event in events {
            event.dispatch(&mut view);
        }
        view
    }

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let view = BoardView::new(true);

        assert_eq!(
            view.render_board(),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_empty_board_without_numbers() {
        let view = BoardView::new(false);

        assert_eq!(view.render_board().lines().next(), Some("   |   |   "));
    }

    #[test]
    fn test_view_follows_cell_events() {
        let view = view_after(&[
            GameEvent::CellChanged { index: 0, symbol: Symbol::X },
            GameEvent::CellChanged { index: 4, symbol: Symbol::O },
        ]);

        assert_eq!(view.marks()[0], Mark::X);
        assert_eq!(view.marks()[4], Mark::O);
        assert_eq!(view.render_board().lines().nth(2), Some(" 4 | O | 6 "));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let view = view_after(&[
            GameEvent::CellChanged { index: 2, symbol: Symbol::O },
            GameEvent::CellChanged { index: 4, symbol: Symbol::O },
            GameEvent::CellChanged { index: 6, symbol: Symbol::O },
            GameEvent::GameOver {
                result: GameResult::Win(Symbol::O),
                winning_line: Some(WinningLine::new([2, 4, 6])),
            },
        ]);

        let board = view.render_board();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[0], " 1 | 2 |[O]");
        assert_eq!(lines[2], " 4 |[O]| 6 ");
        assert_eq!(lines[4], "[O]| 8 | 9 ");
        assert_eq!(view.active(), None);
    }

    #[test]
    fn test_turn_indicator_brackets_active_symbol() {
        let view = view_after(&[GameEvent::TurnChanged { active: Symbol::O }]);
        let symbols = PlayerSymbols::for_user(Symbol::X);

        assert_eq!(
            view.render_turn_indicator(symbols),
            "Turn:  X you   [O computer]"
        );
    }

    #[test]
    fn test_reset_clears_view() {
        let mut view = view_after(&[
            GameEvent::CellChanged { index: 0, symbol: Symbol::X },
            GameEvent::TurnChanged { active: Symbol::O },
        ]);

        view.on_reset();

        assert_eq!(view.marks(), &[Mark::Empty; CELL_COUNT]);
        assert_eq!(view.active(), None);
    }

    #[test]
    fn test_result_screen() {
        assert_eq!(
            render_result(GameResult::Draw),
            "*** Match has been drawn! ***\nPress r to play again or q to quit"
        );
    }
}
