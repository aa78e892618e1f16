use super::types::{GameResult, Symbol};
use super::win_detector::WinningLine;

/// Receives the controller's notifications. Rendering lives behind this trait.
pub trait GameObserver {
    fn on_cell_changed(&mut self, index: usize, symbol: Symbol);

    fn on_turn_changed(&mut self, active: Symbol);

    fn on_game_over(&mut self, result: GameResult, winning_line: Option<WinningLine>);

    fn on_reset(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    CellChanged { index: usize, symbol: Symbol },
    TurnChanged { active: Symbol },
    GameOver { result: GameResult, winning_line: Option<WinningLine> },
    Reset,
}

impl GameEvent {
    pub fn dispatch<O: GameObserver + ?Sized>(&self, observer: &mut O) {
        match *self {
            GameEvent::CellChanged { index, symbol } => observer.on_cell_changed(index, symbol),
            GameEvent::TurnChanged { active } => observer.on_turn_changed(active),
            GameEvent::GameOver { result, winning_line } => observer.on_game_over(result, winning_line),
            GameEvent::Reset => observer.on_reset(),
        }
    }
}

/// Queues every notification for later replay.
impl GameObserver for Vec<GameEvent> {
    fn on_cell_changed(&mut self, index: usize, symbol: Symbol) {
        self.push(GameEvent::CellChanged { index, symbol });
    }

    fn on_turn_changed(&mut self, active: Symbol) {
        self.push(GameEvent::TurnChanged { active });
    }

    fn on_game_over(&mut self, result: GameResult, winning_line: Option<WinningLine>) {
        self.push(GameEvent::GameOver { result, winning_line });
    }

    fn on_reset(&mut self) {
        self.push(GameEvent::Reset);
    }
}

impl GameObserver for () {
    fn on_cell_changed(&mut self, _index: usize, _symbol: Symbol) {}

    fn on_turn_changed(&mut self, _active: Symbol) {}

    fn on_game_over(&mut self, _result: GameResult, _winning_line: Option<WinningLine>) {}

    fn on_reset(&mut self) {}
}
