use std::io::Write;
use std::time::Duration;

use common::games::tictactoe::{GameEvent, PlayerSymbols, Symbol, TicTacToeGame, TurnState};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::PacingConfig;
use crate::input::{Command, parse_command};
use crate::ui::{BoardView, INTRO_TEXT, render_result};

async fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

/// Replays queued controller notifications on the terminal with pacing delays.
pub struct Presenter<W: Write> {
    view: BoardView,
    pacing: PacingConfig,
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(view: BoardView, pacing: PacingConfig, out: W) -> Self {
        Self { view, pacing, out }
    }

    #[cfg(test)]
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    #[cfg(test)]
    pub fn out(&self) -> &W {
        &self.out
    }

    pub fn print(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// `paced` is set for events that answer a user move; the computer's
    /// reply is then delayed the way a human opponent would be.
    pub async fn present(
        &mut self,
        events: Vec<GameEvent>,
        symbols: Option<PlayerSymbols>,
        paced: bool,
    ) -> std::io::Result<()> {
        let computer = symbols.map(|s| s.computer);

        for event in events {
            match event {
                GameEvent::CellChanged { symbol, .. } => {
                    if paced && Some(symbol) == computer {
                        pause(self.pacing.move_delay_ms).await;
                    }
                    event.dispatch(&mut self.view);
                    let board = self.view.render_board();
                    self.print(&board)?;
                }
                GameEvent::TurnChanged { active } => {
                    if paced && Some(active) == computer {
                        pause(self.pacing.turn_indicator_delay_ms).await;
                    }
                    event.dispatch(&mut self.view);
                    if let Some(symbols) = symbols {
                        let indicator = self.view.render_turn_indicator(symbols);
                        self.print(&indicator)?;
                    }
                }
                GameEvent::GameOver { result, .. } => {
                    event.dispatch(&mut self.view);
                    let board = self.view.render_board();
                    self.print(&board)?;
                    pause(self.pacing.result_delay_ms).await;
                    self.print(&render_result(result))?;
                }
                GameEvent::Reset => {
                    event.dispatch(&mut self.view);
                    self.print(INTRO_TEXT)?;
                }
            }
        }
        Ok(())
    }
}

fn prompt_for(state: TurnState) -> &'static str {
    match state {
        TurnState::SymbolSelection => "> x / o / q",
        TurnState::WaitingForUser | TurnState::ComputerThinking => "> cell 1-9, r to restart, q to quit",
        TurnState::GameOver => "> r / q",
    }
}

pub struct GameRunner<W: Write> {
    game: TicTacToeGame<Vec<GameEvent>>,
    presenter: Presenter<W>,
}

impl<W: Write> GameRunner<W> {
    pub fn new(presenter: Presenter<W>) -> Self {
        Self {
            game: TicTacToeGame::new(Vec::new()),
            presenter,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &TicTacToeGame<Vec<GameEvent>> {
        &self.game
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &Presenter<W> {
        &self.presenter
    }

    async fn flush_events(&mut self, paced: bool) -> std::io::Result<()> {
        let events = std::mem::take(self.game.observer_mut());
        let symbols = self.game.symbols();
        self.presenter.present(events, symbols, paced).await
    }

    /// Applies one command. Returns `false` once the user asked to quit.
    pub async fn handle_command(&mut self, command: Command) -> std::io::Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Reset => {
                self.game.request_reset();
                self.flush_events(false).await?;
            }
            Command::Symbol(symbol) => {
                if self.game.select_symbol(symbol) {
                    self.flush_events(false).await?;
                } else {
                    self.presenter.print("A game is already in progress")?;
                }
            }
            Command::Cell(index) => {
                if self.game.request_user_move(index) {
                    self.flush_events(true).await?;
                } else if self.game.turn_state() == TurnState::WaitingForUser {
                    self.presenter.print(&format!("Cell {} is already taken", index + 1))?;
                } else {
                    self.presenter.print("No move expected right now")?;
                }
            }
        }
        Ok(true)
    }

    /// Reads commands from stdin until `q` or end of input.
    pub async fn run(&mut self, initial_symbol: Option<Symbol>) -> std::io::Result<()> {
        self.presenter.print(INTRO_TEXT)?;
        if let Some(symbol) = initial_symbol {
            self.handle_command(Command::Symbol(symbol)).await?;
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.presenter.print(prompt_for(self.game.turn_state()))?;

            let Some(line) = lines.next_line().await? else {
                log!("Input closed, leaving");
                break;
            };
            let Some(command) = parse_command(&line) else {
                self.presenter.print(&format!("Unknown command: {}", line.trim()))?;
                continue;
            };
            if !self.handle_command(command).await? {
                break;
            }
        }
        Ok(())
    }
}
