use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl From<Symbol> for Mark {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Mark::X,
            Symbol::O => Mark::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opponent(&self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// Binding of the two symbols to the user and the computer for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSymbols {
    pub user: Symbol,
    pub computer: Symbol,
}

impl PlayerSymbols {
    pub fn for_user(user: Symbol) -> Self {
        Self {
            user,
            computer: user.opponent(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Symbol),
    Draw,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameResult::Win(symbol) => Some(*symbol),
            _ => None,
        }
    }

    pub fn result_text(&self) -> Option<String> {
        match self {
            GameResult::InProgress => None,
            GameResult::Win(symbol) => Some(format!("Player {} won the game!", symbol)),
            GameResult::Draw => Some("Match has been drawn!".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    SymbolSelection,
    WaitingForUser,
    ComputerThinking,
    GameOver,
}
