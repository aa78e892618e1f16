use std::fmt;

use super::types::{Mark, Symbol};
use super::win_detector::{WINNING_LINES, WinningLine};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const CENTER_CELL: usize = 4;

/// Row-major 3x3 grid of marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Mark {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);
        self.cells[index]
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Mark::Empty
    }

    pub fn place(&mut self, index: usize, symbol: Symbol) {
        assert!(self.is_empty(index), "cell {} is already marked", index);
        self.cells[index] = symbol.into();
    }

    pub fn clear(&mut self, index: usize) {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);
        self.cells[index] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|mark| **mark != Mark::Empty).count()
    }

    pub fn winner(&self, symbol: Symbol) -> Option<WinningLine> {
        let mark = Mark::from(symbol);
        WINNING_LINES
            .iter()
            .find(|line| line.cells().iter().all(|&index| self.cells[index] == mark))
            .copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    pub fn snapshot(&self) -> [Mark; CELL_COUNT] {
        self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            let cells: Vec<&str> = chunk
                .iter()
                .map(|mark| match mark {
                    Mark::Empty => " ",
                    Mark::X => "X",
                    Mark::O => "O",
                })
                .collect();
            writeln!(f, " {} ", cells.join(" | "))?;
            if row + 1 < BOARD_SIZE {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
