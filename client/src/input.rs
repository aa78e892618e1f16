use common::games::tictactoe::{CELL_COUNT, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cell(usize),
    Symbol(Symbol),
    Reset,
    Quit,
}

/// Parses one line of user input. Cells are numbered 1-9 on screen.
pub fn parse_command(line: &str) -> Option<Command> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "x" => Some(Command::Symbol(Symbol::X)),
        "o" => Some(Command::Symbol(Symbol::O)),
        "r" | "reset" | "restart" => Some(Command::Reset),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => {
            let number: usize = input.parse().ok()?;
            if (1..=CELL_COUNT).contains(&number) {
                Some(Command::Cell(number - 1))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_map_to_indices() {
        assert_eq!(parse_command("1"), Some(Command::Cell(0)));
        assert_eq!(parse_command("5"), Some(Command::Cell(4)));
        assert_eq!(parse_command(" 9\n"), Some(Command::Cell(8)));
    }

    #[test]
    fn test_out_of_range_cells_are_rejected() {
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("10"), None);
        assert_eq!(parse_command("-1"), None);
    }

    #[test]
    fn test_symbols_are_case_insensitive() {
        assert_eq!(parse_command("x"), Some(Command::Symbol(Symbol::X)));
        assert_eq!(parse_command("O"), Some(Command::Symbol(Symbol::O)));
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(parse_command("r"), Some(Command::Reset));
        assert_eq!(parse_command("Restart"), Some(Command::Reset));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("center"), None);
        assert_eq!(parse_command("1 2"), None);
    }
}
