#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Move(usize),
    Reset,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => Err("Enter a cell number, r, h or q".to_string()),
        "r" | "reset" => Ok(Command::Reset),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(0) => Err("Cells are numbered from 1".to_string()),
            Ok(cell) => Ok(Command::Move(cell - 1)),
            Err(_) => Err(format!("Unknown command: {}", other)),
        },
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9          place your mark (cells are numbered left to right, top to bottom)
  r, reset     start a new game
  h, help      show this help
  q, quit      leave the game";
