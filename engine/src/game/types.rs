use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Human => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Human),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Text shown to the human player once the game has ended.
    pub fn result_message(&self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Draw => Some("Game Draw!"),
            Outcome::Win(Mark::Human) => Some("You Win! :)"),
            Outcome::Win(_) => Some("You Lose :("),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    HumanToMove,
    ComputerToMove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    HumanToMove,
    ComputerToMove,
    GameOver(Outcome),
}

impl GameState {
    pub fn turn(&self) -> Option<TurnState> {
        match self {
            GameState::HumanToMove => Some(TurnState::HumanToMove),
            GameState::ComputerToMove => Some(TurnState::ComputerToMove),
            GameState::GameOver(_) => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            GameState::GameOver(outcome) => *outcome,
            _ => Outcome::InProgress,
        }
    }
}

/// Immutable copy of the board handed out to views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardSnapshot([Mark; CELL_COUNT]);

impl BoardSnapshot {
    pub fn new(cells: [Mark; CELL_COUNT]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.0.get(index).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.0.chunks(BOARD_SIDE)
    }

    pub fn to_text(&self, human_symbol: &str, computer_symbol: &str, empty_symbol: &str) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|mark| match mark {
                        Mark::Human => human_symbol,
                        Mark::Computer => computer_symbol,
                        Mark::Empty => empty_symbol,
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text("X", "O", "."))
    }
}
