use std::fmt;

use super::board::BoardState;
use super::search::search;
use super::types::{BoardSnapshot, CELL_COUNT, GameState, Mark, Outcome, TurnState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    GameOver,
    NotYourTurn,
    OutOfRange { index: usize },
    Occupied { index: usize },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "Game is already over"),
            IllegalMove::NotYourTurn => write!(f, "Not your turn"),
            IllegalMove::OutOfRange { index } => {
                write!(f, "Cell {} is out of range (0..{})", index, CELL_COUNT)
            }
            IllegalMove::Occupied { index } => write!(f, "Cell {} is already marked", index),
        }
    }
}

impl std::error::Error for IllegalMove {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameUpdate {
    pub board: BoardSnapshot,
    pub outcome: Outcome,
}

pub trait GameObserver {
    fn on_update(&mut self, update: &GameUpdate);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameUpdate),
{
    fn on_update(&mut self, update: &GameUpdate) {
        self(update)
    }
}

/// One human-versus-computer game. The human always opens and every
/// accepted human move is answered synchronously by the computer.
pub struct GameEngine {
    board: BoardState,
    state: GameState,
    last_computer_move: Option<usize>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
            state: GameState::HumanToMove,
            last_computer_move: None,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn turn(&self) -> Option<TurnState> {
        self.state.turn()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn last_computer_move(&self) -> Option<usize> {
        self.last_computer_move
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.outcome()
            .winner()
            .and_then(|mark| self.board.winning_line(mark))
    }

    /// Places the human mark and, unless that ends the game, the computer's
    /// reply. On error nothing changes.
    pub fn apply_human_move(&mut self, index: usize) -> Result<BoardSnapshot, IllegalMove> {
        match self.state {
            GameState::GameOver(_) => return Err(IllegalMove::GameOver),
            GameState::ComputerToMove => return Err(IllegalMove::NotYourTurn),
            GameState::HumanToMove => {}
        }

        if index >= CELL_COUNT {
            return Err(IllegalMove::OutOfRange { index });
        }

        if !self.board.is_free(index) {
            return Err(IllegalMove::Occupied { index });
        }

        self.place_mark(index, Mark::Human);

        if self.state == GameState::ComputerToMove {
            self.computer_reply();
        }

        Ok(self.board.snapshot())
    }

    pub fn reset(&mut self) -> BoardSnapshot {
        self.board = BoardState::new();
        self.state = GameState::HumanToMove;
        self.last_computer_move = None;
        crate::log!("Game reset");
        self.notify(Outcome::InProgress);
        self.board.snapshot()
    }

    fn computer_reply(&mut self) {
        let result = search(&self.board, Mark::Computer);
        let Some(index) = result.best_index else {
            unreachable!("computer asked to move on a finished board");
        };

        crate::log!(
            "Computer plays cell {} (evaluation {})",
            index,
            result.evaluation
        );
        self.last_computer_move = Some(index);
        self.place_mark(index, Mark::Computer);
    }

    fn place_mark(&mut self, index: usize, mark: Mark) {
        self.board = self.board.apply_move(index, mark);

        let outcome = self.board.classify();
        self.state = match (outcome, mark) {
            (Outcome::InProgress, Mark::Human) => GameState::ComputerToMove,
            (Outcome::InProgress, _) => GameState::HumanToMove,
            (outcome, _) => {
                crate::log!("Game over: {:?}", outcome);
                GameState::GameOver(outcome)
            }
        };

        self.notify(outcome);
    }

    fn notify(&mut self, outcome: Outcome) {
        let update = GameUpdate {
            board: self.board.snapshot(),
            outcome,
        };
        for observer in &mut self.observers {
            observer.on_update(&update);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("last_computer_move", &self.last_computer_move)
            .field("observers", &self.observers.len())
            .finish()
    }
}
