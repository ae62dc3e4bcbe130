mod board;
mod engine;
mod search;
mod types;

pub use board::{BoardState, WIN_LINES};
pub use engine::{GameEngine, GameObserver, GameUpdate, IllegalMove};
pub use search::{DRAW_SCORE, LOSS_SCORE, SearchResult, WIN_SCORE, best_move, search};
pub use types::{BOARD_SIDE, BoardSnapshot, CELL_COUNT, GameState, Mark, Outcome, TurnState};
