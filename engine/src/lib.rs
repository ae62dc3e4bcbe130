pub mod config;
pub mod game;
pub mod logger;
pub mod settings;

pub use game::{
    BoardSnapshot, BoardState, GameEngine, GameObserver, GameState, GameUpdate, IllegalMove, Mark,
    Outcome, SearchResult, TurnState,
};
pub use settings::GameSettings;
