use std::cell::RefCell;
use std::rc::Rc;

use tictactoe_engine::game::{BOARD_SIDE, BoardState, GameObserver, GameUpdate, IllegalMove, Mark};
use tictactoe_engine::GameSettings;

/// Observer that keeps the most recent engine update for the next redraw.
#[derive(Clone, Default)]
pub struct LatestUpdate(Rc<RefCell<Option<GameUpdate>>>);

impl LatestUpdate {
    pub fn take(&self) -> Option<GameUpdate> {
        self.0.borrow_mut().take()
    }
}

impl GameObserver for LatestUpdate {
    fn on_update(&mut self, update: &GameUpdate) {
        *self.0.borrow_mut() = Some(*update);
    }
}

pub struct TerminalView {
    settings: GameSettings,
    show_cell_numbers: bool,
}

impl TerminalView {
    pub fn new(settings: GameSettings, show_cell_numbers: bool) -> Self {
        Self {
            settings,
            show_cell_numbers,
        }
    }

    pub fn title(&self) -> String {
        let underline = "=".repeat(self.settings.title.chars().count());
        format!("{}\n{}", self.settings.title, underline)
    }

    pub fn render(&self, update: &GameUpdate) -> String {
        let board = BoardState::from_cells(*update.board.cells());
        let winning_line = update
            .outcome
            .winner()
            .and_then(|mark| board.winning_line(mark));
        let highlighted = |index: usize| winning_line.is_some_and(|line| line.contains(&index));

        let rows: Vec<String> = update
            .board
            .cells()
            .chunks(BOARD_SIDE)
            .enumerate()
            .map(|(row, marks)| {
                marks
                    .iter()
                    .enumerate()
                    .map(|(column, mark)| {
                        let index = row * BOARD_SIDE + column;
                        self.render_cell(index, *mark, highlighted(index))
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        let mut text = rows.join("\n---+---+---\n");
        if let Some(message) = update.outcome.result_message() {
            text.push_str("\n\n");
            text.push_str(message);
        }
        text
    }

    fn render_cell(&self, index: usize, mark: Mark, highlighted: bool) -> String {
        let symbol = match self.settings.symbol_for(mark) {
            Some(symbol) => symbol.to_string(),
            None if self.show_cell_numbers => (index + 1).to_string(),
            None => " ".to_string(),
        };
        if highlighted {
            format!("[{}]", symbol)
        } else {
            format!(" {} ", symbol)
        }
    }

    pub fn describe_error(&self, error: &IllegalMove) -> String {
        match error {
            IllegalMove::Occupied { index } => format!("Cell {} is already marked", index + 1),
            IllegalMove::OutOfRange { .. } => "Cells are numbered 1 to 9".to_string(),
            IllegalMove::GameOver => "The game is over, press r to play again".to_string(),
            IllegalMove::NotYourTurn => error.to_string(),
        }
    }

    pub fn prompt(&self, game_over: bool) -> String {
        if game_over {
            "r = new game, q = quit > ".to_string()
        } else {
            format!("Your move ({}), 1-9 > ", self.settings.human_symbol)
        }
    }
}
