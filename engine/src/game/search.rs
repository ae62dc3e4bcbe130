use super::board::BoardState;
use super::types::Mark;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the searched board is already terminal.
    pub best_index: Option<usize>,
    pub evaluation: i32,
}

impl SearchResult {
    fn terminal(evaluation: i32) -> Self {
        Self {
            best_index: None,
            evaluation,
        }
    }
}

/// Exhaustive minimax from the computer's point of view.
///
/// The computer maximizes and the human minimizes. Candidates are visited in
/// ascending cell order and only a strictly better evaluation replaces the
/// current best, so ties resolve to the lowest index. Scores are not
/// discounted by depth.
///
/// Panics if `player_to_move` is `Mark::Empty`.
pub fn search(board: &BoardState, player_to_move: Mark) -> SearchResult {
    let Some(opponent) = player_to_move.opponent() else {
        panic!("search needs a player to move, got {:?}", player_to_move);
    };

    if board.has_win(Mark::Computer) {
        return SearchResult::terminal(WIN_SCORE);
    }
    if board.has_win(Mark::Human) {
        return SearchResult::terminal(LOSS_SCORE);
    }

    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return SearchResult::terminal(DRAW_SCORE);
    }

    let maximizing = player_to_move == Mark::Computer;
    let mut best: Option<(usize, i32)> = None;

    for index in available_moves {
        let child = board.apply_move(index, player_to_move);
        let evaluation = search(&child, opponent).evaluation;

        let improves = match best {
            None => true,
            Some((_, best_evaluation)) if maximizing => evaluation > best_evaluation,
            Some((_, best_evaluation)) => evaluation < best_evaluation,
        };
        if improves {
            best = Some((index, evaluation));
        }
    }

    match best {
        Some((index, evaluation)) => SearchResult {
            best_index: Some(index),
            evaluation,
        },
        None => unreachable!("non-terminal board has at least one free cell"),
    }
}

pub fn best_move(board: &BoardState, player_to_move: Mark) -> Option<usize> {
    search(board, player_to_move).best_index
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const H: Mark = Mark::Human;
    const C: Mark = Mark::Computer;

    #[test]
    fn test_terminal_boards_have_no_move() {
        let computer_won = BoardState::from_cells([C, C, C, H, H, E, E, E, E]);
        assert_eq!(search(&computer_won, H), SearchResult::terminal(WIN_SCORE));

        let human_won = BoardState::from_cells([H, H, H, C, C, E, E, E, E]);
        assert_eq!(search(&human_won, C), SearchResult::terminal(LOSS_SCORE));

        let draw = BoardState::from_cells([H, C, H, H, C, C, C, H, H]);
        assert_eq!(search(&draw, C), SearchResult::terminal(DRAW_SCORE));
    }

    #[test]
    fn test_computer_takes_immediate_win() {
        let board = BoardState::from_cells([H, H, E, C, C, E, H, E, E]);
        let result = search(&board, C);
        assert_eq!(result.best_index, Some(5));
        assert_eq!(result.evaluation, WIN_SCORE);
    }

    #[test]
    fn test_computer_blocks_row() {
        let board = BoardState::from_cells([H, H, E, E, C, E, E, E, E]);
        let result = search(&board, C);
        assert_eq!(result.best_index, Some(2));
        assert_eq!(result.evaluation, DRAW_SCORE);
    }

    #[test]
    fn test_human_side_minimizes() {
        let board = BoardState::from_cells([C, C, E, H, H, E, E, E, E]);
        let result = search(&board, H);
        assert_eq!(result.best_index, Some(2));
        assert_eq!(result.evaluation, LOSS_SCORE);
    }

    #[test]
    fn test_center_is_only_safe_reply_to_corner() {
        let board = BoardState::from_cells([H, E, E, E, E, E, E, E, E]);
        let result = search(&board, C);
        assert_eq!(result.best_index, Some(4));
        assert_eq!(result.evaluation, DRAW_SCORE);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        // Both 2 and 8 win outright; 2 comes first.
        let board = BoardState::from_cells([C, C, E, H, C, H, H, H, E]);
        let result = search(&board, C);
        assert_eq!(result.best_index, Some(2));
        assert_eq!(result.evaluation, WIN_SCORE);
    }

    #[test]
    fn test_empty_board_evaluates_to_draw() {
        let result = search(&BoardState::new(), C);
        assert_eq!(result.evaluation, DRAW_SCORE);
        assert_eq!(result.best_index, Some(0));
    }

    #[test]
    fn test_search_does_not_modify_board() {
        let board = BoardState::from_cells([H, E, E, E, C, E, E, E, H]);
        let before = board;
        let _ = search(&board, C);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "player to move")]
    fn test_search_with_empty_player_panics() {
        let _ = search(&BoardState::new(), E);
    }
}
