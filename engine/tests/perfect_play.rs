use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe_engine::game::{BoardState, GameEngine, GameState, Mark, Outcome, best_move, search};

fn play_sequence(moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &index in moves {
        engine
            .apply_human_move(index)
            .expect("scripted move is legal");
    }
    engine
}

/// Walks every legal human move sequence, answering each with the
/// computer's search result the way the engine does.
fn explore(board: BoardState, finished: &mut Vec<Outcome>) {
    for index in board.empty_cells() {
        let after_human = board.apply_move(index, Mark::Human);
        if after_human.classify().is_over() {
            finished.push(after_human.classify());
            continue;
        }

        let reply = best_move(&after_human, Mark::Computer).expect("board in progress has a move");
        assert!(after_human.is_free(reply));
        let after_computer = after_human.apply_move(reply, Mark::Computer);
        if after_computer.classify().is_over() {
            finished.push(after_computer.classify());
            continue;
        }

        explore(after_computer, finished);
    }
}

#[test]
fn test_computer_never_loses_to_any_sequence() {
    let mut finished = Vec::new();
    explore(BoardState::new(), &mut finished);

    assert!(!finished.is_empty());
    assert!(finished.iter().all(|o| *o != Outcome::Win(Mark::Human)));
    assert!(finished.iter().any(|o| *o == Outcome::Win(Mark::Computer)));
    assert!(finished.iter().any(|o| *o == Outcome::Draw));
}

#[test]
fn test_self_play_ends_in_draw() {
    let mut board = BoardState::new();
    let mut to_move = Mark::Computer;

    while board.classify() == Outcome::InProgress {
        let index = best_move(&board, to_move).expect("board in progress has a move");
        assert!(board.is_free(index));
        board = board.apply_move(index, to_move);
        to_move = to_move.opponent().expect("players alternate");
    }

    assert_eq!(board.classify(), Outcome::Draw);
}

#[test]
fn test_search_only_suggests_free_cells() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let opening = rng.random_range(0..9);
        let mut board = BoardState::new().apply_move(opening, Mark::Human);
        let mut to_move = Mark::Computer;
        while board.classify() == Outcome::InProgress {
            let result = search(&board, to_move);
            let index = result.best_index.expect("board in progress has a move");
            assert!(board.is_free(index), "suggested taken cell {}", index);

            let free = board.empty_cells();
            let random_index = free[rng.random_range(0..free.len())];
            board = board.apply_move(random_index, to_move);
            to_move = to_move.opponent().expect("players alternate");
        }
    }
}

#[test]
fn test_random_humans_never_win() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let mut engine = GameEngine::new();
        while engine.state() == GameState::HumanToMove {
            let board = BoardState::from_cells(*engine.snapshot().cells());
            let free = board.empty_cells();
            let index = free[rng.random_range(0..free.len())];
            engine.apply_human_move(index).expect("free cell is legal");
        }
        assert_ne!(engine.outcome(), Outcome::Win(Mark::Human));
    }
}

#[test]
fn test_engine_matches_search_replies() {
    for first in 0..9 {
        let mut engine = GameEngine::new();
        engine.apply_human_move(first).unwrap();

        let after_human = BoardState::new().apply_move(first, Mark::Human);
        let expected = best_move(&after_human, Mark::Computer);
        assert_eq!(engine.last_computer_move(), expected);
        assert_eq!(engine.state(), GameState::HumanToMove);
    }
}

#[test]
fn test_reset_restores_all_cells() {
    let mut engine = play_sequence(&[4, 8]);
    engine.reset();
    let board = BoardState::from_cells(*engine.snapshot().cells());
    assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
}

#[test]
fn test_classify_is_stable_across_reachable_boards() {
    let mut finished = Vec::new();
    explore(BoardState::new().apply_move(4, Mark::Human).apply_move(0, Mark::Computer), &mut finished);
    for outcome in finished {
        assert!(outcome.is_over());
        let exclusive = [
            outcome == Outcome::Win(Mark::Human),
            outcome == Outcome::Win(Mark::Computer),
            outcome == Outcome::Draw,
        ];
        assert_eq!(exclusive.iter().filter(|&&b| b).count(), 1);
    }
}
