use std::collections::HashSet;

use common::tictactoe::{
    Board, GameStatus, Mark, SearchAlgorithm, alpha_beta, minimax, play_self_game,
    run_comparison,
};

/// Every position reachable from the empty board with X moving first.
fn reachable_positions() -> Vec<(Board, Mark)> {
    fn walk(
        board: &mut Board,
        to_move: Mark,
        seen: &mut HashSet<Board>,
        out: &mut Vec<(Board, Mark)>,
    ) {
        if !seen.insert(*board) {
            return;
        }
        out.push((*board, to_move));
        if board.is_terminal() {
            return;
        }
        let next = to_move.opponent().unwrap();
        for position in board.available_moves() {
            board.make_move(position, to_move);
            walk(board, next, seen, out);
            board.undo_move(position);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut Board::new(), Mark::X, &mut seen, &mut out);
    out
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_minimax_and_alpha_beta_scores_agree_everywhere() {
    for (position, to_move) in reachable_positions() {
        let opponent = to_move.opponent().unwrap();
        for (player, is_maximizing) in [(to_move, true), (opponent, false)] {
            let other = player.opponent().unwrap();
            let mut board = position;

            let exhaustive = minimax(&mut board, is_maximizing, player, other);
            assert_eq!(board, position, "minimax changed {}", position);

            let pruned =
                alpha_beta(&mut board, 0, i32::MIN, i32::MAX, is_maximizing, player, other);
            assert_eq!(board, position, "alpha-beta changed {}", position);

            assert_eq!(exhaustive, pruned, "scores differ on '{}'", position);
            assert!((-1..=1).contains(&exhaustive));
        }
    }
}

#[test]
fn test_selected_values_agree_on_every_live_position() {
    for (position, to_move) in reachable_positions() {
        if position.is_terminal() {
            continue;
        }
        let mut board = position;
        let result = run_comparison(&mut board, to_move);

        assert_eq!(board, position);
        assert!(result.minimax.chosen_move.is_some());
        assert_eq!(result.minimax.score, result.alpha_beta.score, "on '{}'", position);
    }
}

#[test]
fn test_ai_never_loses_against_any_human_line() {
    fn explore(board: &mut Board, human: Mark, ai: Mark) {
        if board.is_terminal() {
            assert_ne!(board.check_winner(), Some(human), "human won on '{}'", board);
            return;
        }
        for position in board.available_moves() {
            board.make_move(position, human);
            if !board.is_terminal() {
                let ai_move = run_comparison(board, ai).chosen_move().unwrap();
                board.make_move(ai_move, ai);
                explore(board, human, ai);
                board.undo_move(ai_move);
            } else {
                explore(board, human, ai);
            }
            board.undo_move(position);
        }
    }

    explore(&mut Board::new(), Mark::X, Mark::O);
}

#[test]
fn test_self_play_always_draws() {
    let algorithms = [SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta];
    for first_mark in [Mark::X, Mark::O] {
        for x_algorithm in algorithms {
            for o_algorithm in algorithms {
                let record = play_self_game(first_mark, x_algorithm, o_algorithm).unwrap();
                assert_eq!(record.status, GameStatus::Draw);
            }
        }
    }
}

#[test]
fn test_reference_positions() {
    let mut centre: Board = "    X    ".parse().unwrap();
    let result = run_comparison(&mut centre, Mark::O);
    assert_eq!(result.minimax.score, Some(0));
    assert_eq!(result.alpha_beta.score, Some(0));

    let mut winning: Board = "XXOXOO  X".parse().unwrap();
    let result = run_comparison(&mut winning, Mark::O);
    assert_eq!(result.chosen_move(), Some(6));
    assert_eq!(result.score(), Some(1));

    let mut full: Board = "XOXXOOOXX".parse().unwrap();
    assert!(full.available_moves().is_empty());
    assert_eq!(full.check_winner(), None);
    assert!(full.is_full());
    let result = run_comparison(&mut full, Mark::O);
    assert_eq!(result.minimax.chosen_move, None);
    assert_eq!(result.alpha_beta.chosen_move, None);
}
