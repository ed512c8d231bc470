//! Full-depth game tree search over the 3x3 board.
//!
//! Scores are from `player`'s point of view: `1` when `player` has three in a
//! row, `-1` when `opponent` has, `0` for a full board. Both searches play
//! speculative moves directly on the board and undo them before returning.

use super::board::Board;
use super::types::Mark;

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
}

impl SearchAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Minimax => "Minimax",
            SearchAlgorithm::AlphaBeta => "Alpha-Beta",
        }
    }

    /// Scores the position with `opponent` to move, i.e. right after `player`
    /// played a root move.
    pub fn evaluate_reply(&self, board: &mut Board, player: Mark, opponent: Mark) -> i32 {
        match self {
            SearchAlgorithm::Minimax => minimax(board, false, player, opponent),
            SearchAlgorithm::AlphaBeta => {
                alpha_beta(board, 0, i32::MIN, i32::MAX, false, player, opponent)
            }
        }
    }
}

fn terminal_score(board: &Board, player: Mark, opponent: Mark) -> Option<i32> {
    match board.check_winner() {
        Some(winner) if winner == player => Some(WIN_SCORE),
        Some(winner) if winner == opponent => Some(LOSS_SCORE),
        _ if board.is_full() => Some(DRAW_SCORE),
        _ => None,
    }
}

pub fn minimax(board: &mut Board, is_maximizing: bool, player: Mark, opponent: Mark) -> i32 {
    if let Some(score) = terminal_score(board, player, opponent) {
        return score;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for position in board.available_moves() {
            if !board.make_move(position, player) {
                continue;
            }
            let score = minimax(board, false, player, opponent);
            board.undo_move(position);
            best = best.max(score);
        }
        best
    } else {
        let mut best = i32::MAX;
        for position in board.available_moves() {
            if !board.make_move(position, opponent) {
                continue;
            }
            let score = minimax(board, true, player, opponent);
            board.undo_move(position);
            best = best.min(score);
        }
        best
    }
}

/// Minimax with alpha-beta cutoffs. `depth` only counts plies from the
/// caller's root; it never limits the search.
pub fn alpha_beta(
    board: &mut Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    is_maximizing: bool,
    player: Mark,
    opponent: Mark,
) -> i32 {
    if let Some(score) = terminal_score(board, player, opponent) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in board.available_moves() {
            if !board.make_move(position, player) {
                continue;
            }
            let eval = alpha_beta(board, depth + 1, alpha, beta, false, player, opponent);
            board.undo_move(position);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in board.available_moves() {
            if !board.make_move(position, opponent) {
                continue;
            }
            let eval = alpha_beta(board, depth + 1, alpha, beta, true, player, opponent);
            board.undo_move(position);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
