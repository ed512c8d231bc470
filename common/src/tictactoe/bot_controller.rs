use std::time::{Duration, Instant};

use super::board::Board;
use super::minimax::SearchAlgorithm;
use super::types::Mark;

/// Outcome of one algorithm's root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmResult {
    pub algorithm: SearchAlgorithm,
    pub chosen_move: Option<usize>,
    pub score: Option<i32>,
    pub elapsed: Duration,
}

impl AlgorithmResult {
    fn no_move(algorithm: SearchAlgorithm) -> Self {
        Self {
            algorithm,
            chosen_move: None,
            score: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn report_line(&self) -> String {
        let chosen = match self.chosen_move {
            Some(position) => position.to_string(),
            None => "none".to_string(),
        };
        format!(
            "{} move: {}, Time: {:.6}s",
            self.algorithm.name(),
            chosen,
            self.elapsed.as_secs_f64()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonResult {
    pub minimax: AlgorithmResult,
    pub alpha_beta: AlgorithmResult,
}

impl ComparisonResult {
    /// The move the game commits: alpha-beta's choice.
    pub fn chosen_move(&self) -> Option<usize> {
        self.alpha_beta.chosen_move
    }

    pub fn score(&self) -> Option<i32> {
        self.alpha_beta.score
    }

    pub fn moves_agree(&self) -> bool {
        self.minimax.chosen_move == self.alpha_beta.chosen_move
    }

    pub fn result_for(&self, algorithm: SearchAlgorithm) -> &AlgorithmResult {
        match algorithm {
            SearchAlgorithm::Minimax => &self.minimax,
            SearchAlgorithm::AlphaBeta => &self.alpha_beta,
        }
    }

    pub fn report_lines(&self, turn: u32) -> Vec<String> {
        vec![
            format!("Turn {}", turn),
            self.minimax.report_line(),
            self.alpha_beta.report_line(),
        ]
    }
}

/// Runs both searches over every root move for `ai_mark` and times each.
/// The board is returned exactly as it was passed in.
pub fn run_comparison(board: &mut Board, ai_mark: Mark) -> ComparisonResult {
    let Some(opponent_mark) = ai_mark.opponent() else {
        return ComparisonResult {
            minimax: AlgorithmResult::no_move(SearchAlgorithm::Minimax),
            alpha_beta: AlgorithmResult::no_move(SearchAlgorithm::AlphaBeta),
        };
    };

    let minimax = select_move(board, SearchAlgorithm::Minimax, ai_mark, opponent_mark);
    let alpha_beta = select_move(board, SearchAlgorithm::AlphaBeta, ai_mark, opponent_mark);

    ComparisonResult {
        minimax,
        alpha_beta,
    }
}

/// Picks the highest scoring root move. Ties keep the lowest position.
pub fn select_move(
    board: &mut Board,
    algorithm: SearchAlgorithm,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> AlgorithmResult {
    let start = Instant::now();

    let mut best_move = None;
    let mut best_score = None;

    for position in board.available_moves() {
        if !board.make_move(position, bot_mark) {
            continue;
        }
        let score = algorithm.evaluate_reply(board, bot_mark, opponent_mark);
        board.undo_move(position);

        if best_score.is_none_or(|best| score > best) {
            best_score = Some(score);
            best_move = Some(position);
        }
    }

    AlgorithmResult {
        algorithm,
        chosen_move: best_move,
        score: best_score,
        elapsed: start.elapsed(),
    }
}
