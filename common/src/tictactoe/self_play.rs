use super::board::Board;
use super::bot_controller::{ComparisonResult, run_comparison};
use super::minimax::SearchAlgorithm;
use super::types::{GameStatus, Mark};

#[derive(Debug, Clone)]
pub struct SelfPlayRecord {
    pub status: GameStatus,
    pub moves: Vec<usize>,
    pub comparisons: Vec<ComparisonResult>,
}

/// Plays one AI-vs-AI game from an empty board. Each side runs the full
/// comparison every turn and commits the move of its own algorithm.
pub fn play_self_game(
    first_mark: Mark,
    x_algorithm: SearchAlgorithm,
    o_algorithm: SearchAlgorithm,
) -> Result<SelfPlayRecord, String> {
    if first_mark == Mark::Empty {
        return Err("First mark must be X or O".to_string());
    }

    let mut board = Board::new();
    let mut current_mark = first_mark;
    let mut moves = Vec::new();
    let mut comparisons = Vec::new();

    while !board.is_terminal() {
        let algorithm = match current_mark {
            Mark::X => x_algorithm,
            _ => o_algorithm,
        };

        let result = run_comparison(&mut board, current_mark);
        let position = result
            .result_for(algorithm)
            .chosen_move
            .ok_or_else(|| "Search returned no move on a live board".to_string())?;

        if !board.make_move(position, current_mark) {
            return Err(format!("Search picked occupied cell {}", position));
        }
        moves.push(position);
        comparisons.push(result);

        current_mark = current_mark
            .opponent()
            .ok_or_else(|| "First mark must be X or O".to_string())?;
    }

    let status = match board.check_winner() {
        Some(mark) => GameStatus::from_winner(mark),
        None => GameStatus::Draw,
    };

    Ok(SelfPlayRecord {
        status,
        moves,
        comparisons,
    })
}
