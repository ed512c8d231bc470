use std::io::{self, BufRead, Write};
use std::time::Duration;

use common::log;
use common::tictactoe::{
    BOARD_SIDE, ComparisonResult, DRAW_SCORE, GameSession, GameStatus, GameView, Mark,
    TicTacToeGameState, WIN_SCORE,
};

use crate::config::Config;

/// Terminal front end: the board is printed after every move and empty cells
/// show their index.
pub struct ConsoleView;

impl ConsoleView {
    fn board_lines(state: &TicTacToeGameState) -> Vec<String> {
        state
            .board
            .cells()
            .chunks(BOARD_SIDE)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        Mark::Empty => (row * BOARD_SIDE + col).to_string(),
                        mark => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect()
    }

    fn ai_move_line(result: &ComparisonResult) -> Option<String> {
        let position = result.chosen_move()?;
        let outlook = match result.score() {
            Some(WIN_SCORE) => "expects to win",
            Some(DRAW_SCORE) => "expects a draw",
            _ => "expects to lose",
        };
        Some(format!("AI plays {} ({})", position, outlook))
    }
}

impl GameView for ConsoleView {
    fn render(&mut self, state: &TicTacToeGameState) {
        println!();
        let lines = Self::board_lines(state);
        for (i, line) in lines.iter().enumerate() {
            println!(" {}", line);
            if i + 1 < lines.len() {
                println!("---+---+---");
            }
        }
        println!();
    }

    fn announce_result(&mut self, status: GameStatus) {
        println!("Game Over: {}", status.announcement());
    }

    fn report_comparison(&mut self, _turn: u32, result: &ComparisonResult) {
        if let Some(line) = Self::ai_move_line(result) {
            println!("{}", line);
        }
    }
}

enum ConsoleCommand {
    Place(usize),
    Quit,
}

fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(ConsoleCommand::Quit);
    }
    trimmed
        .parse::<usize>()
        .map(ConsoleCommand::Place)
        .map_err(|_| format!("'{}' is not a cell number (0-8) or 'q'", trimmed))
}

pub fn run_console_game(config: &Config) -> Result<(), String> {
    let mut session = GameSession::new(ConsoleView, config.human_mark, config.first_player)?;
    let ai_delay = Duration::from_millis(config.ai_delay_ms);
    log!(
        "Console game started, human plays {}, AI plays {}",
        session.state().human_mark,
        session.state().ai_mark
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        if session.is_ai_turn() {
            std::thread::sleep(ai_delay);
            session.on_ai_turn()?;
            continue;
        }

        print!("Your move ({}): ", session.state().human_mark);
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let Some(line) = lines.next() else {
            log!("Input closed, leaving game");
            return Ok(());
        };
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;

        match parse_command(&line) {
            Ok(ConsoleCommand::Quit) => {
                log!("Player left the game");
                return Ok(());
            }
            Ok(ConsoleCommand::Place(position)) => {
                if let Err(e) = session.on_human_move(position) {
                    println!("{}", e);
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    log!("Game finished: {}", session.state().status.announcement());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::tictactoe::{Board, FirstPlayerMode, run_comparison};

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command(" 4 \n"), Ok(ConsoleCommand::Place(4))));
        assert!(matches!(parse_command("Q"), Ok(ConsoleCommand::Quit)));
        assert!(parse_command("centre").is_err());
    }

    #[test]
    fn test_board_lines_number_empty_cells() {
        let mut state = TicTacToeGameState::new(Mark::X, FirstPlayerMode::Human).unwrap();
        state.place_human_mark(4).unwrap();

        let lines = ConsoleView::board_lines(&state);

        assert_eq!(lines, vec!["0 | 1 | 2", "3 | X | 5", "6 | 7 | 8"]);
    }

    #[test]
    fn test_ai_move_line_reports_expected_outcome() {
        let mut board: Board = "    X    ".parse().unwrap();
        let result = run_comparison(&mut board, Mark::O);
        assert_eq!(ConsoleView::ai_move_line(&result).unwrap(), "AI plays 0 (expects a draw)");

        let mut board: Board = "XXOXOO  X".parse().unwrap();
        let result = run_comparison(&mut board, Mark::O);
        assert_eq!(ConsoleView::ai_move_line(&result).unwrap(), "AI plays 6 (expects to win)");

        let mut board: Board = "XOXXOOOXX".parse().unwrap();
        let result = run_comparison(&mut board, Mark::O);
        assert_eq!(ConsoleView::ai_move_line(&result), None);
    }
}
