use crate::log;

use super::board::Board;
use super::bot_controller::{ComparisonResult, run_comparison};
use super::types::{BOARD_SIZE, FirstPlayerMode, GameStatus, Mark};

/// One human-vs-AI game. The AI always answers with alpha-beta's move.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub ai_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub turn_count: u32,
}

impl TicTacToeGameState {
    pub fn new(human_mark: Mark, first_player_mode: FirstPlayerMode) -> Result<Self, String> {
        let ai_mark = human_mark
            .opponent()
            .ok_or_else(|| "Human mark must be X or O".to_string())?;

        let current_mark = match first_player_mode {
            FirstPlayerMode::Human => human_mark,
            FirstPlayerMode::Ai => ai_mark,
            FirstPlayerMode::Random => {
                if rand::random::<bool>() {
                    human_mark
                } else {
                    ai_mark
                }
            }
        };

        Ok(Self {
            board: Board::new(),
            human_mark,
            ai_mark,
            current_mark,
            status: GameStatus::InProgress,
            last_move: None,
            turn_count: 0,
        })
    }

    pub fn is_ai_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.ai_mark
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.human_mark
    }

    pub fn place_human_mark(&mut self, position: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != self.human_mark {
            return Err("Not your turn".to_string());
        }

        if position >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        self.apply_move(position, self.human_mark)
    }

    /// Runs both searches, logs the per-turn report and commits alpha-beta's
    /// move.
    pub fn play_ai_turn(&mut self) -> Result<ComparisonResult, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != self.ai_mark {
            return Err("Not the AI's turn".to_string());
        }

        self.turn_count += 1;
        let result = run_comparison(&mut self.board, self.ai_mark);
        for line in result.report_lines(self.turn_count) {
            log!("{}", line);
        }
        if !result.moves_agree() {
            log!("Minimax and Alpha-Beta picked different moves of equal value");
        }

        let position = result
            .chosen_move()
            .ok_or_else(|| "No move available for the AI".to_string())?;
        self.apply_move(position, self.ai_mark)?;

        Ok(result)
    }

    fn apply_move(&mut self, position: usize, mark: Mark) -> Result<(), String> {
        if !self.board.make_move(position, mark) {
            return Err("Cell is already marked".to_string());
        }
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = self.board.check_winner() {
            self.status = GameStatus::from_winner(winner_mark);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
