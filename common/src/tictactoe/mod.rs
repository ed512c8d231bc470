mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod self_play;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{AlgorithmResult, ComparisonResult, run_comparison, select_move};
pub use game_state::TicTacToeGameState;
pub use minimax::{DRAW_SCORE, LOSS_SCORE, SearchAlgorithm, WIN_SCORE, alpha_beta, minimax};
pub use self_play::{SelfPlayRecord, play_self_game};
pub use session::{GameSession, GameView};
pub use types::{BOARD_SIDE, BOARD_SIZE, FirstPlayerMode, GameStatus, Mark};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
