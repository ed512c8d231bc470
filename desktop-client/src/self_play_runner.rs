use std::time::Duration;

use common::log;
use common::tictactoe::{GameStatus, Mark, SearchAlgorithm, SelfPlayRecord, play_self_game};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub disagreements: u32,
}

impl SelfPlaySummary {
    fn add(&mut self, record: &SelfPlayRecord) {
        match record.status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw | GameStatus::InProgress => self.draws += 1,
        }
        self.disagreements += record
            .comparisons
            .iter()
            .filter(|c| !c.moves_agree())
            .count() as u32;
    }
}

/// Game `index` cycles through both first movers and every pairing of the
/// two algorithms.
fn setup_for_game(index: u32) -> (Mark, SearchAlgorithm, SearchAlgorithm) {
    let first_mark = if index % 2 == 0 { Mark::X } else { Mark::O };
    let algorithm = |bit: u32| {
        if (index >> bit) & 1 == 0 {
            SearchAlgorithm::AlphaBeta
        } else {
            SearchAlgorithm::Minimax
        }
    };
    (first_mark, algorithm(1), algorithm(2))
}

pub fn run_self_play(games: u32) -> Result<SelfPlaySummary, String> {
    let mut summary = SelfPlaySummary::default();

    for index in 0..games {
        let (first_mark, x_algorithm, o_algorithm) = setup_for_game(index);
        let record = play_self_game(first_mark, x_algorithm, o_algorithm)?;

        let minimax_time: Duration = record.comparisons.iter().map(|c| c.minimax.elapsed).sum();
        let alpha_beta_time: Duration =
            record.comparisons.iter().map(|c| c.alpha_beta.elapsed).sum();

        log!(
            "Game {}: {} first, X={} O={}, moves {:?}, {}",
            index + 1,
            first_mark,
            x_algorithm.name(),
            o_algorithm.name(),
            record.moves,
            record.status.announcement()
        );
        log!(
            "Game {}: total Minimax time {:.6}s, total Alpha-Beta time {:.6}s",
            index + 1,
            minimax_time.as_secs_f64(),
            alpha_beta_time.as_secs_f64()
        );

        summary.add(&record);
    }

    log!(
        "Self-play finished: {} games, X wins {}, O wins {}, draws {}, move disagreements {}",
        games,
        summary.x_wins,
        summary.o_wins,
        summary.draws,
        summary.disagreements
    );

    Ok(summary)
}
