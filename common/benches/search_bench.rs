use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use common::tictactoe::{Board, Mark, SearchAlgorithm, run_comparison, select_move};

fn opening_reply_board() -> Board {
    "    X    ".parse().unwrap()
}

fn mid_game_board() -> Board {
    "X   O   X".parse().unwrap()
}

fn bench_select_move(c: &mut Criterion, name: &str, board: Board, bot_mark: Mark) {
    let mut group = c.benchmark_group(name);
    group.sample_size(20).measurement_time(Duration::from_secs(10));

    for algorithm in [SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta] {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut position = board;
                let opponent_mark = bot_mark.opponent().unwrap();
                black_box(select_move(&mut position, algorithm, bot_mark, opponent_mark))
            })
        });
    }

    group.finish();
}

fn search_bench(c: &mut Criterion) {
    bench_select_move(c, "empty_board", Board::new(), Mark::X);
    bench_select_move(c, "reply_to_centre", opening_reply_board(), Mark::O);
    bench_select_move(c, "mid_game", mid_game_board(), Mark::O);

    c.bench_function("run_comparison_reply_to_centre", |b| {
        b.iter(|| {
            let mut position = opening_reply_board();
            black_box(run_comparison(&mut position, Mark::O))
        })
    });
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
