use std::str::FromStr;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictac::core::{Player, PlayerMark};
use tictac::game::{run_game, tictactoe::TTTBoard};
use tictac::player::{MinMaxAi, Strategy};

fn minimax_opening() {
    let mut ai = MinMaxAi::new(PlayerMark::First);
    let board = TTTBoard::new();
    black_box(ai.play(&board).unwrap());
}

fn minimax_reply() {
    let mut ai = MinMaxAi::new(PlayerMark::Second);
    let board = TTTBoard::from_str("x        ").unwrap();
    black_box(ai.play(&board).unwrap());
}

fn heuristic_vs_random() {
    let p1 = Strategy::Random.player(PlayerMark::First, Some(1));
    let p2 = Strategy::Heuristic.player(PlayerMark::Second, Some(2));
    black_box(run_game(p1, p2).unwrap());
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax-ttt");
    group.measurement_time(Duration::from_secs(15));
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(10);
    group.bench_function("minimax-opening", |b| b.iter(minimax_opening));
    group.sample_size(100);
    group.bench_function("minimax-reply", |b| b.iter(minimax_reply));
    group.bench_function("heuristic-vs-random", |b| b.iter(heuristic_vs_random));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
