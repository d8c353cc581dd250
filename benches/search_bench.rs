use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chess_ai::agent::ai::{compute_best_move, iterative_deepening_search, SearchConfig};
use chess_ai::game_repr::GameState;

const ITALIAN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_search_depth_3(c: &mut Criterion) {
    let pos = GameState::from_fen(ITALIAN).expect("valid position");
    c.bench_function("search italian depth 3", |b| {
        b.iter(|| black_box(compute_best_move(&pos, 3)))
    });
}

fn bench_parallel_search_depth_3(c: &mut Criterion) {
    let pos = GameState::from_fen(ITALIAN).expect("valid position");
    let config = SearchConfig {
        parallel: true,
        ..SearchConfig::with_depth(3)
    };
    c.bench_function("parallel search italian depth 3", |b| {
        b.iter(|| black_box(iterative_deepening_search(&pos, &config)))
    });
}

criterion_group!(benches, bench_search_depth_3, bench_parallel_search_depth_3);
criterion_main!(benches);
