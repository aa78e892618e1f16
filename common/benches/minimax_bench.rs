use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::tictactoe::{
    Board, GameEvent, Mark, PlayerSymbols, SEARCH_DEPTH, Symbol, TicTacToeGame, search,
};

fn bench_search_after_corner_opening() {
    let mut board = Board::from_marks([
        Mark::X, Mark::Empty, Mark::Empty,
        Mark::Empty, Mark::O, Mark::Empty,
        Mark::Empty, Mark::Empty, Mark::Empty,
    ]);
    let symbols = PlayerSymbols::for_user(Symbol::X);
    black_box(search(&mut board, symbols, Symbol::O, SEARCH_DEPTH));
}

fn bench_full_search_empty_board() {
    let mut board = Board::new();
    let symbols = PlayerSymbols::for_user(Symbol::O);
    black_box(search(&mut board, symbols, Symbol::X, 9));
}

fn bench_scripted_game() {
    let mut game = TicTacToeGame::new(Vec::<GameEvent>::new());
    game.select_symbol(Symbol::X);
    for index in [0, 8, 7, 2, 3] {
        game.request_user_move(index);
    }
    black_box(game.result());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("depth_2_after_corner", |b| {
        b.iter(bench_search_after_corner_opening)
    });

    group.sample_size(10);
    group.bench_function("full_depth_empty_board", |b| {
        b.iter(bench_full_search_empty_board)
    });

    group.bench_function("scripted_draw", |b| {
        b.iter(bench_scripted_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
