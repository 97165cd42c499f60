use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use tile_merge::game::Game;
use tile_merge::moves::Move;
use tile_merge::status;

fn corpus(size: usize) -> Vec<Game> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut games = Vec::new();
    let mut g = Game::new(size, 2048).unwrap();
    games.push(g.clone());
    g.spawn(&mut rng);
    g.spawn(&mut rng);
    games.push(g.clone());
    // Derive a variety of densities deterministically
    for i in 0..40 {
        g.make_move(Move::ALL[i % 4], &mut rng);
        games.push(g.clone());
    }
    games
}

fn bench_shift(c: &mut Criterion) {
    for dir in Move::ALL {
        c.bench_function(&format!("shift/{dir}"), |bch| {
            let games = corpus(4);
            bch.iter_batched(
                || games.clone(),
                |mut games| {
                    let mut moved = 0u32;
                    for g in games.iter_mut() { moved += u32::from(g.shift(dir)); }
                    black_box(moved)
                },
                BatchSize::SmallInput,
            )
        });
    }
    c.bench_function("shift/left_8x8", |bch| {
        let games = corpus(8);
        bch.iter_batched(
            || games.clone(),
            |mut games| {
                for g in games.iter_mut() { g.shift(Move::Left); }
                black_box(games)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("game/spawn_fill", |bch| {
        bch.iter_batched(
            || (Game::new(4, 2048).unwrap(), StdRng::seed_from_u64(7)),
            |(mut g, mut rng)| {
                for _ in 0..16 { g.spawn(&mut rng); }
                black_box(g)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/make_move_cycle", |bch| {
        bch.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(9);
                let mut g = Game::new(4, 2048).unwrap();
                g.spawn(&mut rng);
                (g, rng)
            },
            |(mut g, mut rng)| {
                for i in 0..64 { g.make_move(Move::ALL[i % 4], &mut rng); }
                black_box(g)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_status(c: &mut Criterion) {
    let games = corpus(4);
    c.bench_function("status/is_game_over", |bch| {
        bch.iter(|| {
            let mut over = 0u32;
            for g in &games { over += u32::from(status::is_game_over(g.grid(), g.target())); }
            black_box(over)
        })
    });
}

criterion_group!(engine_ops, bench_shift, bench_spawn, bench_status);
criterion_main!(engine_ops);
