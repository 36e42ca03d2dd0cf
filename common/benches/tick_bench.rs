use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use snake_common::config::GameConfig;
use snake_common::games::SessionRng;
use snake_common::games::snake::{
    BotController, GridTopology, ObstacleCounts, ObstacleSet, SnakeBody, SnakeBotType,
    SnakeGameState, SnakeSessionSettings,
};

fn bench_bot_driven_ticks() {
    let settings = SnakeSessionSettings::from(&GameConfig::default());
    let mut rng = SessionRng::new(42);
    let mut state = SnakeGameState::new(&settings, &mut rng);

    for _ in 0..1_000 {
        if let Some(direction) =
            BotController::calculate_move(SnakeBotType::Efficient, &state, &mut rng)
        {
            state.buffer_direction(direction);
        }
        state.tick(&mut rng);
    }
}

fn bench_dense_board_placement() {
    // 60 of 64 cells taken: the random retry loop does most of the work.
    let grid = GridTopology::new(8, 8, 20);
    let snake = SnakeBody::new(grid.center(), snake_common::Direction::Right);
    let counts = ObstacleCounts {
        good_apples: 20,
        bad_apples: 20,
        stones: 19,
    };
    let mut rng = SessionRng::from_random();
    let mut obstacles = ObstacleSet::generate(&counts, &grid, &snake, &mut rng);
    for _ in 0..10 {
        obstacles.place_all_unique(&grid, &snake, &mut rng);
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("1000_bot_ticks", |b| {
        b.iter(bench_bot_driven_ticks)
    });

    group.bench_function("dense_placement", |b| {
        b.iter(bench_dense_board_placement)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
