use crate::config::ResetDirection;
use crate::games::SessionRng;
use crate::{log, log_debug};
use super::collision::{self, CollisionOutcome, ResetCause};
use super::grid::GridTopology;
use super::obstacles::{ObstacleCounts, ObstacleKind, ObstacleSet};
use super::settings::SnakeSessionSettings;
use super::snake::SnakeBody;
use super::stats::GameStats;
use super::types::{Direction, Position};

/// Board, body and counters of one running game. Every tick is a function of
/// this state, the committed direction and the session rng.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: GridTopology,
    snake: SnakeBody,
    obstacles: ObstacleSet,
    stats: GameStats,
    start_pos: Position,
    obstacle_counts: ObstacleCounts,
    reset_direction: ResetDirection,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let grid = settings.grid;
        let start_pos = grid.center();
        let snake = SnakeBody::new(start_pos, settings.initial_direction);
        let obstacles = ObstacleSet::generate(&settings.obstacle_counts, &grid, &snake, rng);

        Self {
            grid,
            snake,
            obstacles,
            stats: GameStats::new(),
            start_pos,
            obstacle_counts: settings.obstacle_counts,
            reset_direction: settings.reset_direction,
        }
    }

    pub fn grid(&self) -> &GridTopology {
        &self.grid
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut GameStats {
        &mut self.stats
    }

    pub fn obstacle_counts(&self) -> &ObstacleCounts {
        &self.obstacle_counts
    }

    pub fn buffer_direction(&mut self, direction: Direction) {
        self.snake.buffer_direction(direction);
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> CollisionOutcome {
        self.snake.commit_direction();
        let next_head = self.snake.prospective_head(&self.grid);
        let outcome = collision::resolve(&self.snake, &self.obstacles, &self.grid, next_head);
        self.apply(outcome, rng);
        outcome
    }

    pub fn apply(&mut self, outcome: CollisionOutcome, rng: &mut SessionRng) {
        match outcome {
            CollisionOutcome::Advance(next_head) => {
                self.snake.advance(next_head);
            }
            CollisionOutcome::Grow { index, position } => {
                self.snake.grow(position);
                self.obstacles
                    .respawn_one(index, &self.grid, &self.snake, rng);
                self.stats.record_apple_eaten();
                self.stats.set_length(self.snake.len());
                log_debug!(
                    "Apple eaten at ({}, {}). Length: {}",
                    position.x,
                    position.y,
                    self.snake.len()
                );
            }
            CollisionOutcome::Shrink { index } => {
                self.snake.shrink_from_tail();
                self.obstacles
                    .respawn_one(index, &self.grid, &self.snake, rng);
                self.stats.record_bad_apple_eaten();
                self.stats.set_length(self.snake.len());
                log_debug!("Bad apple eaten. Length: {}", self.snake.len());
            }
            CollisionOutcome::FullReset(cause) => {
                match cause {
                    ResetCause::BoardFull(ObstacleKind::GoodApple) => {
                        self.stats.record_apple_eaten()
                    }
                    ResetCause::BoardFull(ObstacleKind::BadApple) => {
                        self.stats.record_bad_apple_eaten()
                    }
                    _ => {}
                }
                self.reset(cause, rng);
            }
        }
    }

    /// Back to one segment at the start cell with a fresh board. A new game
    /// zeroes the counters, any other cause counts as one more reset.
    pub fn reset(&mut self, cause: ResetCause, rng: &mut SessionRng) {
        let direction = self.next_reset_direction(rng);
        self.snake.reset_to_single_segment(self.start_pos, direction);
        self.obstacles
            .place_all_unique(&self.grid, &self.snake, rng);

        match cause {
            ResetCause::NewGame => {
                self.stats.reset_for_new_game();
                log!("New game started");
            }
            ResetCause::BoardFull(kind) => {
                self.stats.record_reset();
                log!(
                    "Board is full after eating {:?}, resetting. {}",
                    kind,
                    self.stats.summary()
                );
            }
            ResetCause::SelfBite | ResetCause::Stone => {
                self.stats.record_reset();
                log!("Snake hit {:?}, resetting. {}", cause, self.stats.summary());
            }
        }
    }

    fn next_reset_direction(&self, rng: &mut SessionRng) -> Direction {
        match self.reset_direction {
            ResetDirection::Fixed(direction) => direction,
            ResetDirection::Random => {
                Direction::ALL[rng.random_range(0..Direction::ALL.len())]
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut SnakeBody {
        &mut self.snake
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut ObstacleSet {
        &mut self.obstacles
    }
}
