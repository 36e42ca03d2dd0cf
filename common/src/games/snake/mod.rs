mod bot_controller;
mod collision;
mod game_state;
mod grid;
mod obstacles;
mod settings;
mod snake;
mod stats;
mod types;

pub use bot_controller::{BotController, SnakeBotType};
pub use collision::{CollisionOutcome, ResetCause, resolve};
pub use game_state::SnakeGameState;
pub use grid::GridTopology;
pub use obstacles::{Obstacle, ObstacleCounts, ObstacleKind, ObstacleSet};
pub use settings::SnakeSessionSettings;
pub use snake::SnakeBody;
pub use stats::GameStats;
pub use types::{Direction, Position};
