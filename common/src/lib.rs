pub mod config;
pub mod engine;
pub mod games;
pub mod logger;

pub use engine::session::{
    MenuAction, MenuIntent, MenuItem, PollInput, PollReport, SnakeSession, TickScheduler,
};
pub use games::SessionRng;
pub use games::snake::{
    CollisionOutcome, Direction, GameStats, GridTopology, Obstacle, ObstacleKind, ObstacleSet,
    Position, ResetCause, SnakeBody,
};
