use crate::config::{GameConfig, ResetDirection};
use super::grid::GridTopology;
use super::obstacles::ObstacleCounts;
use super::types::Direction;

#[derive(Clone, Debug)]
pub struct SnakeSessionSettings {
    pub grid: GridTopology,
    pub obstacle_counts: ObstacleCounts,
    pub slow_divisor: u32,
    pub initial_direction: Direction,
    pub reset_direction: ResetDirection,
    pub seed: Option<u64>,
}

impl From<&GameConfig> for SnakeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid: GridTopology::new(
                config.grid.width,
                config.grid.height,
                config.grid.cell_size,
            ),
            obstacle_counts: config.obstacles,
            slow_divisor: config.slow_divisor.max(1),
            initial_direction: config.initial_direction,
            reset_direction: config.reset_direction,
            seed: config.seed,
        }
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}
