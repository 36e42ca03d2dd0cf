use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::snake::{Direction, ObstacleCounts};

const MIN_GRID_EXTENT: usize = 2;
const MAX_GRID_EXTENT: usize = 200;
const MAX_POLLS_PER_SECOND: u32 = 1000;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        // 640x480 screen cut into 20px cells.
        Self {
            width: 32,
            height: 24,
            cell_size: 20,
        }
    }
}

/// Direction the snake gets after an in-session or new-game reset.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum ResetDirection {
    #[default]
    Random,
    Fixed(Direction),
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub obstacles: ObstacleCounts,
    /// Number of polls per simulation tick.
    pub slow_divisor: u32,
    pub polls_per_second: u32,
    pub initial_direction: Direction,
    #[serde(default)]
    pub reset_direction: ResetDirection,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn field_size(&self) -> usize {
        self.grid.width * self.grid.height
    }
}

impl Validate for GridConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < MIN_GRID_EXTENT || self.height < MIN_GRID_EXTENT {
            return Err(format!(
                "grid dimensions must be at least {0}x{0}",
                MIN_GRID_EXTENT
            ));
        }
        if self.width > MAX_GRID_EXTENT || self.height > MAX_GRID_EXTENT {
            return Err(format!(
                "grid dimensions must not exceed {0}x{0}",
                MAX_GRID_EXTENT
            ));
        }
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.grid.validate()?;
        if self.slow_divisor == 0 {
            return Err("slow_divisor must be at least 1".to_string());
        }
        if self.polls_per_second == 0 || self.polls_per_second > MAX_POLLS_PER_SECOND {
            return Err(format!(
                "polls_per_second must be between 1 and {}",
                MAX_POLLS_PER_SECOND
            ));
        }
        let occupied = 1 + self.obstacles.total();
        if occupied > self.field_size() {
            return Err(format!(
                "snake and {} obstacles do not fit on a {}x{} grid",
                self.obstacles.total(),
                self.grid.width,
                self.grid.height
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            obstacles: ObstacleCounts {
                good_apples: 20,
                bad_apples: 20,
                stones: 20,
            },
            slow_divisor: 10,
            polls_per_second: 60,
            initial_direction: Direction::Right,
            reset_direction: ResetDirection::Random,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        MemoryConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_game_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_fixed_reset_direction_survives_file_round_trip() {
        let config = GameConfig {
            reset_direction: ResetDirection::Fixed(Direction::Up),
            seed: Some(7),
            ..GameConfig::default()
        };
        let serializer = YamlConfigSerializer::new();
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized = serializer.serialize(&config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();
        let read_back = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: GameConfig = serializer.deserialize(&read_back).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        let config = manager.get_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_manager_caches_saved_config() {
        let config = GameConfig {
            slow_divisor: 3,
            ..GameConfig::default()
        };
        let manager = ConfigManager::new(MemoryConfigProvider::default(), YamlConfigSerializer);
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_get_or_create_config_returns_defaults_when_empty() {
        let provider = MemoryConfigProvider::default();
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer);
        let config = manager.get_or_create_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let broken = GameConfig {
            slow_divisor: 0,
            ..GameConfig::default()
        };
        let yaml = serde_yaml_ng::to_string(&broken).unwrap();
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(MemoryConfigProvider::new(Some(yaml)), YamlConfigSerializer);
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("slow_divisor"));
    }

    #[test]
    fn test_too_many_obstacles_fail_validation() {
        let config = GameConfig {
            grid: GridConfig {
                width: 3,
                height: 3,
                cell_size: 10,
            },
            obstacles: ObstacleCounts {
                good_apples: 3,
                bad_apples: 3,
                stones: 3,
            },
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_grid_fails_validation() {
        let grid = GridConfig {
            width: 1,
            height: 10,
            cell_size: 20,
        };
        assert!(grid.validate().is_err());
    }
}
