use serde::{Deserialize, Serialize};
use snake_common::config::{
    ConfigManager, FileContentConfigProvider, GameConfig, Validate, YamlConfigSerializer,
};
use snake_common::games::snake::SnakeBotType;

pub const CONFIG_FILE_NAME: &str = "snake_runner_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub game: GameConfig,
    pub max_polls: u64,
    pub bot: SnakeBotType,
    /// Summary is logged every this many ticks; 0 disables it.
    #[serde(default)]
    pub log_every_ticks: u64,
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.max_polls == 0 {
            return Err("max_polls must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_polls: 3_600,
            bot: SnakeBotType::Efficient,
            log_every_ticks: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_runner_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = RunnerConfig::default();
        let serializer = YamlConfigSerializer::new();
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();
        let read_back = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: RunnerConfig = serializer.deserialize(&read_back).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));
        let config = manager.get_or_create_config().unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert!(std::path::Path::new(&file_path).exists());

        let reloaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_zero_polls_is_invalid() {
        let config = RunnerConfig {
            max_polls: 0,
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
