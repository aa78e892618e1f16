use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::Symbol;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tic_tac_toe_config.yaml";
const MAX_DELAY_MS: u64 = 10_000;

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

/// Presentation pacing around the computer's move and the result screen.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct PacingConfig {
    pub turn_indicator_delay_ms: u64,
    pub move_delay_ms: u64,
    pub result_delay_ms: u64,
}

impl PacingConfig {
    pub fn instant() -> Self {
        Self {
            turn_indicator_delay_ms: 0,
            move_delay_ms: 0,
            result_delay_ms: 0,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            turn_indicator_delay_ms: 1000,
            move_delay_ms: 1000,
            result_delay_ms: 1500,
        }
    }
}

impl Validate for PacingConfig {
    fn validate(&self) -> Result<(), String> {
        let delays = [
            ("turn_indicator_delay_ms", self.turn_indicator_delay_ms),
            ("move_delay_ms", self.move_delay_ms),
            ("result_delay_ms", self.result_delay_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(format!("{} must not exceed {} ms, got {}", name, MAX_DELAY_MS, value));
            }
        }
        Ok(())
    }
}

fn default_show_cell_numbers() -> bool {
    true
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub pacing: PacingConfig,
    pub preferred_symbol: Option<Symbol>,
    #[serde(default = "default_show_cell_numbers")]
    pub show_cell_numbers: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.pacing.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pacing: PacingConfig::default(),
            preferred_symbol: None,
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}
