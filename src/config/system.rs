//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::robot::RobotConfig;

/// Maximum number of robots in one configuration.
pub const MAX_ROBOTS: usize = 8;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named robot configurations.
    pub robots: FnvIndexMap<String<32>, RobotConfig, MAX_ROBOTS>,
}

impl SystemConfig {
    /// Get a robot configuration by name.
    pub fn robot(&self, name: &str) -> Option<&RobotConfig> {
        self.robots
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all robot names.
    pub fn robot_names(&self) -> impl Iterator<Item = &str> {
        self.robots.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            robots: FnvIndexMap::new(),
        }
    }
}
