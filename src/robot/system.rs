//! Robot system facade for multi-robot configuration.

use heapless::{FnvIndexMap, String};

use crate::config::{SystemConfig, MAX_ROBOTS};
use crate::error::Result;

use super::arm::Robot;
use super::builder::RobotBuilder;

/// Every robot of a configuration, built and looked up by key.
///
/// # Example
///
/// ```rust,ignore
/// use six_axis_ik::robot::RobotSystem;
///
/// let config = six_axis_ik::load_config("cell.toml")?;
/// let cell = RobotSystem::from_config(&config)?;
/// let left = cell.robot("left").expect("configured");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RobotSystem {
    robots: FnvIndexMap<String<32>, Robot, MAX_ROBOTS>,
}

impl RobotSystem {
    /// Build every robot in the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first robot that fails to build.
    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        let mut robots = FnvIndexMap::new();
        for (key, robot_config) in &config.robots {
            let robot = RobotBuilder::new().from_robot_config(robot_config).build()?;
            // same capacity as the configuration map
            let _ = robots.insert(key.clone(), robot);
        }
        Ok(Self { robots })
    }

    /// Get a robot by key.
    pub fn robot(&self, key: &str) -> Option<&Robot> {
        self.robots
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// Check if a key exists.
    pub fn has_robot(&self, key: &str) -> bool {
        self.robot(key).is_some()
    }

    /// List all robot keys.
    pub fn robot_keys(&self) -> impl Iterator<Item = &str> {
        self.robots.keys().map(|s| s.as_str())
    }

    /// Number of robots.
    pub fn len(&self) -> usize {
        self.robots.len()
    }

    /// True when no robot is configured.
    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }
}
