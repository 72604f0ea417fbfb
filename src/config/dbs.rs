//! Configuration of databases, typically derived from the configuration of a context.

use super::{Config, ConfigOption};

/// Configuration for a [world](crate::db::world).
///
/// Snapshots of a world inherit the configuration of the world, and so hypothetical reasoning follows the same rules as reasoning in the world.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Eliminate double negations on assertion.
    pub classical: ConfigOption<bool>,

    /// Reapply elimination rules which depend on a world after each assertion.
    pub saturation: ConfigOption<bool>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig::from(&Config::default())
    }
}

impl From<&Config> for WorldConfig {
    fn from(config: &Config) -> Self {
        WorldConfig {
            classical: config.classical.clone(),
            saturation: config.saturation.clone(),
        }
    }
}
