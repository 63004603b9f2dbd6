//! Tunables for planting and regrowing a garden of flowers.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::resources::CliArgs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read garden config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse garden config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid garden config: {0}")]
    Invalid(&'static str),
}

/// Garden layout and flower appearance.
///
/// Loaded from JSON when `--config` is given; any field left out of the file
/// keeps its default. CLI flags are applied on top.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// Number of flowers to plant.
    pub flower_count: usize,
    /// Flowers are scattered within this distance of the origin.
    pub radius: f32,
    /// Preferred minimum distance between flower centres.
    pub min_spacing: f32,
    /// Seed for the scatter, so a garden can be replanted identically.
    pub seed: u64,
    /// Radius of the solid petal collider.
    pub petal_radius: f32,
    /// Radius of the nectar trigger volume.
    pub nectar_radius: f32,
    /// sRGB colour while a flower has nectar.
    pub full_rgb: [f32; 3],
    /// sRGB colour once a flower is empty.
    pub empty_rgb: [f32; 3],
    /// Seconds before a depleted flower refills by itself. `None` waits for
    /// an explicit reset.
    pub regrow_after: Option<f32>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            flower_count: 24,
            radius: 400.0,
            min_spacing: 60.0,
            seed: 42,
            petal_radius: 18.0,
            nectar_radius: 6.0,
            full_rgb: [1.0, 0.0, 0.3],
            empty_rgb: [0.5, 0.0, 1.0],
            regrow_after: None,
        }
    }
}

impl GardenConfig {
    pub fn full_color(&self) -> Color {
        let [r, g, b] = self.full_rgb;
        Color::srgb(r, g, b)
    }

    pub fn empty_color(&self) -> Color {
        let [r, g, b] = self.empty_rgb;
        Color::srgb(r, g, b)
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!("Loaded garden config from {:?}", path);
        Ok(config)
    }

    /// Builds the config for this run: the file named on the command line
    /// (falling back to defaults if it can't be used), then flag overrides.
    pub fn from_cli(cli: &CliArgs) -> Self {
        let base = match &cli.config {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                error!("{}; using default garden", e);
                Self::default()
            }),
            None => Self::default(),
        };
        base.with_overrides(cli)
    }

    /// Applies CLI overrides. Invalid overrides are ignored.
    pub fn with_overrides(mut self, cli: &CliArgs) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(flowers) = cli.flowers {
            self.flower_count = flowers;
        }
        if let Some(regrow) = cli.regrow {
            if is_valid_regrow_delay(regrow) {
                self.regrow_after = Some(regrow);
            } else {
                warn!("Regrowth delay must be a positive number of seconds, got {}", regrow);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius >= 0.0) {
            return Err(ConfigError::Invalid("radius must be non-negative"));
        }
        if !(self.min_spacing >= 0.0) {
            return Err(ConfigError::Invalid("min_spacing must be non-negative"));
        }
        if !(self.petal_radius > 0.0 && self.nectar_radius > 0.0) {
            return Err(ConfigError::Invalid("collider radii must be positive"));
        }
        if matches!(self.regrow_after, Some(secs) if !is_valid_regrow_delay(secs)) {
            return Err(ConfigError::Invalid("regrow_after must be positive and fit in a timer"));
        }
        Ok(())
    }
}

/// Timers are built from `Duration`, which rejects huge and infinite seconds.
fn is_valid_regrow_delay(secs: f32) -> bool {
    secs > 0.0 && secs.is_finite() && Duration::try_from_secs_f32(secs).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GardenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.full_color(), Color::srgb(1.0, 0.0, 0.3));
        assert_eq!(config.empty_color(), Color::srgb(0.5, 0.0, 1.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GardenConfig::from_json(r#"{ "flower_count": 3, "regrow_after": 1.5 }"#)
            .expect("valid config");
        assert_eq!(config.flower_count, 3);
        assert_eq!(config.regrow_after, Some(1.5));
        assert_eq!(config.radius, GardenConfig::default().radius);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            GardenConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GardenConfig::from_json(r#"{ "petal_radius": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GardenConfig::from_json(r#"{ "regrow_after": -1.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GardenConfig::load(Path::new("/definitely/not/here/garden.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = CliArgs {
            seed: Some(7),
            flowers: Some(5),
            regrow: Some(3.0),
            ..default()
        };
        let config = GardenConfig::default().with_overrides(&cli);
        assert_eq!(config.seed, 7);
        assert_eq!(config.flower_count, 5);
        assert_eq!(config.regrow_after, Some(3.0));

        let ignored = CliArgs {
            regrow: Some(0.0),
            ..default()
        };
        assert_eq!(GardenConfig::default().with_overrides(&ignored).regrow_after, None);
    }

    #[test]
    fn test_unrepresentable_regrow_delay_is_rejected() {
        assert!(matches!(
            GardenConfig::from_json(r#"{ "regrow_after": 1e30 }"#),
            Err(ConfigError::Invalid(_))
        ));

        let infinite = GardenConfig {
            regrow_after: Some(f32::INFINITY),
            ..default()
        };
        assert!(matches!(infinite.validate(), Err(ConfigError::Invalid(_))));

        for value in ["inf", "1e30"] {
            let cli = CliArgs::parse_from(["nectar_garden", "--regrow", value]);
            assert!(cli.regrow.is_some());
            assert_eq!(GardenConfig::default().with_overrides(&cli).regrow_after, None);
        }
    }
}
