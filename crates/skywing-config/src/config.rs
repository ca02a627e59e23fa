//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skywing_math::{AxisAlignedBB, DEFAULT_EPSILON};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level kernel configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Geometry tolerances.
    pub geometry: GeometryConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Tolerances handed to the epsilon-aware box queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryConfig {
    /// Minimum overlap on every axis for two boxes to count as intersecting.
    pub intersect_epsilon: f32,
    /// Maximum edge-length difference for a box to count as a cube.
    pub cube_epsilon: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            intersect_epsilon: DEFAULT_EPSILON,
            cube_epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl GeometryConfig {
    /// Rejects negative or non-finite tolerances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("intersect_epsilon", self.intersect_epsilon),
            ("cube_epsilon", self.cube_epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }

    /// [`AxisAlignedBB::intersects_with_epsilon`] with the configured tolerance.
    pub fn intersects(&self, a: &AxisAlignedBB, b: &AxisAlignedBB) -> bool {
        a.intersects_with_epsilon(b, self.intersect_epsilon)
    }

    /// [`AxisAlignedBB::is_cube_with_epsilon`] with the configured tolerance.
    pub fn is_cube(&self, bb: &AxisAlignedBB) -> bool {
        bb.is_cube_with_epsilon(self.cube_epsilon)
    }
}

/// Platform config directory for SkyWing, e.g. `~/.config/skywing` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("skywing"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.geometry.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("intersect_epsilon"));
        assert!(ron_str.contains("log_level: \"info\""));
    }

    #[test]
    fn test_defaults_match_kernel() {
        let geometry = GeometryConfig::default();
        assert_eq!(geometry.intersect_epsilon, DEFAULT_EPSILON);
        assert_eq!(geometry.cube_epsilon, DEFAULT_EPSILON);
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: Config = ron::from_str("(debug: (log_level: \"debug\"))").unwrap();
        assert_eq!(config.geometry, GeometryConfig::default());
        assert_eq!(config.debug.log_level, "debug");
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_tolerances() {
        let negative = GeometryConfig {
            intersect_epsilon: -1.0,
            ..GeometryConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidTolerance {
                name: "intersect_epsilon",
                ..
            })
        ));

        let nan = GeometryConfig {
            cube_epsilon: f32::NAN,
            ..GeometryConfig::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidTolerance {
                name: "cube_epsilon",
                ..
            })
        ));
    }

    #[test]
    fn test_geometry_helpers_use_configured_epsilon() {
        let a = AxisAlignedBB::one();
        let b = AxisAlignedBB::one().offset_copy(0.9, 0.0, 0.0);
        let loose = GeometryConfig {
            intersect_epsilon: 0.05,
            cube_epsilon: 0.2,
        };
        let strict = GeometryConfig {
            intersect_epsilon: 0.2,
            cube_epsilon: 0.01,
        };
        assert!(loose.intersects(&a, &b));
        assert!(!strict.intersects(&a, &b));

        let nearly_cube = AxisAlignedBB::new(0.0, 0.0, 0.0, 1.0, 1.1, 1.0).unwrap();
        assert!(loose.is_cube(&nearly_cube));
        assert!(!strict.is_cube(&nearly_cube));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.geometry.intersect_epsilon = 0.001;
        config.debug.log_level = "trace".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_load_rejects_invalid_tolerance() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.ron"),
            "(geometry: (intersect_epsilon: -0.5))",
        )
        .unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.geometry.cube_epsilon = 0.5;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().geometry.cube_epsilon, 0.5);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::default().reload(dir.path());
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_default_config_dir_is_namespaced() {
        if let Some(dir) = default_config_dir() {
            assert!(dir.ends_with("skywing"));
        }
    }
}
