use std::path::{Path, PathBuf};
use std::{fs, io};

use raman_patch::{MATERIAL_PATH, OutputStyle, SLAB_PATH, ScatterConstants};
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

/// Runtime settings, optionally read from a TOML file.
///
/// ```toml
/// style = "compact"
/// material = "input/raman/materials/intralipid.json"
/// slab = "input/raman/surfaces/slab.json"
///
/// [scatter]
/// offset = 50.0
/// predicted_laser = 685.0
/// predicted_raman = 590.0
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub material: PathBuf,
    pub slab: PathBuf,
    pub style: OutputStyle,
    pub scatter: ScatterConstants,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            material: PathBuf::from(MATERIAL_PATH),
            slab: PathBuf::from(SLAB_PATH),
            style: OutputStyle::default(),
            scatter: ScatterConstants::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.material, PathBuf::from("input/raman/materials/intralipid.json"));
        assert_eq!(config.scatter.predicted_laser, 685.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            style = "compact"

            [scatter]
            predicted_raman = 600.0
            "#,
        )
        .unwrap();

        assert_eq!(config.style, OutputStyle::Compact);
        assert_eq!(config.scatter.predicted_raman, 600.0);
        assert_eq!(config.scatter.predicted_laser, 685.0);
        assert_eq!(config.scatter.offset, 50.0);
        assert_eq!(config.slab, PathBuf::from("input/raman/surfaces/slab.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("materials = \"x.json\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_scatter_keys_are_rejected() {
        let err = Config::from_toml("[scatter]\npredicted_lazer = 700.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("predicted_lazer"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
