//! User configuration.
//!
//! Settings are layered: built-in defaults, then the user's configuration
//! file, then `CUBESIM_*` environment variables.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cubesim";
const CONFIG_FILE_EXTENSION: &str = "yaml";
const CONFIG_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_CONFIG_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBESIM";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Config {
    /// Number of random twists in a scramble.
    pub scramble_length: usize,
    /// Fixed scramble seed, if any.
    pub seed: Option<u64>,
    /// Whether to print colored blocks.
    pub color: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            scramble_length: cubesim_core::DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            color: true,
        }
    }
}
impl Config {
    /// Loads the configuration. If `path` is `None`, the file in the user's
    /// configuration directory is used if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Loads the configuration, reading variables from `env` instead of the
    /// process environment if it is given.
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG_STR, CONFIG_FILE_FORMAT));

        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                builder = builder.add_source(
                    config::File::from(path)
                        .format(CONFIG_FILE_FORMAT)
                        .required(true),
                );
            }
            None => match default_config_path() {
                Some(path) => {
                    log::debug!("Looking for configuration at {}", path.display());
                    builder = builder.add_source(
                        config::File::from(path)
                            .format(CONFIG_FILE_FORMAT)
                            .required(false),
                    );
                }
                None => log::warn!("Unable to get configuration directory"),
            },
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        builder
            .build()
            .wrap_err("error loading configuration")?
            .try_deserialize()
            .wrap_err("invalid configuration")
    }

    /// Returns the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).wrap_err("error serializing configuration")
    }
}

fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", CONFIG_FILE_NAME)?;
    Some(
        dirs.config_dir()
            .join(format!("{CONFIG_FILE_NAME}.{CONFIG_FILE_EXTENSION}")),
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_yaml_matches_default() {
        let parsed: Config =
            serde_norway::from_str(DEFAULT_CONFIG_STR).expect("default config is valid YAML");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_load_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("error creating temp file");
        writeln!(file, "scramble_length: 7\nseed: 99").expect("error writing temp file");

        let config = Config::load(Some(file.path())).expect("error loading config");
        assert_eq!(config.scramble_length, 7);
        assert_eq!(config.seed, Some(99));
        assert!(config.color);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("error creating temp file");
        writeln!(file, "scramble_length: 7\ncolor: true").expect("error writing temp file");

        let env = [
            ("CUBESIM_SCRAMBLE_LENGTH", "9"),
            ("CUBESIM_COLOR", "false"),
            ("OTHER_SEED", "5"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        let config =
            Config::load_with_env(Some(file.path()), Some(env)).expect("error loading config");
        assert_eq!(
            config,
            Config {
                scramble_length: 9,
                seed: None,
                color: false,
            },
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let path = dir.path().join("does_not_exist.yaml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_yaml_output() {
        let config = Config {
            scramble_length: 5,
            seed: None,
            color: false,
        };
        let yaml = config.to_yaml().expect("error serializing config");
        assert!(yaml.contains("scramble_length: 5"), "{yaml}");
        assert!(yaml.contains("color: false"), "{yaml}");
    }
}
