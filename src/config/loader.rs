//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `--config <FILE>`, or `.argcalc.toml` in the working directory
//! 4. `~/.config/argcalc/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{self, DEFAULT_OPERATOR, DEFAULT_PASSWORD, DEFAULT_PRECISION, MAX_PRECISION};
use crate::env::Env;
use crate::models::{CalcSettings, OddPolicy, Operator, UnknownOperator};

/// Errors during config loading and resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Operator(#[from] UnknownOperator),

    #[error("precision {0} is out of range (0..={max})", max = MAX_PRECISION)]
    Precision(usize),
}

/// Top-level resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub calc: CalcConfig,
    pub access: AccessConfig,
}

/// Calculator defaults.
///
/// The operator stays a string here so a bad value in a file is reported
/// the same way as a bad `-o`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcConfig {
    pub operator: String,
    pub precision: usize,
    pub odd_tokens: OddPolicy,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            operator: DEFAULT_OPERATOR.to_string(),
            precision: DEFAULT_PRECISION,
            odd_tokens: OddPolicy::default(),
        }
    }
}

/// Access-check configuration.
#[derive(Clone, PartialEq)]
pub struct AccessConfig {
    /// Password accepted by `argcalc access`.
    pub password: String,
}

impl std::fmt::Debug for AccessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessConfig")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

/// One config file as written on disk. Every key is optional so a file
/// only overrides what it actually sets, defaults included.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub calc: CalcFileConfig,
    pub access: AccessFileConfig,
}

/// `[calc]` table of a config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalcFileConfig {
    pub operator: Option<String>,
    pub precision: Option<usize>,
    pub odd_tokens: Option<OddPolicy>,
}

/// `[access]` table of a config file.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessFileConfig {
    pub password: Option<String>,
}

impl std::fmt::Debug for AccessFileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessFileConfig")
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Per-invocation overrides taken from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CalcOverrides<'a> {
    pub operator: Option<&'a str>,
    pub precision: Option<usize>,
    pub odd_tokens: Option<OddPolicy>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` is a `--config` path and must exist; otherwise the
    /// local file in `work_dir` is used when present.
    pub fn load(explicit: Option<&Path>, work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        Self::load_layers(Self::global_config_path().as_deref(), explicit, work_dir, env)
    }

    fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                config.merge(Self::load_file(global_path)?);
            }
        }

        // Layer 3: explicit or local config
        if let Some(path) = explicit {
            config.merge(Self::load_file(path)?);
        } else if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::load_file(&local_path)?);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this one. Keys the file sets win, even
    /// when they restate a built-in default.
    fn merge(&mut self, other: ConfigFile) {
        if let Some(operator) = other.calc.operator {
            self.calc.operator = operator;
        }
        if let Some(precision) = other.calc.precision {
            self.calc.precision = precision;
        }
        if let Some(odd_tokens) = other.calc.odd_tokens {
            self.calc.odd_tokens = odd_tokens;
        }

        if let Some(password) = other.access.password {
            self.access.password = password;
        }
    }

    /// Apply environment variable overrides. Invalid values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        match env.parsed::<Operator>(constants::ENV_OPERATOR) {
            Some(Ok(op)) => self.calc.operator = op.symbol().to_string(),
            Some(Err(val)) => warn!("ignoring invalid {} value: {val}", constants::ENV_OPERATOR),
            None => {}
        }
        match env.parsed::<usize>(constants::ENV_PRECISION) {
            Some(Ok(p)) if p <= MAX_PRECISION => self.calc.precision = p,
            Some(Ok(p)) => warn!("ignoring invalid {} value: {p}", constants::ENV_PRECISION),
            Some(Err(val)) => warn!("ignoring invalid {} value: {val}", constants::ENV_PRECISION),
            None => {}
        }
        if let Ok(val) = env.var(constants::ENV_PASSWORD) {
            self.access.password = val;
        }
    }

    /// Resolve the settings for one calculator run, CLI flags first.
    ///
    /// The operator is validated here, once, before any pair is evaluated.
    pub fn calc_settings(&self, overrides: &CalcOverrides<'_>) -> Result<CalcSettings, ConfigError> {
        let operator: Operator = overrides
            .operator
            .unwrap_or(&self.calc.operator)
            .parse()?;
        let precision = overrides.precision.unwrap_or(self.calc.precision);
        if precision > MAX_PRECISION {
            return Err(ConfigError::Precision(precision));
        }
        Ok(CalcSettings {
            operator,
            odd_tokens: overrides.odd_tokens.unwrap_or(self.calc.odd_tokens),
            precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.calc.operator, "+");
        assert_eq!(config.calc.precision, 2);
        assert_eq!(config.calc.odd_tokens, OddPolicy::Reject);
        assert_eq!(config.access.password, "password");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[calc]
operator = "*"
precision = 3
odd_tokens = "skip"

[access]
password = "hunter2"
"#;
        let file: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.calc.operator.as_deref(), Some("*"));
        assert_eq!(file.calc.precision, Some(3));
        assert_eq!(file.calc.odd_tokens, Some(OddPolicy::Skip));
        assert_eq!(file.access.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn partial_toml_leaves_other_keys_unset() {
        let file: ConfigFile = toml::from_str("[calc]\nprecision = 0\n").unwrap();
        assert_eq!(file.calc.operator, None);
        assert_eq!(file.calc.precision, Some(0));
        assert_eq!(file.access, AccessFileConfig::default());
    }

    #[test]
    fn merge_applies_set_keys() {
        let mut base = Config::default();
        let other = ConfigFile {
            calc: CalcFileConfig {
                operator: Some("-".into()),
                precision: None,
                odd_tokens: Some(OddPolicy::Skip),
            },
            access: AccessFileConfig {
                password: Some("s3cret".into()),
            },
        };

        base.merge(other);

        assert_eq!(base.calc.operator, "-");
        assert_eq!(base.calc.precision, 2);
        assert_eq!(base.calc.odd_tokens, OddPolicy::Skip);
        assert_eq!(base.access.password, "s3cret");
    }

    #[test]
    fn merge_keeps_base_when_file_is_empty() {
        let mut base = Config::default();
        base.calc.operator = "/".into();
        base.calc.precision = 5;

        base.merge(ConfigFile::default());

        assert_eq!(base.calc.operator, "/");
        assert_eq!(base.calc.precision, 5);
    }

    #[test]
    fn merge_restores_explicit_defaults() {
        let mut base = Config::default();
        base.calc.operator = "*".into();
        base.calc.precision = 6;
        base.calc.odd_tokens = OddPolicy::Skip;
        base.access.password = "global-secret".into();

        let file: ConfigFile = toml::from_str(
            "[calc]\noperator = \"+\"\nprecision = 2\nodd_tokens = \"reject\"\n[access]\npassword = \"password\"\n",
        )
        .unwrap();
        base.merge(file);

        assert_eq!(base, Config::default());
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[calc\noperator =").unwrap();
        let err = Config::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
    }

    #[test]
    fn load_file_not_found() {
        let err = Config::load_file(Path::new("/nonexistent/argcalc.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn local_file_overrides_global() {
        let global_dir = tempfile::tempdir().unwrap();
        let global = global_dir.path().join("config.toml");
        std::fs::write(&global, "[calc]\noperator = \"*\"\nprecision = 4\n").unwrap();

        let work = tempfile::tempdir().unwrap();
        std::fs::write(
            work.path().join(constants::CONFIG_FILENAME),
            "[calc]\noperator = \"-\"\n",
        )
        .unwrap();

        let config = Config::load_layers(Some(&global), None, Some(work.path()), &no_env()).unwrap();
        assert_eq!(config.calc.operator, "-");
        assert_eq!(config.calc.precision, 4);
    }

    #[test]
    fn local_file_can_reset_global_values_to_defaults() {
        let global_dir = tempfile::tempdir().unwrap();
        let global = global_dir.path().join("config.toml");
        std::fs::write(
            &global,
            "[calc]\noperator = \"*\"\nodd_tokens = \"skip\"\nprecision = 4\n",
        )
        .unwrap();

        let work = tempfile::tempdir().unwrap();
        std::fs::write(
            work.path().join(constants::CONFIG_FILENAME),
            "[calc]\noperator = \"+\"\nodd_tokens = \"reject\"\nprecision = 2\n",
        )
        .unwrap();

        let config = Config::load_layers(Some(&global), None, Some(work.path()), &no_env()).unwrap();
        assert_eq!(config.calc.operator, "+");
        assert_eq!(config.calc.odd_tokens, OddPolicy::Reject);
        assert_eq!(config.calc.precision, 2);
    }

    #[test]
    fn explicit_file_replaces_local_lookup() {
        let work = tempfile::tempdir().unwrap();
        std::fs::write(
            work.path().join(constants::CONFIG_FILENAME),
            "[calc]\noperator = \"-\"\n",
        )
        .unwrap();
        let explicit = work.path().join("other.toml");
        std::fs::write(&explicit, "[calc]\noperator = \"/\"\n").unwrap();

        let config =
            Config::load_layers(None, Some(&explicit), Some(work.path()), &no_env()).unwrap();
        assert_eq!(config.calc.operator, "/");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let work = tempfile::tempdir().unwrap();
        let missing = work.path().join("missing.toml");
        let err = Config::load_layers(None, Some(&missing), None, &no_env()).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_without_any_config_files() {
        let work = tempfile::tempdir().unwrap();
        let config = Config::load_layers(None, None, Some(work.path()), &no_env()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn env_vars_override_files() {
        let work = tempfile::tempdir().unwrap();
        std::fs::write(
            work.path().join(constants::CONFIG_FILENAME),
            "[calc]\noperator = \"-\"\nprecision = 1\n",
        )
        .unwrap();
        let env = Env::mock([
            (constants::ENV_OPERATOR, "*"),
            (constants::ENV_PRECISION, "3"),
            (constants::ENV_PASSWORD, "open-sesame"),
        ]);

        let config = Config::load_layers(None, None, Some(work.path()), &env).unwrap();
        assert_eq!(config.calc.operator, "*");
        assert_eq!(config.calc.precision, 3);
        assert_eq!(config.access.password, "open-sesame");
    }

    #[test]
    fn invalid_env_vars_are_ignored() {
        let env = Env::mock([
            (constants::ENV_OPERATOR, "%"),
            (constants::ENV_PRECISION, "lots"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.calc.operator, "+");
        assert_eq!(config.calc.precision, 2);

        let env = Env::mock([(constants::ENV_PRECISION, "99")]);
        config.apply_env_vars(&env);
        assert_eq!(config.calc.precision, 2);
    }

    #[test]
    fn calc_settings_prefers_cli_overrides() {
        let mut config = Config::default();
        config.calc.operator = "-".into();
        let settings = config
            .calc_settings(&CalcOverrides {
                operator: Some("*"),
                precision: Some(1),
                odd_tokens: Some(OddPolicy::Skip),
            })
            .unwrap();
        assert_eq!(settings.operator, Operator::Multiply);
        assert_eq!(settings.precision, 1);
        assert_eq!(settings.odd_tokens, OddPolicy::Skip);

        let settings = config.calc_settings(&CalcOverrides::default()).unwrap();
        assert_eq!(settings.operator, Operator::Subtract);
    }

    #[test]
    fn calc_settings_rejects_unknown_operator() {
        let err = Config::default()
            .calc_settings(&CalcOverrides {
                operator: Some("%"),
                ..CalcOverrides::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("operator not recognised: '%'"));
    }

    #[test]
    fn calc_settings_rejects_bad_config_operator() {
        let mut config = Config::default();
        config.calc.operator = "x".into();
        assert!(matches!(
            config.calc_settings(&CalcOverrides::default()),
            Err(ConfigError::Operator(_))
        ));
    }

    #[test]
    fn calc_settings_rejects_large_precision() {
        let err = Config::default()
            .calc_settings(&CalcOverrides {
                precision: Some(MAX_PRECISION + 1),
                ..CalcOverrides::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::Precision(_)));
    }

    #[test]
    fn debug_redacts_password() {
        let dbg = format!("{:?}", Config::default());
        assert!(dbg.contains("[REDACTED]"));
        assert!(!dbg.contains("\"password\""));
    }
}
