//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "argcalc";

/// Package version, as declared in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.argcalc.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".argcalc.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "argcalc";

// ── Defaults ────────────────────────────────────────────────────────

/// Operator used when neither flag, env nor config selects one.
pub const DEFAULT_OPERATOR: &str = "+";

/// Decimal places used when rendering operands and results.
pub const DEFAULT_PRECISION: usize = 2;

/// Upper bound for `--precision`; beyond this `f64` output is noise.
pub const MAX_PRECISION: usize = 17;

/// Password accepted by `argcalc access` unless configured otherwise.
pub const DEFAULT_PASSWORD: &str = "password";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_OPERATOR: &str = "ARGCALC_OPERATOR";
pub const ENV_PRECISION: &str = "ARGCALC_PRECISION";
pub const ENV_PASSWORD: &str = "ARGCALC_PASSWORD";
