//! User configuration.
//!
//! ```toml
//! cursor-after-transform = "next-symbol"
//! symbol-chars = ["_", "-"]
//! ```
//!
//! The global file lives in the platform config directory (or
//! `$SYMCASE_CONFIG_DIR`), the local one is `.symcase.toml` in the working
//! directory. Local keys override global ones.
use std::{
  fmt,
  fs,
  io::{
    Error as IOError,
    ErrorKind,
  },
  path::{
    Path,
    PathBuf,
  },
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use serde::Deserialize;
use symcase_core::chars::SymbolChars;
use thiserror::Error;
use toml::de::Error as TomlError;

pub const CONFIG_DIR_ENV: &str = "SYMCASE_CONFIG_DIR";
pub const LOCAL_CONFIG_FILE: &str = ".symcase.toml";

/// Where the cursor lands after a successful transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorPolicy {
  SymbolStart,
  #[default]
  SymbolEnd,
  NextSymbol,
}

impl CursorPolicy {
  pub const fn name(self) -> &'static str {
    match self {
      Self::SymbolStart => "symbol-start",
      Self::SymbolEnd => "symbol-end",
      Self::NextSymbol => "next-symbol",
    }
  }
}

impl fmt::Display for CursorPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cursor policy '{0}', expected symbol-start, symbol-end or next-symbol")]
pub struct ParseCursorPolicyError(pub String);

impl std::str::FromStr for CursorPolicy {
  type Err = ParseCursorPolicyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "symbol-start" => Ok(Self::SymbolStart),
      "symbol-end" => Ok(Self::SymbolEnd),
      "next-symbol" => Ok(Self::NextSymbol),
      _ => Err(ParseCursorPolicyError(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  pub cursor_after_transform: CursorPolicy,
  pub symbol_chars:           SymbolChars,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigRaw {
  cursor_after_transform: Option<CursorPolicy>,
  symbol_chars:           Option<Vec<char>>,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
  #[error("bad config: {0}")]
  BadConfig(#[from] TomlError),
  #[error(transparent)]
  Error(#[from] IOError),
}

impl Config {
  /// Merges a global and a local config source.
  ///
  /// A source that failed with `NotFound` counts as empty. Any other failure,
  /// including a malformed file, is returned.
  pub fn load(
    global: Result<String, ConfigLoadError>,
    local: Result<String, ConfigLoadError>,
  ) -> Result<Config, ConfigLoadError> {
    let global = parse_source(global)?;
    let local = parse_source(local)?;

    let symbol_chars = local
      .symbol_chars
      .or(global.symbol_chars)
      .map(SymbolChars::new)
      .unwrap_or_default();

    Ok(Config {
      cursor_after_transform: local
        .cursor_after_transform
        .or(global.cursor_after_transform)
        .unwrap_or_default(),
      symbol_chars,
    })
  }

  /// Loads the global config from `global_path` (or the default config file)
  /// and the local config from the working directory.
  pub fn load_user(global_path: Option<&Path>) -> Result<Config, ConfigLoadError> {
    let global_path = global_path.map_or_else(config_file, Path::to_path_buf);
    tracing::debug!(path = %global_path.display(), "loading global config");
    let global = fs::read_to_string(&global_path).map_err(ConfigLoadError::Error);
    let local = fs::read_to_string(LOCAL_CONFIG_FILE).map_err(ConfigLoadError::Error);
    Self::load(global, local)
  }
}

fn parse_source(source: Result<String, ConfigLoadError>) -> Result<ConfigRaw, ConfigLoadError> {
  match source {
    Ok(text) => Ok(toml::from_str(&text)?),
    Err(ConfigLoadError::Error(err)) if err.kind() == ErrorKind::NotFound => Ok(ConfigRaw::default()),
    Err(err) => Err(err),
  }
}

pub fn config_dir() -> PathBuf {
  if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
    return PathBuf::from(dir);
  }
  match choose_base_strategy() {
    Ok(strategy) => strategy.config_dir().join("symcase"),
    Err(err) => {
      tracing::warn!(%err, "unable to find the config directory");
      PathBuf::from(".")
    },
  }
}

pub fn config_file() -> PathBuf {
  config_dir().join("config.toml")
}

#[cfg(test)]
mod test {
  use super::*;

  fn missing() -> Result<String, ConfigLoadError> {
    Err(ConfigLoadError::Error(IOError::from(ErrorKind::NotFound)))
  }

  #[test]
  fn test_defaults_without_files() {
    let config = Config::load(missing(), missing()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.cursor_after_transform, CursorPolicy::SymbolEnd);
    assert_eq!(config.symbol_chars.extra(), &['-', '_']);
  }

  #[test]
  fn test_global_config() {
    let global = r#"
      cursor-after-transform = "next-symbol"
      symbol-chars = ["_", "."]
    "#;
    let config = Config::load(Ok(global.to_string()), missing()).unwrap();
    assert_eq!(config.cursor_after_transform, CursorPolicy::NextSymbol);
    assert_eq!(config.symbol_chars, SymbolChars::new(['.', '_']));
  }

  #[test]
  fn test_local_overrides_global() {
    let global = "cursor-after-transform = \"next-symbol\"\nsymbol-chars = [\"_\"]";
    let local = "cursor-after-transform = \"symbol-start\"";
    let config = Config::load(Ok(global.into()), Ok(local.into())).unwrap();
    assert_eq!(config.cursor_after_transform, CursorPolicy::SymbolStart);
    assert_eq!(config.symbol_chars.extra(), &['_']);
  }

  #[test]
  fn test_bad_config_is_reported() {
    let bad = "cursor-after-transform = \"middle\"";
    assert!(matches!(
      Config::load(Ok(bad.into()), missing()),
      Err(ConfigLoadError::BadConfig(_))
    ));

    let unknown = "theme = \"dark\"";
    assert!(matches!(
      Config::load(missing(), Ok(unknown.into())),
      Err(ConfigLoadError::BadConfig(_))
    ));
  }

  #[test]
  fn test_io_errors_other_than_missing_are_reported() {
    let denied = Err(ConfigLoadError::Error(IOError::from(
      ErrorKind::PermissionDenied,
    )));
    assert!(matches!(
      Config::load(denied, missing()),
      Err(ConfigLoadError::Error(_))
    ));
  }

  #[test]
  fn test_parse_cursor_policy() {
    assert_eq!("next-symbol".parse(), Ok(CursorPolicy::NextSymbol));
    assert_eq!("symbol-start".parse(), Ok(CursorPolicy::SymbolStart));
    assert_eq!(
      "end".parse::<CursorPolicy>(),
      Err(ParseCursorPolicyError("end".to_string()))
    );
    assert_eq!(
      ParseCursorPolicyError("end".to_string()).to_string(),
      "invalid cursor policy 'end', expected symbol-start, symbol-end or next-symbol"
    );
    assert_eq!(CursorPolicy::default().to_string(), "symbol-end");
  }
}
