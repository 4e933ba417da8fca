use std::fs;

use symcase_lib::{
  buffer::{
    Buffer,
    RopeBuffer,
  },
  case_convention::CasingStyle,
  config::{
    Config,
    ConfigLoadError,
    CursorPolicy,
  },
  transform::transform_at_cursor,
};
use tempfile::tempdir;

#[test]
fn test_load_user_from_explicit_file() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("config.toml");
  fs::write(
    &path,
    "cursor-after-transform = \"symbol-start\"\nsymbol-chars = [\"_\", \".\"]\n",
  )
  .unwrap();

  let config = Config::load_user(Some(path.as_path())).unwrap();
  assert_eq!(config.cursor_after_transform, CursorPolicy::SymbolStart);

  let mut buffer = RopeBuffer::from("x = self.fooBar;")
    .with_symbol_chars(config.symbol_chars.clone())
    .with_cursor(6);
  let done = transform_at_cursor(&mut buffer, CasingStyle::Snake, &config).unwrap();
  assert_eq!(buffer.text().to_string(), "x = self_foo_bar;");
  assert_eq!(done.range, 4..15);
  assert_eq!(buffer.cursor(), 4);
}

#[test]
fn test_missing_file_uses_defaults() {
  let dir = tempdir().unwrap();
  let config = Config::load_user(Some(dir.path().join("nope.toml").as_path())).unwrap();
  assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_file_is_an_error() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("config.toml");
  fs::write(&path, "cursor-after-transform = [").unwrap();
  assert!(matches!(
    Config::load_user(Some(path.as_path())),
    Err(ConfigLoadError::BadConfig(_))
  ));
}
