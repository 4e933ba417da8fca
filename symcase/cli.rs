use std::path::PathBuf;

use anyhow::{
  Result,
  bail,
};
use clap::{
  ArgAction,
  ArgGroup,
  Parser,
};
use symcase_lib::{
  case_convention::CasingStyle,
  command::{
    Command,
    command_from_name,
  },
  config::CursorPolicy,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
  /// Print the commands and the menu bindings.
  List,
  Run(Command),
}

#[derive(Clone, Debug)]
pub struct CliOptions {
  pub action:                 Action,
  pub menu_key:               Option<char>,
  pub offset:                 usize,
  pub cursor_after_transform: Option<CursorPolicy>,
  pub in_place:               bool,
  pub verbosity:              u8,
  pub log_file:               Option<PathBuf>,
  pub config_file:            Option<PathBuf>,
  pub file:                   Option<PathBuf>,
}

impl CliOptions {
  pub fn parse() -> Result<Self> {
    let raw = RawCli::parse();
    raw.try_into()
  }
}

#[derive(Parser, Debug)]
#[command(name = "symcase", about, long_about = None, version)]
#[command(group(
  ArgGroup::new("action")
    .required(true)
    .args(["style", "key", "command", "list"])
))]
struct RawCli {
  /// Casing style to apply (lower-camel, upper-camel, snake, kebab, downcase,
  /// capitalized-words, titleized-words, upcase)
  #[arg(short = 's', long = "style", value_name = "STYLE")]
  style: Option<CasingStyle>,

  /// Pick the style through the case menu key (c C _ - d u t U)
  #[arg(short = 'k', long = "key", value_name = "KEY")]
  key: Option<char>,

  /// Run a command by name, e.g. symbol_to_snake_case
  #[arg(long = "command", value_name = "NAME")]
  command: Option<String>,

  /// List commands and menu keys
  #[arg(long = "list")]
  list: bool,

  /// Cursor position as a char offset into the text
  #[arg(short = 'o', long = "offset", value_name = "N", default_value_t = 0)]
  offset: usize,

  /// Where to leave the cursor (symbol-start, symbol-end, next-symbol)
  #[arg(long = "cursor-after-transform", value_name = "POLICY")]
  cursor_after_transform: Option<CursorPolicy>,

  /// Write the result back to FILE instead of stdout
  #[arg(short = 'i', long = "in-place", requires = "file")]
  in_place: bool,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  config_file: Option<PathBuf>,

  /// File to read, stdin when omitted
  #[arg(value_name = "FILE")]
  file: Option<PathBuf>,
}

impl TryFrom<RawCli> for CliOptions {
  type Error = anyhow::Error;

  fn try_from(raw: RawCli) -> Result<Self> {
    let action = if raw.list {
      Action::List
    } else if let Some(style) = raw.style {
      Action::Run(Command::Casify(style))
    } else if raw.key.is_some() {
      Action::Run(Command::Menu)
    } else if let Some(name) = raw.command.as_deref() {
      match command_from_name(name) {
        Some(Command::Menu) => bail!("{name} needs a menu key, pass --key"),
        Some(command) => Action::Run(command),
        None => bail!("unknown command '{name}'"),
      }
    } else {
      bail!("one of --style, --key, --command or --list is required");
    };

    Ok(Self {
      action,
      menu_key: raw.key,
      offset: raw.offset,
      cursor_after_transform: raw.cursor_after_transform,
      in_place: raw.in_place,
      verbosity: raw.verbosity,
      log_file: raw.log_file,
      config_file: raw.config_file,
      file: raw.file,
    })
  }
}
