//! Commands exposed to the host: one per casing style plus the menu.

use crate::{
  buffer::Buffer,
  case_convention::CasingStyle,
  config::Config,
  menu::{
    MenuPresenter,
    select_style,
  },
  transform::{
    Result,
    Transformed,
    transform_at_cursor,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Casify(CasingStyle),
  Menu,
}

impl Command {
  pub const ALL: [Command; 9] = [
    Command::Casify(CasingStyle::LowerCamel),
    Command::Casify(CasingStyle::UpperCamel),
    Command::Casify(CasingStyle::Snake),
    Command::Casify(CasingStyle::Kebab),
    Command::Casify(CasingStyle::Downcase),
    Command::Casify(CasingStyle::CapitalizedWords),
    Command::Casify(CasingStyle::TitleizedWords),
    Command::Casify(CasingStyle::Upcase),
    Command::Menu,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Self::Casify(CasingStyle::LowerCamel) => "symbol_to_lower_camel_case",
      Self::Casify(CasingStyle::UpperCamel) => "symbol_to_upper_camel_case",
      Self::Casify(CasingStyle::Snake) => "symbol_to_snake_case",
      Self::Casify(CasingStyle::Kebab) => "symbol_to_kebab_case",
      Self::Casify(CasingStyle::Downcase) => "symbol_to_downcase",
      Self::Casify(CasingStyle::CapitalizedWords) => "symbol_to_capitalized_words",
      Self::Casify(CasingStyle::TitleizedWords) => "symbol_to_titleized_words",
      Self::Casify(CasingStyle::Upcase) => "symbol_to_upcase",
      Self::Menu => "symbol_case_menu",
    }
  }

  pub const fn doc(self) -> &'static str {
    match self {
      Self::Casify(CasingStyle::LowerCamel) => "Convert symbol at cursor to lowerCamelCase",
      Self::Casify(CasingStyle::UpperCamel) => "Convert symbol at cursor to UpperCamelCase",
      Self::Casify(CasingStyle::Snake) => "Convert symbol at cursor to snake_case",
      Self::Casify(CasingStyle::Kebab) => "Convert symbol at cursor to kebab-case",
      Self::Casify(CasingStyle::Downcase) => "Lowercase symbol at cursor",
      Self::Casify(CasingStyle::CapitalizedWords) => "Convert symbol at cursor to Capitalized words",
      Self::Casify(CasingStyle::TitleizedWords) => "Convert symbol at cursor to Titleized Words",
      Self::Casify(CasingStyle::Upcase) => "Uppercase symbol at cursor",
      Self::Menu => "Pick a case for the symbol at cursor",
    }
  }
}

pub fn command_from_name(name: &str) -> Option<Command> {
  Command::ALL
    .into_iter()
    .find(|command| command.name() == name)
}

/// Runs `command` against `buffer`.
///
/// `Ok(None)` means the menu was dismissed and nothing changed.
pub fn execute<B, P>(
  buffer: &mut B,
  command: Command,
  config: &Config,
  presenter: &mut P,
) -> Result<Option<Transformed>>
where
  B: Buffer + ?Sized,
  P: MenuPresenter + ?Sized,
{
  let style = match command {
    Command::Casify(style) => style,
    Command::Menu => {
      let Some(style) = select_style(presenter) else {
        return Ok(None);
      };
      style
    },
  };

  tracing::debug!(command = command.name(), %style, "executing");
  transform_at_cursor(buffer, style, config).map(Some)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    buffer::RopeBuffer,
    menu::MenuItem,
    transform::Error,
  };

  fn no_menu(_: &[MenuItem]) -> Option<char> {
    panic!("menu should not be shown")
  }

  #[test]
  fn test_names_round_trip() {
    for command in Command::ALL {
      assert_eq!(command_from_name(command.name()), Some(command));
      assert!(!command.doc().is_empty());
    }
    assert_eq!(command_from_name("symbol_to_shouty_case"), None);
  }

  #[test]
  fn test_execute_style_command() {
    let mut buffer = RopeBuffer::from("fooBar baz").with_cursor(3);
    let res = execute(
      &mut buffer,
      Command::Casify(CasingStyle::Snake),
      &Config::default(),
      &mut no_menu,
    )
    .unwrap()
    .unwrap();
    assert_eq!(buffer.text().to_string(), "foo_bar baz");
    assert_eq!(res.cursor, 7);
    assert_eq!(buffer.cursor(), 7);
  }

  #[test]
  fn test_execute_menu() {
    let mut buffer = RopeBuffer::from("my_var").with_cursor(0);
    let mut press_t = |_: &[MenuItem]| Some('t');
    let res = execute(&mut buffer, Command::Menu, &Config::default(), &mut press_t).unwrap();
    assert!(res.is_some());
    assert_eq!(buffer.text().to_string(), "My Var");
  }

  #[test]
  fn test_dismissed_menu_changes_nothing() {
    let mut buffer = RopeBuffer::from("my_var").with_cursor(2);
    let mut dismiss = |_: &[MenuItem]| -> Option<char> { None };
    let res = execute(&mut buffer, Command::Menu, &Config::default(), &mut dismiss).unwrap();
    assert_eq!(res, None);
    assert_eq!(buffer.text().to_string(), "my_var");
    assert_eq!(buffer.cursor(), 2);
  }

  #[test]
  fn test_execute_without_symbol() {
    let mut buffer = RopeBuffer::from("   ").with_cursor(1);
    let res = execute(
      &mut buffer,
      Command::Casify(CasingStyle::Upcase),
      &Config::default(),
      &mut no_menu,
    );
    assert_eq!(res, Err(Error::NoSymbolAtPoint { pos: 1 }));
  }
}
