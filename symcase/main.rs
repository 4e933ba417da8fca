use std::{
  fs::File,
  io::{
    self,
    BufReader,
    BufWriter,
    Write,
  },
};

use anyhow::{
  Context,
  Result,
  bail,
};
use ropey::Rope;
use symcase_lib::{
  buffer::RopeBuffer,
  command::{
    Command,
    execute,
  },
  config::Config,
  menu::{
    CaseMenu,
    MenuItem,
  },
};

use crate::cli::{
  Action,
  CliOptions,
};

mod cli;
mod logging;

fn main() -> Result<()> {
  let options = CliOptions::parse()?;
  logging::setup_logging(options.verbosity, options.log_file.as_deref())?;

  let command = match options.action {
    Action::List => {
      print_commands();
      return Ok(());
    },
    Action::Run(command) => command,
  };

  let mut config =
    Config::load_user(options.config_file.as_deref()).context("failed to load config")?;
  if let Some(policy) = options.cursor_after_transform {
    config.cursor_after_transform = policy;
  }
  log::debug!("using config: {config:?}");

  let text = read_text(&options)?;
  let mut buffer = RopeBuffer::new(text)
    .with_symbol_chars(config.symbol_chars.clone())
    .with_cursor(options.offset);

  let menu_key = options.menu_key;
  let mut presenter = |_: &[MenuItem]| menu_key;
  let Some(done) = execute(&mut buffer, command, &config, &mut presenter)? else {
    let key = menu_key.map(String::from).unwrap_or_default();
    bail!("no casing style is bound to key '{key}'");
  };

  write_text(&options, buffer.text())?;
  eprintln!("cursor: {}", done.cursor);
  Ok(())
}

fn read_text(options: &CliOptions) -> Result<Rope> {
  match &options.file {
    Some(path) => {
      let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
      Rope::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))
    },
    None => Rope::from_reader(io::stdin().lock()).context("failed to read stdin"),
  }
}

fn write_text(options: &CliOptions, text: &Rope) -> Result<()> {
  match &options.file {
    Some(path) if options.in_place => {
      let file =
        File::create(path).with_context(|| format!("failed to write {}", path.display()))?;
      let mut writer = BufWriter::new(file);
      text.write_to(&mut writer)?;
      writer.flush()?;
    },
    _ => {
      let mut stdout = io::stdout().lock();
      text.write_to(&mut stdout)?;
      stdout.flush()?;
    },
  }
  Ok(())
}

fn print_commands() {
  for command in Command::ALL {
    println!("{:<30} {}", command.name(), command.doc());
  }
  println!();
  print!("{}", CaseMenu);
}
