use std::path::Path;

use anyhow::Result;
use log::LevelFilter;

/// Installs the global logger. Library code logs through `tracing`, whose
/// events fall through to `log` when no subscriber is installed.
pub fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
  let level = match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  let base = fern::Dispatch::new().level(level).format(|out, message, record| {
    out.finish(format_args!(
      "{} {} [{}] {}",
      chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
      record.target(),
      record.level(),
      message
    ))
  });

  let base = match log_file {
    Some(path) => base.chain(fern::log_file(path)?),
    None => base.chain(std::io::stderr()),
  };

  base.apply()?;
  Ok(())
}
