//! Logger setup. All user-facing output goes through the `log` macros so
//! `--quiet` and `--logfile` apply to everything.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};

/// Writes to stdout and, optionally, to a log file with ANSI codes stripped.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger.
///
/// `quiet` keeps warnings and errors only; `verbose` adds debug messages
/// with timestamps. `STREAMCAT_LOG` overrides the level filter.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = logfile.map(File::create).transpose()?;

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(Env::new().filter("STREAMCAT_LOG"))
        .target(Target::Pipe(Box::new(Tee { file })))
        .format(move |buf, record| {
            if verbose {
                return writeln!(
                    buf,
                    "{} {:<5} {}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                );
            }
            match record.level() {
                Level::Error => writeln!(buf, "error: {}", record.args()),
                Level::Warn => writeln!(buf, "warning: {}", record.args()),
                _ => writeln!(buf, "{}", record.args()),
            }
        });
    builder.init();
    Ok(())
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
