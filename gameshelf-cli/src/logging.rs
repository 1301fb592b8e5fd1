//! Terminal logger.
//!
//! Command output goes through `log::info!`, so `--quiet` silences it along
//! with everything below warnings. Warnings and errors go to stderr with a
//! coloured prefix. `--verbose` enables debug records and prefixes every
//! line with a local timestamp. With `--logfile`, each line is mirrored to
//! the file with ANSI escapes removed.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    file: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        let mut line = String::new();
        if self.timestamps {
            line.push_str(&chrono::Local::now().format("%H:%M:%S%.3f ").to_string());
        }
        match record.level() {
            Level::Error => {
                line.push_str(&format!("{} ", "error:".if_supports_color(Stderr, |t| t.red())));
            }
            Level::Warn => {
                line.push_str(&format!(
                    "{} ",
                    "warning:".if_supports_color(Stderr, |t| t.yellow())
                ));
            }
            Level::Info => {}
            Level::Debug | Level::Trace => {
                line.push_str(&format!(
                    "{} ",
                    format!("[{}]", record.target()).if_supports_color(Stderr, |t| t.dimmed())
                ));
            }
        }
        line.push_str(&record.args().to_string());
        line
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);

        if record.level() == Level::Info {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }

        if let Some(file) = &self.file
            && let Ok(mut f) = file.lock()
        {
            let mut plain = strip_ansi_escapes::strip(line.as_bytes());
            plain.push(b'\n');
            let _ = f.write_all(&plain);
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file
            && let Ok(mut f) = file.lock()
        {
            let _ = f.flush();
        }
    }
}

/// Install the logger. Must be called once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> std::io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = match logfile {
        Some(path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };

    let logger = CliLogger {
        level,
        timestamps: verbose,
        file,
    };
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))
        .map_err(std::io::Error::other)
}
