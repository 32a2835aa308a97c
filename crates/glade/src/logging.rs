//! File logging; stderr belongs to the terminal UI.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use directories::ProjectDirs;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Name of the log file inside the data directory.
const LOG_FILE_NAME: &str = "glade.log";

/// Initializes the global logger, appending to the glade log file.
///
/// When `verbose` is `true`, debug messages are written too; `RUST_LOG`
/// overrides either default. Returns the log path, or `None` when no log
/// file could be opened, in which case logging stays disabled.
pub fn init(verbose: bool) -> Option<PathBuf> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let dirs = ProjectDirs::from("", "", "glade")?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set.
    builder.try_init().ok()?;
    Some(path)
}
