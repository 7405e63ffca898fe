use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Browse and edit a SQLite database in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(value_name = "DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to the SQLite database file (alternative to the positional argument)
    #[arg(short = 'd', long = "database", value_name = "PATH")]
    pub database_flag: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, env = "LITETUI_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no database given; pass a path or use --database <PATH>")]
    MissingDatabase,

    #[error("database file '{}' does not exist", .0.display())]
    DatabaseNotFound(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The positional path wins over `--database`. The file must exist;
    /// nothing is created.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let database = args
            .database
            .or(args.database_flag)
            .ok_or(ConfigError::MissingDatabase)?;

        if !database.exists() {
            return Err(ConfigError::DatabaseNotFound(database));
        }

        Ok(Self {
            database,
            log_file: args.log_file,
        })
    }
}
