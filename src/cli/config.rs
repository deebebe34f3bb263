#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::config::{Configuration, LogConfig, resolve_path};
use chrono::Local;
use eyre::{Context, Result};
use log::LevelFilter;
use std::{io::Write, str::FromStr};

pub fn load_configuration(config_path: &str) -> Result<Configuration> {
    let config =
        std::fs::read_to_string(config_path).wrap_err(format!("reading {}", config_path))?;
    let config: Configuration = toml::from_str(&config).wrap_err("parsing configuration")?;
    Ok(config)
}

/// The log output always goes to a file; the terminal belongs to the UI.
pub fn init_logger(config: &LogConfig) -> Result<()> {
    let path = resolve_path(&config.file.path)
        .wrap_err(format!("resolving log file path {}", config.file.path))?;
    init_log_dir(&path)?;
    let log_file = Box::new(
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.file.append)
            .open(&path)
            .wrap_err(format!("opening log file {}", path))?,
    );

    let raw_level = config.level.as_deref().unwrap_or("info");
    let log_level = LevelFilter::from_str(raw_level)?;

    let mut builder = env_logger::Builder::new();

    for filter in config.filters.as_deref().unwrap_or_default() {
        let module_level = LevelFilter::from_str(filter.level.as_deref().unwrap_or(raw_level))
            .unwrap_or(log_level);
        builder.filter(filter.module.as_deref(), module_level);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}/{}:{} {} [{}] - {}",
                record.module_path().unwrap_or("unknown"),
                basename(record.file().unwrap_or("unknown")),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(log_file))
        .filter(None, log_level)
        .try_init()?;
    Ok(())
}

pub fn basename(path: &str) -> String {
    path.split('/').last().unwrap_or(path).to_string()
}

fn init_log_dir(path: &str) -> Result<()> {
    // Create parent dirs
    let dir = std::path::Path::new(path)
        .parent()
        .unwrap_or(std::path::Path::new("."));
    std::fs::create_dir_all(dir).wrap_err(format!("creating directory {}", dir.display()))?;
    Ok(())
}
