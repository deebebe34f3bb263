#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use eyre::{Context, Result};
use regex::Regex;

/// resolve_path resolves the input path to an absolute path. If the
/// input path contains environment variables, it will expand them to their
/// values.
pub fn resolve_path(path: &str) -> Result<String> {
    let re = Regex::new(r"\$\{?([A-Za-z_]+)\}?").wrap_err("compiling regex")?;

    let mut ret = String::new();
    let mut last_pos = 0;

    for cap in re.captures_iter(path) {
        let full_match = cap.get(0).unwrap();
        let start = full_match.start();
        let end = full_match.end();
        ret.push_str(&path[last_pos..start]);
        let var_name = cap.get(1).map(|m| m.as_str()).unwrap();

        let var_value = std::env::var(var_name).unwrap_or_default();
        ret.push_str(&var_value);
        last_pos = end;
    }
    ret.push_str(&path[last_pos..]);

    // Resolve the path to an absolute path
    let path = std::path::absolute(ret.as_str()).wrap_err(format!("resolving path {}", ret))?;
    Ok(path.to_string_lossy().to_string())
}

/// lookup_config_path trys to look up the config path at:
/// * $XDG_CONFIG_HOME/goaltrack/config.toml
/// * $HOME/.config/goaltrack/config.toml
/// * $HOME/.goaltrack.toml
pub fn lookup_config_path() -> Option<String> {
    let paths = &[
        format!(
            "{}/goaltrack/config.toml",
            env_or_current("XDG_CONFIG_HOME")
        ),
        format!("{}/.config/goaltrack/config.toml", env_or_current("HOME")),
        format!("{}/.goaltrack.toml", env_or_current("HOME")),
    ];

    for path in paths {
        if std::path::Path::new(path).exists() {
            return Some(path.to_string());
        }
    }
    None
}

fn env_or_current(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| ".".to_string())
}
