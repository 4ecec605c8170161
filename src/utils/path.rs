use std::path::{Path, PathBuf};

/// Environment variable that relocates the config directory.
pub const CONFIG_DIR_ENV: &str = "LULU_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Config directory: `$LULU_CONFIG_DIR` if set and non-empty, otherwise
/// `~/.config/lulu` on every OS.
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("lulu"),
    }
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for the log file (platform cache dir, or `~/.cache`).
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| get_home_dir().join(".cache"))
        .join("lulu")
}

/// Show paths under the home directory as `~/...`.
pub fn format_path_for_display(path: &Path) -> String {
    let home_dir = get_home_dir();

    match path.strip_prefix(&home_dir) {
        Ok(relative) if relative.as_os_str().is_empty() => "~".to_string(),
        Ok(relative) => format!("~/{}", relative.to_string_lossy()),
        Err(_) => path.to_string_lossy().to_string(),
    }
}
