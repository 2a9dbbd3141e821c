//! Filesystem locations used by shadegen.

use std::path::PathBuf;

use dirs_next::{cache_dir, config_dir, home_dir};

/// Directory name under the platform config/cache roots.
pub const APP_DIR_NAME: &str = "shadegen";

/// Environment variable overriding the TUI log file location.
pub const LOG_PATH_ENV: &str = "SHADEGEN_LOG_PATH";

const LOG_FILE_NAME: &str = "shadegen.log";

/// Expands a leading `~` (Unix or Windows separator) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let rest = match trimmed {
        "~" => Some(""),
        _ => trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")),
    };
    match (rest, home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(trimmed),
    }
}

/// `<config_dir>/shadegen/<file_name>`, or the working directory when the
/// platform has no config directory.
pub fn config_file(file_name: &str) -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(file_name)
}

/// Log file used while the terminal UI owns the screen.
pub fn log_file() -> PathBuf {
    if let Ok(path) = std::env::var(LOG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }
    cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_prefix() {
        let Some(home) = home_dir() else { return };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde(" ~/a/b.json "), home.join("a/b.json"));
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn log_file_honors_override() {
        temp_env::with_var(LOG_PATH_ENV, Some("/tmp/shadegen-test.log"), || {
            assert_eq!(log_file(), PathBuf::from("/tmp/shadegen-test.log"));
        });
        temp_env::with_var(LOG_PATH_ENV, None::<&str>, || {
            assert!(log_file().ends_with("shadegen/shadegen.log"));
        });
    }
}
