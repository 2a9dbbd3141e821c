//! Shell-side helpers: configuration layering, preference storage,
//! filesystem locations and clipboard access.

pub mod clipboard;
pub mod config;
pub mod paths;
pub mod preferences;

pub use clipboard::{ClipboardWriter, MemoryClipboard, SystemClipboard};
pub use config::{
    BASE_COLOR_ENV, ConfigError, ConfigOverrides, ConfigSource, DARK_STEPS_ENV, LIGHT_STEPS_ENV, ShadegenConfig,
};
pub use paths::{APP_DIR_NAME, LOG_PATH_ENV, config_file, expand_tilde, log_file};
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
