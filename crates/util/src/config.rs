//! Layered configuration for the shade generator.
//!
//! Values resolve from lowest to highest precedence:
//! built-in defaults, the preferences file, `SHADEGEN_*` environment
//! variables, then command-line flags. Each rejected value reports the layer
//! it came from.

use std::env;
use std::fmt;

use shadegen_engine::{
    DEFAULT_COLOR, DEFAULT_STEPS, Direction, HexColor, InvalidColorInput, InvalidStepCount, PaletteConfig,
};
use thiserror::Error;

use crate::preferences::PreferencesPayload;

/// Environment variable for the start color.
pub const BASE_COLOR_ENV: &str = "SHADEGEN_BASE_COLOR";
/// Environment variable for the number of lighter steps.
pub const LIGHT_STEPS_ENV: &str = "SHADEGEN_LIGHT_STEPS";
/// Environment variable for the number of darker steps.
pub const DARK_STEPS_ENV: &str = "SHADEGEN_DARK_STEPS";

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    Preferences,
    Environment,
    CommandLine,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigSource::Defaults => "defaults",
            ConfigSource::Preferences => "preferences file",
            ConfigSource::Environment => "environment",
            ConfigSource::CommandLine => "command line",
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{origin}: {source}")]
    InvalidColor {
        origin: ConfigSource,
        #[source]
        source: InvalidColorInput,
    },
    #[error("{origin}: {source}")]
    InvalidSteps {
        origin: ConfigSource,
        #[source]
        source: InvalidStepCount,
    },
    #[error("{origin}: {key} must be a whole number, got {value:?}")]
    NotANumber {
        origin: ConfigSource,
        key: &'static str,
        value: String,
    },
}

/// Raw values supplied by one layer. Colors stay unparsed until resolution so
/// errors can name their origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_color: Option<String>,
    pub light_steps: Option<u32>,
    pub dark_steps: Option<u32>,
}

impl ConfigOverrides {
    /// Reads the `SHADEGEN_*` variables from the process environment.
    pub fn from_environment() -> Result<Self, ConfigError> {
        Ok(Self {
            base_color: read_var(BASE_COLOR_ENV),
            light_steps: read_steps_var(LIGHT_STEPS_ENV)?,
            dark_steps: read_steps_var(DARK_STEPS_ENV)?,
        })
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadegenConfig {
    pub base_color: HexColor,
    pub palette: PaletteConfig,
}

impl Default for ShadegenConfig {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_COLOR,
            palette: PaletteConfig::default(),
        }
    }
}

impl ShadegenConfig {
    /// Merges the layers in precedence order.
    pub fn resolve(
        preferences: &PreferencesPayload,
        environment: &ConfigOverrides,
        command_line: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut base_color = (DEFAULT_COLOR, ConfigSource::Defaults);
        let mut light_steps = (DEFAULT_STEPS, ConfigSource::Defaults);
        let mut dark_steps = (DEFAULT_STEPS, ConfigSource::Defaults);

        if let Some(color) = preferences.base_color {
            base_color = (color, ConfigSource::Preferences);
        }
        if let Some(steps) = preferences.light_steps {
            light_steps = (steps, ConfigSource::Preferences);
        }
        if let Some(steps) = preferences.dark_steps {
            dark_steps = (steps, ConfigSource::Preferences);
        }

        for (layer, origin) in [
            (environment, ConfigSource::Environment),
            (command_line, ConfigSource::CommandLine),
        ] {
            if let Some(raw) = layer.base_color.as_deref() {
                let color = raw
                    .parse::<HexColor>()
                    .map_err(|source| ConfigError::InvalidColor { origin, source })?;
                base_color = (color, origin);
            }
            if let Some(steps) = layer.light_steps {
                light_steps = (steps, origin);
            }
            if let Some(steps) = layer.dark_steps {
                dark_steps = (steps, origin);
            }
        }

        let palette = PaletteConfig::new(light_steps.0, dark_steps.0).map_err(|source| {
            let origin = match source.direction {
                Direction::Lighter => light_steps.1,
                Direction::Darker => dark_steps.1,
            };
            ConfigError::InvalidSteps { origin, source }
        })?;

        tracing::debug!(
            base_color = %base_color.0,
            base_color_source = %base_color.1,
            light_steps = palette.light_steps(),
            dark_steps = palette.dark_steps(),
            "resolved configuration"
        );
        Ok(Self {
            base_color: base_color.0,
            palette,
        })
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn read_steps_var(key: &'static str) -> Result<Option<u32>, ConfigError> {
    read_var(key)
        .map(|value| {
            value.parse::<u32>().map_err(|_| ConfigError::NotANumber {
                origin: ConfigSource::Environment,
                key,
                value,
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(color: Option<&str>, light: Option<u32>, dark: Option<u32>) -> ConfigOverrides {
        ConfigOverrides {
            base_color: color.map(str::to_string),
            light_steps: light,
            dark_steps: dark,
        }
    }

    #[test]
    fn defaults_apply_when_no_layer_sets_values() {
        let config =
            ShadegenConfig::resolve(&PreferencesPayload::default(), &ConfigOverrides::default(), &ConfigOverrides::default())
                .unwrap();
        assert_eq!(config, ShadegenConfig::default());
        assert_eq!(config.base_color.to_string(), "#1C902F");
    }

    #[test]
    fn later_layers_win() {
        let preferences = PreferencesPayload {
            base_color: Some("#111111".parse().unwrap()),
            light_steps: Some(4),
            dark_steps: Some(4),
        };
        let environment = overrides(Some("222222"), Some(6), None);
        let command_line = overrides(None, None, Some(8));

        let config = ShadegenConfig::resolve(&preferences, &environment, &command_line).unwrap();
        assert_eq!(config.base_color.to_string(), "#222222");
        assert_eq!(config.palette.light_steps(), 6);
        assert_eq!(config.palette.dark_steps(), 8);
    }

    #[test]
    fn errors_name_their_layer() {
        let err = ShadegenConfig::resolve(
            &PreferencesPayload::default(),
            &overrides(Some("nope"), None, None),
            &ConfigOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { origin: ConfigSource::Environment, .. }));

        let err = ShadegenConfig::resolve(
            &PreferencesPayload::default(),
            &ConfigOverrides::default(),
            &overrides(None, None, Some(1)),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSteps { origin: ConfigSource::CommandLine, .. }));
        assert_eq!(err.to_string(), "command line: darker step count must be between 2 and 100, got 1");
    }

    #[test]
    fn environment_is_read_and_validated() {
        temp_env::with_vars(
            [
                (BASE_COLOR_ENV, Some(" #abcdef ")),
                (LIGHT_STEPS_ENV, Some("5")),
                (DARK_STEPS_ENV, None),
            ],
            || {
                let env = ConfigOverrides::from_environment().unwrap();
                assert_eq!(env, overrides(Some("#abcdef"), Some(5), None));
            },
        );

        temp_env::with_var(DARK_STEPS_ENV, Some("ten"), || {
            let err = ConfigOverrides::from_environment().unwrap_err();
            assert_eq!(err.to_string(), "environment: SHADEGEN_DARK_STEPS must be a whole number, got \"ten\"");
        });
    }
}
