use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use shadegen_engine::{ExportFormat, HexColor, build_palette, export_palette, random_color, random_hex};
use shadegen_types::ClipboardOutcome;
use shadegen_util::{ClipboardWriter, ConfigOverrides, ShadegenConfig, SystemClipboard, UserPreferences, log_file};

/// Generate lighter and darker shades of a base color.
///
/// Without a subcommand, opens the interactive terminal UI.
#[derive(Parser, Debug)]
#[command(name = "shadegen", version, about)]
struct Cli {
    #[command(flatten)]
    palette: PaletteArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default, Clone)]
struct PaletteArgs {
    /// Base color; any text containing six hex digits (e.g. "#1c902f")
    #[arg(long, global = true)]
    color: Option<String>,

    /// Steps toward both white and black, counting the base tile
    #[arg(long, global = true, conflicts_with_all = ["light_steps", "dark_steps"])]
    steps: Option<u32>,

    /// Steps toward white, counting the base tile
    #[arg(long, global = true)]
    light_steps: Option<u32>,

    /// Steps toward black, counting the base tile
    #[arg(long, global = true)]
    dark_steps: Option<u32>,
}

impl PaletteArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_color: self.color.clone(),
            light_steps: self.light_steps.or(self.steps),
            dark_steps: self.dark_steps.or(self.steps),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print both shade rows for a color
    Palette {
        /// Base color; overrides --color
        color: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the canonical #RRGGBB form of a color
    Normalize {
        /// Text containing at least six hex digits
        raw: String,
    },
    /// Print a random color
    Random {
        /// Seed for a reproducible color
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Copy a color to the system clipboard
    Copy {
        /// Color to copy; normalized before copying
        color: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned rows for reading
    Text,
    /// The palette as JSON
    Json,
    /// CSS custom properties
    Css,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ExportFormat::Text,
            Format::Json => ExportFormat::Json,
            Format::Css => ExportFormat::Css,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());

    match cli.command {
        None => run_tui(&cli.palette).await,
        Some(Command::Palette { color, format }) => {
            let mut args = cli.palette.clone();
            if color.is_some() {
                args.color = color;
            }
            print_palette(&args, format)
        }
        Some(Command::Normalize { raw }) => {
            let hex: HexColor = raw.parse()?;
            println!("{hex}");
            Ok(())
        }
        Some(Command::Random { seed }) => {
            let hex = match seed {
                Some(seed) => random_hex(&mut StdRng::seed_from_u64(seed)),
                None => random_color(),
            };
            println!("{hex}");
            Ok(())
        }
        Some(Command::Copy { color }) => copy_color(&color),
    }
}

/// Logs go to stderr for one-shot commands and to a file while the TUI owns
/// the terminal.
fn init_tracing(log_to_file: bool) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    if log_to_file {
        // Without a log file the TUI runs silently; stderr would corrupt the screen.
        if let Some(file) = open_log_file() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_log_file() -> Option<File> {
    let path = log_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

fn load_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        tracing::warn!(%error, "preferences unavailable; using in-memory defaults");
        UserPreferences::ephemeral()
    })
}

fn resolve_config(preferences: &UserPreferences, args: &PaletteArgs) -> Result<ShadegenConfig> {
    let environment = ConfigOverrides::from_environment()?;
    let config = ShadegenConfig::resolve(&preferences.snapshot(), &environment, &args.overrides())?;
    Ok(config)
}

async fn run_tui(args: &PaletteArgs) -> Result<()> {
    let preferences = load_preferences();
    let config = resolve_config(&preferences, args)?;
    tracing::info!(base_color = %config.base_color, "starting terminal UI");
    shadegen_tui::run(config, &preferences).await
}

fn print_palette(args: &PaletteArgs, format: Format) -> Result<()> {
    let config = resolve_config(&load_preferences(), args)?;
    let palette = build_palette(config.base_color, &config.palette);
    let rendered = export_palette(&palette, format.into()).context("failed to render palette")?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}

fn copy_color(raw: &str) -> Result<()> {
    let hex: HexColor = raw.parse()?;
    let mut clipboard = SystemClipboard::new();
    match clipboard.write_text(&hex.to_string()) {
        ClipboardOutcome::Copied => {
            println!("{hex} copied to clipboard");
            Ok(())
        }
        ClipboardOutcome::Unavailable(reason) => bail!("clipboard access is unavailable on this system: {reason}"),
        ClipboardOutcome::Failed(reason) => bail!("copy failed: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use shadegen_util::{LIGHT_STEPS_ENV, PREFERENCES_PATH_ENV};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["shadegen", "--color", "336699", "--steps", "5"]).unwrap();
        assert!(cli.command.is_none());
        let overrides = cli.palette.overrides();
        assert_eq!(overrides.base_color.as_deref(), Some("336699"));
        assert_eq!(overrides.light_steps, Some(5));
        assert_eq!(overrides.dark_steps, Some(5));
    }

    #[test]
    fn steps_conflicts_with_per_direction_flags() {
        assert!(Cli::try_parse_from(["shadegen", "--steps", "5", "--light-steps", "4"]).is_err());
        let cli = Cli::try_parse_from(["shadegen", "--light-steps", "4", "--dark-steps", "6"]).unwrap();
        let overrides = cli.palette.overrides();
        assert_eq!((overrides.light_steps, overrides.dark_steps), (Some(4), Some(6)));
    }

    #[test]
    fn palette_subcommand_accepts_global_flags() {
        let cli = Cli::try_parse_from(["shadegen", "palette", "#abcdef", "--format", "css", "--steps", "3"]).unwrap();
        match cli.command {
            Some(Command::Palette { color, format }) => {
                assert_eq!(color.as_deref(), Some("#abcdef"));
                assert_eq!(format, Format::Css);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.palette.steps, Some(3));
    }

    #[test]
    fn config_layers_preferences_environment_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r##"{ "base_color": "#111111", "light_steps": 4, "dark_steps": 4 }"##).unwrap();

        temp_env::with_vars(
            [
                (PREFERENCES_PATH_ENV, Some(path.to_str().unwrap())),
                (LIGHT_STEPS_ENV, Some("6")),
            ],
            || {
                let args = PaletteArgs {
                    dark_steps: Some(8),
                    ..PaletteArgs::default()
                };
                let config = resolve_config(&load_preferences(), &args).unwrap();
                assert_eq!(config.base_color.to_string(), "#111111");
                assert_eq!(config.palette.light_steps(), 6);
                assert_eq!(config.palette.dark_steps(), 8);
            },
        );
    }

    #[test]
    fn invalid_flag_values_are_reported() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("/nonexistent/shadegen/preferences.json"), || {
            let args = PaletteArgs {
                steps: Some(1),
                ..PaletteArgs::default()
            };
            let err = resolve_config(&load_preferences(), &args).unwrap_err();
            assert_eq!(
                err.to_string(),
                "command line: lighter step count must be between 2 and 100, got 1"
            );
        });
    }
}
