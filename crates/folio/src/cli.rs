use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about)]
#[command(long_about = "A single-page portfolio viewer with an embedded slide deck.\n\n\
    Content is a YAML or JSON document; without one the built-in portfolio is shown.\n\n\
    Examples:\n  \
    folio                        Open the built-in portfolio\n  \
    folio me.yaml                Open your own document\n  \
    folio me.yaml --slide 3      Open with the deck on slide 3\n  \
    folio content > me.yaml      Start a document from the built-in one")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Portfolio document (.yaml, .yml or .json)
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch fullscreen instead of in a window
    #[arg(long, global = false)]
    pub fullscreen: bool,

    /// Open the deck on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Color theme
    #[arg(long, value_enum, global = false)]
    pub theme: Option<ThemeName>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the built-in portfolio document
    Content,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.start_slide)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Cli {
    /// Log filter implied by `-v`/`-q`, or `None` to defer to `RUST_LOG`.
    pub fn log_filter(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Content) => {
                crate::commands::content::run();
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => {
                if let Some(file) = &self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                }
                crate::app::run(crate::app::LaunchOptions {
                    file: self.file,
                    fullscreen: self.fullscreen,
                    slide: self.slide,
                    theme: self.theme.map(ThemeName::as_str),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_launch_flags() {
        let cli = Cli::try_parse_from(["folio", "me.yaml", "--slide", "4", "--theme", "dark"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("me.yaml")));
        assert_eq!(cli.slide, Some(4));
        assert!(matches!(cli.theme, Some(ThemeName::Dark)));
        assert!(!cli.fullscreen);
    }

    #[test]
    fn test_log_filter() {
        let cli = Cli::try_parse_from(["folio", "-vv"]).unwrap();
        assert_eq!(cli.log_filter(), Some("trace"));
        let cli = Cli::try_parse_from(["folio", "-q", "-v"]).unwrap();
        assert_eq!(cli.log_filter(), Some("error"));
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert_eq!(cli.log_filter(), None);
    }

    #[test]
    fn test_config_set_subcommand() {
        let cli =
            Cli::try_parse_from(["folio", "config", "set", "defaults.theme", "dark"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "defaults.theme");
                assert_eq!(value, "dark");
            }
            _ => panic!("Expected config set"),
        }
    }
}
