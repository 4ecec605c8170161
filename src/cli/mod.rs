//! Command-line interface.
//!
//! With no subcommand the binary launches the TUI; the subcommands inspect
//! the flow and manage the config file without touching the terminal.

mod common;
mod completions;

pub use common::*;

use crate::config::Config;
use crate::navigation::{ScreenId, TRANSITIONS};
use crate::utils::{get_config_path, get_log_dir};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::printdoc;

/// Walk through the Lulu CRM sign-in and onboarding screens in the terminal
#[derive(Parser, Debug)]
#[command(name = "lulu", version, about, long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Screen to open first (see `lulu screens`)
    #[arg(long, value_name = "SCREEN", default_value_t = ScreenId::Login)]
    pub start: ScreenId,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every screen transition
    Flow,
    /// List screen names accepted by --start
    Screens,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Shows the log file location
    Logs,
    /// Print shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Overwrite the config file with defaults
    Reset,
}

impl Cli {
    /// Run a subcommand. Returns `false` when the TUI should start instead.
    pub fn execute(&self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };
        match command {
            Commands::Flow => Self::cmd_flow(),
            Commands::Screens => Self::cmd_screens(),
            Commands::Config { command } => Self::cmd_config(command)?,
            Commands::Logs => Self::cmd_logs(),
            Commands::Completions { shell } => completions::generate(*shell)?,
        }
        Ok(true)
    }

    fn cmd_flow() {
        println!("{}", render_flow_table());
    }

    fn cmd_screens() {
        for id in ScreenId::ALL {
            let marker = if id.is_terminal() { " (terminal)" } else { "" };
            println!("  {:<22}{}{}", id.as_str(), id.title(), marker);
        }
    }

    fn cmd_config(command: &ConfigCommand) -> Result<()> {
        let config_path = get_config_path();
        match command {
            ConfigCommand::Path => println!("{}", config_path.display()),
            ConfigCommand::Show { json } => {
                let config = Config::load_or_create(&config_path)
                    .context("Failed to load configuration")?;
                let text = if *json {
                    serde_json::to_string_pretty(&config).context("Failed to serialize config")?
                } else {
                    toml::to_string_pretty(&config).context("Failed to serialize config")?
                };
                println!("{}", text);
            }
            ConfigCommand::Reset => {
                Config::default()
                    .save(&config_path)
                    .context("Failed to reset configuration")?;
                print_success(&format!("Reset {}", config_path.display()));
            }
        }
        Ok(())
    }

    fn cmd_logs() {
        let log_file = get_log_dir().join(LOG_FILE_NAME);
        printdoc! {"
            {}

            View logs in real-time: tail -f {}
            Raise verbosity with RUST_LOG=debug
            ",
            log_file.display(),
            log_file.display(),
        };
    }
}

/// Name of the log file inside [`get_log_dir`].
pub const LOG_FILE_NAME: &str = "lulu.log";

/// The transition table as aligned text, one edge per line.
pub fn render_flow_table() -> String {
    let mut out = format!(
        "{:<22}{:<28}{:<22}{}\n",
        "FROM", "TRIGGER", "TO", "CONTEXT"
    );
    for t in TRANSITIONS {
        out.push_str(&format!(
            "{:<22}{:<28}{:<22}{}\n",
            t.from.as_str(),
            t.trigger,
            t.to.as_str(),
            t.write
        ));
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_start_defaults_to_login() {
        let cli = Cli::try_parse_from(["lulu"]).unwrap();
        assert_eq!(cli.start, ScreenId::Login);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_start_accepts_screen_names() {
        let cli = Cli::try_parse_from(["lulu", "--start", "onboarding-usage"]).unwrap();
        assert_eq!(cli.start, ScreenId::OnboardingUsage);
        assert!(Cli::try_parse_from(["lulu", "--start", "nowhere"]).is_err());
    }

    #[test]
    fn test_config_show_json_flag() {
        let cli = Cli::try_parse_from(["lulu", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommand::Show { json: true }
            })
        ));
    }

    #[test]
    fn test_flow_table_lists_every_edge() {
        let table = render_flow_table();
        assert_eq!(table.lines().count(), TRANSITIONS.len() + 1);
        assert!(table.contains("recovery_email=<entered email>"));
        assert!(table
            .lines()
            .any(|l| l.starts_with("otp") && l.contains("onboarding-details")));
    }
}
