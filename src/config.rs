//! Command-line configuration

use crate::engine::calculator::EngineConfig;
use crate::ui::theme::THEMES;
use clap::Parser;
use std::path::PathBuf;

const APP_DIR: &str = "rpntty";

#[derive(Debug, Parser)]
#[command(name = "rpntty", version, about = "Keypad-style RPN calculator for the terminal")]
pub struct Cli {
    /// Directory holding the saved memory queue, theme and log file
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Start with trigonometry in degrees instead of radians
    #[arg(long)]
    pub degrees: bool,

    /// Start with plain decimal display instead of scientific notation
    #[arg(long)]
    pub normal_display: bool,

    /// Keep the memory queue and theme in memory only
    #[arg(long)]
    pub ephemeral: bool,
}

impl Cli {
    /// Resolve the data directory: the flag, else the platform data dir
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            radians: !self.degrees,
            scientific: !self.normal_display,
            theme_count: THEMES.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rpntty"]);
        let config = cli.engine_config();
        assert!(config.radians);
        assert!(config.scientific);
        assert_eq!(config.theme_count, THEMES.len());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "rpntty",
            "--degrees",
            "--normal-display",
            "--data-dir",
            "/tmp/rpn",
        ]);
        let config = cli.engine_config();
        assert!(!config.radians);
        assert!(!config.scientific);
        assert_eq!(cli.data_dir(), Some(PathBuf::from("/tmp/rpn")));
    }
}
