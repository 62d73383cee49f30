use std::path::Path;

use anyhow::Context;
use sapper_core::{CellCount, Coord, GameConfig};
use serde::Deserialize;

/// Board settings that may come from a TOML file or from command-line flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, clap::Args)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Number of rows on the board
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Number of columns on the board
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Number of mines to place
    #[arg(long)]
    pub mines: Option<CellCount>,
}

impl ConfigOverrides {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid config file")
    }

    fn apply(self, config: GameConfig) -> GameConfig {
        GameConfig::new_unchecked(
            self.rows.unwrap_or(config.rows),
            self.cols.unwrap_or(config.cols),
            self.mines.unwrap_or(config.mines),
        )
    }
}

/// Flags win over the config file, which wins over the built-in defaults.
pub fn resolve(file: Option<&Path>, flags: ConfigOverrides) -> anyhow::Result<GameConfig> {
    let mut config = GameConfig::default();

    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        config = ConfigOverrides::from_toml(&text)
            .with_context(|| format!("in {}", path.display()))?
            .apply(config);
        log::debug!("config after {}: {:?}", path.display(), config);
    }

    let config = flags.apply(config);
    config.validate().context("invalid game configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_classic_board() {
        let config = resolve(None, ConfigOverrides::default()).unwrap();

        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let file = ConfigOverrides::from_toml("mines = 40\n").unwrap();

        assert_eq!(file.apply(GameConfig::default()), GameConfig::new_unchecked(20, 24, 40));
    }

    #[test]
    fn flags_override_file_values() {
        let file = ConfigOverrides::from_toml("rows = 9\ncols = 9\nmines = 10\n").unwrap();
        let flags = ConfigOverrides {
            mines: Some(12),
            ..Default::default()
        };

        let config = flags.apply(file.apply(GameConfig::default()));

        assert_eq!(config, GameConfig::new_unchecked(9, 9, 12));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigOverrides::from_toml("difficulty = \"hard\"\n").is_err());
    }

    #[test]
    fn overcrowded_board_is_rejected() {
        let flags = ConfigOverrides {
            rows: Some(3),
            cols: Some(3),
            mines: Some(9),
        };

        assert!(resolve(None, flags).is_err());
    }
}
