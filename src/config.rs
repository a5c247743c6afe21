use std::{fs, path::Path};

use serde::Deserialize;

use crate::{chips::MAX_BANKROLL, error::ConfigError};

fn default_bankroll() -> u64 {
    100
}

fn default_player_name() -> String {
    "Player".to_string()
}

/// House rules for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRules {
    pub starting_bankroll: u64,
    pub dealer_hits_soft_17: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        TableRules {
            starting_bankroll: default_bankroll(),
            dealer_hits_soft_17: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_bankroll")]
    pub starting_bankroll: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_player_name")]
    pub player_name: String,
    #[serde(default)]
    pub dealer_hits_soft_17: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            starting_bankroll: default_bankroll(),
            seed: None,
            player_name: default_player_name(),
            dealer_hits_soft_17: false,
        }
    }
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_bankroll == 0 {
            return Err(ConfigError::EmptyBankroll);
        }
        if self.starting_bankroll > MAX_BANKROLL {
            return Err(ConfigError::BankrollTooLarge {
                bankroll: self.starting_bankroll,
                max: MAX_BANKROLL,
            });
        }
        Ok(())
    }

    /// Trimmed player name, "Player" when blank.
    pub fn display_name(&self) -> String {
        match self.player_name.trim() {
            "" => default_player_name(),
            name => name.to_string(),
        }
    }

    pub fn rules(&self) -> TableRules {
        TableRules {
            starting_bankroll: self.starting_bankroll,
            dealer_hits_soft_17: self.dealer_hits_soft_17,
        }
    }
}
