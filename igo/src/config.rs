use serde::{Deserialize, Serialize};

use crate::error::GoError;

pub const MIN_SIZE: u8 = 1;
pub const MAX_SIZE: u8 = 25;

/// Board sizes offered when a new game is set up.
pub const STANDARD_SIZES: [u8; 3] = [9, 13, 19];

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: u8,
}

impl GameConfig {
    pub fn new(size: u8) -> Result<Self, GoError> {
        let config = GameConfig { size };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if (MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(GoError::InvalidSize(self.size))
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { size: 19 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_board() {
        assert_eq!(GameConfig::default().size, 19);
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn standard_sizes_are_valid() {
        for size in STANDARD_SIZES {
            assert!(GameConfig::new(size).is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        assert_eq!(GameConfig::new(0), Err(GoError::InvalidSize(0)));
        assert_eq!(GameConfig::new(26), Err(GoError::InvalidSize(26)));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());

        let config: GameConfig = serde_json::from_str(r#"{"size": 9}"#).unwrap();
        assert_eq!(config.size, 9);
    }
}
