use crate::hand::{MAX_HAND_SIZE, MIN_HAND_SIZE};
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("hand size must be between 1 and 10, got {0}")]
    HandSize(usize),
    #[error("max players must be between 1 and 4, got {0}")]
    MaxPlayers(usize),
    #[error("starting chips must be positive")]
    StartingChips,
    #[error("betting rounds must be at least 1")]
    BettingRounds,
    #[error("invalid config json: {0}")]
    Json(String),
}

/// Immutable table rules, validated at construction.
///
/// ```
/// use draw_poker::config::{ConfigError, GameConfig};
///
/// let cfg = GameConfig::new(5, 4, 1000, 2).unwrap();
/// assert_eq!(cfg.hand_size(), 5);
/// assert_eq!(GameConfig::new(0, 4, 1000, 2), Err(ConfigError::HandSize(0)));
/// assert_eq!(GameConfig::new(5, 5, 1000, 2), Err(ConfigError::MaxPlayers(5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    hand_size: usize,
    max_players: usize,
    starting_chips: u64,
    betting_rounds: u32,
}

/// Unchecked mirror used so deserialization goes through [`GameConfig::new`].
#[derive(Deserialize)]
struct RawConfig {
    hand_size: usize,
    max_players: usize,
    starting_chips: u64,
    betting_rounds: u32,
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.hand_size, raw.max_players, raw.starting_chips, raw.betting_rounds)
    }
}

impl GameConfig {
    pub fn new(
        hand_size: usize,
        max_players: usize,
        starting_chips: u64,
        betting_rounds: u32,
    ) -> Result<Self, ConfigError> {
        if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&hand_size) {
            return Err(ConfigError::HandSize(hand_size));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&max_players) {
            return Err(ConfigError::MaxPlayers(max_players));
        }
        if starting_chips == 0 {
            return Err(ConfigError::StartingChips);
        }
        if betting_rounds == 0 {
            return Err(ConfigError::BettingRounds);
        }
        Ok(Self { hand_size, max_players, starting_chips, betting_rounds })
    }

    /// Three-card hands, small stacks, one betting pass.
    pub const fn three_card() -> Self {
        Self { hand_size: 3, max_players: 4, starting_chips: 500, betting_rounds: 1 }
    }

    /// Seven-card hands, deep stacks.
    pub const fn seven_card() -> Self {
        Self { hand_size: 7, max_players: 4, starting_chips: 1500, betting_rounds: 3 }
    }

    pub const fn heads_up() -> Self {
        Self { hand_size: 5, max_players: 2, starting_chips: 1000, betting_rounds: 2 }
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Json(e.to_string()))
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    pub fn starting_chips(&self) -> u64 {
        self.starting_chips
    }

    /// Upper bound on betting passes within one betting phase.
    pub fn betting_rounds(&self) -> u32 {
        self.betting_rounds
    }

    pub fn is_valid_player_count(&self, n: usize) -> bool {
        (MIN_PLAYERS..=self.max_players).contains(&n)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { hand_size: 5, max_players: 4, starting_chips: 1000, betting_rounds: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_enforced() {
        assert_eq!(GameConfig::new(11, 4, 1000, 2), Err(ConfigError::HandSize(11)));
        assert_eq!(GameConfig::new(5, 0, 1000, 2), Err(ConfigError::MaxPlayers(0)));
        assert_eq!(GameConfig::new(5, 4, 0, 2), Err(ConfigError::StartingChips));
        assert_eq!(GameConfig::new(5, 4, 1000, 0), Err(ConfigError::BettingRounds));
        assert!(GameConfig::new(1, 1, 1, 1).is_ok());
        assert!(GameConfig::new(10, 4, 1, 1).is_ok());
    }

    #[test]
    fn presets_are_valid() {
        for cfg in [
            GameConfig::default(),
            GameConfig::three_card(),
            GameConfig::seven_card(),
            GameConfig::heads_up(),
        ] {
            let rebuilt = GameConfig::new(
                cfg.hand_size(),
                cfg.max_players(),
                cfg.starting_chips(),
                cfg.betting_rounds(),
            );
            assert_eq!(rebuilt, Ok(cfg));
        }
    }

    #[test]
    fn player_count_validation() {
        let cfg = GameConfig::heads_up();
        assert!(!cfg.is_valid_player_count(0));
        assert!(cfg.is_valid_player_count(2));
        assert!(!cfg.is_valid_player_count(3));
    }

    #[test]
    fn json_is_revalidated() {
        let ok = GameConfig::from_json(
            r#"{"hand_size":3,"max_players":4,"starting_chips":500,"betting_rounds":1}"#,
        );
        assert_eq!(ok, Ok(GameConfig::three_card()));
        let bad = GameConfig::from_json(
            r#"{"hand_size":0,"max_players":4,"starting_chips":500,"betting_rounds":1}"#,
        );
        assert!(matches!(bad, Err(ConfigError::Json(_))));
        let json = serde_json::to_string(&GameConfig::seven_card()).unwrap();
        assert_eq!(GameConfig::from_json(&json), Ok(GameConfig::seven_card()));
    }
}
