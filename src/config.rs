//! Table configuration: who sits down, how the deck is refreshed, and the RNG seed.

use std::fmt;
use std::str::FromStr;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 7;

/// When the deck is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DeckPolicy {
    /// Repopulate and reshuffle at the start of every round.
    #[default]
    Fresh,
    /// Shuffle once when the table opens and keep dealing from what is left.
    /// Later rounds can run out of cards.
    Deplete,
}

impl DeckPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            DeckPolicy::Fresh => "fresh",
            DeckPolicy::Deplete => "deplete",
        }
    }
}

impl fmt::Display for DeckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeckPolicy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fresh" => Ok(DeckPolicy::Fresh),
            "deplete" => Ok(DeckPolicy::Deplete),
            _ => Err(ConfigError::UnknownDeckPolicy(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("player count must be between 1 and 7, got {0}")]
    PlayerCount(usize),
    #[error("player {0} has a blank name")]
    BlankName(usize),
    #[error("unknown deck policy '{0}' (expected 'fresh' or 'deplete')")]
    UnknownDeckPolicy(String),
}

/// Validated table setup.
///
/// ```
/// use blackjack_rs::config::{DeckPolicy, TableConfig};
///
/// let cfg = TableConfig::new(["Ann", "Bo"]).unwrap().with_seed(7);
/// assert_eq!(cfg.player_names().len(), 2);
/// assert_eq!(cfg.deck_policy(), DeckPolicy::Fresh);
/// assert!(TableConfig::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    player_names: Vec<String>,
    seed: Option<u64>,
    deck_policy: DeckPolicy,
}

impl TableConfig {
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let player_names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_names.len()) {
            return Err(ConfigError::PlayerCount(player_names.len()));
        }
        if let Some(i) = player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::BlankName(i + 1));
        }
        Ok(Self { player_names, seed: None, deck_policy: DeckPolicy::default() })
    }

    /// Fix the shuffle seed for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_deck_policy(mut self, policy: DeckPolicy) -> Self {
        self.deck_policy = policy;
        self
    }

    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn deck_policy(&self) -> DeckPolicy {
        self.deck_policy
    }
}
