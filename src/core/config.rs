//! Match configuration.
//!
//! The observed game plays 12 rounds with a hand of 4 drawn from a
//! 15-card deck and allows one redraw per player before the first round.
//! Those values are the defaults; synthetic tests shrink them.

use serde::{Deserialize, Serialize};

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds played before the match finishes. The round counter starts
    /// here and counts down to 0.
    pub rounds: u32,

    /// Cards held in hand.
    pub hand_size: usize,

    /// Redraws each player may take while the first round is pending.
    pub redraw_quota: u32,

    /// Exact number of cards each submitted deck must contain.
    pub deck_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: 12,
            hand_size: 4,
            redraw_quota: 1,
            deck_size: 15,
        }
    }
}

impl MatchConfig {
    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the per-player redraw quota.
    #[must_use]
    pub fn with_redraw_quota(mut self, quota: u32) -> Self {
        self.redraw_quota = quota;
        self
    }

    /// Set the required deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.rounds, 12);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.redraw_quota, 1);
        assert_eq!(config.deck_size, 15);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_rounds(3)
            .with_hand_size(2)
            .with_redraw_quota(0)
            .with_deck_size(6);

        assert_eq!(config.rounds, 3);
        assert_eq!(config.hand_size, 2);
        assert_eq!(config.redraw_quota, 0);
        assert_eq!(config.deck_size, 6);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_rounds(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
