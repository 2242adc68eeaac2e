//! Per-session score accumulator.

use serde::{Deserialize, Serialize};

/// Name used when none is given.
pub const DEFAULT_PLAYER_NAME: &str = "Guest";

/// One participant's running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    correct: u32,
}

impl Player {
    /// Create a player. A blank name becomes [`DEFAULT_PLAYER_NAME`].
    pub fn new(name: impl Into<String>) -> Self {
        let mut player = Self {
            name: String::new(),
            score: 0,
            correct: 0,
        };
        player.set_name(name);
        player
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.to_string()
        };
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn add_correct(&mut self) {
        self.correct = self.correct.saturating_add(1);
    }

    /// Zero the score and correct count. The name is kept.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.correct = 0;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_falls_back_to_guest() {
        assert_eq!(Player::new("").name(), "Guest");
        assert_eq!(Player::new("   ").name(), "Guest");
        assert_eq!(Player::default().name(), "Guest");
        assert_eq!(Player::new(" Ada ").name(), "Ada");
    }

    #[test]
    fn accumulates_and_resets() {
        let mut player = Player::new("Ada");
        player.add_points(2);
        player.add_correct();
        player.add_points(3);
        assert_eq!(player.score(), 5);
        assert_eq!(player.correct(), 1);

        player.reset();
        assert_eq!(player.score(), 0);
        assert_eq!(player.correct(), 0);
        assert_eq!(player.name(), "Ada");
    }

    #[test]
    fn score_saturates() {
        let mut player = Player::default();
        player.add_points(u32::MAX);
        player.add_points(1);
        assert_eq!(player.score(), u32::MAX);
    }
}
