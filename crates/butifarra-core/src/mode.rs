use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ruling mode fixed by the cantar phase: either a triumph suit rules
/// every baza of the hand, or the hand is played butifarra with no triumph
/// at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Triumph(Suit),
    Butifarra,
}

impl GameMode {
    pub fn triumph(self) -> Option<Suit> {
        match self {
            GameMode::Triumph(suit) => Some(suit),
            GameMode::Butifarra => None,
        }
    }

    pub fn is_butifarra(self) -> bool {
        matches!(self, GameMode::Butifarra)
    }

    /// The primary and secondary ruling suits of a baza led in `led`.
    /// Butifarra: the led suit rules alone. Triumph: the triumph rules
    /// outright and the led suit still beats plain discards.
    pub fn ruling_suits(self, led: Suit) -> (Suit, Option<Suit>) {
        match self {
            GameMode::Butifarra => (led, None),
            GameMode::Triumph(triumph) => (triumph, Some(led)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Triumph(suit) => write!(f, "triumph {suit}"),
            GameMode::Butifarra => write!(f, "butifarra"),
        }
    }
}
