use serde::{Deserialize, Serialize};
use std::fmt;

/// The two forced-follow variants of the game. LIBRE leaves discards free
/// whenever beating is impossible; OBLIGADA keeps the stricter follow
/// obligations. Strategies declare which variants they know how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    Libre,
    Obligada,
}

impl GameVariant {
    pub const ALL: [GameVariant; 2] = [GameVariant::Libre, GameVariant::Obligada];
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameVariant::Libre => write!(f, "LIBRE"),
            GameVariant::Obligada => write!(f, "OBLIGADA"),
        }
    }
}
