use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Oros,
    Bastos,
    Espadas,
    Copas,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Oros, Suit::Bastos, Suit::Espadas, Suit::Copas];

    pub fn to_char(self) -> char {
        match self {
            Suit::Oros => 'O',
            Suit::Bastos => 'B',
            Suit::Espadas => 'E',
            Suit::Copas => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'O' => Some(Suit::Oros),
            'B' => Some(Suit::Bastos),
            'E' => Some(Suit::Espadas),
            'C' => Some(Suit::Copas),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
