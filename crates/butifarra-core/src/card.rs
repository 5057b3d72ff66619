use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card number {0} is outside 1..=12")]
    NumberOutOfRange(u8),
    #[error("cannot parse {0:?} as a card")]
    Parse(String),
}

/// A single card of the 48-card Spanish deck: a number from 1 to 12 and a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    number: u8,
    suit: Suit,
}

impl Card {
    pub fn new(number: u8, suit: Suit) -> Result<Self, CardError> {
        if !(1..=12).contains(&number) {
            return Err(CardError::NumberOutOfRange(number));
        }
        Ok(Self { number, suit })
    }

    /// For callers that already know `number` is in range.
    pub(crate) const fn new_unchecked(number: u8, suit: Suit) -> Self {
        Self { number, suit }
    }

    pub fn number(self) -> u8 {
        self.number
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Points this card is worth to the side that wins it:
    /// 9 → 5, 1 → 4, 12 → 3, 11 → 2, 10 → 1, anything else 0.
    pub fn points(self) -> u8 {
        match self.number {
            9 => 5,
            1 => 4,
            12 => 3,
            11 => 2,
            10 => 1,
            _ => 0,
        }
    }

    /// Whether this card beats `other` under ruling suits `t1` and optionally
    /// `t2`, where `t1` rules over `t2`. Ties resolve in favor of `self`, so
    /// a left-to-right fold never displaces an equal incumbent.
    ///
    /// When neither card is of a ruling suit the two are not in contest and
    /// the result is trivially `true`; callers resolving a baza must first
    /// check that the challenger actually competes.
    pub fn dominates(self, other: Card, t1: Suit, t2: Option<Suit>) -> bool {
        if !self.is_ruling(t1, t2) && !other.is_ruling(t1, t2) {
            return true;
        }

        let mut v1 = u32::from(self.number) + 100 * u32::from(self.points());
        let mut v2 = u32::from(other.number) + 100 * u32::from(other.points());

        if self.suit == t1 {
            v1 += 10_000;
        } else if Some(self.suit) == t2 {
            v1 += 1_000;
        }
        if other.suit == t1 {
            v2 += 10_000;
        } else if Some(other.suit) == t2 {
            v2 += 1_000;
        }

        v1 >= v2
    }

    fn is_ruling(self, t1: Suit, t2: Option<Suit>) -> bool {
        self.suit == t1 || Some(self.suit) == t2
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_char)
            .ok_or_else(|| CardError::Parse(s.to_string()))?;
        let number: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| CardError::Parse(s.to_string()))?;
        Card::new(number, suit)
    }
}
