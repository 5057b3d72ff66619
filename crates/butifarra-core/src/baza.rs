use crate::card::Card;
use crate::mode::GameMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BazaError {
    #[error("seat {0} is outside 0..=3")]
    SeatOutOfRange(u8),
    #[error("a baza holds at most 4 cards")]
    Full,
    #[error("the card {0} is already in this baza")]
    DuplicateCard(Card),
    #[error("an empty baza has no winner")]
    Empty,
}

/// One round of play: the seat that led and the cards in play order, one per
/// consecutive seat. Complete at 4 cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baza {
    initial_player: u8,
    cards: Vec<Card>,
}

impl Baza {
    pub fn new(initial_player: u8, cards: Vec<Card>) -> Result<Self, BazaError> {
        if initial_player > 3 {
            return Err(BazaError::SeatOutOfRange(initial_player));
        }
        let mut baza = Self {
            initial_player,
            cards: Vec::with_capacity(4),
        };
        for card in cards {
            baza.add(card)?;
        }
        Ok(baza)
    }

    pub fn add(&mut self, card: Card) -> Result<(), BazaError> {
        if self.cards.len() == 4 {
            return Err(BazaError::Full);
        }
        if self.cards.contains(&card) {
            return Err(BazaError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn initial_player(&self) -> u8 {
        self.initial_player
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == 4
    }

    /// Index (in play order) of the card currently winning this baza.
    pub fn winner_index(&self, mode: GameMode) -> Result<usize, BazaError> {
        winning_index(&self.cards, mode).ok_or(BazaError::Empty)
    }

    /// Seat currently winning this baza.
    pub fn winner(&self, mode: GameMode) -> Result<u8, BazaError> {
        let index = self.winner_index(mode)? as u8;
        Ok((self.initial_player + index) % 4)
    }
}

/// Index of the winning card among `cards` in play order, under `mode`. The
/// first card fixes the led suit; a later card takes over only if it is of a
/// ruling suit and dominates the incumbent. `None` on an empty slice.
pub fn winning_index(cards: &[Card], mode: GameMode) -> Option<usize> {
    let first = cards.first()?;
    let (t1, t2) = mode.ruling_suits(first.suit());
    let mut win = 0;
    for (i, card) in cards.iter().enumerate().skip(1) {
        let competing = card.suit() == t1 || Some(card.suit()) == t2;
        if competing && card.dominates(cards[win], t1, t2) {
            win = i;
        }
    }
    Some(win)
}
