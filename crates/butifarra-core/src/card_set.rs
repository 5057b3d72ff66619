use crate::card::Card;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardSetError {
    #[error("the card {0} is already in the set")]
    DuplicateCard(Card),
    #[error("the card {0} is not in the set")]
    NotFound(Card),
    #[error("at least one of the number and suit filters must be set")]
    InvalidQuery,
}

/// An ordered, duplicate-free collection of cards: a player's hand, a deal,
/// or any other pile the rules reason about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    pub fn new(cards: Vec<Card>) -> Result<Self, CardSetError> {
        let mut set = Self {
            cards: Vec::with_capacity(cards.len()),
        };
        set.add_all(cards)?;
        Ok(set)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) -> Result<(), CardSetError> {
        if self.cards.contains(&card) {
            return Err(CardSetError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) -> Result<(), CardSetError> {
        for card in cards {
            self.add(card)?;
        }
        Ok(())
    }

    pub fn remove(&mut self, card: Card) -> Result<(), CardSetError> {
        match self.cards.iter().position(|&c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                Ok(())
            }
            None => Err(CardSetError::NotFound(card)),
        }
    }

    pub fn remove_all(
        &mut self,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<(), CardSetError> {
        for card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Total points held in the set, regardless of card count.
    pub fn points(&self) -> u8 {
        self.cards.iter().map(|c| c.points()).sum()
    }

    /// Per-suit count and points tally.
    pub fn describe(&self) -> CardSetDescription {
        let mut desc = CardSetDescription::default();
        for card in &self.cards {
            let entry = &mut desc[card.suit()];
            entry.number += 1;
            entry.points += card.points();
        }
        desc
    }

    /// Cards matching the given filters, in set order. At least one filter
    /// must be present.
    pub fn get(&self, number: Option<u8>, suit: Option<Suit>) -> Result<Vec<Card>, CardSetError> {
        if number.is_none() && suit.is_none() {
            return Err(CardSetError::InvalidQuery);
        }
        Ok(self
            .cards
            .iter()
            .copied()
            .filter(|c| number.map_or(true, |n| c.number() == n))
            .filter(|c| suit.map_or(true, |s| c.suit() == s))
            .collect())
    }

    /// All cards of `suit`, in set order.
    pub fn of_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.suit() == suit)
            .collect()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Count and points of one suit within a card set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitDescription {
    pub number: usize,
    pub points: u8,
}

/// Per-suit breakdown of a card set, indexable by [`Suit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSetDescription {
    pub oros: SuitDescription,
    pub bastos: SuitDescription,
    pub espadas: SuitDescription,
    pub copas: SuitDescription,
}

impl Index<Suit> for CardSetDescription {
    type Output = SuitDescription;

    fn index(&self, suit: Suit) -> &SuitDescription {
        match suit {
            Suit::Oros => &self.oros,
            Suit::Bastos => &self.bastos,
            Suit::Espadas => &self.espadas,
            Suit::Copas => &self.copas,
        }
    }
}

impl IndexMut<Suit> for CardSetDescription {
    fn index_mut(&mut self, suit: Suit) -> &mut SuitDescription {
        match suit {
            Suit::Oros => &mut self.oros,
            Suit::Bastos => &mut self.bastos,
            Suit::Espadas => &mut self.espadas,
            Suit::Copas => &mut self.copas,
        }
    }
}
