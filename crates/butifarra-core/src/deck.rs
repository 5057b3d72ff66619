use crate::card::Card;
use crate::card_set::{CardSet, CardSetError};
use crate::suit::Suit;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DECK_SIZE: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("dealing requires a full deck of {DECK_SIZE} cards, got {0}")]
    NotFull(usize),
    #[error(transparent)]
    CardSet(#[from] CardSetError),
}

/// The 48-card deck, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full ordered deck: every number 1..=12 of every suit.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for number in 1..=12 {
                cards.push(Card::new_unchecked(number, suit));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The top card of the deck, if any.
    pub fn pop(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// The top `n` cards of the deck, fewer if it runs out.
    pub fn pop_some(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal the full deck the butifarra way: three rounds of four cards to
    /// each of the four seats.
    pub fn deal(mut self) -> Result<[CardSet; 4], DeckError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DeckError::NotFull(self.cards.len()));
        }
        let mut sets = [
            CardSet::empty(),
            CardSet::empty(),
            CardSet::empty(),
            CardSet::empty(),
        ];
        for _ in 0..3 {
            for set in sets.iter_mut() {
                set.add_all(self.pop_some(4))?;
            }
        }
        Ok(sets)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_has_48_distinct_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        let distinct: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(distinct.len(), DECK_SIZE);
    }

    #[test]
    fn test_pop_comes_from_the_front() {
        let mut deck = Deck::new();
        let first = deck.cards()[0];
        assert_eq!(deck.pop(), Some(first));
        assert_eq!(deck.len(), DECK_SIZE - 1);

        let next_three = deck.cards()[..3].to_vec();
        assert_eq!(deck.pop_some(3), next_three);
    }

    #[test]
    fn test_shuffle_preserves_the_cards() {
        let mut deck = Deck::new();
        let before: HashSet<_> = deck.cards().iter().copied().collect();
        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);
        let after: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(before, after);
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_produces_four_hands_of_twelve() {
        let sets = Deck::new().deal().unwrap();
        let mut seen = HashSet::new();
        for set in &sets {
            assert_eq!(set.len(), 12);
            for card in set {
                assert!(seen.insert(*card));
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_requires_a_full_deck() {
        let mut deck = Deck::new();
        deck.pop();
        assert_eq!(deck.deal(), Err(DeckError::NotFull(DECK_SIZE - 1)));
    }

    #[test]
    fn test_deal_goes_around_in_packets_of_four() {
        let sets = Deck::new().deal().unwrap();
        let deck = Deck::new();
        // Seat 1's first packet is cards 4..8 of the unshuffled deck.
        assert_eq!(&sets[1].cards()[..4], &deck.cards()[4..8]);
        // Seat 0's second packet starts at card 16.
        assert_eq!(&sets[0].cards()[4..8], &deck.cards()[16..20]);
    }
}
