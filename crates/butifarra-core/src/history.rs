use crate::baza::{Baza, BazaError};
use crate::card::Card;
use crate::mode::GameMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_BAZAS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("baza {0} is incomplete")]
    IncompleteBaza(usize),
    #[error("the card {0} appears more than once in the history")]
    RepeatedCard(Card),
    #[error("a history holds at most {MAX_BAZAS} bazas")]
    TooManyBazas,
    #[error("the first baza was led by seat {found}, expected seat {expected}")]
    FirstLeaderMismatch { expected: u8, found: u8 },
    #[error("baza {index} was led by seat {found} but the previous baza was won by seat {expected}")]
    BrokenChain { index: usize, expected: u8, found: u8 },
    #[error(transparent)]
    Baza(#[from] BazaError),
}

/// The completed bazas of one hand, in play order. Only complete bazas are
/// accepted and no card can appear twice anywhere in the history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    bazas: Vec<Baza>,
}

impl History {
    pub fn new(bazas: Vec<Baza>) -> Result<Self, HistoryError> {
        let mut history = Self::empty();
        for baza in bazas {
            history.add(baza)?;
        }
        Ok(history)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add(&mut self, baza: Baza) -> Result<(), HistoryError> {
        if !baza.is_complete() {
            return Err(HistoryError::IncompleteBaza(self.bazas.len()));
        }
        if self.bazas.len() == MAX_BAZAS {
            return Err(HistoryError::TooManyBazas);
        }
        for card in baza.cards() {
            if self.bazas.iter().any(|b| b.cards().contains(card)) {
                return Err(HistoryError::RepeatedCard(*card));
            }
        }
        self.bazas.push(baza);
        Ok(())
    }

    pub fn bazas(&self) -> &[Baza] {
        &self.bazas
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Baza> {
        self.bazas.iter()
    }

    /// Every card played so far, in play order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.bazas.iter().flat_map(|b| b.cards().iter())
    }

    pub fn len(&self) -> usize {
        self.bazas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bazas.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bazas.len() == MAX_BAZAS
    }

    /// Verify the winner chain under `mode`: the first baza must be led by
    /// `first_leader` and every later baza by the winner of the previous
    /// one. Returns the winner of the last baza, or `None` when empty.
    pub fn check_chain(
        &self,
        mode: GameMode,
        first_leader: u8,
    ) -> Result<Option<u8>, HistoryError> {
        let mut previous_winner: Option<u8> = None;
        for (index, baza) in self.bazas.iter().enumerate() {
            let expected = previous_winner.unwrap_or(first_leader);
            let found = baza.initial_player();
            if found != expected {
                return Err(match index {
                    0 => HistoryError::FirstLeaderMismatch { expected, found },
                    _ => HistoryError::BrokenChain {
                        index,
                        expected,
                        found,
                    },
                });
            }
            previous_winner = Some(baza.winner(mode)?);
        }
        Ok(previous_winner)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Baza;
    type IntoIter = std::slice::Iter<'a, Baza>;

    fn into_iter(self) -> Self::IntoIter {
        self.bazas.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suit::Suit;

    fn card(number: u8, suit: Suit) -> Card {
        Card::new(number, suit).unwrap()
    }

    fn baza(initial_player: u8, suit: Suit, numbers: [u8; 4]) -> Baza {
        Baza::new(initial_player, numbers.iter().map(|&n| card(n, suit)).collect()).unwrap()
    }

    #[test]
    fn test_incomplete_bazas_are_rejected() {
        let short = Baza::new(0, vec![card(1, Suit::Oros)]).unwrap();
        assert_eq!(
            History::new(vec![short]),
            Err(HistoryError::IncompleteBaza(0))
        );
    }

    #[test]
    fn test_repeated_cards_across_bazas_are_rejected() {
        let result = History::new(vec![
            baza(0, Suit::Oros, [1, 2, 3, 4]),
            baza(1, Suit::Oros, [4, 5, 6, 7]),
        ]);
        assert_eq!(result, Err(HistoryError::RepeatedCard(card(4, Suit::Oros))));
    }

    #[test]
    fn test_capacity_is_twelve_bazas() {
        let mut history = History::empty();
        for (i, suit) in Suit::ALL.iter().enumerate() {
            for (j, numbers) in [[9, 1, 12, 11], [10, 8, 7, 6], [5, 4, 3, 2]].iter().enumerate() {
                history
                    .add(baza(((i * 3 + j) % 4) as u8, *suit, *numbers))
                    .unwrap();
            }
        }
        assert!(history.is_full());

        let extra = baza(0, Suit::Oros, [1, 2, 3, 4]);
        assert_eq!(history.add(extra), Err(HistoryError::TooManyBazas));
    }

    #[test]
    fn test_check_chain_follows_winners() {
        // Butifarra: 5O wins the first baza from seat (1 + 3) % 4 = 0, 10O the
        // second from seat 3.
        let history = History::new(vec![
            baza(1, Suit::Oros, [2, 3, 4, 5]),
            baza(0, Suit::Oros, [6, 7, 8, 10]),
        ])
        .unwrap();
        assert_eq!(
            history.check_chain(GameMode::Butifarra, 1).unwrap(),
            Some(3)
        );
    }

    #[test]
    fn test_check_chain_rejects_wrong_first_leader() {
        let history = History::new(vec![baza(1, Suit::Oros, [2, 3, 4, 5])]).unwrap();
        assert_eq!(
            history.check_chain(GameMode::Butifarra, 2),
            Err(HistoryError::FirstLeaderMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_check_chain_rejects_broken_link() {
        let history = History::new(vec![
            baza(1, Suit::Oros, [2, 3, 4, 5]),
            baza(3, Suit::Oros, [6, 7, 8, 10]),
        ])
        .unwrap();
        assert_eq!(
            history.check_chain(GameMode::Butifarra, 1),
            Err(HistoryError::BrokenChain {
                index: 1,
                expected: 0,
                found: 3
            })
        );
    }
}
