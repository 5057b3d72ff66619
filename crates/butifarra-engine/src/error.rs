use crate::legal::PlayError;
use butifarra_core::{BazaError, Card, CardSetError, Contrada, GameVariant, HistoryError};
use thiserror::Error;

/// Construction-time failures of engine inputs: out-of-range fields, wrong
/// cardinalities, and cross-entity inconsistencies. Checked in a fixed order
/// and reported at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected a hand of exactly 12 cards, got {0}")]
    WrongHandSize(usize),
    #[error("seat {0} is outside 0..=3")]
    SeatOutOfRange(u8),
    #[error("a score of {0} is outside 0..=101")]
    ScoreOutOfRange(u8),
    #[error("contrada level {contrada:?} cannot be escalated by relative seat {player}")]
    UnreachableContrada { contrada: Contrada, player: u8 },
    #[error("a baza in progress holds at most 3 cards before the acting player, got {0}")]
    TooManyBazaCards(usize),
    #[error("card sets must all hold the same number of cards")]
    UnevenCardSets,
    #[error("the card {0} appears more than once across hands and history")]
    RepeatedCard(Card),
    #[error("{hand} cards in hand is inconsistent with {bazas} completed bazas")]
    CountMismatch { hand: usize, bazas: usize },
    #[error("seat {found} leads the current baza but seat {expected} should")]
    LeaderMismatch { expected: u8, found: u8 },
    #[error("expected exactly 12 completed bazas, got {0}")]
    IncompleteHistory(usize),
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// A strategy broke its contract. Always fatal to the hand in progress:
/// these indicate a buggy collaborator, not a recoverable game condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("a delegated cantar may not delegate again")]
    DelegatedRebid,
    #[error("the strategy for seat {seat} returned {card}, which is not a legal play")]
    IllegalCard { seat: u8, card: Card },
    #[error("the strategy for seat {seat} does not support the {variant} variant")]
    UnsupportedVariant { seat: u8, variant: GameVariant },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Play(#[from] PlayError),
    #[error(transparent)]
    Cards(#[from] CardSetError),
    #[error(transparent)]
    Baza(#[from] BazaError),
}
