//! The request/response shapes exchanged with strategies. Constructors run
//! an explicit, ordered validation pipeline and stop at the first failure.

use crate::error::ValidationError;
use crate::legal::{legal_plays, LegalPlays, PlayError};
use butifarra_core::{Card, CardSet, Contrada, GameMode, GameVariant, History, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The seat that actually chose the mode: the bidder, or their partner when
/// the choice was delegated.
pub(crate) fn effective_bidder(player_c: u8, delegated: bool) -> u8 {
    if delegated {
        (player_c + 2) % 4
    } else {
        player_c
    }
}

/// The first baza of a hand is led by the seat after the effective bidder.
pub(crate) fn first_leader(player_c: u8, delegated: bool) -> u8 {
    (effective_bidder(player_c, delegated) + 1) % 4
}

/// Running match score, carried through as opaque context for the
/// strategies. Matches are played to 101, so each side's total is capped
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    caller_side: u8,
    other_side: u8,
}

impl Score {
    pub fn new(caller_side: u8, other_side: u8) -> Result<Self, ValidationError> {
        for value in [caller_side, other_side] {
            if value > 101 {
                return Err(ValidationError::ScoreOutOfRange(value));
            }
        }
        Ok(Self {
            caller_side,
            other_side,
        })
    }

    pub fn caller_side(self) -> u8 {
        self.caller_side
    }

    pub fn other_side(self) -> u8 {
        self.other_side
    }
}

/// What a strategy sees when asked to cantar: its own 12 cards and whether
/// its partner delegated the choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantarInput {
    cards: CardSet,
    delegated: bool,
}

impl CantarInput {
    pub fn new(cards: CardSet, delegated: bool) -> Result<Self, ValidationError> {
        if cards.len() != 12 {
            return Err(ValidationError::WrongHandSize(cards.len()));
        }
        Ok(Self { cards, delegated })
    }

    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    pub fn delegated(&self) -> bool {
        self.delegated
    }
}

/// A strategy's cantar answer: fix the triumph, declare butifarra, or pass
/// the choice to the partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CantarOutput {
    Triumph(Suit),
    Butifarra,
    Delegate,
}

/// What a strategy sees when offered an escalation of the stakes. `player`
/// is the seat of the effective bidder relative to the asked strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrarInput {
    cards: CardSet,
    player: u8,
    delegated: bool,
    mode: GameMode,
    score: Score,
    contrada: Contrada,
}

impl ContrarInput {
    pub fn new(
        cards: CardSet,
        player: u8,
        delegated: bool,
        mode: GameMode,
        score: Score,
        contrada: Contrada,
    ) -> Result<Self, ValidationError> {
        if cards.len() != 12 {
            return Err(ValidationError::WrongHandSize(cards.len()));
        }
        if player > 3 {
            return Err(ValidationError::SeatOutOfRange(player));
        }
        // The top level cannot be escalated, even levels belong to the
        // defending side (odd relative seats) and the odd level to the
        // bidding side.
        let bidding_side = player % 2 == 0;
        let escalated_by_bidders = contrada.idx() % 2 == 1;
        if contrada.is_max() || bidding_side != escalated_by_bidders {
            return Err(ValidationError::UnreachableContrada { contrada, player });
        }
        Ok(Self {
            cards,
            player,
            delegated,
            mode,
            score,
            contrada,
        })
    }

    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    pub fn player(&self) -> u8 {
        self.player
    }

    pub fn delegated(&self) -> bool {
        self.delegated
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn contrada(&self) -> Contrada {
        self.contrada
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrarOutput {
    pub contrar: bool,
}

/// Everything a strategy sees when asked for a card: the completed bazas,
/// its remaining hand, the cards already on the table this baza, and the
/// fixed context of the hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayInput {
    history: History,
    card_set: CardSet,
    cards: Vec<Card>,
    mode: GameMode,
    player_number: u8,
    player_c: u8,
    delegated: bool,
    game_variant: GameVariant,
    contrada: Contrada,
}

impl PlayInput {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        history: History,
        card_set: CardSet,
        cards: Vec<Card>,
        mode: GameMode,
        player_number: u8,
        player_c: u8,
        delegated: bool,
        game_variant: GameVariant,
        contrada: Contrada,
    ) -> Result<Self, ValidationError> {
        for seat in [player_number, player_c] {
            if seat > 3 {
                return Err(ValidationError::SeatOutOfRange(seat));
            }
        }
        if cards.len() > 3 {
            return Err(ValidationError::TooManyBazaCards(cards.len()));
        }
        if card_set.len() + history.len() != 12 {
            return Err(ValidationError::CountMismatch {
                hand: card_set.len(),
                bazas: history.len(),
            });
        }

        let mut seen = HashSet::new();
        for card in history.cards().chain(card_set.iter()).chain(cards.iter()) {
            if !seen.insert(*card) {
                return Err(ValidationError::RepeatedCard(*card));
            }
        }

        let opening_leader = first_leader(player_c, delegated);
        let last_winner = history.check_chain(mode, opening_leader)?;
        let expected_leader = last_winner.unwrap_or(opening_leader);
        let current_leader = (player_number + 4 - cards.len() as u8) % 4;
        if current_leader != expected_leader {
            return Err(ValidationError::LeaderMismatch {
                expected: expected_leader,
                found: current_leader,
            });
        }

        Ok(Self {
            history,
            card_set,
            cards,
            mode,
            player_number,
            player_c,
            delegated,
            game_variant,
            contrada,
        })
    }

    /// The legal subset of the hand for this play, recomputed on demand so a
    /// strategy can only ever pick from what the rules allow.
    pub fn legal_plays(&self) -> Result<LegalPlays, PlayError> {
        legal_plays(self.mode, &self.card_set, &self.cards)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn card_set(&self) -> &CardSet {
        &self.card_set
    }

    /// Cards already on the table this baza, in play order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player_number(&self) -> u8 {
        self.player_number
    }

    pub fn player_c(&self) -> u8 {
        self.player_c
    }

    pub fn delegated(&self) -> bool {
        self.delegated
    }

    pub fn game_variant(&self) -> GameVariant {
        self.game_variant
    }

    pub fn contrada(&self) -> Contrada {
        self.contrada
    }
}

/// The card a strategy chose, and whether it considered the play forced.
/// The engine recomputes both and trusts neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutput {
    pub card: Card,
    pub was_forced: bool,
}
