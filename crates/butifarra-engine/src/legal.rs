use butifarra_core::{winning_index, Card, CardSet, GameMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("cannot choose a card from an empty hand")]
    EmptyHand,
    #[error("the current baza already has 4 cards")]
    BazaFull,
}

/// The outcome of the legality computation: the playable subset of the hand,
/// never empty. The play is forced exactly when one card is legal, in which
/// case the caller can skip the strategy altogether.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalPlays {
    cards: Vec<Card>,
    forced: bool,
}

impl LegalPlays {
    fn new(cards: Vec<Card>) -> Self {
        let forced = cards.len() == 1;
        Self { cards, forced }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn forced(&self) -> bool {
        self.forced
    }

    /// The single legal card when the play is forced.
    pub fn forced_card(&self) -> Option<Card> {
        if self.forced {
            self.cards.first().copied()
        } else {
            None
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Compute the subset of `hand` that may legally be played into the current
/// baza. `baza_cards` are the cards already on the table this baza, in play
/// order; the acting player sits `baza_cards.len()` seats after the leader.
///
/// The follow obligations in short: follow the led suit whenever possible,
/// beat the winning card when the other side holds the baza and the hand can,
/// triumph over it when void in the led suit, and discard freely otherwise.
/// A single card of the required suit leaves no choice at all, whether or not
/// it beats anything.
pub fn legal_plays(
    mode: GameMode,
    hand: &CardSet,
    baza_cards: &[Card],
) -> Result<LegalPlays, PlayError> {
    if hand.is_empty() {
        return Err(PlayError::EmptyHand);
    }
    if baza_cards.len() >= 4 {
        return Err(PlayError::BazaFull);
    }

    // A singleton hand leaves nothing to decide.
    if hand.len() == 1 {
        return Ok(LegalPlays::new(hand.cards().to_vec()));
    }

    // Opening lead: nothing to follow yet.
    let Some(first) = baza_cards.first() else {
        return Ok(LegalPlays::new(hand.cards().to_vec()));
    };

    let led = first.suit();
    let (t1, t2) = mode.ruling_suits(led);
    let win_index = winning_index(baza_cards, mode).unwrap_or(0);
    let winning_card = baza_cards[win_index];
    // Partners sit two seats apart, so the distance back to the winning card
    // decides which side currently holds the baza.
    let own_team_winning = (baza_cards.len() - win_index) % 2 == 0;

    let followable = hand.of_suit(led);
    if !followable.is_empty() {
        // A lone card of the led suit is forced regardless of what it beats,
        // and a winning partner lifts the obligation to beat.
        if followable.len() == 1 || own_team_winning {
            return Ok(LegalPlays::new(followable));
        }
        let beating: Vec<Card> = followable
            .iter()
            .copied()
            .filter(|c| c.dominates(winning_card, t1, t2))
            .collect();
        if beating.is_empty() {
            // Unable to beat, but following suit stays mandatory.
            return Ok(LegalPlays::new(followable));
        }
        return Ok(LegalPlays::new(beating));
    }

    // Void in the led suit: only a triumph obligation can restrict further,
    // and only while the other side holds the baza.
    let triumphs = match mode.triumph() {
        Some(triumph) if !own_team_winning => hand.of_suit(triumph),
        _ => return Ok(LegalPlays::new(hand.cards().to_vec())),
    };
    if triumphs.is_empty() {
        return Ok(LegalPlays::new(hand.cards().to_vec()));
    }
    if triumphs.len() == 1 {
        return Ok(LegalPlays::new(triumphs));
    }
    let over: Vec<Card> = triumphs
        .iter()
        .copied()
        .filter(|c| c.dominates(winning_card, t1, t2))
        .collect();
    if over.is_empty() {
        // Holding triumphs that cannot win obliges nothing further.
        return Ok(LegalPlays::new(hand.cards().to_vec()));
    }
    Ok(LegalPlays::new(over))
}
