use crate::error::{EngineError, ProtocolError, ValidationError};
use crate::model::Model;
use crate::play_baza::{play_baza, PlayBazaInput};
use crate::schema::{effective_bidder, first_leader, CantarInput, CantarOutput, ContrarInput, Score};
use butifarra_core::{CardSet, Contrada, GameMode, GameVariant, History};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Everything needed to play one hand from the cantar phase to the last
/// baza: four 12-card hands covering the whole deck, the running match
/// score, the bidding seat, and the variant in force at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayHandInput {
    card_sets: [CardSet; 4],
    score: Score,
    player_c: u8,
    game_variant: GameVariant,
}

impl PlayHandInput {
    pub fn new(
        card_sets: [CardSet; 4],
        score: Score,
        player_c: u8,
        game_variant: GameVariant,
    ) -> Result<Self, ValidationError> {
        if player_c > 3 {
            return Err(ValidationError::SeatOutOfRange(player_c));
        }
        for set in &card_sets {
            if set.len() != 12 {
                return Err(ValidationError::WrongHandSize(set.len()));
            }
        }
        let mut seen = HashSet::new();
        for card in card_sets.iter().flat_map(|c| c.iter()) {
            if !seen.insert(*card) {
                return Err(ValidationError::RepeatedCard(*card));
            }
        }
        Ok(Self {
            card_sets,
            score,
            player_c,
            game_variant,
        })
    }

    pub fn card_sets(&self) -> &[CardSet; 4] {
        &self.card_sets
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn player_c(&self) -> u8 {
        self.player_c
    }

    pub fn game_variant(&self) -> GameVariant {
        self.game_variant
    }
}

/// The finished hand: exactly twelve completed bazas, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayHandOutput {
    history: History,
}

impl PlayHandOutput {
    pub fn new(history: History) -> Result<Self, ValidationError> {
        if !history.is_full() {
            return Err(ValidationError::IncompleteHistory(history.len()));
        }
        Ok(Self { history })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }
}

/// Drive a full hand: resolve the cantar (honoring one delegation at most),
/// settle the contrada level, then play twelve bazas with each winner
/// leading the next. The assembled history is rechecked before it is handed
/// out.
pub fn play_hand(
    input: &PlayHandInput,
    players: &mut [&mut dyn Model; 4],
) -> Result<PlayHandOutput, EngineError> {
    for seat in 0..4u8 {
        if !players[seat as usize].supports(input.game_variant) {
            return Err(ProtocolError::UnsupportedVariant {
                seat,
                variant: input.game_variant,
            }
            .into());
        }
    }

    let (mode, delegated) = resolve_mode(input, players)?;
    debug!(%mode, delegated, "cantar resolved");

    let contrada = settle_contrada(input, players, mode, delegated)?;
    debug!(level = ?contrada, "contrada settled");

    let mut card_sets = input.card_sets.clone();
    let mut history = History::empty();
    let mut leader = first_leader(input.player_c, delegated);
    for _ in 0..12 {
        let baza_input = PlayBazaInput::new(
            history.clone(),
            card_sets.clone(),
            leader,
            mode,
            input.player_c,
            delegated,
            input.game_variant,
            contrada,
        )?;
        let output = play_baza(&baza_input, players)?;
        let baza = output.baza;

        for (turn, card) in baza.cards().iter().enumerate() {
            let seat = (baza.initial_player() + turn as u8) % 4;
            card_sets[seat as usize].remove(*card)?;
        }
        leader = baza.winner(mode)?;
        history.add(baza).map_err(ValidationError::History)?;
    }

    // Defensive recheck before the history becomes immutable output.
    history
        .check_chain(mode, first_leader(input.player_c, delegated))
        .map_err(ValidationError::History)?;
    Ok(PlayHandOutput::new(history)?)
}

fn resolve_mode(
    input: &PlayHandInput,
    players: &mut [&mut dyn Model; 4],
) -> Result<(GameMode, bool), EngineError> {
    let bidder = input.player_c;
    let cantar_input = CantarInput::new(input.card_sets[bidder as usize].clone(), false)?;
    match players[bidder as usize].cantar(&cantar_input) {
        CantarOutput::Triumph(suit) => Ok((GameMode::Triumph(suit), false)),
        CantarOutput::Butifarra => Ok((GameMode::Butifarra, false)),
        CantarOutput::Delegate => {
            let partner = (bidder + 2) % 4;
            let cantar_input = CantarInput::new(input.card_sets[partner as usize].clone(), true)?;
            match players[partner as usize].cantar(&cantar_input) {
                CantarOutput::Triumph(suit) => Ok((GameMode::Triumph(suit), true)),
                CantarOutput::Butifarra => Ok((GameMode::Butifarra, true)),
                CantarOutput::Delegate => Err(ProtocolError::DelegatedRebid.into()),
            }
        }
    }
}

/// Offer escalations until a side declines or the top level is reached:
/// even levels to the opponent left of the bidder, the odd level back to
/// the effective bidder.
fn settle_contrada(
    input: &PlayHandInput,
    players: &mut [&mut dyn Model; 4],
    mode: GameMode,
    delegated: bool,
) -> Result<Contrada, EngineError> {
    let defender = (input.player_c + 1) % 4;
    let bidder = effective_bidder(input.player_c, delegated);
    let mut contrada = Contrada::Normal;
    loop {
        let Some(next) = contrada.next() else {
            break;
        };
        let (asked, relative) = if contrada.idx() % 2 == 0 {
            (defender, if delegated { 1 } else { 3 })
        } else {
            (bidder, 0)
        };
        let contrar_input = ContrarInput::new(
            input.card_sets[asked as usize].clone(),
            relative,
            delegated,
            mode,
            input.score,
            contrada,
        )?;
        if !players[asked as usize].contrar(&contrar_input).contrar {
            break;
        }
        contrada = next;
    }
    Ok(contrada)
}
