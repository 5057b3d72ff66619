use crate::error::{EngineError, ProtocolError, ValidationError};
use crate::legal::legal_plays;
use crate::model::Model;
use crate::schema::{first_leader, PlayInput};
use butifarra_core::{Baza, CardSet, Contrada, GameMode, GameVariant, History};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// The full, validated context needed to play one baza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayBazaInput {
    history: History,
    card_sets: [CardSet; 4],
    initial_player: u8,
    mode: GameMode,
    player_c: u8,
    delegated: bool,
    game_variant: GameVariant,
    contrada: Contrada,
}

impl PlayBazaInput {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        history: History,
        card_sets: [CardSet; 4],
        initial_player: u8,
        mode: GameMode,
        player_c: u8,
        delegated: bool,
        game_variant: GameVariant,
        contrada: Contrada,
    ) -> Result<Self, ValidationError> {
        for seat in [initial_player, player_c] {
            if seat > 3 {
                return Err(ValidationError::SeatOutOfRange(seat));
            }
        }
        if card_sets.iter().any(|c| c.len() != card_sets[0].len()) {
            return Err(ValidationError::UnevenCardSets);
        }
        if card_sets[0].len() + history.len() != 12 {
            return Err(ValidationError::CountMismatch {
                hand: card_sets[0].len(),
                bazas: history.len(),
            });
        }

        let mut seen = HashSet::new();
        let all_cards = history
            .cards()
            .chain(card_sets.iter().flat_map(|c| c.iter()));
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(ValidationError::RepeatedCard(*card));
            }
        }

        let opening_leader = first_leader(player_c, delegated);
        let last_winner = history.check_chain(mode, opening_leader)?;
        let expected = last_winner.unwrap_or(opening_leader);
        if initial_player != expected {
            return Err(ValidationError::LeaderMismatch {
                expected,
                found: initial_player,
            });
        }

        Ok(Self {
            history,
            card_sets,
            initial_player,
            mode,
            player_c,
            delegated,
            game_variant,
            contrada,
        })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn card_sets(&self) -> &[CardSet; 4] {
        &self.card_sets
    }

    pub fn initial_player(&self) -> u8 {
        self.initial_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayBazaOutput {
    pub baza: Baza,
}

/// Drive one baza: each seat in turn is offered its legal plays, forced
/// cards are taken without consulting the strategy, and every returned card
/// is checked against the legal set before it joins the baza.
pub fn play_baza(
    input: &PlayBazaInput,
    players: &mut [&mut dyn Model; 4],
) -> Result<PlayBazaOutput, EngineError> {
    for seat in 0..4u8 {
        if !players[seat as usize].supports(input.game_variant) {
            return Err(ProtocolError::UnsupportedVariant {
                seat,
                variant: input.game_variant,
            }
            .into());
        }
    }

    let mut baza = Baza::new(input.initial_player, Vec::new())?;
    for turn in 0..4u8 {
        let seat = (input.initial_player + turn) % 4;
        let hand = &input.card_sets[seat as usize];
        let legal = legal_plays(input.mode, hand, baza.cards())?;

        let card = match legal.forced_card() {
            Some(card) => {
                trace!(seat, card = %card, "forced play");
                card
            }
            None => {
                let play_input = PlayInput::new(
                    input.history.clone(),
                    hand.clone(),
                    baza.cards().to_vec(),
                    input.mode,
                    seat,
                    input.player_c,
                    input.delegated,
                    input.game_variant,
                    input.contrada,
                )?;
                let output = players[seat as usize].play(&play_input);
                if !legal.contains(output.card) {
                    return Err(ProtocolError::IllegalCard {
                        seat,
                        card: output.card,
                    }
                    .into());
                }
                output.card
            }
        };
        baza.add(card)?;
    }

    let winner = baza.winner(input.mode)?;
    debug!(leader = input.initial_player, winner, "baza resolved");
    Ok(PlayBazaOutput { baza })
}
