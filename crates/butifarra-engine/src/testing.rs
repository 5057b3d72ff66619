//! Scripted strategies for exercising the engine without any real
//! decision-making.

use crate::model::Model;
use crate::schema::{
    CantarInput, CantarOutput, ContrarInput, ContrarOutput, PlayInput, PlayOutput,
};
use butifarra_core::{Card, Contrada};

/// A strategy that replays a fixed card list cyclically, answers cantar
/// with a configured decision, and escalates the stakes up to a configured
/// level. It never looks at its inputs, so scripts must stay within the
/// legal moves of the hand being driven.
#[derive(Debug, Clone)]
pub struct TestModel {
    card_list: Vec<Card>,
    next: usize,
    cantar: Option<CantarOutput>,
    contrada_level: Contrada,
}

impl TestModel {
    pub fn new(card_list: Vec<Card>) -> Self {
        Self {
            card_list,
            next: 0,
            cantar: None,
            contrada_level: Contrada::Normal,
        }
    }

    pub fn with_cantar(mut self, decision: CantarOutput) -> Self {
        self.cantar = Some(decision);
        self
    }

    pub fn with_contrada_level(mut self, level: Contrada) -> Self {
        self.contrada_level = level;
        self
    }

    pub fn card_list(&self) -> &[Card] {
        &self.card_list
    }
}

impl Model for TestModel {
    fn cantar(&mut self, _input: &CantarInput) -> CantarOutput {
        self.cantar.unwrap_or(CantarOutput::Delegate)
    }

    fn contrar(&mut self, input: &ContrarInput) -> ContrarOutput {
        ContrarOutput {
            contrar: input.contrada() < self.contrada_level,
        }
    }

    /// Panics if the card list is empty.
    fn play(&mut self, _input: &PlayInput) -> PlayOutput {
        let card = self.card_list[self.next];
        self.next = (self.next + 1) % self.card_list.len();
        PlayOutput {
            card,
            was_forced: false,
        }
    }
}
