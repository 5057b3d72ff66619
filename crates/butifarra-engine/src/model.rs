use crate::schema::{
    CantarInput, CantarOutput, ContrarInput, ContrarOutput, PlayInput, PlayOutput,
};
use butifarra_core::GameVariant;

/// A decision-making strategy for one seat.
///
/// The engine computes what is legal; an implementation only chooses among
/// the offered moves. Whatever it returns is re-checked against the legal
/// set, and a card outside it aborts the hand as a protocol violation.
pub trait Model {
    /// Choose the mode for this hand, or delegate the choice to the partner.
    /// A delegated call must not delegate again.
    fn cantar(&mut self, input: &CantarInput) -> CantarOutput;

    /// Decide whether to escalate the stakes one level.
    fn contrar(&mut self, input: &ContrarInput) -> ContrarOutput;

    /// Choose a card among `input.legal_plays()`. Never consulted when the
    /// play is forced.
    fn play(&mut self, input: &PlayInput) -> PlayOutput;

    /// Which forced-follow variants this strategy knows how to play. The
    /// orchestrators check this up front for all four seats and refuse to
    /// start a hand in an unsupported variant.
    fn supports(&self, variant: GameVariant) -> bool {
        let _ = variant;
        true
    }
}
