pub mod baza;
pub mod card;
pub mod card_set;
pub mod contrada;
pub mod deck;
pub mod history;
pub mod mode;
pub mod suit;
pub mod variant;

pub use baza::{winning_index, Baza, BazaError};
pub use card::{Card, CardError};
pub use card_set::{CardSet, CardSetDescription, CardSetError, SuitDescription};
pub use contrada::Contrada;
pub use deck::{Deck, DeckError, DECK_SIZE};
pub use history::{History, HistoryError, MAX_BAZAS};
pub use mode::GameMode;
pub use suit::Suit;
pub use variant::GameVariant;
