pub mod error;
pub mod legal;
pub mod model;
pub mod play_baza;
pub mod play_hand;
pub mod schema;
pub mod testing;

pub use error::{EngineError, ProtocolError, ValidationError};
pub use legal::{legal_plays, LegalPlays, PlayError};
pub use model::Model;
pub use play_baza::{play_baza, PlayBazaInput, PlayBazaOutput};
pub use play_hand::{play_hand, PlayHandInput, PlayHandOutput};
pub use schema::{
    CantarInput, CantarOutput, ContrarInput, ContrarOutput, PlayInput, PlayOutput, Score,
};
