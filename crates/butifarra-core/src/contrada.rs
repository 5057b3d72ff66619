use serde::{Deserialize, Serialize};

/// The stake multiplier levels of a hand. Each escalation doubles the
/// points at stake, and the levels are totally ordered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Contrada {
    #[default]
    Normal,
    Contrada,
    Recontrada,
    SantVicentada,
}

impl Contrada {
    pub const ALL: [Contrada; 4] = [
        Contrada::Normal,
        Contrada::Contrada,
        Contrada::Recontrada,
        Contrada::SantVicentada,
    ];

    pub fn idx(self) -> usize {
        match self {
            Contrada::Normal => 0,
            Contrada::Contrada => 1,
            Contrada::Recontrada => 2,
            Contrada::SantVicentada => 3,
        }
    }

    pub fn multiplier(self) -> u8 {
        match self {
            Contrada::Normal => 1,
            Contrada::Contrada => 2,
            Contrada::Recontrada => 4,
            Contrada::SantVicentada => 8,
        }
    }

    /// The next escalation step, or `None` at the top level.
    pub fn next(self) -> Option<Contrada> {
        match self {
            Contrada::Normal => Some(Contrada::Contrada),
            Contrada::Contrada => Some(Contrada::Recontrada),
            Contrada::Recontrada => Some(Contrada::SantVicentada),
            Contrada::SantVicentada => None,
        }
    }

    pub fn is_max(self) -> bool {
        matches!(self, Contrada::SantVicentada)
    }
}
