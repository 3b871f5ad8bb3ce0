//! Tempo cards.
//!
//! A card grants action points to each kind of pawn for one round. The
//! `fettered` flag is carried as data only; the rules engine does not read it.

use serde::{Deserialize, Serialize};

/// One tempo card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Action points for the king.
    pub ap_king: u8,
    /// Action points shared by the knights.
    pub ap_knight: u8,
    /// Whether the king's movement is fettered this round.
    pub fettered: bool,
    /// Action points shared by the population and assassins.
    pub ap_population: u8,
}

impl Card {
    #[must_use]
    pub const fn new(ap_king: u8, ap_knight: u8, fettered: bool, ap_population: u8) -> Self {
        Self {
            ap_king,
            ap_knight,
            fettered,
            ap_population,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "king {} / knights {} / population {}{}",
            self.ap_king,
            self.ap_knight,
            self.ap_population,
            if self.fettered { " (fettered)" } else { "" }
        )
    }
}

/// The fixed 15-card catalog, before shuffling.
pub const STANDARD_CATALOG: [Card; 15] = [
    Card::new(1, 6, true, 5),
    Card::new(1, 5, false, 4),
    Card::new(1, 6, true, 5),
    Card::new(1, 6, true, 5),
    Card::new(1, 5, true, 4),
    Card::new(1, 5, false, 4),
    Card::new(2, 7, false, 5),
    Card::new(2, 7, false, 4),
    Card::new(1, 6, true, 5),
    Card::new(1, 6, true, 5),
    Card::new(2, 7, false, 5),
    Card::new(2, 5, false, 4),
    Card::new(1, 5, true, 5),
    Card::new(1, 5, false, 4),
    Card::new(1, 5, false, 4),
];
