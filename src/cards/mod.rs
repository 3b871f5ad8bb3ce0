//! Tempo cards and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Per-round action point allowance
//! - `STANDARD_CATALOG`: The fixed 15-card catalog
//! - `Deck`: Shuffled remaining cards, consumed from the top

pub mod card;
pub mod deck;

pub use card::{Card, STANDARD_CATALOG};
pub use deck::Deck;
