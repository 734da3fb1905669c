/// Slot index into the deck, distinct from the label it holds.
pub type Position = u8;

/// Count type used for score and reward values.
pub type Score = u32;

/// Number of distinct labels in a deck.
pub const PAIR_COUNT: usize = 8;

/// Number of cards in a deck, every label appears twice.
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Milliseconds between two countdown ticks.
pub const TICK_MS: u32 = 1000;

pub trait ToIndex {
    fn to_index(self) -> usize;
}

impl ToIndex for Position {
    fn to_index(self) -> usize {
        self.into()
    }
}

/// Iterates every position of a full deck in order.
pub fn positions() -> impl Iterator<Item = Position> {
    (0..DECK_SIZE).map(|index| index as Position)
}
