use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered cards of one session, every label present exactly twice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    labels: [Label; DECK_SIZE],
}

impl Deck {
    /// Unshuffled deck, labels in vocabulary order twice over.
    pub fn sorted() -> Self {
        Self {
            labels: core::array::from_fn(|index| Label::ALL[index % PAIR_COUNT]),
        }
    }

    pub fn from_labels(labels: [Label; DECK_SIZE]) -> Result<Self> {
        let mut counts = [0u8; PAIR_COUNT];
        for label in labels {
            counts[label.ordinal()] += 1;
        }

        if counts.iter().all(|&count| count == 2) {
            Ok(Self { labels })
        } else {
            Err(GameError::InvalidDeck)
        }
    }

    pub fn validate_position(&self, pos: Position) -> Result<Position> {
        if pos.to_index() < self.labels.len() {
            Ok(pos)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn label_at(&self, pos: Position) -> Result<Label> {
        let pos = self.validate_position(pos)?;
        Ok(self[pos])
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Label)> + '_ {
        positions().zip(self.labels.iter().copied())
    }
}

impl Index<Position> for Deck {
    type Output = Label;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.labels[pos.to_index()]
    }
}

pub trait DeckGenerator {
    fn generate(self) -> Deck;
}

/// Uniform random permutation of the sorted deck, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self) -> Deck {
        use rand::prelude::*;

        let mut deck = Deck::sorted();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        // Fisher-Yates
        deck.labels.shuffle(&mut rng);

        log::trace!("generated deck from seed {}", self.seed);
        deck
    }
}
