use serde::{Deserialize, Serialize};

use crate::PAIR_COUNT;

/// Symbolic identity of a card, shared by exactly two positions of a deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Cat,
    Croc,
    Dog,
    Elephant,
    Fox,
    Monkey,
    Owl,
    Zebra,
}

impl Label {
    pub const ALL: [Label; PAIR_COUNT] = [
        Label::Cat,
        Label::Croc,
        Label::Dog,
        Label::Elephant,
        Label::Fox,
        Label::Monkey,
        Label::Owl,
        Label::Zebra,
    ];

    /// Key used to look up the card's image.
    pub const fn name(self) -> &'static str {
        use Label::*;
        match self {
            Cat => "cat",
            Croc => "croc",
            Dog => "dog",
            Elephant => "elephant",
            Fox => "fox",
            Monkey => "monkey",
            Owl => "owl",
            Zebra => "zebra",
        }
    }

    pub(crate) const fn ordinal(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for Label {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_vocabulary_order() {
        for (index, label) in Label::ALL.into_iter().enumerate() {
            assert_eq!(label.ordinal(), index);
        }
    }

    #[test]
    fn serialized_label_matches_asset_key() {
        let json = serde_json::to_string(&Label::Elephant).unwrap();
        assert_eq!(json, "\"elephant\"");
        assert_eq!(Label::Elephant.name(), "elephant");
    }
}
