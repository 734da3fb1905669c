use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub label: Label,
    pub face_up: bool,
}

/// Everything a presentation layer needs to draw one frame of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub cards: Vec<CardView>,
    pub score: Score,
    pub countdown: u8,
    pub peeking: bool,
    pub game_started: bool,
    pub won: bool,
}

impl BoardView {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let cards = engine
            .deck()
            .iter()
            .map(|(pos, label)| CardView {
                label,
                face_up: engine.is_face_up(pos),
            })
            .collect();

        Self {
            cards,
            score: engine.score(),
            countdown: engine.countdown(),
            peeking: engine.is_peeking(),
            game_started: engine.is_started(),
            won: engine.is_won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_up_follows_flipped_and_solved() {
        let mut engine = PlayEngine::new(Deck::sorted(), GameConfig::new(0, 1000, 20));
        engine.start();
        engine.flip(0).unwrap();
        engine.flip(8).unwrap();
        let check = engine
            .take_timer_commands()
            .into_iter()
            .find_map(|command| match command {
                TimerCommand::Schedule(request) => Some(request.token),
                _ => None,
            })
            .unwrap();
        engine.fire_timer(check);
        engine.flip(1).unwrap();

        let view = BoardView::from_engine(&engine);

        assert_eq!(view.cards.len(), DECK_SIZE);
        let face_up: Vec<usize> = view
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.face_up)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(face_up, [0, 1, 8]);
        assert_eq!(view.score, 20);
        assert!(view.game_started);
        assert!(!view.won);
    }

    #[test]
    fn peek_shows_every_card() {
        let mut engine = PlayEngine::new(Deck::sorted(), GameConfig::default());
        engine.start();

        let view = BoardView::from_engine(&engine);

        assert!(view.peeking);
        assert_eq!(view.countdown, 5);
        assert!(view.cards.iter().all(|card| card.face_up));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let engine = PlayEngine::new(Deck::sorted(), GameConfig::default());
        let json = serde_json::to_value(BoardView::from_engine(&engine)).unwrap();

        assert_eq!(json["cards"][0]["label"], "cat");
        assert_eq!(json["cards"][0]["faceUp"], false);
        assert_eq!(json["gameStarted"], false);
        assert_eq!(json["won"], false);
        assert_eq!(json["score"], 0);
    }
}
