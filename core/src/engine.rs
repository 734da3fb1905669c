use alloc::collections::BTreeSet;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    NotStarted,
    Peeking,
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Positions turned face-up and waiting to be compared, in click order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlippedPair {
    None,
    One(Position),
    Two(Position, Position),
}

impl FlippedPair {
    pub const fn len(self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::None)
    }

    pub fn contains(self, pos: Position) -> bool {
        self.iter().any(|flipped| flipped == pos)
    }

    pub fn iter(self) -> impl Iterator<Item = Position> {
        let (first, second) = match self {
            Self::None => (None, None),
            Self::One(a) => (Some(a), None),
            Self::Two(a, b) => (Some(a), Some(b)),
        };
        first.into_iter().chain(second)
    }
}

impl Default for FlippedPair {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    config: GameConfig,
    deck: Deck,
    flipped: FlippedPair,
    solved: BTreeSet<Position>,
    score: Saturating<Score>,
    countdown: u8,
    peeking: bool,
    started: bool,
    epoch: u32,
    #[serde(skip)]
    timer_commands: TimerCommands,
}

impl PlayEngine {
    pub fn new(deck: Deck, config: GameConfig) -> Self {
        Self {
            config,
            deck,
            flipped: FlippedPair::None,
            solved: BTreeSet::new(),
            score: Saturating(0),
            countdown: config.peek_secs,
            peeking: false,
            started: false,
            epoch: 0,
            timer_commands: TimerCommands::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        if !self.started {
            EngineState::NotStarted
        } else if self.is_won() {
            EngineState::Won
        } else if self.peeking {
            EngineState::Peeking
        } else {
            EngineState::Playing
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn flipped(&self) -> FlippedPair {
        self.flipped
    }

    pub fn solved(&self) -> &BTreeSet<Position> {
        &self.solved
    }

    pub fn is_solved(&self, pos: Position) -> bool {
        self.solved.contains(&pos)
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    pub fn is_peeking(&self) -> bool {
        self.peeking
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_won(&self) -> bool {
        self.solved.len() == self.deck.len()
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Whether the card at `pos` currently shows its label.
    pub fn is_face_up(&self, pos: Position) -> bool {
        self.peeking || self.flipped.contains(pos) || self.is_solved(pos)
    }

    pub fn can_flip_at(&self, pos: Position) -> bool {
        self.started
            && !self.is_won()
            && self.flipped.len() < 2
            && !self.flipped.contains(pos)
            && !self.is_solved(pos)
    }

    /// Drains the timer commands queued by previous transitions, oldest first.
    pub fn take_timer_commands(&mut self) -> TimerCommands {
        core::mem::take(&mut self.timer_commands)
    }

    pub fn start(&mut self) -> StartOutcome {
        if self.started {
            return StartOutcome::NoChange;
        }

        self.supersede_session();
        self.started = true;
        self.countdown = self.config.peek_secs;

        if self.config.peek_secs == 0 {
            log::debug!("game started without peek window");
            self.peeking = false;
            return StartOutcome::Playing;
        }

        self.peeking = true;
        let peek_end = TimerRequest::once(self.token(TimerKind::PeekEnd), self.config.peek_ms());
        let tick = TimerRequest::every(self.token(TimerKind::CountdownTick), TICK_MS);
        self.timer_commands.push(TimerCommand::Schedule(peek_end));
        self.timer_commands.push(TimerCommand::Schedule(tick));

        log::debug!("game started, peeking for {}s", self.config.peek_secs);
        StartOutcome::Peeking
    }

    pub fn flip(&mut self, pos: Position) -> Result<FlipOutcome> {
        let pos = self
            .deck
            .validate_position(pos)
            .inspect_err(|_| log::warn!("flip outside the deck: {}", pos))?;

        if !self.can_flip_at(pos) {
            log::trace!("flip ignored at {}", pos);
            return Ok(FlipOutcome::NoChange);
        }

        Ok(match self.flipped {
            FlippedPair::None => {
                self.flipped = FlippedPair::One(pos);
                FlipOutcome::Flipped
            }
            FlippedPair::One(first) => {
                self.flipped = FlippedPair::Two(first, pos);
                let check =
                    TimerRequest::once(self.token(TimerKind::PairCheck), self.config.match_delay_ms);
                self.timer_commands.push(TimerCommand::Schedule(check));
                FlipOutcome::PairPending
            }
            FlippedPair::Two(..) => FlipOutcome::NoChange,
        })
    }

    pub fn fire_timer(&mut self, token: TimerToken) -> TimerOutcome {
        if token.epoch != self.epoch {
            log::trace!("stale timer {:?}, current epoch {}", token, self.epoch);
            return TimerOutcome::Stale;
        }

        match token.kind {
            TimerKind::PeekEnd => self.end_peek(),
            TimerKind::CountdownTick => self.tick_countdown(),
            TimerKind::PairCheck => self.evaluate_pair(),
        }
    }

    /// Starts over on `deck`, dropping everything scheduled by the old session.
    pub fn reset(&mut self, deck: Deck) {
        self.supersede_session();
        self.deck = deck;
        self.flipped = FlippedPair::None;
        self.solved.clear();
        self.score = Saturating(0);
        self.countdown = self.config.peek_secs;
        self.peeking = false;
        self.started = false;
        log::debug!("game reset, epoch {}", self.epoch);
    }

    fn supersede_session(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.timer_commands.clear();
        self.timer_commands.push(TimerCommand::CancelAll);
    }

    fn token(&self, kind: TimerKind) -> TimerToken {
        TimerToken {
            kind,
            epoch: self.epoch,
        }
    }

    fn end_peek(&mut self) -> TimerOutcome {
        if !self.peeking {
            return TimerOutcome::NoChange;
        }

        self.peeking = false;
        self.countdown = self.config.peek_secs;
        self.timer_commands
            .push(TimerCommand::Cancel(TimerKind::CountdownTick));
        log::debug!("peek window over");
        TimerOutcome::PeekEnded
    }

    fn tick_countdown(&mut self) -> TimerOutcome {
        if !self.peeking {
            return TimerOutcome::NoChange;
        }

        self.countdown = self.countdown.saturating_sub(1);
        TimerOutcome::CountdownTicked
    }

    fn evaluate_pair(&mut self) -> TimerOutcome {
        let FlippedPair::Two(first, second) = self.flipped else {
            return TimerOutcome::NoChange;
        };
        self.flipped = FlippedPair::None;

        if self.deck[first] != self.deck[second] {
            log::trace!("mismatch at {} and {}", first, second);
            return TimerOutcome::Mismatched;
        }

        self.solved.insert(first);
        self.solved.insert(second);
        self.score += self.config.match_reward;
        log::debug!("matched {} at {} and {}", self.deck[first], first, second);

        if self.is_won() {
            log::debug!("all pairs solved, score {}", self.score.0);
            TimerOutcome::Won
        } else {
            TimerOutcome::Matched
        }
    }
}
