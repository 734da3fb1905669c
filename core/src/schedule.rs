use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Deferred work the engine can ask its host for. At most one timer of each
/// kind is live at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// One-shot end of the opening peek window.
    PeekEnd,
    /// Repeating one second tick of the peek countdown.
    CountdownTick,
    /// One-shot evaluation of a face-up pair.
    PairCheck,
}

/// Identifies a scheduled timer. The epoch is the session it was scheduled
/// under, firings from an older epoch are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub epoch: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay_ms: u32,
    pub repeating: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerCommand {
    Schedule(TimerRequest),
    Cancel(TimerKind),
    CancelAll,
}

pub type TimerCommands = SmallVec<[TimerCommand; 4]>;

impl TimerRequest {
    pub const fn once(token: TimerToken, delay_ms: u32) -> Self {
        Self {
            token,
            delay_ms,
            repeating: false,
        }
    }

    pub const fn every(token: TimerToken, delay_ms: u32) -> Self {
        Self {
            token,
            delay_ms,
            repeating: true,
        }
    }
}
