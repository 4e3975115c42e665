use crate::advice::action::Action;
use crate::cards::street::Street;
use crate::play::mode::Mode;
use crate::play::seat::Seat;
use serde::Deserialize;
use serde::Serialize;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// What the user chose. Play and drill decisions land on one of the
/// three table actions; range practice is its own kind of answer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Fold,
    Call,
    Raise,
    Range,
}

impl From<Action> for Choice {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => Self::Fold,
            Action::Call => Self::Call,
            Action::Raise => Self::Raise,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
            Self::Range => write!(f, "range"),
        }
    }
}

/// One graded decision, exactly as it is persisted. The street and score
/// tags are optional so records from all three modes share a shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub decision: Choice,
    pub is_correct: bool,
    pub position: Seat,
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<Street>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Record {
    pub fn new(decision: Choice, is_correct: bool, position: Seat, mode: Mode) -> Self {
        Self {
            decision,
            is_correct,
            position,
            timestamp: now(),
            street: None,
            mode,
            score: None,
        }
    }

    /// Tag the record with the street the decision was made on.
    pub fn on(mut self, street: Street) -> Self {
        self.street = Some(street);
        self
    }

    /// Attach a range-practice score.
    pub fn scored(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// Milliseconds since the epoch.
fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_millis() as u64
}
