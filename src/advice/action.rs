use serde::Deserialize;
use serde::Serialize;

/// The three decisions the trainer grades.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    pub const fn all() -> &'static [Self; 3] {
        &[Self::Fold, Self::Call, Self::Raise]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
        }
    }
}
