use serde::Deserialize;
use serde::Serialize;

/// Which trainer surface produced a decision.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full hands walked street by street.
    #[default]
    Play,
    /// Rapid-fire preflop questions.
    Drills,
    /// Build-the-range exercises.
    Range,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Play => write!(f, "play"),
            Self::Drills => write!(f, "drills"),
            Self::Range => write!(f, "range"),
        }
    }
}
