use crate::Weight;
use serde::Deserialize;
use serde::Serialize;

/// A table position. Training hands rotate through all six, one step per
/// hand, in blind order starting past the button.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "MP")]
    Middle,
    #[serde(rename = "CO")]
    Cutoff,
}

impl Seat {
    pub const fn all() -> &'static [Self; 6] {
        &[
            Self::Button,
            Self::SmallBlind,
            Self::BigBlind,
            Self::UnderTheGun,
            Self::Middle,
            Self::Cutoff,
        ]
    }
    /// One step around the table.
    pub const fn next(&self) -> Self {
        match self {
            Self::Button => Self::SmallBlind,
            Self::SmallBlind => Self::BigBlind,
            Self::BigBlind => Self::UnderTheGun,
            Self::UnderTheGun => Self::Middle,
            Self::Middle => Self::Cutoff,
            Self::Cutoff => Self::Button,
        }
    }
    /// Positional multiplier; above 1.0 the advisor refuses to fold.
    pub const fn weight(&self) -> Weight {
        match self {
            Self::Button => 1.2,
            Self::SmallBlind => 0.9,
            Self::BigBlind => 1.1,
            Self::UnderTheGun => 0.7,
            Self::Middle => 0.8,
            Self::Cutoff => 1.0,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Button => write!(f, "BTN"),
            Self::SmallBlind => write!(f, "SB"),
            Self::BigBlind => write!(f, "BB"),
            Self::UnderTheGun => write!(f, "UTG"),
            Self::Middle => write!(f, "MP"),
            Self::Cutoff => write!(f, "CO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_steps_come_back_around() {
        let mut seat = Seat::Button;
        for _ in 0..6 {
            seat = seat.next();
        }
        assert!(seat == Seat::Button);
    }

    #[test]
    fn only_button_and_big_blind_carry_weight() {
        let heavy: Vec<Seat> = Seat::all()
            .iter()
            .copied()
            .filter(|seat| seat.weight() > 1.0)
            .collect();
        assert!(heavy == vec![Seat::Button, Seat::BigBlind]);
    }

    #[test]
    fn serializes_to_short_names() {
        let json = serde_json::to_string(&Seat::UnderTheGun).expect("serialize");
        assert!(json == "\"UTG\"");
        let back: Seat = serde_json::from_str("\"BTN\"").expect("deserialize");
        assert!(back == Seat::Button);
    }
}
