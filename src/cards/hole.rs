use super::card::Card;
use super::rank::Rank;
use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// Two private cards belonging to one player.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
    pub fn paired(&self) -> bool {
        self.0.rank() == self.1.rank()
    }
    /// The stronger rank of the two.
    pub fn high(&self) -> Rank {
        std::cmp::max(self.0.rank(), self.1.rank())
    }
    /// The weaker rank of the two.
    pub fn low(&self) -> Rank {
        std::cmp::min(self.0.rank(), self.1.rank())
    }
    /// Canonical starting-hand label: "QQ", "AKs", "T9o".
    pub fn label(&self) -> String {
        if self.paired() {
            format!("{}{}", self.high(), self.low())
        } else if self.suited() {
            format!("{}{}s", self.high(), self.low())
        } else {
            format!("{}{}o", self.high(), self.low())
        }
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(a, b)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl Arbitrary for Hole {
    fn random() -> Self {
        let a = Card::random();
        loop {
            let b = Card::random();
            if b != a {
                return Self(a, b);
            }
        }
    }
}
