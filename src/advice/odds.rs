use crate::Chips;
use crate::Probability;
use serde::Serialize;

/// Cost of a call measured against the pot after calling, with the worked
/// arithmetic spelled out for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotOdds {
    pub ratio: Probability,
    pub note: String,
}

/// (pot, amount to call)
impl From<(Chips, Chips)> for PotOdds {
    fn from((pot, call): (Chips, Chips)) -> Self {
        if call == 0 {
            Self {
                ratio: 0.0,
                note: "No call required.".to_string(),
            }
        } else {
            let ratio = call as Probability / (pot + call) as Probability;
            Self {
                ratio,
                note: format!(
                    "To call {} into a pot of {}: {} / ({} + {}) = {:.1}%",
                    call,
                    pot,
                    call,
                    pot,
                    call,
                    ratio * 100.0
                ),
            }
        }
    }
}

impl std::fmt::Display for PotOdds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.note)
    }
}
