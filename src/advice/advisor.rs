use super::action::Action;
use super::odds::PotOdds;
use super::strength;
use crate::Probability;
use crate::Weight;
use crate::cards::street::Street;
use crate::play::session::View;
use rand::Rng;
use serde::Serialize;

/// One piece of advice for the decision in front of the user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub action: Action,
    pub explanation: &'static str,
    pub strength: Probability,
    pub weight: Weight,
    pub win_probability: Probability,
    pub pot_odds: PotOdds,
}

impl Advice {
    /// A decision is correct exactly when it matches the advised action.
    pub fn matches(&self, action: Action) -> bool {
        self.action == action
    }
}

/// Advise the current decision from public state alone.
///
/// Preflop the call is made on the hand's rank bucket; postflop on its
/// strength, with a consolation call for flush draws. Seats carrying a
/// positional weight above 1.0 never get told to fold; that bias is part
/// of the training material, not a bug to fix.
pub fn advise<R: Rng>(view: &View, rng: &mut R) -> Advice {
    let strength = strength::strength(&view.hero, view.street, rng);
    let (action, explanation) = match view.street {
        Street::Pref => match strength::rank(&view.hero) {
            rank if rank <= 10 => (
                Action::Raise,
                "Premium hand preflop: aggressive play recommended.",
            ),
            rank if rank <= 30 => (
                Action::Call,
                "Playable hand preflop: calling is reasonable.",
            ),
            _ => (Action::Fold, "Weak hand preflop: folding is optimal."),
        },
        _ => {
            if strength > 0.85 {
                (
                    Action::Raise,
                    "Very strong hand postflop: value bet or raise.",
                )
            } else if strength > 0.65 {
                (Action::Call, "Decent hand postflop: calling is fine.")
            } else if drawing(view) {
                (Action::Call, "You have a draw: calling is reasonable.")
            } else {
                (Action::Fold, "Weak hand postflop: folding is optimal.")
            }
        }
    };
    let weight = view.seat.weight();
    let (action, explanation) = if weight > 1.0 && action == Action::Fold {
        (
            Action::Call,
            "Position advantage: calling with marginal hand.",
        )
    } else {
        (action, explanation)
    };
    Advice {
        action,
        explanation,
        strength,
        weight,
        win_probability: win(strength, view.street),
        pot_odds: PotOdds::from((view.pot, view.to_call)),
    }
}

/// Strength discounted for the cards still to come.
fn win(strength: Probability, street: Street) -> Probability {
    match street {
        Street::Pref => strength * 0.7,
        _ => strength * 0.9,
    }
}

/// Four or more of one suit across hole and board reads as a flush draw.
fn drawing(view: &View) -> bool {
    let mut suits = [0u8; 4];
    for card in view.hero.cards().iter().chain(view.board.iter()) {
        suits[u8::from(card.suit()) as usize] += 1;
    }
    suits.iter().any(|&n| n >= 4)
}
