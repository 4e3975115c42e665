//! Positional opening ranges and range-drill scoring.
//!
//! Labels are canonical starting-hand strings ("QQ", "AKs", "T9o") so user
//! selections compare against the tables by plain equality.

use crate::play::seat::Seat;
use serde::Serialize;

/// A drill passes when its score clears this mark.
pub const PASS_MARK: f32 = 70.0;

/// The opening range trained for a seat: wide on the button, tight under
/// the gun, a middling default everywhere else.
pub const fn opening(seat: Seat) -> &'static [&'static str] {
    match seat {
        Seat::Button => &BUTTON,
        Seat::UnderTheGun => &UNDER_THE_GUN,
        _ => &DEFAULT,
    }
}

#[rustfmt::skip]
const BUTTON: [&str; 28] = [
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22",
    "AKs", "AQs", "AJs", "ATs", "KQs", "KJs", "QJs", "JTs", "T9s", "98s", "87s",
    "AKo", "AQo", "AJo", "KQo",
];

#[rustfmt::skip]
const UNDER_THE_GUN: [&str; 8] = [
    "AA", "KK", "QQ", "JJ", "TT", "AKs", "AQs", "AKo",
];

#[rustfmt::skip]
const DEFAULT: [&str; 14] = [
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77",
    "AKs", "AQs", "AJs", "KQs", "AKo", "AQo",
];

/// Outcome of one range drill: the share of the seat's opening range the
/// selection covered, as a percentage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeScore {
    pub seat: Seat,
    pub score: f32,
    pub overlap: usize,
}

impl RangeScore {
    pub fn passing(&self) -> bool {
        self.score > PASS_MARK
    }
}

/// Grade a selection of labels against the seat's opening range. Labels
/// outside the range neither help nor hurt; only coverage counts.
pub fn score<S: AsRef<str>>(selection: &[S], seat: Seat) -> RangeScore {
    let range = opening(seat);
    let overlap = selection
        .iter()
        .filter(|label| range.contains(&label.as_ref()))
        .count();
    RangeScore {
        seat,
        score: 100.0 * overlap as f32 / range.len() as f32,
        overlap,
    }
}

/// The 13x13 starting-hand grid in canonical label form, row-major from the
/// ace row down: pairs on the diagonal, suited hands above it, offsuit
/// hands below.
pub fn grid() -> Vec<String> {
    let ranks: Vec<_> = crate::cards::rank::Rank::all().iter().rev().collect();
    let mut labels = Vec::with_capacity(169);
    for i in 0..13 {
        for j in 0..13 {
            if i == j {
                labels.push(format!("{}{}", ranks[i], ranks[j]));
            } else if i < j {
                labels.push(format!("{}{}s", ranks[i], ranks[j]));
            } else {
                labels.push(format!("{}{}o", ranks[j], ranks[i]));
            }
        }
    }
    labels
}
