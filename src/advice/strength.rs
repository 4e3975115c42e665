//! Closed-form hand strength heuristics.
//!
//! Preflop hands get a coarse Sklansky-flavored rank where 1 is best; the
//! rank doubles as a strength once squashed into the unit interval. Postflop
//! strength is a base score from the hole alone plus a bounded random wobble
//! standing in for board texture.

use crate::Probability;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use rand::Rng;

/// Width of the postflop wobble.
pub const SPREAD: Probability = 0.15;

/// Heuristic preflop bucket, 1 is best. Pairs land on 1, 11, 21, .. by
/// descending rank; connectors, broadways, suited and offsuit hands fill
/// fixed offset bands underneath.
pub fn rank(hole: &Hole) -> u32 {
    let hi = hole.high().value() as u32;
    let lo = hole.low().value() as u32;
    if hole.paired() {
        1 + (14 - hi) * 10
    } else if hole.suited() && hi - lo == 1 {
        30 + (14 - hi)
    } else if lo >= 10 {
        10 + (14 - hi)
    } else if hole.suited() {
        50 + (14 - hi)
    } else {
        80 + (14 - hi)
    }
}

/// Preflop strength, squashing rank 1 (best) toward 1.0.
pub fn preflop(hole: &Hole) -> Probability {
    1.0 - rank(hole) as Probability / 170.0
}

/// Postflop strength: the hole's base score plus a wobble in [0, SPREAD),
/// capped at 1.0. The wobble is deliberate nondeterminism, drawn from the
/// injected rng so tests can pin it down.
pub fn postflop<R: Rng>(hole: &Hole, rng: &mut R) -> Probability {
    Probability::min(1.0, base(hole) + rng.random::<Probability>() * SPREAD)
}

pub fn strength<R: Rng>(hole: &Hole, street: Street, rng: &mut R) -> Probability {
    match street {
        Street::Pref => preflop(hole),
        _ => postflop(hole, rng),
    }
}

fn base(hole: &Hole) -> Probability {
    let hi = hole.high().value() as Probability;
    if hole.paired() {
        0.6 + hi / 20.0
    } else if hole.suited() {
        0.4 + hi / 30.0
    } else {
        0.3 + hi / 40.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hole(a: (Rank, Suit), b: (Rank, Suit)) -> Hole {
        Hole::from((Card::from(a), Card::from(b)))
    }

    #[test]
    fn aces_rank_first() {
        let aces = hole((Rank::Ace, Suit::Club), (Rank::Ace, Suit::Spade));
        assert!(rank(&aces) == 1);
    }

    #[test]
    fn pairs_descend_in_steps_of_ten() {
        let kings = hole((Rank::King, Suit::Club), (Rank::King, Suit::Spade));
        let deuces = hole((Rank::Two, Suit::Club), (Rank::Two, Suit::Spade));
        assert!(rank(&kings) == 11);
        assert!(rank(&deuces) == 121);
    }

    #[test]
    fn branch_order_prefers_connectors_over_broadways() {
        let suited = hole((Rank::Ace, Suit::Heart), (Rank::King, Suit::Heart));
        let offsuit = hole((Rank::Ace, Suit::Heart), (Rank::King, Suit::Club));
        assert!(rank(&suited) == 30);
        assert!(rank(&offsuit) == 10);
    }

    #[test]
    fn trash_ranks_last() {
        let trash = hole((Rank::Three, Suit::Heart), (Rank::Two, Suit::Club));
        assert!(rank(&trash) == 91);
    }

    #[test]
    fn preflop_squash_is_linear_in_rank() {
        let aces = hole((Rank::Ace, Suit::Club), (Rank::Ace, Suit::Spade));
        assert!((preflop(&aces) - (1.0 - 1.0 / 170.0)).abs() < 1e-6);
    }

    #[test]
    fn postflop_wobble_stays_in_band() {
        let ref mut rng = StdRng::seed_from_u64(11);
        let hole = hole((Rank::Seven, Suit::Club), (Rank::Two, Suit::Heart));
        let floor = base(&hole);
        for _ in 0..100 {
            let s = postflop(&hole, rng);
            assert!(s >= floor);
            assert!(s <= floor + SPREAD);
        }
    }

    #[test]
    fn postflop_caps_at_certainty() {
        let ref mut rng = StdRng::seed_from_u64(12);
        let aces = hole((Rank::Ace, Suit::Club), (Rank::Ace, Suit::Spade));
        for _ in 0..10 {
            assert!(postflop(&aces, rng) == 1.0);
        }
    }

    #[test]
    fn street_dispatch_matches_the_phase() {
        let ref mut rng = StdRng::seed_from_u64(13);
        let hole = hole((Rank::Queen, Suit::Club), (Rank::Jack, Suit::Club));
        assert!(strength(&hole, Street::Pref, rng) == preflop(&hole));
        let s = strength(&hole, Street::Flop, rng);
        assert!(s >= base(&hole));
    }
}
