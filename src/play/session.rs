use super::CALL_AMOUNT;
use super::STARTING_POT;
use super::seat::Seat;
use crate::Chips;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use rand::Rng;
use serde::Serialize;

/// The state of one training hand in progress.
///
/// It owns the deck, both holes, and the board, and is responsible for
/// rotating the seat, walking the streets, and resetting the pot between
/// hands. All randomness comes in through the rng injected at deal time,
/// so a seeded caller replays the same hands.
#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    hero: Hole,
    villain: Hole,
    board: Vec<Card>,
    seat: Seat,
    street: Street,
    pot: Chips,
    to_call: Chips,
    ply: u64,
}

impl Session {
    /// Deals the first hand immediately, seated one past the button.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self {
            hero: deck.hole(),
            villain: deck.hole(),
            deck,
            board: Vec::new(),
            seat: Seat::Button.next(),
            street: Street::Pref,
            pot: STARTING_POT,
            to_call: CALL_AMOUNT,
            ply: 0,
        }
    }

    /// Put the current hand away and deal the next one: fresh shuffled deck,
    /// seat advanced one step, board cleared, pot and call reset.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) {
        self.deck = Deck::new();
        self.deck.shuffle(rng);
        self.hero = self.deck.hole();
        self.villain = self.deck.hole();
        self.board.clear();
        self.seat = self.seat.next();
        self.street = Street::Pref;
        self.pot = STARTING_POT;
        self.to_call = CALL_AMOUNT;
        self.ply += 1;
        log::debug!("dealt {} in {}", self.hero, self.seat);
    }

    /// Advance to the next street, revealing its board cards. Once the hand
    /// reaches showdown this is a no-op.
    pub fn advance(&mut self) -> Street {
        if self.is_complete() {
            log::warn!("hand already at showdown, ignoring advance");
            return self.street;
        }
        let revealed = self.deck.deal(self.street.n_revealed());
        self.board.extend(revealed);
        self.street = self.street.next();
        self.ply += 1;
        log::debug!("advanced to {} with {} on board", self.street, self.board.len());
        self.street
    }

    /// The hand is over once the street reaches showdown.
    pub fn is_complete(&self) -> bool {
        self.street == Street::Show
    }

    /// Everything a presentation or the advisor may see. The villain's hole
    /// stays out of the view so advice can never peek at it.
    pub fn view(&self) -> View {
        View {
            hero: self.hero,
            board: self.board.clone(),
            seat: self.seat,
            street: self.street,
            pot: self.pot,
            to_call: self.to_call,
        }
    }

    /// The opponent's hole, for showdown display only.
    pub fn villain(&self) -> Hole {
        self.villain
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn street(&self) -> Street {
        self.street
    }
    /// Bumped on every deal and advance; pacing cues are validated against it.
    pub fn ply(&self) -> u64 {
        self.ply
    }
}

/// Snapshot of the public session state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub hero: Hole,
    pub board: Vec<Card>,
    pub seat: Seat,
    pub street: Street,
    pub pot: Chips,
    pub to_call: Chips,
}
