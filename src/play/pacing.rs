use super::session::Session;
use std::time::Duration;
use std::time::Instant;

/// What a scheduled pause should do once it elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Reveal the next street of the current hand.
    Advance,
    /// Put the hand away and deal the next one.
    Redeal,
}

/// A cancellable auto-advance timer.
///
/// Holds at most one pending cue. The cue remembers the session ply it was
/// scheduled against; if the session has moved on by the time the cue comes
/// due (the user switched modes, a hand was redealt), polling drops it
/// instead of firing it.
#[derive(Debug, Default)]
pub struct Pacer {
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    cue: Cue,
    due: Instant,
    ply: u64,
}

impl Pacer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule a cue against the session as it stands right now.
    pub fn schedule(&mut self, cue: Cue, delay: Duration, session: &Session) {
        self.pending = Some(Pending {
            cue,
            due: Instant::now() + delay,
            ply: session.ply(),
        });
    }

    /// Drop any pending cue. Mode switches must call this.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn idle(&self) -> bool {
        self.pending.is_none()
    }

    /// The pending cue once its delay has elapsed, or None while it is still
    /// early. A cue whose session has since moved on is dropped silently.
    pub fn poll(&mut self, session: &Session) -> Option<Cue> {
        let pending = self.pending.take()?;
        if Instant::now() < pending.due {
            self.pending = Some(pending);
            None
        } else if pending.ply != session.ply() {
            log::debug!("dropping stale {:?} cue", pending.cue);
            None
        } else {
            Some(pending.cue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SOON: Duration = Duration::ZERO;
    const NEVER: Duration = Duration::from_secs(3600);

    #[test]
    fn fires_once_due() {
        let session = Session::new(&mut StdRng::seed_from_u64(1));
        let mut pacer = Pacer::new();
        pacer.schedule(Cue::Advance, SOON, &session);
        assert!(pacer.poll(&session) == Some(Cue::Advance));
        assert!(pacer.idle());
    }

    #[test]
    fn waits_until_due() {
        let session = Session::new(&mut StdRng::seed_from_u64(2));
        let mut pacer = Pacer::new();
        pacer.schedule(Cue::Advance, NEVER, &session);
        assert!(pacer.poll(&session).is_none());
        assert!(!pacer.idle());
    }

    #[test]
    fn drops_cues_for_hands_that_moved_on() {
        let ref mut rng = StdRng::seed_from_u64(3);
        let mut session = Session::new(rng);
        let mut pacer = Pacer::new();
        pacer.schedule(Cue::Advance, SOON, &session);
        session.deal(rng);
        assert!(pacer.poll(&session).is_none());
        assert!(pacer.idle());
    }

    #[test]
    fn cancel_clears_the_slot() {
        let session = Session::new(&mut StdRng::seed_from_u64(4));
        let mut pacer = Pacer::new();
        pacer.schedule(Cue::Redeal, SOON, &session);
        pacer.cancel();
        assert!(pacer.idle());
        assert!(pacer.poll(&session).is_none());
    }

    #[test]
    fn reschedule_replaces_the_pending_cue() {
        let session = Session::new(&mut StdRng::seed_from_u64(5));
        let mut pacer = Pacer::new();
        pacer.schedule(Cue::Advance, NEVER, &session);
        pacer.schedule(Cue::Redeal, SOON, &session);
        assert!(pacer.poll(&session) == Some(Cue::Redeal));
    }
}
