use super::record::Record;
use super::sheet::Sheet;
use super::store::STORAGE_KEY;
use super::store::Store;
use crate::play::seat::Seat;

/// The stats pipeline. One sheet lives in memory and is mirrored to the
/// store on every write, so a crash can only ever lose the decision in
/// flight.
#[derive(Debug)]
pub struct Ledger<S: Store> {
    sheet: Sheet,
    store: S,
}

impl<S: Store> Ledger<S> {
    /// Load the saved sheet, or start a blank one and persist it.
    pub fn new(mut store: S) -> anyhow::Result<Self> {
        let sheet = match store.get(STORAGE_KEY)? {
            Some(sheet) => sheet,
            None => {
                let sheet = Sheet::default();
                store.set(STORAGE_KEY, &sheet)?;
                sheet
            }
        };
        log::debug!("loaded {} past decisions", sheet.total_decisions);
        Ok(Self { sheet, store })
    }

    /// Fold a graded decision into the sheet and persist it.
    pub fn record(&mut self, record: Record) -> anyhow::Result<()> {
        log::debug!(
            "recording {} from {} ({})",
            record.decision,
            record.position,
            if record.is_correct { "correct" } else { "wrong" }
        );
        self.sheet.absorb(record);
        self.store.set(STORAGE_KEY, &self.sheet)
    }

    /// Wipe the history and start over.
    pub fn reset(&mut self) -> anyhow::Result<()> {
        log::warn!("resetting all training statistics");
        self.sheet = Sheet::default();
        self.store.clear(STORAGE_KEY)
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// The last decisions, oldest first.
    pub fn recent(&self, limit: usize) -> &[Record] {
        let n = self.sheet.decisions.len();
        &self.sheet.decisions[n.saturating_sub(limit)..]
    }

    /// The last decisions, newest first.
    pub fn history(&self, limit: usize) -> Vec<Record> {
        self.sheet
            .decisions
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Accuracy at one seat, in percent.
    pub fn accuracy(&self, seat: Seat) -> f32 {
        self.sheet
            .position_stats
            .get(&seat)
            .map(|tally| tally.accuracy())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::mode::Mode;
    use crate::stats::record::Choice;
    use crate::stats::store::FileStore;
    use crate::stats::store::MemStore;

    fn graded(correct: bool, seat: Seat) -> Record {
        Record::new(Choice::Call, correct, seat, Mode::Play)
    }

    #[test]
    fn a_blank_ledger_starts_at_zero() {
        let ledger = Ledger::new(MemStore::default()).expect("open");
        assert!(ledger.sheet().total_decisions == 0);
        assert!(ledger.sheet().accuracy() == 0.0);
        assert!(ledger.recent(10).is_empty());
    }

    #[test]
    fn recording_updates_totals_and_streaks() {
        let mut ledger = Ledger::new(MemStore::default()).expect("open");
        ledger.record(graded(true, Seat::Button)).expect("record");
        ledger.record(graded(true, Seat::Button)).expect("record");
        ledger.record(graded(false, Seat::Cutoff)).expect("record");
        assert!(ledger.sheet().total_decisions == 3);
        assert!(ledger.sheet().correct_decisions == 2);
        assert!(ledger.sheet().current_streak == 0);
        assert!(ledger.sheet().max_streak == 2);
        assert!(ledger.accuracy(Seat::Button) == 100.0);
        assert!(ledger.accuracy(Seat::Cutoff) == 0.0);
    }

    #[test]
    fn recent_keeps_order_and_history_reverses_it() {
        let mut ledger = Ledger::new(MemStore::default()).expect("open");
        for i in 0..12 {
            ledger
                .record(graded(i % 2 == 0, Seat::Button))
                .expect("record");
        }
        let recent = ledger.recent(10);
        assert!(recent.len() == 10);
        assert!(recent.first().map(|r| r.is_correct) == Some(true));
        assert!(recent.last().map(|r| r.is_correct) == Some(false));
        let history = ledger.history(20);
        assert!(history.len() == 12);
        assert!(history.first().map(|r| r.is_correct) == Some(false));
        assert!(ledger.history(3).len() == 3);
    }

    #[test]
    fn reset_zeroes_the_sheet() {
        let mut ledger = Ledger::new(MemStore::default()).expect("open");
        ledger.record(graded(true, Seat::Button)).expect("record");
        ledger.reset().expect("reset");
        assert!(ledger.sheet().total_decisions == 0);
        assert!(ledger.sheet().max_streak == 0);
        assert!(ledger.sheet().decisions.is_empty());
    }

    #[test]
    fn the_sheet_survives_a_reopen() {
        let dir = std::env::temp_dir().join("tutorpoker").join("ledger");
        let _ = std::fs::remove_dir_all(&dir);
        let mut ledger = Ledger::new(FileStore::new(&dir)).expect("open");
        ledger.record(graded(true, Seat::Button)).expect("record");
        ledger.record(graded(false, Seat::Cutoff)).expect("record");
        let ledger = Ledger::new(FileStore::new(&dir)).expect("reopen");
        assert!(ledger.sheet().total_decisions == 2);
        assert!(ledger.sheet().correct_decisions == 1);
        assert!(ledger.accuracy(Seat::Button) == 100.0);
    }
}
