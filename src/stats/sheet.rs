use super::record::Record;
use crate::cards::street::Street;
use crate::play::mode::Mode;
use crate::play::seat::Seat;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Running totals for one slice of the decision history.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tally {
    pub total: u32,
    pub correct: u32,
}

impl Tally {
    pub fn bump(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Accuracy in percent. An unseen slice reads as zero.
    pub fn accuracy(&self) -> f32 {
        match self.total {
            0 => 0.0,
            n => self.correct as f32 / n as f32 * 100.0,
        }
    }
}

/// Everything the trainer keeps between runs: the full decision list and
/// the running totals derived from it. Later additions to the shape carry
/// serde defaults so sheets saved by older builds still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub decisions: Vec<Record>,
    pub total_decisions: u32,
    pub correct_decisions: u32,
    pub position_stats: BTreeMap<Seat, Tally>,
    #[serde(default)]
    pub mode_stats: BTreeMap<Mode, Tally>,
    #[serde(default)]
    pub street_stats: BTreeMap<Street, Tally>,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub max_streak: u32,
}

impl Sheet {
    /// Fold one graded decision into the totals.
    pub fn absorb(&mut self, record: Record) {
        self.total_decisions += 1;
        if record.is_correct {
            self.correct_decisions += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
        self.position_stats
            .entry(record.position)
            .or_default()
            .bump(record.is_correct);
        self.mode_stats
            .entry(record.mode)
            .or_default()
            .bump(record.is_correct);
        if let Some(street) = record.street {
            self.street_stats
                .entry(street)
                .or_default()
                .bump(record.is_correct);
        }
        self.decisions.push(record);
    }

    /// Overall accuracy in percent.
    pub fn accuracy(&self) -> f32 {
        match self.total_decisions {
            0 => 0.0,
            n => self.correct_decisions as f32 / n as f32 * 100.0,
        }
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self {
            decisions: Vec::new(),
            total_decisions: 0,
            correct_decisions: 0,
            position_stats: Seat::all()
                .iter()
                .map(|seat| (*seat, Tally::default()))
                .collect(),
            mode_stats: BTreeMap::new(),
            street_stats: BTreeMap::new(),
            current_streak: 0,
            max_streak: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::record::Choice;

    fn graded(correct: bool, seat: Seat, mode: Mode) -> Record {
        Record::new(Choice::Call, correct, seat, mode)
    }

    #[test]
    fn a_fresh_sheet_covers_every_seat() {
        let sheet = Sheet::default();
        assert!(sheet.position_stats.len() == 6);
        for seat in Seat::all() {
            assert!(sheet.position_stats[seat].total == 0);
        }
        assert!(sheet.accuracy() == 0.0);
    }

    #[test]
    fn streaks_grow_and_reset_but_the_peak_sticks() {
        let mut sheet = Sheet::default();
        sheet.absorb(graded(true, Seat::Button, Mode::Play));
        sheet.absorb(graded(true, Seat::Button, Mode::Play));
        assert!(sheet.current_streak == 2);
        assert!(sheet.max_streak == 2);
        sheet.absorb(graded(false, Seat::Button, Mode::Play));
        assert!(sheet.current_streak == 0);
        assert!(sheet.max_streak == 2);
        sheet.absorb(graded(true, Seat::Button, Mode::Play));
        assert!(sheet.current_streak == 1);
        assert!(sheet.max_streak == 2);
    }

    #[test]
    fn tallies_split_by_seat_mode_and_street() {
        let mut sheet = Sheet::default();
        sheet.absorb(graded(true, Seat::Button, Mode::Play).on(Street::Flop));
        sheet.absorb(graded(false, Seat::UnderTheGun, Mode::Drills));
        assert!(sheet.position_stats[&Seat::Button].correct == 1);
        assert!(sheet.position_stats[&Seat::UnderTheGun].total == 1);
        assert!(sheet.mode_stats[&Mode::Play].total == 1);
        assert!(sheet.mode_stats[&Mode::Drills].total == 1);
        assert!(sheet.street_stats.len() == 1);
        assert!(sheet.street_stats[&Street::Flop].correct == 1);
    }

    #[test]
    fn accuracy_is_a_percentage() {
        let mut sheet = Sheet::default();
        sheet.absorb(graded(true, Seat::Button, Mode::Play));
        sheet.absorb(graded(true, Seat::Button, Mode::Play));
        sheet.absorb(graded(false, Seat::Button, Mode::Play));
        sheet.absorb(graded(false, Seat::Button, Mode::Play));
        assert!(sheet.accuracy() == 50.0);
        assert!(sheet.position_stats[&Seat::Button].accuracy() == 50.0);
    }

    #[test]
    fn persisted_keys_are_camel_cased() {
        let json = serde_json::to_string(&Sheet::default()).expect("serialize");
        assert!(json.contains("\"totalDecisions\""));
        assert!(json.contains("\"positionStats\""));
        assert!(json.contains("\"currentStreak\""));
        assert!(json.contains("\"BTN\""));
    }

    #[test]
    fn sheets_saved_before_streaks_existed_still_load() {
        let json = r#"{
            "decisions": [],
            "totalDecisions": 3,
            "correctDecisions": 2,
            "positionStats": { "BTN": { "total": 3, "correct": 2 } }
        }"#;
        let sheet: Sheet = serde_json::from_str(json).expect("deserialize");
        assert!(sheet.total_decisions == 3);
        assert!(sheet.current_streak == 0);
        assert!(sheet.mode_stats.is_empty());
        assert!(sheet.street_stats.is_empty());
    }
}
