//! SM-2 update rules.
//!
//! Quality 3 still counts as a pass for the repetition streak but resets the
//! interval to zero, so such an item comes back on the next review day.

use crate::{Item, Quality, EF_MIN};
use chrono::NaiveDate;

pub fn next_easiness(q: Quality, easiness: f64) -> f64 {
    let miss = f64::from(Quality::MAX - q.value());
    let next = easiness + (0.1 - miss * (0.08 + miss * 0.02));
    next.max(EF_MIN)
}

pub fn next_repetitions(q: Quality, repetitions: u32) -> u32 {
    if q.is_pass() {
        repetitions.saturating_add(1)
    } else {
        0
    }
}

/// `easiness` and `repetitions` are the values *before* this assessment.
pub fn next_interval(q: Quality, easiness: f64, repetitions: u32, interval: u32) -> u32 {
    if !q.is_correct() {
        return 0;
    }
    match repetitions {
        0 => 1,
        1 => 6,
        // half-up, not banker's rounding
        _ => (f64::from(interval) * easiness + 0.5).floor() as u32,
    }
}

impl Item {
    /// Applies one graded review made on `today`.
    pub fn assess(&mut self, q: Quality, today: NaiveDate) {
        let easiness = next_easiness(q, self.easiness);
        let repetitions = next_repetitions(q, self.repetitions);
        let interval = next_interval(q, self.easiness, self.repetitions, self.interval);

        self.last_reviewed = today;
        self.easiness = easiness;
        self.repetitions = repetitions;
        self.interval = interval;
    }

    /// Due once `today` is strictly past `last_reviewed + interval`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        today > self.due_date()
    }
}
