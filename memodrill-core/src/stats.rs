use crate::{Collection, ItemState};
use chrono::NaiveDate;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub mature: usize,
    pub due: usize,
    pub mean_easiness: f64,
}

impl Summary {
    fn record_state(&mut self, state: ItemState) {
        self.total += 1;
        match state {
            ItemState::New => self.new += 1,
            ItemState::Learning => self.learning += 1,
            ItemState::Mature => self.mature += 1,
        }
    }
}

pub fn summarize(collection: &Collection, today: NaiveDate) -> Summary {
    let mut summary = Summary::default();
    let mut ef_sum = 0.0;
    for item in collection {
        summary.record_state(item.state());
        if item.is_due(today) {
            summary.due += 1;
        }
        ef_sum += item.easiness();
    }
    if summary.total > 0 {
        summary.mean_easiness = ef_sum / summary.total as f64;
    }
    summary
}
