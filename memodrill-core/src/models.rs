use crate::CoreError;
use chrono::{Days, NaiveDate};
use serde::Serialize;

pub const EF_MIN: f64 = 1.3;
pub const EF_DEFAULT: f64 = 2.5;

/// Persisted form of `last_reviewed`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Self-rated recall quality, 0 (blackout) through 5 (perfect recall).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;

    pub fn new(q: i64) -> Result<Self, CoreError> {
        if (0..=i64::from(Self::MAX)).contains(&q) {
            Ok(Self(q as u8))
        } else {
            Err(CoreError::InvalidQuality(q))
        }
    }

    /// Maps a typed key to a quality; anything but `'0'..='5'` is `None`.
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(i64::from(d)).ok())
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Recalled at all (3 and up). Keeps the repetition streak alive.
    pub fn is_pass(self) -> bool {
        self.0 >= 3
    }

    /// Recalled without serious difficulty (4 and up). Only these grow the interval.
    pub fn is_correct(self) -> bool {
        self.0 >= 4
    }
}

impl TryFrom<u8> for Quality {
    type Error = CoreError;

    fn try_from(q: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(q))
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> Self {
        q.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemState {
    New,
    Learning,
    Mature,
}

impl ItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemState::New => "new",
            ItemState::Learning => "learning",
            ItemState::Mature => "mature",
        }
    }
}

/// One flashcard and its SM-2 scheduling state.
///
/// The scheduling fields change only through [`Item::assess`](crate::Item::assess).
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Item {
    pub prompt: String,
    pub response: String,

    pub(crate) easiness: f64,
    pub(crate) repetitions: u32,
    pub(crate) interval: u32,
    pub(crate) last_reviewed: NaiveDate,
}

impl Item {
    pub fn create(prompt: impl Into<String>, response: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            easiness: EF_DEFAULT,
            repetitions: 0,
            interval: 0,
            last_reviewed: today,
        }
    }

    pub fn reconstruct(
        prompt: impl Into<String>,
        response: impl Into<String>,
        easiness: f64,
        repetitions: u32,
        interval: u32,
        last_reviewed: &str,
    ) -> Result<Self, CoreError> {
        if !easiness.is_finite() || easiness < EF_MIN {
            return Err(CoreError::parse("easiness", easiness.to_string()));
        }
        let last_reviewed = NaiveDate::parse_from_str(last_reviewed.trim(), DATE_FORMAT)
            .map_err(|_| CoreError::parse("last_reviewed", last_reviewed))?;
        Ok(Self {
            prompt: prompt.into(),
            response: response.into(),
            easiness,
            repetitions,
            interval,
            last_reviewed,
        })
    }

    pub fn dump(&self) -> ItemRecord {
        ItemRecord {
            prompt: self.prompt.clone(),
            response: self.response.clone(),
            easiness: format!("{:.6}", self.easiness),
            repetitions: self.repetitions.to_string(),
            interval: self.interval.to_string(),
            last_reviewed: self.last_reviewed.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn easiness(&self) -> f64 {
        self.easiness
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn last_reviewed(&self) -> NaiveDate {
        self.last_reviewed
    }

    /// Last day on which the item is *not* yet due.
    pub fn due_date(&self) -> NaiveDate {
        self.last_reviewed
            .checked_add_days(Days::new(u64::from(self.interval)))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn state(&self) -> ItemState {
        match self.repetitions {
            0 => ItemState::New,
            1 => ItemState::Learning,
            _ => ItemState::Mature,
        }
    }
}

/// The six flat fields an [`Item`] is persisted as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    pub prompt: String,
    pub response: String,
    pub easiness: String,
    pub repetitions: String,
    pub interval: String,
    pub last_reviewed: String,
}

impl ItemRecord {
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.prompt,
            &self.response,
            &self.easiness,
            &self.repetitions,
            &self.interval,
            &self.last_reviewed,
        ]
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = CoreError;

    fn try_from(r: ItemRecord) -> Result<Self, Self::Error> {
        let easiness = r
            .easiness
            .trim()
            .parse::<f64>()
            .map_err(|_| CoreError::parse("easiness", &*r.easiness))?;
        let repetitions = r
            .repetitions
            .trim()
            .parse::<u32>()
            .map_err(|_| CoreError::parse("repetitions", &*r.repetitions))?;
        let interval = r
            .interval
            .trim()
            .parse::<u32>()
            .map_err(|_| CoreError::parse("interval", &*r.interval))?;
        Item::reconstruct(
            r.prompt,
            r.response,
            easiness,
            repetitions,
            interval,
            &r.last_reviewed,
        )
    }
}
