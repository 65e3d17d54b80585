//! The review pass: show every due item once, grade it, persist, and repeat
//! until nothing is due.

use crate::{Clock, Collection, Item, Quality};
use thiserror::Error;

/// Interactive side of a review: shows items and collects grades.
pub trait Reviewer {
    type Error;

    /// Shows the prompt and waits until the user asks to see the response.
    /// Returns `false` if the user asked to stop instead.
    fn show_prompt(&mut self, item: &Item) -> Result<bool, Self::Error>;

    fn show_response(&mut self, item: &Item) -> Result<(), Self::Error>;

    /// `None` means the user asked to stop.
    fn read_quality(&mut self) -> Result<Option<Quality>, Self::Error>;
}

/// Persists the whole collection after each assessment.
pub trait Sink {
    type Error;

    fn save(&mut self, collection: &Collection) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum SessionError<R, S> {
    #[error("reviewer failed: {0}")]
    Reviewer(R),
    #[error("could not save collection: {0}")]
    Sink(S),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing left due.
    #[default]
    Finished,
    Quit,
    LimitReached,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub assessed: usize,
    pub passes: usize,
    pub outcome: Outcome,
}

/// Runs review passes over `collection` until no item is due.
///
/// Each pass re-reads the due set from the live collection. Every assessment
/// is handed to `sink` before the next item is shown, so stopping at any point
/// loses nothing. A sink error ends the session.
pub fn run_session<C, R, S>(
    collection: &mut Collection,
    clock: &C,
    reviewer: &mut R,
    sink: &mut S,
    limit: Option<usize>,
) -> Result<SessionReport, SessionError<R::Error, S::Error>>
where
    C: Clock + ?Sized,
    R: Reviewer + ?Sized,
    S: Sink + ?Sized,
{
    let mut report = SessionReport::default();
    loop {
        let due = collection.due_indices(clock.today());
        if due.is_empty() {
            return Ok(report);
        }
        report.passes += 1;

        for idx in due {
            if limit.is_some_and(|max| report.assessed >= max) {
                report.outcome = Outcome::LimitReached;
                return Ok(report);
            }
            let Some(item) = collection.get(idx) else {
                continue;
            };

            if !reviewer.show_prompt(item).map_err(SessionError::Reviewer)? {
                report.outcome = Outcome::Quit;
                return Ok(report);
            }
            reviewer.show_response(item).map_err(SessionError::Reviewer)?;
            let Some(q) = reviewer.read_quality().map_err(SessionError::Reviewer)? else {
                report.outcome = Outcome::Quit;
                return Ok(report);
            };

            if let Some(item) = collection.get_mut(idx) {
                item.assess(q, clock.today());
            }
            sink.save(collection).map_err(SessionError::Sink)?;
            report.assessed += 1;
        }
    }
}
