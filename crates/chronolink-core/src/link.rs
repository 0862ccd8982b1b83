//! Per-link event log: ordered activation and deactivation transitions

use std::fmt;

use serde::Serialize;

use crate::model::{Day, NetworkError};

/// The two phases a link alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LinkState {
    #[default]
    Inactive,
    Active,
}

/// Time-ordered transition log for one unordered pair of users.
///
/// The log alternates strictly: the first event is an activation, the next a
/// deactivation, and so on. Two consecutive events may share a date, which
/// yields an empty half-open active interval. Activity at a date is always
/// derived from the log rather than cached, so re-establishing a link cannot
/// drift from its recorded history.
///
/// Serialize-only: the alternation and ordering invariants are enforced by
/// `record`, so histories are rebuilt through it rather than deserialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkHistory {
    events: Vec<Day>,
    state: LinkState,
}

impl LinkHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase the link is in after its latest event.
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Number of recorded transitions.
    pub fn transition_count(&self) -> usize {
        self.events.len()
    }

    /// Append a transition into `target` on `date`.
    ///
    /// Fails without touching the log when the date precedes the latest
    /// event, when the link is already in `target`, or when a deactivation is
    /// requested on a link that was never activated.
    pub fn record(&mut self, date: Day, target: LinkState) -> Result<(), NetworkError> {
        if self.events.is_empty() && target == LinkState::Inactive {
            return Err(NetworkError::NeverActivated);
        }
        if let Some(&last) = self.events.last() {
            if date < last {
                return Err(NetworkError::InvalidDate);
            }
        }
        if target == self.state {
            return Err(match target {
                LinkState::Active => NetworkError::AlreadyActive,
                LinkState::Inactive => NetworkError::AlreadyInactive,
            });
        }
        self.events.push(date);
        self.state = target;
        Ok(())
    }

    /// Was the link active on `date`?
    ///
    /// Active intervals are half-open `[on, off)`; a trailing unterminated
    /// activation covers every later date.
    pub fn is_active_at(&self, date: Day) -> bool {
        let mut active = false;
        for &event in &self.events {
            if event > date {
                break;
            }
            active = !active;
        }
        active
    }

    /// The first transition after `date`: the opening event when `date`
    /// precedes the whole log, otherwise the closing bound of the interval
    /// containing `date`. `None` once `date` is at or past the last event.
    pub fn next_transition_after(&self, date: Day) -> Option<Day> {
        let first = *self.events.first()?;
        if date < first {
            return Some(first);
        }
        self.events
            .windows(2)
            .find(|w| w[0] <= date && date < w[1])
            .map(|w| w[1])
    }

    /// The latest transition strictly before `date`, or `None` when no
    /// earlier event exists.
    pub fn previous_transition_before(&self, date: Day) -> Option<Day> {
        self.events.iter().rev().find(|&&event| event < date).copied()
    }

    pub fn first_transition(&self) -> Option<Day> {
        self.events.first().copied()
    }

    pub fn last_transition(&self) -> Option<Day> {
        self.events.last().copied()
    }
}

/// One line per transition, oldest first, alternating between the two verbs.
impl fmt::Display for LinkHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return write!(f, "never linked");
        }
        let verbs = ["established", "torn down"].into_iter().cycle();
        for (i, (&event, verb)) in self.events.iter().zip(verbs).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{verb} on {event}")?;
        }
        Ok(())
    }
}
