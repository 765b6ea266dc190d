//! The number caller: draw state shared by every player at the table.

use chrono::{DateTime, Utc};
use log::debug;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::constants::MAX_NUMBER;

/// Draw state for a single table's caller.
///
/// History keeps the numbers in call order and never repeats one.
/// Refusals are soft: [`call_next`](Caller::call_next) returns `None`
/// while no game is running or once every number has been drawn, and
/// never panics.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Caller {
    called: Vec<u8>,
    current: Option<u8>,
    active: bool,
    started_at: Option<DateTime<Utc>>,
}

impl Caller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new game: clear the history and activate the caller.
    pub fn start(&mut self) {
        self.called.clear();
        self.current = None;
        self.active = true;
        self.started_at = Some(Utc::now());
    }

    /// Deactivate the caller. History stays around for display.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Draw the next number uniformly at random from the uncalled pool.
    ///
    /// The draw lands in the history and becomes the current number.
    pub fn call_next(&mut self) -> Option<u8> {
        if !self.active {
            return None;
        }

        let uncalled: Vec<u8> = (1..=MAX_NUMBER)
            .filter(|n| !self.called.contains(n))
            .collect();
        let number = uncalled.choose(&mut rand::rng()).copied()?;

        self.called.push(number);
        self.current = Some(number);
        debug!("called {number} ({} of {MAX_NUMBER})", self.called.len());
        Some(number)
    }

    /// Numbers drawn so far, in call order.
    pub fn called(&self) -> &[u8] {
        &self.called
    }

    /// Most recently drawn number.
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once every number from 1 to 75 has been drawn.
    pub fn is_exhausted(&self) -> bool {
        self.called.len() >= MAX_NUMBER as usize
    }

    /// When the current game started, if one ever did.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_starts_inactive() {
        let mut caller = Caller::new();
        assert!(!caller.is_active());
        assert_eq!(caller.call_next(), None);
        assert!(caller.called().is_empty());
    }

    #[test]
    fn test_start_clears_previous_history() {
        let mut caller = Caller::new();
        caller.start();
        caller.call_next();
        caller.call_next();
        assert_eq!(caller.called().len(), 2);

        caller.start();
        assert!(caller.called().is_empty());
        assert_eq!(caller.current(), None);
        assert!(caller.started_at().is_some());
    }

    #[test]
    fn test_stop_preserves_history() {
        let mut caller = Caller::new();
        caller.start();
        let number = caller.call_next().unwrap();
        caller.stop();

        assert!(!caller.is_active());
        assert_eq!(caller.called(), &[number]);
        assert_eq!(caller.current(), Some(number));
        assert_eq!(caller.call_next(), None);
    }

    #[test]
    fn test_calls_until_exhaustion_never_repeat() {
        let mut caller = Caller::new();
        caller.start();

        let mut drawn = Vec::new();
        for _ in 0..MAX_NUMBER {
            let number = caller.call_next().unwrap();
            assert!((1..=MAX_NUMBER).contains(&number));
            assert!(!drawn.contains(&number), "{number} drawn twice");
            drawn.push(number);
        }

        assert!(caller.is_exhausted());
        assert_eq!(caller.call_next(), None);
        assert!(caller.is_active(), "exhaustion does not deactivate");
    }
}
