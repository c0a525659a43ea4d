//! Per-session state: the virtue tracker

use std::collections::HashMap;

use uuid::Uuid;

use crate::config;

/// The virtues the user can tick before logging their progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VirtueChecks {
    /// "I was Patient"
    pub patient: bool,
    /// "I was Humble"
    pub humble: bool,
}

impl VirtueChecks {
    pub fn new(patient: bool, humble: bool) -> Self {
        Self { patient, humble }
    }

    /// How many boxes are checked (0, 1 or 2)
    pub fn points(&self) -> u32 {
        self.patient as u32 + self.humble as u32
    }
}


/// The state of a single user session
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    id: Uuid,
    virtue_points: u32,
}

impl Session {
    /// Create a session, with no virtue point
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            virtue_points: 0,
        }
    }

    pub fn id(&self) -> &Uuid { &self.id }
    pub fn virtue_points(&self) -> u32 { self.virtue_points }

    /// Add the checked virtues to the score, and returns the new score.
    /// The score never decreases.
    pub fn log_progress(&mut self, checks: VirtueChecks) -> u32 {
        self.virtue_points = self.virtue_points.saturating_add(checks.points());
        log::debug!("Session {}: logged {} virtue point(s), score is now {}", self.id, checks.points(), self.virtue_points);
        self.virtue_points
    }

    /// How far the score is from the goal, between 0.0 and 1.0
    pub fn progress(&self) -> f64 {
        let ratio = self.virtue_points as f64 / config::VIRTUE_GOAL as f64;
        ratio.min(1.0)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}


/// Keeps the sessions apart from each other.
///
/// Nothing is persisted: sessions only live as long as this store.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session, and return its ID
    pub fn open(&mut self) -> Uuid {
        let session = Session::new();
        let id = *session.id();
        log::debug!("Opening session {}", id);
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    /// End a session. Its state is discarded
    pub fn close(&mut self, id: &Uuid) -> Option<Session> {
        log::debug!("Closing session {}", id);
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_count() {
        assert_eq!(VirtueChecks::new(false, false).points(), 0);
        assert_eq!(VirtueChecks::new(true, false).points(), 1);
        assert_eq!(VirtueChecks::new(false, true).points(), 1);
        assert_eq!(VirtueChecks::new(true, true).points(), 2);
    }

    #[test]
    fn score_only_grows() {
        let mut session = Session::new();
        assert_eq!(session.virtue_points(), 0);
        assert_eq!(session.progress(), 0.0);

        assert_eq!(session.log_progress(VirtueChecks::new(true, true)), 2);
        assert_eq!(session.log_progress(VirtueChecks::new(false, false)), 2);
        assert_eq!(session.log_progress(VirtueChecks::new(false, true)), 3);
        assert_eq!(session.progress(), 3.0 / 50.0);
    }

    #[test]
    fn progress_is_capped() {
        let mut session = Session::new();
        for _ in 0..24 {
            session.log_progress(VirtueChecks::new(true, true));
        }
        assert_eq!(session.virtue_points(), 48);
        assert!(session.progress() < 1.0);

        session.log_progress(VirtueChecks::new(true, true));
        assert_eq!(session.virtue_points(), 50);
        assert_eq!(session.progress(), 1.0);

        session.log_progress(VirtueChecks::new(true, false));
        assert_eq!(session.virtue_points(), 51);
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn sessions_are_isolated() {
        let mut store = SessionStore::new();
        let alice = store.open();
        let bob = store.open();
        assert_ne!(alice, bob);
        assert_eq!(store.len(), 2);

        store.get_mut(&alice).unwrap().log_progress(VirtueChecks::new(true, true));
        assert_eq!(store.get(&alice).unwrap().virtue_points(), 2);
        assert_eq!(store.get(&bob).unwrap().virtue_points(), 0);

        let closed = store.close(&alice).unwrap();
        assert_eq!(closed.virtue_points(), 2);
        assert!(store.get(&alice).is_none());
        assert_eq!(store.len(), 1);
    }
}
