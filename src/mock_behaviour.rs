//! This module provides ways to tweak mocked sources, so that they can return errors on some tests
#![cfg(any(test, feature = "local_sources_mock_remote_sources"))]

use crate::error::FetchError;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    // From the LiturgySource trait
    pub today_behaviour: (u32, u32),

    // From the BibleSource trait
    pub verse_of_the_day_behaviour: (u32, u32),
    pub lookup_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            today_behaviour: (0, n_fails),
            verse_of_the_day_behaviour: (0, n_fails),
            lookup_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_get_today(&mut self) -> Result<(), FetchError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.today_behaviour, "today")
    }
    pub fn can_get_verse_of_the_day(&mut self) -> Result<(), FetchError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.verse_of_the_day_behaviour, "verse_of_the_day")
    }
    pub fn can_lookup(&mut self) -> Result<(), FetchError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.lookup_behaviour, "lookup")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), FetchError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 = value.0 - 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else {
        if remaining_failures > 0 {
            value.1 = value.1 - 1;
            log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
            Err(FetchError::Malformed(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value)))
        } else {
            log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mock_behaviour() {
        let mut ok = MockBehaviour::new();
        assert!(ok.can_get_today().is_ok());
        assert!(ok.can_get_today().is_ok());
        assert!(ok.can_lookup().is_ok());

        let mut now = MockBehaviour::fail_now(2);
        assert!(now.can_get_today().is_err());
        assert!(now.can_lookup().is_err());
        assert!(now.can_lookup().is_err());
        assert!(now.can_get_today().is_err());
        assert!(now.can_get_today().is_ok());
        assert!(now.can_get_today().is_ok());
        assert!(now.can_lookup().is_ok());

        let mut custom = MockBehaviour{
            today_behaviour: (0,1),
            verse_of_the_day_behaviour: (1,3),
            ..MockBehaviour::default()
        };
        assert!(custom.can_get_today().is_err());
        assert!(custom.can_get_today().is_ok());
        assert!(custom.can_get_today().is_ok());
        assert!(custom.can_get_verse_of_the_day().is_ok());
        assert!(custom.can_get_verse_of_the_day().is_err());
        assert!(custom.can_get_verse_of_the_day().is_err());
        assert!(custom.can_get_verse_of_the_day().is_err());
        assert!(custom.can_get_verse_of_the_day().is_ok());
    }

    #[test]
    fn suspended_behaviour_allows_everything() {
        let mut behaviour = MockBehaviour::fail_now(1);
        behaviour.suspend();
        assert!(behaviour.can_get_today().is_ok());
        behaviour.resume();
        assert!(behaviour.can_get_today().is_err());
        assert!(behaviour.can_get_today().is_ok());
    }
}
