//! Local sources that stand in for the remote APIs, for tests and offline demos
#![cfg(any(test, feature = "local_sources_mock_remote_sources"))]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::bible::Verse;
use crate::error::FetchError;
use crate::liturgy::LiturgicalDay;
use crate::mock_behaviour::MockBehaviour;
use crate::traits::{BibleSource, LiturgySource};

fn check(behaviour: &Option<Arc<Mutex<MockBehaviour>>>, can: fn(&mut MockBehaviour) -> Result<(), FetchError>) -> Result<(), FetchError> {
    match behaviour {
        None => Ok(()),
        Some(b) => match b.lock() {
            Ok(mut b) => can(&mut *b),
            Err(_) => Err(FetchError::Malformed("mock behaviour is poisoned".to_string())),
        },
    }
}


/// A liturgical source that always answers the same day (unless its mock behaviour says otherwise)
pub struct MockLiturgySource {
    day: LiturgicalDay,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
    requests: AtomicU32,
}

impl MockLiturgySource {
    pub fn new(day: LiturgicalDay) -> Self {
        Self { day, mock_behaviour: None, requests: AtomicU32::new(0) }
    }

    pub fn with_behaviour(day: LiturgicalDay, mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self { day, mock_behaviour: Some(mock_behaviour), requests: AtomicU32::new(0) }
    }

    /// How many times `today` has been called, failed calls included
    pub fn request_count(&self) -> u32 {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LiturgySource for MockLiturgySource {
    async fn today(&self) -> Result<LiturgicalDay, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        check(&self.mock_behaviour, MockBehaviour::can_get_today)?;
        Ok(self.day.clone())
    }
}


/// A source of verses backed by a map of known references
pub struct MockBibleSource {
    daily: Verse,
    passages: HashMap<String, Verse>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MockBibleSource {
    pub fn new(daily: Verse) -> Self {
        Self { daily, passages: HashMap::new(), mock_behaviour: None }
    }

    pub fn with_behaviour(daily: Verse, mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self { daily, passages: HashMap::new(), mock_behaviour: Some(mock_behaviour) }
    }

    pub fn add_passage(&mut self, verse: Verse) {
        self.passages.insert(verse.reference().to_lowercase(), verse);
    }
}

#[async_trait]
impl BibleSource for MockBibleSource {
    async fn verse_of_the_day(&self) -> Result<Verse, FetchError> {
        check(&self.mock_behaviour, MockBehaviour::can_get_verse_of_the_day)?;
        Ok(self.daily.clone())
    }

    async fn lookup(&self, reference: &str) -> Result<Verse, FetchError> {
        check(&self.mock_behaviour, MockBehaviour::can_lookup)?;
        match self.passages.get(&reference.trim().to_lowercase()) {
            None => Err(FetchError::Malformed(format!("no passage for {:?}", reference))),
            Some(v) => Ok(v.clone()),
        }
    }
}
