//! The application state, shared by every page

use chrono::NaiveDate;
use uuid::Uuid;

use crate::bible::{Verse, VerseError};
use crate::cache::Fetched;
use crate::config;
use crate::content::{self, PrayerCategory};
use crate::liturgy::LiturgicalDay;
use crate::page::{self, Block};
use crate::provider::LiturgyProvider;
use crate::session::{SessionStore, VirtueChecks};
use crate::theme::Theme;
use crate::traits::{BibleSource, LiturgySource};

/// Ties the remote sources and the sessions together, and builds the pages
pub struct Sanctuary<L, B>
where
    L: LiturgySource,
    B: BibleSource,
{
    liturgy: LiturgyProvider<L>,
    bible: B,
    sessions: SessionStore,
}

impl<L, B> Sanctuary<L, B>
where
    L: LiturgySource,
    B: BibleSource,
{
    pub fn new(liturgy: LiturgyProvider<L>, bible: B) -> Self {
        Self {
            liturgy,
            bible,
            sessions: SessionStore::new(),
        }
    }

    pub fn liturgy(&self) -> &LiturgyProvider<L> { &self.liturgy }
    pub fn sessions(&self) -> &SessionStore { &self.sessions }
    pub fn sessions_mut(&mut self) -> &mut SessionStore { &mut self.sessions }

    /// Today's liturgical day. This is cached, and never fails
    pub async fn today(&mut self) -> Fetched<LiturgicalDay> {
        self.liturgy.fetch().await
    }

    /// The theme matching today's liturgical colour
    pub async fn theme(&mut self) -> Theme {
        let day = self.today().await.into_value();
        Theme::from_color(day.liturgical_color())
    }

    pub async fn verse_of_the_day(&self) -> Result<Verse, VerseError> {
        self.bible.verse_of_the_day().await
            .map_err(|err| {
                log::warn!("Unable to fetch the verse of the day: {}", err);
                VerseError::DailyVerseUnavailable(err)
            })
    }

    pub async fn search_verse(&self, reference: &str) -> Result<Verse, VerseError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(VerseError::EmptyReference);
        }
        self.bible.lookup(reference).await
            .map_err(|err| {
                log::warn!("Unable to look up {:?}: {}", reference, err);
                VerseError::NotFound{ reference: reference.to_string(), cause: err }
            })
    }

    pub async fn home_page(&mut self, date: NaiveDate) -> Vec<Block> {
        let day = self.today().await.into_value();
        page::home(&day, date)
    }

    pub async fn daily_word_page(&self) -> Vec<Block> {
        page::daily_word(&self.verse_of_the_day().await)
    }

    pub async fn verse_search_page(&self, reference: &str) -> Vec<Block> {
        page::verse_search(&self.search_verse(reference).await)
    }

    /// The prayer library, showing either a single prayer of `category` or all of them
    pub fn prayer_library_page(&self, category: PrayerCategory, prayer_name: Option<&str>) -> Vec<Block> {
        let prayer = prayer_name.and_then(|name| category.find(name));
        page::prayer_library(category, prayer)
    }

    /// Returns `None` if `number` is not between 1 and 14
    pub fn station_page(&self, number: u8) -> Option<Vec<Block>> {
        content::station(number).map(page::station)
    }

    /// The virtue tracker of a session. When `log` is `Some`, the checked virtues are added to the score first (i.e. the "Log Progress" button has been pressed)
    pub fn virtue_tracker_page(&mut self, session_id: &Uuid, log: Option<VirtueChecks>) -> Option<Vec<Block>> {
        let session = self.sessions.get_mut(session_id)?;
        if let Some(checks) = log {
            session.log_progress(checks);
        }
        Some(page::virtue_tracker(session))
    }

    pub fn confessional_page(&self) -> Vec<Block> {
        page::confessional()
    }

    pub fn sacred_audio_page(&self) -> Vec<Block> {
        page::sacred_audio(&config::get(&config::AUDIO_STREAM_URL))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use crate::mock::{MockBibleSource, MockLiturgySource};
    use crate::mock_behaviour::MockBehaviour;
    use crate::color::LiturgicalColor;

    fn build(behaviour: MockBehaviour) -> Sanctuary<MockLiturgySource, MockBibleSource> {
        let behaviour = Arc::new(Mutex::new(behaviour));
        let day = LiturgicalDay::new("Ash Wednesday", "violet", "primary liturgical days");
        let liturgy = LiturgyProvider::new(MockLiturgySource::with_behaviour(day, behaviour.clone()));
        let mut bible = MockBibleSource::with_behaviour(Verse::new("Joel 2:13", "Rend your hearts, and not your garments."), behaviour);
        bible.add_passage(Verse::new("John 3:16", "For God so loved the world, as to give his only begotten Son."));
        Sanctuary::new(liturgy, bible)
    }

    #[tokio::test]
    async fn themed_by_the_day() {
        let mut app = build(MockBehaviour::new());
        assert_eq!(app.theme().await.color(), LiturgicalColor::Violet);
        assert_eq!(app.theme().await.accent_hex(), "#4B0082");
        assert_eq!(app.liturgy().remote().request_count(), 1);
    }

    #[tokio::test]
    async fn offline_day_is_green() {
        let mut app = build(MockBehaviour::fail_now(1));
        assert_eq!(app.theme().await.color(), LiturgicalColor::Green);
    }

    #[tokio::test]
    async fn verses() {
        let app = build(MockBehaviour::new());
        assert_eq!(app.verse_of_the_day().await.unwrap().reference(), "Joel 2:13");
        assert_eq!(app.search_verse(" john 3:16 ").await.unwrap().reference(), "John 3:16");
        assert!(matches!(app.search_verse("   ").await, Err(VerseError::EmptyReference)));
        assert!(matches!(app.search_verse("Jude 2:1").await, Err(VerseError::NotFound{ .. })));
    }

    #[tokio::test]
    async fn offline_bible() {
        let app = build(MockBehaviour::fail_now(1));
        let blocks = app.daily_word_page().await;
        assert_eq!(blocks, vec![Block::Error("Bible server offline.".to_string())]);
    }

    #[test]
    fn virtue_tracker_per_session() {
        let mut app = build(MockBehaviour::new());
        let id = app.sessions_mut().open();
        let other = app.sessions_mut().open();

        app.virtue_tracker_page(&id, Some(VirtueChecks::new(true, true))).unwrap();
        let blocks = app.virtue_tracker_page(&id, Some(VirtueChecks::new(true, false))).unwrap();
        assert!(blocks.contains(&Block::Text("Holiness Score: 3".to_string())));

        let blocks = app.virtue_tracker_page(&other, None).unwrap();
        assert!(blocks.contains(&Block::Text("Holiness Score: 0".to_string())));

        assert!(app.virtue_tracker_page(&Uuid::new_v4(), None).is_none());
    }

    #[test]
    fn static_pages() {
        let app = build(MockBehaviour::new());
        assert!(app.station_page(0).is_none());
        assert!(app.station_page(7).unwrap().contains(&Block::Subtitle("Station 7".to_string())));
        let psalm = app.prayer_library_page(PrayerCategory::AllPsalms, Some("Psalm 130"));
        assert!(psalm.iter().any(|b| matches!(b, Block::Text(t) if t.starts_with("**Psalm 130:**"))));
        assert!(app.sacred_audio_page().iter().any(|b| matches!(b, Block::Audio(_))));
    }
}
