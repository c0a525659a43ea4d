//! This modules combines a liturgical source with a time-windowed cache and a fallback day
//!
//! Callers always get a valid [`LiturgicalDay`], and can still tell whether it is genuine.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::{CacheEntry, Fetched};
use crate::config;
use crate::liturgy::LiturgicalDay;
use crate::traits::LiturgySource;

/// A data source that wraps a `LiturgySource` (usually a [`CalendarClient`](crate::client::CalendarClient)).
///
/// The fetched day is kept for a time window (one hour by default), during which no request is issued.
/// When the source fails, the default day is kept for the same window.
pub struct LiturgyProvider<S>
where
    S: LiturgySource,
{
    /// The remote source (usually a server)
    remote: S,
    /// How long a fetched day is reused
    ttl: Duration,
    /// The last fetched day, or the default one if that fetch failed
    entry: Option<CacheEntry<LiturgicalDay>>,
}

impl<S> LiturgyProvider<S>
where
    S: LiturgySource,
{
    /// Create a provider, that caches days for [`config::LITURGY_CACHE_TTL`]
    pub fn new(remote: S) -> Self {
        Self::with_ttl(remote, config::LITURGY_CACHE_TTL)
    }

    pub fn with_ttl(remote: S, ttl: Duration) -> Self {
        Self { remote, ttl, entry: None }
    }

    /// Returns the wrapped source.
    pub fn remote(&self) -> &S { &self.remote }

    /// Returns the cached entry, if any (it may be expired)
    pub fn entry(&self) -> Option<&CacheEntry<LiturgicalDay>> { self.entry.as_ref() }

    /// Forget the cached day, so that the next fetch issues a request
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Returns today's liturgical day, see [`Self::fetch_at`]
    pub async fn fetch(&mut self) -> Fetched<LiturgicalDay> {
        self.fetch_at(Utc::now()).await
    }

    /// Returns today's liturgical day, considering the current time is `now`.
    ///
    /// This returns the cached day if it is still valid at `now`. \
    /// Otherwise this asks the remote source. In case it fails, [`LiturgicalDay::default`] is returned, along with the reason of the failure,
    /// and it is cached just like a successful answer.
    pub async fn fetch_at(&mut self, now: DateTime<Utc>) -> Fetched<LiturgicalDay> {
        if let Some(entry) = &self.entry {
            if entry.is_valid_at(now) {
                log::debug!("Liturgical day is already cached (until {})", entry.expires_at());
                return Fetched::Cached(entry.value().clone());
            }
            log::debug!("Cached liturgical day has expired at {}", entry.expires_at());
        }

        match self.remote.today().await {
            Ok(day) => {
                self.entry = Some(CacheEntry::new(day.clone(), now, self.ttl));
                Fetched::Fresh(day)
            },
            Err(err) => {
                log::warn!("Unable to fetch the liturgical day: {}. Using the default one", err);
                let day = LiturgicalDay::default();
                self.entry = Some(CacheEntry::new(day.clone(), now, self.ttl));
                Fetched::Fallback(day, err)
            },
        }
    }
}

/// Returns today's `(title, colour, rank)`, whatever happens
pub async fn fetch_liturgy<S: LiturgySource>(provider: &mut LiturgyProvider<S>) -> (String, String, String) {
    provider.fetch().await.into_value().into_triple()
}
