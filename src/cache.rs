//! This module provides a time-windowed cache for data fetched from remote sources

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::FetchError;

/// A value, and the time after which it should be fetched again
#[derive(Clone, Debug, PartialEq)]
pub struct CacheEntry<T> {
    value: T,
    expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Create an entry that is valid for `ttl` after `now`
    pub fn new(value: T, now: DateTime<Utc>, ttl: Duration) -> Self {
        let ttl = match chrono::Duration::from_std(ttl) {
            Ok(d) => d,
            Err(_) => {
                log::warn!("Cache lifetime {:?} is out of range, this entry will never expire", ttl);
                chrono::Duration::max_value()
            },
        };
        let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { value, expires_at }
    }

    pub fn value(&self) -> &T { &self.value }
    pub fn expires_at(&self) -> &DateTime<Utc> { &self.expires_at }

    /// Whether this entry can still be used at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}


/// The result of a fetch that never fails: it tells where the returned value comes from
#[derive(Debug)]
pub enum Fetched<T> {
    /// The value has just been retrieved from the remote source
    Fresh(T),
    /// The value comes from the cache, no request has been issued
    Cached(T),
    /// The remote source failed, this is a default value
    Fallback(T, FetchError),
}

impl<T> Fetched<T> {
    pub fn value(&self) -> &T {
        match self {
            Fetched::Fresh(v) => v,
            Fetched::Cached(v) => v,
            Fetched::Fallback(v, _) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Fresh(v) => v,
            Fetched::Cached(v) => v,
            Fetched::Fallback(v, _) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        match self {
            Fetched::Fallback(_, _) => true,
            _ => false,
        }
    }

    pub fn is_cached(&self) -> bool {
        match self {
            Fetched::Cached(_) => true,
            _ => false,
        }
    }

    /// The error that caused a fallback value to be used, if any
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Fetched::Fallback(_, err) => Some(err),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn entry_expiry() {
        let now = Utc.with_ymd_and_hms(2025, 12, 25, 8, 0, 0).unwrap();
        let entry = CacheEntry::new("Nativity of the Lord", now, Duration::from_secs(3600));

        assert_eq!(entry.value(), &"Nativity of the Lord");
        assert_eq!(entry.expires_at(), &Utc.with_ymd_and_hms(2025, 12, 25, 9, 0, 0).unwrap());
        assert!(entry.is_valid_at(now));
        assert!(entry.is_valid_at(Utc.with_ymd_and_hms(2025, 12, 25, 8, 59, 59).unwrap()));
        assert!(entry.is_valid_at(Utc.with_ymd_and_hms(2025, 12, 25, 9, 0, 0).unwrap()) == false);
        assert!(entry.is_valid_at(Utc.with_ymd_and_hms(2025, 12, 26, 8, 0, 0).unwrap()) == false);
    }

    #[test]
    fn zero_ttl_is_immediately_stale() {
        let now = Utc::now();
        let entry = CacheEntry::new(1, now, Duration::from_secs(0));
        assert!(entry.is_valid_at(now) == false);
    }

    #[test]
    fn fetched_accessors() {
        let fresh = Fetched::Fresh(3);
        assert!(fresh.is_fallback() == false);
        assert!(fresh.error().is_none());

        let fallback = Fetched::Fallback(0, FetchError::Malformed("empty body".to_string()));
        assert!(fallback.is_fallback());
        assert!(fallback.error().unwrap().is_malformed());
        assert_eq!(fallback.into_value(), 0);

        assert!(Fetched::Cached("x").is_cached());
    }
}
