use async_trait::async_trait;

use crate::bible::Verse;
use crate::error::FetchError;
use crate::liturgy::LiturgicalDay;

/// A source that knows what today's celebration is
#[async_trait]
pub trait LiturgySource {
    /// Returns today's liturgical day.
    /// This may issue a network request, that can be slow or can fail
    async fn today(&self) -> Result<LiturgicalDay, FetchError>;
}

/// A source of Bible verses
#[async_trait]
pub trait BibleSource {
    /// Returns the verse of the day
    async fn verse_of_the_day(&self) -> Result<Verse, FetchError>;
    /// Returns the passage matching a free-text reference (e.g. `John 3:16`)
    async fn lookup(&self, reference: &str) -> Result<Verse, FetchError>;
}
