//! This crate provides a daily devotional companion.
//!
//! It fetches today's celebration from a liturgical calendar API with the [`CalendarClient`](client::CalendarClient), and Bible verses from a Bible API with the [`BibleClient`](client::BibleClient).
//!
//! Because these servers may be slow or unreachable, today's celebration is fetched through a [`LiturgyProvider`](provider::LiturgyProvider). \
//! A `LiturgyProvider` caches the celebration for an hour, and falls back to a default day (Ordinary Time, green) whenever the server fails. \
//! The colour of the day is then turned into a [`Theme`](theme::Theme) by the [`color`] module.
//!
//! The [`Sanctuary`] ties everything together with the per-session [virtue tracker](session), and builds the [pages](page) of the application.

pub mod traits;
pub mod config;
pub mod error;
pub use error::FetchError;

pub mod liturgy;
pub use liturgy::LiturgicalDay;
pub mod bible;
pub use bible::Verse;
pub mod color;
pub use color::{resolve_color, LiturgicalColor};
pub mod theme;

pub mod client;
pub mod cache;
pub mod provider;
pub use provider::LiturgyProvider;

pub mod session;
pub mod content;
pub mod page;
mod app;
pub use app::Sanctuary;

pub mod utils;

pub mod mock_behaviour;
pub mod mock;
