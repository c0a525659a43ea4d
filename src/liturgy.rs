//! The liturgical day, as described by the liturgical calendar API

use chrono::NaiveDate;
use serde::Deserialize;

use crate::color::LiturgicalColor;
use crate::error::FetchError;

/// What the calendar says about a given day.
///
/// Only the first celebration of the day is kept, since it is the one that gives its colour to the day.
#[derive(Clone, Debug, PartialEq)]
pub struct LiturgicalDay {
    /// The feast or observance, e.g. `Saint Agnes, virgin and martyr`
    title: String,
    /// The colour name, as spelled by the API (`green`, `violet`, `red`, `white`...)
    colour: String,
    /// e.g. `ferial`, `memorial`, `feast`, `solemnity`
    rank: String,

    date: Option<NaiveDate>,
    season: Option<String>,
    season_week: Option<u32>,
    weekday: Option<String>,
}

impl Default for LiturgicalDay {
    /// The day that is used whenever the calendar cannot be reached
    fn default() -> Self {
        Self::new("Ordinary Time", "green", "ferial")
    }
}

impl LiturgicalDay {
    pub fn new<S: ToString, T: ToString, U: ToString>(title: S, colour: T, rank: U) -> Self {
        Self {
            title: title.to_string(),
            colour: colour.to_string(),
            rank: rank.to_string(),
            date: None,
            season: None,
            season_week: None,
            weekday: None,
        }
    }

    pub fn title(&self) -> &str     { &self.title  }
    pub fn colour(&self) -> &str    { &self.colour }
    pub fn rank(&self) -> &str      { &self.rank   }
    pub fn date(&self) -> Option<NaiveDate>     { self.date }
    pub fn season(&self) -> Option<&str>        { self.season.as_deref() }
    pub fn season_week(&self) -> Option<u32>    { self.season_week }
    pub fn weekday(&self) -> Option<&str>       { self.weekday.as_deref() }

    /// The colour this day should be displayed with
    pub fn liturgical_color(&self) -> LiturgicalColor {
        LiturgicalColor::from_name(&self.colour)
    }

    /// The `(title, colour, rank)` triple
    pub fn into_triple(self) -> (String, String, String) {
        (self.title, self.colour, self.rank)
    }

    /// Parse the body returned by `/api/v1/calendars/<calendar>/<day>`
    pub fn from_api_response(body: &str) -> Result<Self, FetchError> {
        let response: DayResponse = serde_json::from_str(body)?;

        let first = match response.celebrations.into_iter().next() {
            None => return Err(FetchError::Malformed("no celebration in the calendar response".to_string())),
            Some(c) => c,
        };

        Ok(Self {
            title: first.title,
            colour: first.colour,
            rank: first.rank,
            date: response.date,
            season: response.season,
            season_week: response.season_week,
            weekday: response.weekday,
        })
    }
}


#[derive(Deserialize)]
struct DayResponse {
    celebrations: Vec<Celebration>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    season: Option<String>,
    #[serde(default)]
    season_week: Option<u32>,
    #[serde(default)]
    weekday: Option<String>,
}

#[derive(Deserialize)]
struct Celebration {
    title: String,
    colour: String,
    rank: String,
}
