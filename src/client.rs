//! This module provides the HTTP clients of the liturgical calendar and of the Bible APIs

use std::error::Error;

use async_trait::async_trait;
use url::Url;

use crate::bible::Verse;
use crate::config;
use crate::error::FetchError;
use crate::liturgy::LiturgicalDay;
use crate::traits::{BibleSource, LiturgySource};

/// The calendar that is queried: the General Roman Calendar, in English
const CALENDAR_TODAY_PATH: &str = "api/v1/calendars/general-en/today";


fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(config::REQUEST_TIMEOUT)
        .build()
}

/// Issue a GET request, and return the body of a successful response
async fn get_text(http: &reqwest::Client, url: Url) -> Result<String, FetchError> {
    log::debug!("GET {}", url);
    let response = http.get(url).send().await?;

    if response.status().is_success() == false {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().await?;
    Ok(text)
}

/// Append a path to a base URL, whether the base ends with a slash or not
fn join_path(base: &Url, path: &str) -> Result<Url, FetchError> {
    let full = format!("{}/{}", base.as_str().trim_end_matches('/'), path);
    Url::parse(&full).map_err(|err| FetchError::Malformed(format!("invalid URL {:?}: {}", full, err)))
}


/// A liturgical source that fetches its data from the liturgical calendar API
pub struct CalendarClient {
    url: Url,
    http: reqwest::Client,
}

impl CalendarClient {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        let http = build_http_client()?;
        Ok(Self{ url, http })
    }

    /// Create a client for the API set in [`config::CALENDAR_API_URL`]
    pub fn from_config() -> Result<Self, Box<dyn Error>> {
        Self::new(config::get(&config::CALENDAR_API_URL))
    }

    pub fn url(&self) -> &Url { &self.url }
}

#[async_trait]
impl LiturgySource for CalendarClient {
    async fn today(&self) -> Result<LiturgicalDay, FetchError> {
        let url = join_path(&self.url, CALENDAR_TODAY_PATH)?;
        let text = get_text(&self.http, url).await?;
        let day = LiturgicalDay::from_api_response(&text)?;
        log::info!("Today is {} ({}, {})", day.title(), day.colour(), day.rank());
        Ok(day)
    }
}


/// A source of verses that fetches them from the Bible API
pub struct BibleClient {
    url: Url,
    translation: String,
    http: reqwest::Client,
}

impl BibleClient {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>, T: ToString>(url: S, translation: T) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        let http = build_http_client()?;
        Ok(Self{
            url,
            translation: translation.to_string(),
            http,
        })
    }

    /// Create a client for the API and translation set in [`config`]
    pub fn from_config() -> Result<Self, Box<dyn Error>> {
        Self::new(config::get(&config::BIBLE_API_URL), config::get(&config::TRANSLATION))
    }

    pub fn translation(&self) -> &str { &self.translation }

    fn with_translation(&self, mut url: Url) -> Url {
        url.query_pairs_mut().append_pair("translation", &self.translation);
        url
    }
}

#[async_trait]
impl BibleSource for BibleClient {
    async fn verse_of_the_day(&self) -> Result<Verse, FetchError> {
        let url = self.with_translation(join_path(&self.url, "verse_of_the_day")?);
        let text = get_text(&self.http, url).await?;
        Verse::from_verse_of_the_day(&text)
    }

    async fn lookup(&self, reference: &str) -> Result<Verse, FetchError> {
        let mut url = self.url.clone();
        match url.path_segments_mut() {
            Err(_) => return Err(FetchError::Malformed(format!("{} cannot be used as a base URL", self.url))),
            Ok(mut segments) => {
                segments.pop_if_empty().push(reference.trim());
            },
        }
        let url = self.with_translation(url);
        let text = get_text(&self.http, url).await?;
        Verse::from_lookup(&text)
    }
}
