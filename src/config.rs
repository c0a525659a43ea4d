//! Support for library configuration options

use std::sync::{Arc, Mutex};
use std::time::Duration;

use once_cell::sync::Lazy;

/// Base URL of the liturgical calendar API.
/// Feel free to override it when initing this library (e.g. to point to a mirror, or to a mock server in tests).
pub static CALENDAR_API_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("http://calapi.inadiutorium.cz".to_string())));

/// Base URL of the Bible text API.
/// Feel free to override it when initing this library.
pub static BIBLE_API_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("https://bible-api.com".to_string())));

/// Translation code sent to the Bible API (`dra` is the Douay-Rheims version)
pub static TRANSLATION: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("dra".to_string())));

/// The stream that is handed over to the audio player of the "Sacred Audio" page
pub static AUDIO_STREAM_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3".to_string())));

/// Timeout of every outbound HTTP request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a fetched liturgical day stays valid
pub const LITURGY_CACHE_TTL: Duration = Duration::from_secs(3600);

/// The virtue score at which the progress bar is full
pub const VIRTUE_GOAL: u32 = 50;


/// Returns the current value of a string setting.
///
/// A poisoned setting still holds a valid `String`, so its value is returned anyway.
pub fn get(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Overrides a string setting
pub fn set<S: ToString>(setting: &Lazy<Arc<Mutex<String>>>, value: S) {
    match setting.lock() {
        Ok(mut current) => *current = value.to_string(),
        Err(poisoned) => *poisoned.into_inner() = value.to_string(),
    }
}
