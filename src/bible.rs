//! Bible verses, as returned by the Bible text API

use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::error::FetchError;

/// A passage of Scripture
#[derive(Clone, Debug, PartialEq)]
pub struct Verse {
    /// e.g. `John 3:16`
    reference: String,
    text: String,
    /// e.g. `Douay-Rheims 1899 American Edition`, when the API tells it
    translation: Option<String>,
}

impl Verse {
    pub fn new<S: ToString, T: ToString>(reference: S, text: T) -> Self {
        Self {
            reference: reference.to_string(),
            text: text.to_string(),
            translation: None,
        }
    }

    pub fn reference(&self) -> &str { &self.reference }
    pub fn text(&self) -> &str { self.text.trim() }
    pub fn translation(&self) -> Option<&str> { self.translation.as_deref() }

    /// Parse the body returned by `/verse_of_the_day`, that nests the passage into a `verse` object
    pub fn from_verse_of_the_day(body: &str) -> Result<Self, FetchError> {
        let response: VerseOfTheDayResponse = serde_json::from_str(body)?;
        let verse = match response.verse {
            None => return Err(FetchError::Malformed("no verse in the verse of the day response".to_string())),
            Some(v) => v,
        };
        match (verse.name, verse.text) {
            (Some(name), Some(text)) => Ok(Self {
                reference: name,
                text,
                translation: response.translation_name,
            }),
            _ => Err(FetchError::Malformed("the verse of the day has no name or no text".to_string())),
        }
    }

    /// Parse the body returned by `/<reference>`
    pub fn from_lookup(body: &str) -> Result<Self, FetchError> {
        let response: LookupResponse = serde_json::from_str(body)?;
        match (response.reference, response.text) {
            (Some(reference), Some(text)) => Ok(Self {
                reference,
                text,
                translation: response.translation_name,
            }),
            _ => Err(FetchError::Malformed(match response.error {
                Some(err) => format!("the server returned no text ({})", err),
                None => "the server returned no text".to_string(),
            })),
        }
    }
}

#[derive(Deserialize)]
struct VerseOfTheDayResponse {
    #[serde(default)]
    verse: Option<NamedVerse>,
    #[serde(default)]
    translation_name: Option<String>,
}

#[derive(Deserialize)]
struct NamedVerse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    translation_name: Option<String>,
    #[serde(default)]
    error: Option<String>,
}


/// A failed verse request, as it should be reported to the user
#[derive(Debug)]
pub enum VerseError {
    /// The verse of the day could not be retrieved
    DailyVerseUnavailable(FetchError),
    /// The user did not type any reference
    EmptyReference,
    /// The reference could not be looked up
    NotFound { reference: String, cause: FetchError },
}

impl VerseError {
    /// The message to display in place of the verse
    pub fn user_message(&self) -> &'static str {
        match self {
            VerseError::DailyVerseUnavailable(_) => "Bible server offline.",
            VerseError::EmptyReference => "Please type a reference, e.g. John 3:16.",
            VerseError::NotFound{ .. } => "Verse not found.",
        }
    }
}

impl Display for VerseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VerseError::DailyVerseUnavailable(cause) => write!(f, "unable to fetch the verse of the day: {}", cause),
            VerseError::EmptyReference => write!(f, "empty verse reference"),
            VerseError::NotFound{ reference, cause } => write!(f, "unable to look up {:?}: {}", reference, cause),
        }
    }
}

impl std::error::Error for VerseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerseError::DailyVerseUnavailable(cause) => Some(cause),
            VerseError::EmptyReference => None,
            VerseError::NotFound{ cause, .. } => Some(cause),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_of_the_day() {
        let body = r#"{"verse": {"name": "Psalm 46:10", "text": "Be still and see that I am God.\n"}, "translation_name": "Douay-Rheims 1899 American Edition"}"#;
        let verse = Verse::from_verse_of_the_day(body).unwrap();
        assert_eq!(verse.reference(), "Psalm 46:10");
        assert_eq!(verse.text(), "Be still and see that I am God.");
        assert_eq!(verse.translation(), Some("Douay-Rheims 1899 American Edition"));
    }

    #[test]
    fn verse_of_the_day_missing_fields() {
        assert!(Verse::from_verse_of_the_day(r#"{}"#).unwrap_err().is_malformed());
        assert!(Verse::from_verse_of_the_day(r#"{"verse": {"name": "Psalm 46:10"}}"#).unwrap_err().is_malformed());
        assert!(Verse::from_verse_of_the_day("not json").unwrap_err().is_malformed());
    }

    #[test]
    fn lookup() {
        let body = r#"{
            "reference": "John 3:16",
            "verses": [{"book_id": "JHN", "book_name": "John", "chapter": 3, "verse": 16, "text": "For God so loved the world..."}],
            "text": "For God so loved the world...\n",
            "translation_id": "dra",
            "translation_name": "Douay-Rheims 1899 American Edition"
        }"#;
        let verse = Verse::from_lookup(body).unwrap();
        assert_eq!(verse.reference(), "John 3:16");
        assert_eq!(verse.text(), "For God so loved the world...");
    }

    #[test]
    fn lookup_not_found() {
        let err = Verse::from_lookup(r#"{"error": "not found"}"#).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn user_messages() {
        let offline = VerseError::DailyVerseUnavailable(FetchError::Malformed("x".to_string()));
        assert_eq!(offline.user_message(), "Bible server offline.");
        let missing = VerseError::NotFound{ reference: "Hezekiah 1:1".to_string(), cause: FetchError::Malformed("x".to_string()) };
        assert_eq!(missing.user_message(), "Verse not found.");
        assert!(missing.to_string().contains("Hezekiah 1:1"));
    }
}
