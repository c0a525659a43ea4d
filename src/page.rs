//! Navigation, and the contents of each page
//!
//! Pages are built as a list of [`Block`]s, that a front-end then displays.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use crossterm::style::{ContentStyle, Stylize};

use crate::bible::{Verse, VerseError};
use crate::content::{self, PrayerCategory, Prayer, Station};
use crate::liturgy::LiturgicalDay;
use crate::session::Session;
use crate::theme::Theme;

/// Width of the progress bar, in characters
const PROGRESS_BAR_WIDTH: usize = 20;

/// The entries of the navigation sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    DailyWord,
    PrayerLibrary,
    StationsOfTheCross,
    VirtueTracker,
    Confessional,
    SacredAudio,
}

impl Page {
    /// All pages, in navigation order
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::DailyWord,
        Page::PrayerLibrary,
        Page::StationsOfTheCross,
        Page::VirtueTracker,
        Page::Confessional,
        Page::SacredAudio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "🏠 Home",
            Page::DailyWord => "📖 Daily Word & Bible",
            Page::PrayerLibrary => "📿 Complete Prayer Library",
            Page::StationsOfTheCross => "✝️ Stations of the Cross",
            Page::VirtueTracker => "🛡️ Virtue Tracker",
            Page::Confessional => "🕊️ Confessional",
            Page::SacredAudio => "🎵 Sacred Audio",
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Page {
    type Err = String;

    /// Accepts a 1-based index, or any part of a label (case-insensitive), e.g. `3` or `prayer`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty page name".to_string());
        }
        if let Ok(index) = s.parse::<usize>() {
            return match index.checked_sub(1).and_then(|i| Self::ALL.get(i)) {
                Some(page) => Ok(*page),
                None => Err(format!("There is no page #{}", index)),
            };
        }
        let needle = s.to_lowercase();
        Self::ALL.iter()
            .find(|p| p.label().to_lowercase().contains(&needle))
            .copied()
            .ok_or_else(|| format!("Unknown page {:?}", s))
    }
}


/// An element of a page
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Title(String),
    Subtitle(String),
    /// A highlighted message, in green
    Success(String),
    /// A highlighted message, in blue
    Info(String),
    /// A highlighted message, in yellow
    Warning(String),
    /// A highlighted message, in red
    Error(String),
    Text(String),
    /// A progress bar, between 0.0 and 1.0
    Progress(f64),
    /// A stream to be handed over to an audio player
    Audio(String),
    /// A horizontal separator
    Rule,
}

impl Block {
    /// Render this block as terminal text. Titles and separators use the accent colour of `theme`
    pub fn render(&self, theme: &Theme) -> String {
        match self {
            Block::Title(t) => emphasize(&format!("=== {} ===", t), theme.style()),
            Block::Subtitle(t) => emphasize(&format!("--- {} ---", t), theme.style()),
            Block::Success(t) => emphasize(&format!("✔ {}", t), ContentStyle::new().green()),
            Block::Info(t) => emphasize(&format!("ℹ {}", t), ContentStyle::new().blue()),
            Block::Warning(t) => emphasize(t, ContentStyle::new().yellow()),
            Block::Error(t) => emphasize(&format!("✘ {}", t), ContentStyle::new().red()),
            Block::Text(t) => emphasize(t, ContentStyle::new()),
            Block::Progress(ratio) => progress_bar(*ratio),
            Block::Audio(url) => format!("♪ {}", url),
            Block::Rule => theme.paint(&"─".repeat(PROGRESS_BAR_WIDTH * 2)),
        }
    }
}

/// Render a whole page
pub fn render_page(blocks: &[Block], theme: &Theme) -> String {
    blocks.iter()
        .map(|b| b.render(theme))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies `style` to `text`, and renders its `**bold**` spans in bold too
fn emphasize(text: &str, style: ContentStyle) -> String {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| part.is_empty() == false)
        .map(|(i, part)| {
            let style = if i % 2 == 1 { style.bold() } else { style };
            style.apply(part).to_string()
        })
        .collect()
}

fn progress_bar(ratio: f64) -> String {
    let ratio = ratio.max(0.0).min(1.0);
    let filled = (ratio * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!("[{}{}] {:>3.0}%", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled), ratio * 100.0)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
    }
}


pub fn home(day: &LiturgicalDay, date: NaiveDate) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("Daily Sanctuary".to_string()),
        Block::Success(format!("**Feast:** {}", day.title())),
        Block::Info(format!("Today's Liturgical Color: **{}**", capitalize(day.colour()))),
    ];
    if let Some(season) = day.season() {
        let season = match day.season_week() {
            Some(week) => format!("Season: {}, week {}", capitalize(season), week),
            None => format!("Season: {}", capitalize(season)),
        };
        blocks.push(Block::Text(season));
    }
    blocks.push(Block::Text(format!("The Sidebar and buttons have turned **{}** to match the Church's season.", day.colour())));
    blocks.push(Block::Rule);
    blocks.push(Block::Subtitle("Saint's Quote of the Day".to_string()));
    blocks.push(Block::Warning(content::quote_for(date).to_string()));
    blocks.push(Block::Subtitle("📅 Upcoming Feasts & Colors".to_string()));
    blocks.extend(content::FEAST_COLOURS.iter().map(|line| Block::Text(line.to_string())));
    blocks
}

/// The "Today's Gospel" tab
pub fn daily_word(verse: &Result<Verse, VerseError>) -> Vec<Block> {
    match verse {
        Ok(v) => vec![
            Block::Subtitle(v.reference().to_string()),
            Block::Text(format!("**{}**", v.text())),
        ],
        Err(err) => vec![Block::Error(err.user_message().to_string())],
    }
}

/// The "Search Any Verse" tab
pub fn verse_search(verse: &Result<Verse, VerseError>) -> Vec<Block> {
    match verse {
        Ok(v) => {
            let mut blocks = vec![
                Block::Subtitle(v.reference().to_string()),
                Block::Text(v.text().to_string()),
            ];
            if let Some(translation) = v.translation() {
                blocks.push(Block::Text(format!("({})", translation)));
            }
            blocks
        },
        Err(err) => vec![Block::Error(err.user_message().to_string())],
    }
}

pub fn prayer_library(category: PrayerCategory, prayer: Option<&Prayer>) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("The Great Prayer Library".to_string()),
        Block::Subtitle(category.label().to_string()),
    ];
    if category == PrayerCategory::AllPsalms {
        blocks.push(Block::Text("Reading the Douay-Rheims version...".to_string()));
    }
    match prayer {
        Some(p) => blocks.push(Block::Text(format!("**{}:** {}", p.name, p.text))),
        None => {
            blocks.extend(category.prayers().iter().map(|p| Block::Text(format!("**{}:** {}", p.name, p.text))));
        },
    }
    blocks
}

pub fn station(station: &Station) -> Vec<Block> {
    vec![
        Block::Title("✝️ Way of the Cross".to_string()),
        Block::Subtitle(format!("Station {}", station.number)),
        Block::Text(format!("**{}**", station.title)),
        Block::Text(content::STATION_ANTIPHON.to_string()),
        Block::Text("Walk the path of Christ.".to_string()),
    ]
}

pub fn virtue_tracker(session: &Session) -> Vec<Block> {
    vec![
        Block::Title("🛡️ Virtue Tracker".to_string()),
        Block::Progress(session.progress()),
        Block::Text(format!("Holiness Score: {}", session.virtue_points())),
    ]
}

pub fn confessional() -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("🕊️ Confession Guide".to_string()),
        Block::Text(content::CONFESSION_OPENING.to_string()),
    ];
    blocks.extend(content::CONFESSION_STEPS.iter()
        .enumerate()
        .map(|(i, step)| Block::Text(format!("{}. {}", i + 1, step))));
    blocks.push(Block::Subtitle("Act of Contrition".to_string()));
    blocks.push(Block::Text(content::ACT_OF_CONTRITION.to_string()));
    blocks
}

pub fn sacred_audio(stream_url: &str) -> Vec<Block> {
    vec![
        Block::Title("🎵 Sacred Audio".to_string()),
        Block::Audio(stream_url.to_string()),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::FetchError;
    use crate::session::VirtueChecks;

    #[test]
    fn navigation() {
        assert_eq!(Page::ALL.len(), 7);
        assert_eq!("1".parse::<Page>(), Ok(Page::Home));
        assert_eq!("7".parse::<Page>(), Ok(Page::SacredAudio));
        assert_eq!("prayer".parse::<Page>(), Ok(Page::PrayerLibrary));
        assert_eq!(" Stations ".parse::<Page>(), Ok(Page::StationsOfTheCross));
        assert_eq!("🛡️ Virtue Tracker".parse::<Page>(), Ok(Page::VirtueTracker));
        assert!("0".parse::<Page>().is_err());
        assert!("8".parse::<Page>().is_err());
        assert!("".parse::<Page>().is_err());
        assert!("rosary".parse::<Page>().is_err());
    }

    #[test]
    fn home_page() {
        let day = LiturgicalDay::new("Saint Stephen, the first martyr", "red", "feast");
        let blocks = home(&day, NaiveDate::from_ymd_opt(2025, 12, 26).unwrap());
        assert_eq!(blocks[0], Block::Title("Daily Sanctuary".to_string()));
        assert!(blocks.contains(&Block::Success("**Feast:** Saint Stephen, the first martyr".to_string())));
        assert!(blocks.contains(&Block::Info("Today's Liturgical Color: **Red**".to_string())));
        assert_eq!(blocks.iter().filter(|b| matches!(b, Block::Warning(_))).count(), 1);
    }

    #[test]
    fn verse_error_is_shown_alone() {
        let blocks = daily_word(&Err(VerseError::DailyVerseUnavailable(FetchError::Malformed("x".to_string()))));
        assert_eq!(blocks, vec![Block::Error("Bible server offline.".to_string())]);
    }

    #[test]
    fn virtue_page() {
        let mut session = Session::new();
        session.log_progress(VirtueChecks::new(true, false));
        let blocks = virtue_tracker(&session);
        assert!(blocks.contains(&Block::Progress(1.0 / 50.0)));
        assert!(blocks.contains(&Block::Text("Holiness Score: 1".to_string())));
    }

    #[test]
    fn rendering() {
        assert_eq!(emphasize("**Feast:** Epiphany", ContentStyle::new()), format!("{}{}", "Feast:".bold(), " Epiphany"));
        assert_eq!(emphasize("no emphasis", ContentStyle::new()), "no emphasis");
        assert_eq!(progress_bar(0.5), format!("[{}{}]  50%", "█".repeat(10), "░".repeat(10)));
        assert_eq!(progress_bar(3.0), format!("[{}] 100%", "█".repeat(20)));
        assert_eq!(capitalize("violet"), "Violet");
        assert_eq!(capitalize(""), "");

        let page = render_page(&sacred_audio("https://example.com/a.mp3"), &Theme::default());
        assert!(page.ends_with("♪ https://example.com/a.mp3"));
    }

    #[test]
    fn blocks_are_styled() {
        let theme = Theme::from_color(crate::color::LiturgicalColor::Violet);
        assert_eq!(Block::Success("Amen".to_string()).render(&theme), "✔ Amen".green().to_string());
        assert_eq!(Block::Error("Verse not found.".to_string()).render(&theme), "✘ Verse not found.".red().to_string());
        assert_eq!(Block::Title("Pax".to_string()).render(&theme), theme.paint("=== Pax ==="));
        assert_eq!(
            Block::Info("Color: **Violet**".to_string()).render(&theme),
            format!("{}{}", "ℹ Color: ".blue(), "Violet".blue().bold()),
        );
        assert_eq!(Block::Text("plain".to_string()).render(&theme), "plain");
    }
}
