//! Static devotional content: quotes, prayers, psalms and the Way of the Cross
//!
//! Scripture excerpts follow the Douay-Rheims version, with the psalms named after their usual (Hebrew) numbering.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

pub static QUOTES: [&str; 3] = [
    "“Pray, hope, and don’t worry.” – St. Padre Pio",
    "“The world offers you comfort. But you were not made for comfort. You were made for greatness.” – Pope Benedict XVI",
    "“Be who God meant you to be and you will set the world on fire.” – St. Catherine of Siena",
];

/// The saint's quote of a given day. It changes every day, and is the same during the whole day
pub fn quote_for(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal0() as usize % QUOTES.len()]
}

/// What each colour of the liturgical year stands for
pub static FEAST_COLOURS: [&str; 4] = [
    "🟢 **Ordinary Time:** Green (Growth)",
    "🟣 **Lent/Advent:** Purple (Penance)",
    "🟡 **Feasts/Christmas:** Gold (Joy/Glory)",
    "🔴 **Martyrs/Pentecost:** Red (Blood/Fire)",
];


/// A titled prayer or passage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prayer {
    pub name: &'static str,
    pub text: &'static str,
}

pub static PSALMS: [Prayer; 5] = [
    Prayer {
        name: "Psalm 23",
        text: "The Lord ruleth me: and I shall want nothing. He hath set me in a place of pasture. He hath brought me up, on the water of refreshment: he hath converted my soul.",
    },
    Prayer {
        name: "Psalm 51",
        text: "Have mercy on me, O God, according to thy great mercy. And according to the multitude of thy tender mercies blot out my iniquity. Wash me yet more from my iniquity, and cleanse me from my sin.",
    },
    Prayer {
        name: "Psalm 91",
        text: "He that dwelleth in the aid of the most High, shall abide under the protection of the God of Jacob. He shall say to the Lord: Thou art my protector, and my refuge: my God, in him will I trust.",
    },
    Prayer {
        name: "Psalm 130",
        text: "Out of the depths I have cried to thee, O Lord: Lord, hear my voice. Let thy ears be attentive to the voice of my supplication.",
    },
    Prayer {
        name: "Psalm 150",
        text: "Praise ye the Lord in his holy places: praise ye him in the firmament of his power. Praise ye him for his mighty acts: praise ye him according to the multitude of his greatness.",
    },
];

pub static DAILY_PRAYERS: [Prayer; 2] = [
    Prayer {
        name: "Morning Offering",
        text: "O Jesus, through the Immaculate Heart of Mary, I offer You my prayers, works, joys, and sufferings of this day for all the intentions of Your Sacred Heart, in union with the Holy Sacrifice of the Mass throughout the world.",
    },
    Prayer {
        name: "Our Father",
        text: "Our Father, who art in heaven, hallowed be thy name; thy kingdom come, thy will be done on earth as it is in heaven. Give us this day our daily bread, and forgive us our trespasses, as we forgive those who trespass against us; and lead us not into temptation, but deliver us from evil. Amen.",
    },
];

pub static MARIAN_DEVOTIONS: [Prayer; 2] = [
    Prayer {
        name: "Hail Mary",
        text: "Hail Mary, full of grace, the Lord is with thee. Blessed art thou among women, and blessed is the fruit of thy womb, Jesus. Holy Mary, Mother of God, pray for us sinners, now and at the hour of our death. Amen.",
    },
    Prayer {
        name: "Memorare",
        text: "Remember, O most gracious Virgin Mary, that never was it known that anyone who fled to thy protection, implored thy help, or sought thy intercession was left unaided. Inspired by this confidence, I fly unto thee, O Virgin of virgins, my Mother. Amen.",
    },
];


/// The sections of the prayer library
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrayerCategory {
    AllPsalms,
    DailyPrayers,
    MarianDevotions,
}

impl PrayerCategory {
    pub const ALL: [PrayerCategory; 3] = [
        PrayerCategory::AllPsalms,
        PrayerCategory::DailyPrayers,
        PrayerCategory::MarianDevotions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrayerCategory::AllPsalms => "All Psalms",
            PrayerCategory::DailyPrayers => "Daily Prayers",
            PrayerCategory::MarianDevotions => "Marian Devotions",
        }
    }

    pub fn prayers(&self) -> &'static [Prayer] {
        match self {
            PrayerCategory::AllPsalms => &PSALMS,
            PrayerCategory::DailyPrayers => &DAILY_PRAYERS,
            PrayerCategory::MarianDevotions => &MARIAN_DEVOTIONS,
        }
    }

    /// Find a prayer of this category by its name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&'static Prayer> {
        let name = name.trim();
        self.prayers().iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Display for PrayerCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PrayerCategory {
    type Err = String;

    /// Accepts a 1-based index, or the label (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return match index.checked_sub(1).and_then(|i| Self::ALL.get(i)) {
                Some(category) => Ok(*category),
                None => Err(format!("There is no prayer category #{}", index)),
            };
        }
        Self::ALL.iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown prayer category {:?}", s))
    }
}


/// A station of the Way of the Cross
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Station {
    /// From 1 to 14
    pub number: u8,
    pub title: &'static str,
}

pub static STATIONS: [Station; 14] = [
    Station { number: 1,  title: "Jesus is condemned to death" },
    Station { number: 2,  title: "Jesus takes up His Cross" },
    Station { number: 3,  title: "Jesus falls the first time" },
    Station { number: 4,  title: "Jesus meets His Mother" },
    Station { number: 5,  title: "Simon of Cyrene helps Jesus carry the Cross" },
    Station { number: 6,  title: "Veronica wipes the face of Jesus" },
    Station { number: 7,  title: "Jesus falls the second time" },
    Station { number: 8,  title: "Jesus meets the women of Jerusalem" },
    Station { number: 9,  title: "Jesus falls the third time" },
    Station { number: 10, title: "Jesus is stripped of His garments" },
    Station { number: 11, title: "Jesus is nailed to the Cross" },
    Station { number: 12, title: "Jesus dies on the Cross" },
    Station { number: 13, title: "Jesus is taken down from the Cross" },
    Station { number: 14, title: "Jesus is laid in the tomb" },
];

/// Prayed at every station
pub const STATION_ANTIPHON: &str = "We adore You, O Christ, and we praise You, because by Your holy Cross You have redeemed the world.";

/// Returns the station `number` (1 to 14)
pub fn station(number: u8) -> Option<&'static Station> {
    STATIONS.iter().find(|s| s.number == number)
}


pub const CONFESSION_OPENING: &str = "Bless me Father, for I have sinned...";

pub static CONFESSION_STEPS: [&str; 5] = [
    "Examine your conscience before entering the confessional.",
    "Make the Sign of the Cross and say: \"Bless me Father, for I have sinned. It has been [time] since my last confession.\"",
    "Confess your sins, then listen to the priest's counsel and accept your penance.",
    "Pray the Act of Contrition.",
    "Receive absolution, and thank God for His mercy.",
];

pub const ACT_OF_CONTRITION: &str = "O my God, I am heartily sorry for having offended Thee, and I detest all my sins because of Thy just punishments, but most of all because they offend Thee, my God, who art all good and deserving of all my love. I firmly resolve, with the help of Thy grace, to sin no more and to avoid the near occasion of sin. Amen.";
