use std::error::Error;
use std::io::{self, BufRead, Write};

use sanctuary::client::{BibleClient, CalendarClient};
use sanctuary::content::PrayerCategory;
use sanctuary::page::{render_page, Block, Page};
use sanctuary::session::VirtueChecks;
use sanctuary::traits::{BibleSource, LiturgySource};
use sanctuary::utils::{ask_yes_no, pause, print_choices, prompt};
use sanctuary::{LiturgyProvider, Sanctuary};
use uuid::Uuid;


#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let liturgy = LiturgyProvider::new(CalendarClient::from_config()?);
    let bible = BibleClient::from_config()?;
    let mut app = Sanctuary::new(liturgy, bible);
    let session_id = app.sessions_mut().open();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        let theme = app.theme().await;
        log::debug!("Page stylesheet:\n{}", theme.stylesheet());

        writeln!(output)?;
        let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        print_choices(&mut output, &theme.paint("Sanctuary Navigation"), &labels)?;
        let choice = match prompt(&mut input, &mut output, "Go to (q to quit): ")? {
            None => break,
            Some(c) => c,
        };
        if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
            break;
        }
        let page: Page = match choice.parse() {
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            },
            Ok(p) => p,
        };

        let blocks = match show(&mut app, &session_id, page, &mut input, &mut output).await? {
            None => continue,
            Some(b) => b,
        };
        writeln!(output, "\n{}\n", render_page(&blocks, &theme))?;
        pause(&mut input, &mut output)?;
    }

    app.sessions_mut().close(&session_id);
    Ok(())
}

/// Ask the user for the inputs of `page`, and build it.
/// Returns `None` if there is nothing to display
async fn show<L, B, R, W>(app: &mut Sanctuary<L, B>, session_id: &Uuid, page: Page, input: &mut R, output: &mut W) -> io::Result<Option<Vec<Block>>>
where
    L: LiturgySource,
    B: BibleSource,
    R: BufRead,
    W: Write,
{
    let blocks = match page {
        Page::Home => {
            let today = chrono::Local::now().date_naive();
            app.home_page(today).await
        },
        Page::DailyWord => {
            print_choices(output, "Tab:", &["Today's Gospel", "Search Any Verse"])?;
            match prompt(input, output, "> ")?.as_deref() {
                Some("2") => {
                    let reference = prompt(input, output, "Look up a verse (e.g., John 3:16): ")?.unwrap_or_default();
                    if reference.is_empty() {
                        return Ok(None);
                    }
                    app.verse_search_page(&reference).await
                },
                _ => app.daily_word_page().await,
            }
        },
        Page::PrayerLibrary => {
            let labels: Vec<&str> = PrayerCategory::ALL.iter().map(|c| c.label()).collect();
            print_choices(output, "Category:", &labels)?;
            let category = match prompt(input, output, "> ")? {
                None => return Ok(None),
                Some(c) if c.is_empty() => PrayerCategory::AllPsalms,
                Some(c) => match c.parse::<PrayerCategory>() {
                    Ok(category) => category,
                    Err(err) => return Ok(Some(vec![Block::Error(err)])),
                },
            };
            let names: Vec<&str> = category.prayers().iter().map(|p| p.name).collect();
            print_choices(output, "Prayer (Enter for all):", &names)?;
            let name = match prompt(input, output, "> ")? {
                None => None,
                Some(n) => match n.parse::<usize>() {
                    Ok(index) => index.checked_sub(1).and_then(|i| names.get(i)).map(|n| n.to_string()),
                    Err(_) if n.is_empty() => None,
                    Err(_) => Some(n),
                },
            };
            app.prayer_library_page(category, name.as_deref())
        },
        Page::StationsOfTheCross => {
            let number = prompt(input, output, "Select Station (1-14): ")?.unwrap_or_default();
            match number.parse::<u8>().ok().and_then(|n| app.station_page(n)) {
                Some(blocks) => blocks,
                None => vec![Block::Error(format!("There is no station {:?}, please pick one from 1 to 14.", number))],
            }
        },
        Page::VirtueTracker => {
            let patient = ask_yes_no(input, output, "I was Patient")?;
            let humble = ask_yes_no(input, output, "I was Humble")?;
            let log = match ask_yes_no(input, output, "Log Progress?")? {
                true => {
                    writeln!(output, "🎈🎈🎈")?;
                    Some(VirtueChecks::new(patient, humble))
                },
                false => None,
            };
            match app.virtue_tracker_page(session_id, log) {
                Some(blocks) => blocks,
                None => vec![Block::Error("Your session has expired.".to_string())],
            }
        },
        Page::Confessional => app.confessional_page(),
        Page::SacredAudio => app.sacred_audio_page(),
    };
    Ok(Some(blocks))
}
