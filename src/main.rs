// Agenda preview
// Prints one day of the agenda from a JSON export of notes

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};

use notes_agenda::models::note::Note;
use notes_agenda::models::settings::AgendaSettings;
use notes_agenda::services::agenda::AgendaController;
use notes_agenda::services::clock::SystemClock;
use notes_agenda::services::settings::SettingsService;
use notes_agenda::services::store::MemoryNoteStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting agenda preview");

    let mut args = std::env::args().skip(1);
    let notes_path = args.next().map(PathBuf::from);
    let date = args
        .next()
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .with_context(|| format!("Invalid date {raw:?}, expected YYYY-MM-DD"))
        })
        .transpose()?;

    let settings = SettingsService::from_project_dirs()
        .map(|service| service.load_or_default())
        .unwrap_or_default();

    let notes = match notes_path {
        Some(path) => read_notes(&path)?,
        None => Vec::new(),
    };
    let store = MemoryNoteStore::with_notes(notes);

    match settings.time_zone()? {
        Some(tz) => preview(&settings, tz, &store, date).await,
        None => preview(&settings, Local, &store, date).await,
    }
}

fn read_notes(path: &Path) -> Result<Vec<Note>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read notes from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse notes in {}", path.display()))
}

async fn preview<Tz: TimeZone>(
    settings: &AgendaSettings,
    tz: Tz,
    store: &MemoryNoteStore,
    date: Option<NaiveDate>,
) -> Result<()> {
    let controller = AgendaController::new(settings, tz.clone(), SystemClock::new(tz));
    let date = date.unwrap_or_else(|| controller.today());

    let items = controller.fetch_items(store).await?;
    let layout = controller.render_now(date, &items);

    let range = controller.default_visible_range(date)?;
    let in_range = items
        .iter()
        .filter_map(|item| item.start.as_ref())
        .filter(|start| range.contains(start.date_naive()))
        .count();

    println!("Agenda for {}", date.format("%A %Y-%m-%d"));
    println!(
        "{} view {} to {}: {} scheduled item(s)",
        controller.default_range(),
        range.start,
        range.end.pred_opt().unwrap_or(range.end),
        in_range
    );
    for hour in &layout.hours {
        let marker = if hour.is_current {
            '>'
        } else if hour.is_active {
            '*'
        } else {
            ' '
        };
        let entries: Vec<String> = hour
            .quarter_slots
            .iter()
            .filter(|slot| !slot.is_placeholder)
            .map(|slot| format!(":{:02} {}", slot.minute_offset, slot.item.body))
            .collect();
        println!("{} {}  {}", marker, hour.label, entries.join("  "));
    }

    Ok(())
}
