use chrono::{Datelike, Local, NaiveDate, Timelike};
use clap::Parser;
use takara::application::{
    init, list_entries, stats_overview, weekly_review, ConfigService, ListOptions, NewEntry,
    RecordEntryService,
};
use takara::cli::{output, Cli, Commands};
use takara::domain::{stats, topic, DayReference, TimeMode};
use takara::error::{Result, TakaraError};
use takara::infrastructure::{EntryStore, FileStore};
use uuid::Uuid;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path, name }) => init::init(&path, name),
        Some(Commands::Topic { day }) => show_topic(&day),
        Some(Commands::Add {
            text,
            positivity,
            music,
            artist,
            location,
            lat,
            lon,
        }) => {
            let input = NewEntry {
                text,
                positivity,
                music_title: music,
                music_artist: artist,
                location_name: location,
                latitude: lat,
                longitude: lon,
            };
            add_entry(input)
        }
        Some(Commands::List {
            from,
            to,
            limit,
            search,
            full,
        }) => list(from.as_deref(), to.as_deref(), limit, search, full),
        Some(Commands::Show { day }) => show_day(&day),
        Some(Commands::Review) => review(),
        Some(Commands::Stats { month }) => show_stats(month.as_deref()),
        Some(Commands::Delete { id }) => delete(&id),
        Some(Commands::Config { key, value, list }) => manage_config(key, value, list),
        None => home(),
    }
}

/// Home view: today's topic card, plus journal status when inside one.
fn home() -> Result<()> {
    let now = Local::now();
    let today = now.date_naive();

    print!("{}", output::format_topic_card(&topic::generate_topic(today)));

    // Outside a journal the topic still shows; status needs the store
    if let Ok(store) = FileStore::discover() {
        let config = store.load_config()?;
        let entries = store.load_entries()?;

        print!(
            "{}",
            output::format_home_status(
                stats::calculate_streak(&entries, today),
                stats::average_positivity(&entries),
            )
        );

        let mode = TimeMode::for_hour(now.hour(), config.morning_hour, config.evening_hour);
        if mode.is_evening() {
            print!("{}", output::evening_nudge());
        }
    }

    Ok(())
}

fn show_topic(day_str: &str) -> Result<()> {
    let day = DayReference::parse(day_str)?.resolve(Local::now().date_naive());
    let topic = topic::generate_topic(day);

    println!("Topic for {}:", day.format("%Y-%m-%d"));
    print!("{}", output::format_topic_card(&topic));
    Ok(())
}

fn add_entry(input: NewEntry) -> Result<()> {
    let store = FileStore::discover()?;
    let service = RecordEntryService::new(store.clone());

    let entry = service.execute(input)?;
    let topic = topic::generate_topic(entry.day());

    println!("{}", topic.input_question);
    println!("Saved a treasure for {}.", entry.day().format("%Y-%m-%d"));

    let entries = store.load_entries()?;
    let streak = stats::calculate_streak(&entries, entry.day());
    print!(
        "{}",
        output::format_home_status(streak, stats::average_positivity(&entries))
    );

    Ok(())
}

fn list(
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<usize>,
    search: Option<String>,
    full: bool,
) -> Result<()> {
    let store = FileStore::discover()?;
    let today = Local::now().date_naive();

    let options = ListOptions {
        from: parse_day(from, today)?,
        to: parse_day(to, today)?,
        limit,
        search,
    };

    let entries = list_entries(&store, &options)?;
    println!("{}", output::format_entry_list(&entries, full).trim_end());
    Ok(())
}

fn show_day(day_str: &str) -> Result<()> {
    let store = FileStore::discover()?;
    let day = DayReference::parse(day_str)?.resolve(Local::now().date_naive());

    let options = ListOptions {
        from: Some(day),
        to: Some(day),
        ..ListOptions::default()
    };
    let entries = list_entries(&store, &options)?;

    println!("{}", output::format_day_view(day, &entries).trim_end());
    Ok(())
}

fn review() -> Result<()> {
    let store = FileStore::discover()?;
    let review = weekly_review(&store, Local::now().date_naive())?;

    println!("{}", output::format_review(&review).trim_end());
    Ok(())
}

fn show_stats(month: Option<&str>) -> Result<()> {
    let store = FileStore::discover()?;
    let today = Local::now().date_naive();

    let month_first = match month {
        Some(value) => NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
            .map_err(|_| {
                TakaraError::Config(format!("Invalid month: '{}' (expected YYYY-MM)", value))
            })?,
        None => NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today),
    };

    let overview = stats_overview(&store, today)?;
    print!("{}", output::format_stats(&overview, month_first, today));
    Ok(())
}

fn delete(id_str: &str) -> Result<()> {
    let store = FileStore::discover()?;

    let id = Uuid::parse_str(id_str)
        .map_err(|_| TakaraError::EntryNotFound(id_str.to_string()))?;
    store.delete_entry(id)?;

    println!("Deleted entry {}", id);
    Ok(())
}

fn manage_config(key: Option<String>, value: Option<String>, list: bool) -> Result<()> {
    let store = FileStore::discover()?;
    let service = ConfigService::new(store);

    if list {
        let config = service.list()?;
        println!("name = {}", config.name);
        println!("morning_hour = {}", config.morning_hour);
        println!("evening_hour = {}", config.evening_hour);
        println!("created = {}", config.created.to_rfc3339());
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
            Ok(())
        } else {
            let val = service.get(&k)?;
            println!("{}", val);
            Ok(())
        }
    } else {
        println!("Usage: takara config [--list | <key> [<value>]]");
        println!("Valid keys: name, morning_hour, evening_hour, created");
        Ok(())
    }
}

/// Parse an optional day reference against today.
fn parse_day(value: Option<&str>, today: NaiveDate) -> Result<Option<NaiveDate>> {
    match value {
        Some(v) => Ok(Some(DayReference::parse(v)?.resolve(today))),
        None => Ok(None),
    }
}
