use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wellness_core::*;

#[derive(Parser)]
#[command(name = "wellness")]
#[command(about = "Personal wellness journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record how today went and get a diagnosis
    Check {
        /// Mood, 1 = very low, 10 = excellent
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        mood: Option<u8>,

        /// Energy level, 1-10
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        energy: Option<u8>,

        /// Sleep quality, 1-10
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        sleep: Option<u8>,

        /// Stress, 1 = none, 10 = very stressed
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        stress: Option<u8>,

        /// Exercised today (`--exercise` or `--exercise false`)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        exercise: Option<bool>,

        /// Personal notes
        #[arg(long)]
        notes: Option<String>,

        /// Day to record (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the entry recorded for a day
    Show {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show entries and averages over a trailing window
    Trends {
        /// Window length: 7, 30 or 365 days (or week, month, year)
        #[arg(long)]
        window: Option<Window>,
    },

    /// List self-help resources
    Resources {
        /// Suggest resources for this mood score
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10), conflicts_with = "category")]
        mood: Option<u8>,

        /// Only resources in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show urgent help contacts
    HelpNow,

    /// Permanently delete every recorded entry
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    wellness_core::logging::init();

    let cli = Cli::parse();

    // These never touch the journal, so a broken config must not block them
    match cli.command {
        Some(Commands::HelpNow) => {
            display_urgent_contacts();
            return Ok(());
        }
        Some(Commands::Resources { mood, category }) => return cmd_resources(mood, category),
        _ => {}
    }

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let today = Local::now().date_naive();
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Some(Commands::Check {
            mood,
            energy,
            sleep,
            stress,
            exercise,
            notes,
            date,
        }) => {
            let mut store = open_store(&data_dir, &config);
            let date = date.unwrap_or(today);
            let input = CheckInput {
                mood,
                energy,
                sleep,
                stress,
                exercise,
                notes,
            };
            cmd_check(&mut store, date, input)
        }
        Some(Commands::Show { date }) => {
            let store = open_store(&data_dir, &config);
            cmd_show(&store, date.unwrap_or(today))
        }
        Some(Commands::Trends { window }) => {
            let store = open_store(&data_dir, &config);
            let window = match window {
                Some(w) => w,
                None => config.default_window()?,
            };
            cmd_trends(&store, window, today)
        }
        Some(Commands::Clear { yes }) => {
            let mut store = open_store(&data_dir, &config);
            cmd_clear(&mut store, yes)
        }
        Some(Commands::HelpNow) | Some(Commands::Resources { .. }) => Ok(()),
        None => {
            // Default to showing today's entry
            let store = open_store(&data_dir, &config);
            cmd_show(&store, today)
        }
    }
}

fn open_store(data_dir: &std::path::Path, config: &Config) -> EntryStore<FileStorage> {
    EntryStore::with_key(
        FileStorage::new(data_dir),
        config.storage.entries_key.clone(),
    )
}

/// Values given on the command line; missing ones fall back to the
/// existing entry for the day, then to the form defaults
struct CheckInput {
    mood: Option<u8>,
    energy: Option<u8>,
    sleep: Option<u8>,
    stress: Option<u8>,
    exercise: Option<bool>,
    notes: Option<String>,
}

const DEFAULT_SCORE: u8 = 5;

fn cmd_check(store: &mut EntryStore<FileStorage>, date: NaiveDate, input: CheckInput) -> Result<()> {
    let existing = store.get_by_date(date)?;
    let base = existing.unwrap_or_else(|| {
        DailyEntry::new(date, DEFAULT_SCORE, DEFAULT_SCORE, DEFAULT_SCORE, DEFAULT_SCORE)
    });

    let entry = DailyEntry {
        date,
        mood: input.mood.unwrap_or(base.mood),
        energy: input.energy.unwrap_or(base.energy),
        sleep: input.sleep.unwrap_or(base.sleep),
        stress: input.stress.unwrap_or(base.stress),
        exercise: input.exercise.unwrap_or(base.exercise),
        notes: input.notes.unwrap_or(base.notes),
    };
    entry.validate()?;

    if let Err(e) = store.save(entry.clone()) {
        eprintln!("✗ Could not save your entry: {}", e);
        return Err(e);
    }
    println!("✓ Entry saved for {}", date);

    let diagnosis = diagnose(&entry);
    display_diagnosis(&diagnosis);

    if diagnosis.is_critical {
        println!();
        println!("Several of your answers suggest you are having a hard time.");
        println!("You do not have to handle this alone:");
        display_urgent_contacts();
    }

    Ok(())
}

fn cmd_show(store: &EntryStore<FileStorage>, date: NaiveDate) -> Result<()> {
    match store.get_by_date(date)? {
        Some(entry) => display_entry(&entry),
        None => println!("No entry for {}", date),
    }
    Ok(())
}

fn cmd_trends(store: &EntryStore<FileStorage>, window: Window, today: NaiveDate) -> Result<()> {
    let entries = store.get_in_window(window, today)?;
    let aggregates = compute_aggregates(&entries);

    println!("\nWellness trends, {}", window);
    println!("─────────────────────────────────────────");

    if entries.is_empty() {
        println!("  No entries recorded in this period.");
    } else {
        println!("  {:<12} {:>5} {:>6} {:>5} {:>6}  exercise", "date", "mood", "energy", "sleep", "stress");
        for entry in &entries {
            println!(
                "  {:<12} {:>5} {:>6} {:>5} {:>6}  {}",
                entry.date.format("%Y-%m-%d").to_string(),
                entry.mood,
                entry.energy,
                entry.sleep,
                entry.stress,
                if entry.exercise { "yes" } else { "-" }
            );
        }
    }

    println!("─────────────────────────────────────────");
    println!("  Average mood:   {:.1}/10", aggregates.mood);
    println!("  Average energy: {:.1}/10", aggregates.energy);
    println!("  Average sleep:  {:.1}/10", aggregates.sleep);
    println!("  Average stress: {:.1}/10", aggregates.stress);
    println!(
        "  Exercise days:  {} of {}",
        aggregates.exercise_days, aggregates.entry_count
    );
    println!();

    Ok(())
}

fn cmd_resources(mood: Option<u8>, category: Option<String>) -> Result<()> {
    let catalog = default_catalog();

    let resources = match (mood, category) {
        (Some(mood), _) => catalog.for_mood(mood),
        (None, Some(name)) => {
            let category = ResourceCategory::parse(&name)
                .ok_or_else(|| Error::InvalidInput(format!("Unknown resource category: {}", name)))?;
            catalog.by_category(category)
        }
        (None, None) => catalog.resources.iter().collect(),
    };

    for resource in resources {
        println!("\n  {} [{}]", resource.title, resource.category);
        println!("    {}", resource.description);
        println!("    → {}", resource.link);
    }
    println!();

    Ok(())
}

fn cmd_clear(store: &mut EntryStore<FileStorage>, yes: bool) -> Result<()> {
    if !yes {
        println!("This permanently deletes every recorded entry and cannot be undone.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    if let Err(e) = store.clear_all() {
        eprintln!("✗ Could not clear your data: {}", e);
        return Err(e);
    }
    println!("✓ All entries deleted");
    Ok(())
}

fn display_entry(entry: &DailyEntry) {
    println!("\n  Entry for {}", entry.date);
    println!("  Mood:     {}/10 ({:?})", entry.mood, MoodLevel::from_score(entry.mood));
    println!("  Energy:   {}/10", entry.energy);
    println!("  Sleep:    {}/10", entry.sleep);
    println!("  Stress:   {}/10", entry.stress);
    println!("  Exercise: {}", if entry.exercise { "yes" } else { "no" });
    if !entry.notes.is_empty() {
        println!("  Notes:    {}", entry.notes);
    }
    println!();
}

fn display_diagnosis(diagnosis: &Diagnosis) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  WELLNESS DIAGNOSIS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", diagnosis.overall);
    println!();

    for metric in Metric::ALL {
        let assessment = diagnosis.assessment(metric);
        let marker = match assessment.tier {
            Tier::Good => "✓",
            Tier::Moderate => "~",
            Tier::Concern => "!",
        };
        println!("  {} {:<7} {}", marker, metric.to_string(), assessment.comment);
    }

    if !diagnosis.recommendations.is_empty() {
        println!();
        println!("  Recommendations:");
        for rec in &diagnosis.recommendations {
            println!("  • {}", rec);
        }
    }
    println!();
}

fn display_urgent_contacts() {
    println!("\n  If you are in crisis or in danger, seek professional help immediately.");
    for contact in &default_catalog().urgent_contacts {
        println!("\n  {}", contact.name);
        println!("    {}", contact.description);
        println!("    → {}", contact.link);
    }
    println!();
}
