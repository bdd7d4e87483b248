use chrono::Local;
use clap::Parser;
use eggtally::application::{init::init, ConfigService, EntryService, ReportService};
use eggtally::cli::{
    format_entry, format_entry_list, format_range, format_summary, time_ref_arg, Cli, Commands,
};
use eggtally::domain::Period;
use eggtally::error::TallyError;
use eggtally::infrastructure::{FileSystemRepository, LedgerRepository};
use std::fs;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by EGGTALLY_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("EGGTALLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), TallyError> {
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Add { count, date, note }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut service = EntryService::new(repo.entry_store());

            let entry = service.add(&date, &count, &note, today)?;
            println!("Added {}", format_entry(&entry, &config));

            let store = repo.entry_store();
            let day_total = ReportService::new(&store).total(Period::Day, "today", today)?.1;
            println!("Today's total: {}", day_total);
            Ok(())
        }
        Some(Commands::List) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = EntryService::new(repo.entry_store());

            println!("{}", format_entry_list(&service.list(), &config).trim_end());
            Ok(())
        }
        Some(Commands::Delete { index }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut service = EntryService::new(repo.entry_store());

            let removed = service.delete(index)?;
            println!("Deleted {}", format_entry(&removed, &config));
            Ok(())
        }
        Some(Commands::Summary { time_ref }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.entry_store();

            let summary = ReportService::new(&store).summary(&time_ref_arg(&time_ref), today)?;
            print!("{}", format_summary(&summary, &config));
            Ok(())
        }
        Some(Commands::Total { period, time_ref }) => {
            let period = Period::from_str(&period).map_err(TallyError::Config)?;
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.entry_store();

            let (range, total) =
                ReportService::new(&store).total(period, &time_ref_arg(&time_ref), today)?;
            println!("{} ({}): {}", period, format_range(&range, &config), total);
            Ok(())
        }
        Some(Commands::Range { from, to }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.entry_store();

            let (range, total) = ReportService::new(&store).range(&from, &to)?;
            println!("{}: {}", format_range(&range, &config), total);
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.entry_store();
            let csv = ReportService::new(&store).export_csv();

            match output {
                Some(path) => {
                    fs::write(&path, format!("{}\n", csv))?;
                    println!("Exported to {}", path.display());
                }
                None => println!("{}", csv),
            }
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            let repo = FileSystemRepository::discover()?;
            let mut service = EntryService::new(repo.entry_store());

            let removed = service.clear(yes)?;
            println!("Deleted {} entries", removed);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: eggtally config [--list | <key> [<value>]]");
                println!("Valid keys: date_format, created");
                Ok(())
            }
        }
        None => {
            println!("eggtally - Daily egg count ledger");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
