use clap::Parser;
use quicknote::application::{ConfigService, NoteService};
use quicknote::cli::{format_note, format_note_list, Cli, Commands, Shell};
use quicknote::domain::SortKey;
use quicknote::error::NotesError;
use quicknote::infrastructure::{Config, CsvExporter, JsonFileStore, CONFIG_FILE_NAME};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

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

/// Where the notes store and export live for this invocation
struct Locations {
    config_path: PathBuf,
    explicit_config: bool,
    store: Option<PathBuf>,
    export: Option<PathBuf>,
}

impl Locations {
    /// Resolve the config and open the store. An explicitly named config file must exist.
    fn open(self) -> Result<NoteService<JsonFileStore>, NotesError> {
        let config = if self.explicit_config {
            Config::load_from_file(&self.config_path)?
        } else {
            Config::load_or_default(&self.config_path)?
        }
        .with_overrides(self.store, self.export);

        log::debug!(
            "Using store {} and export {}",
            config.store_path.display(),
            config.export_path.display()
        );

        NoteService::open(
            JsonFileStore::new(config.store_path),
            CsvExporter::new(config.export_path),
        )
    }
}

fn run(cli: Cli) -> Result<(), NotesError> {
    let locations = Locations {
        explicit_config: cli.config.is_some(),
        config_path: cli
            .config
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        store: cli.store,
        export: cli.export,
    };

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Config { key, value, list } => {
            manage_config(ConfigService::new(locations.config_path), key, value, list)
        }
        Commands::Shell => {
            let mut service = locations.open()?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&mut service, stdin.lock(), stdout.lock()).run()
        }
        Commands::List { sort } => {
            let service = locations.open()?;
            let listing = match parse_sort(sort)? {
                Some(key) => format_note_list(service.sorted(key)),
                None => format_note_list(service.notes()),
            };
            if listing.is_empty() {
                println!("No notes saved.");
            } else {
                print!("{}", listing);
            }
            Ok(())
        }
        Commands::Add { id, title, body } => {
            let note = locations.open()?.add(&id, &title, &body)?;
            println!("Added note {} at {}", note.id(), note.timestamp());
            Ok(())
        }
        Commands::Edit { id, title, body } => {
            if locations.open()?.edit(&id, &title, &body)? {
                println!("Updated note {}", id);
            } else {
                println!("No note with ID '{}'; nothing changed.", id);
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let removed = locations.open()?.delete(&id)?;
            println!("Deleted {} note(s) with ID '{}'", removed, id);
            Ok(())
        }
        Commands::Search { query } => {
            let service = locations.open()?;
            let found = service.search(&query);
            if found.is_empty() {
                println!("No notes match your query.");
            } else {
                print!("{}", format_note_list(found));
            }
            Ok(())
        }
        Commands::Show { id } => {
            let service = locations.open()?;
            print!("{}", format_note(service.show(&id)?));
            Ok(())
        }
        Commands::Export { sort } => {
            let service = locations.open()?;
            let rows = service.export(parse_sort(sort)?)?;
            println!(
                "Exported {} notes to {}",
                rows,
                service.exporter().path().display()
            );
            Ok(())
        }
    }
}

fn parse_sort(sort: Option<String>) -> Result<Option<SortKey>, NotesError> {
    sort.as_deref().map(SortKey::from_str).transpose()
}

fn manage_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<(), NotesError> {
    if list {
        let config = service.list()?;
        println!("store_path = {}", config.store_path.display());
        println!("export_path = {}", config.export_path.display());
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
        println!("Usage: quicknote config [--list | <key> [<value>]]");
        println!("Valid keys: store_path, export_path");
        Ok(())
    }
}
