use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add_command, handle_history_command, handle_list_command, handle_report_command,
    AddArgs,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::shell::Shell;
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense tracker with monthly budgets",
    long_about = "Records dated expenses in a few fixed categories, keeps them in a \
                  CSV file and tells you whether each month stayed within its budget."
)]
struct Cli {
    /// Expense CSV file to use instead of the configured one
    #[arg(short, long, global = true, env = "LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    #[command(alias = "menu")]
    Shell,

    /// Record an expense and save the ledger
    Add(AddArgs),

    /// List all expenses sorted by date
    #[command(alias = "ls")]
    List,

    /// Show spending against budget for a month, or for every month
    Report {
        /// Month to report on (YYYY-MM)
        month: Option<String>,
        /// Budget to compare against for this run
        #[arg(short, long, allow_hyphen_values = true)]
        budget: Option<String>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write the settings file, remembering --file if given
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(file) = cli.file {
        settings.ledger_file = Some(file);
    }

    let mut storage = Storage::new(&paths, &settings)?;

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&mut storage, &settings, stdin.lock(), stdout.lock()).run()?;
        }
        Some(Commands::Add(args)) => {
            load_quietly(&mut storage)?;
            handle_add_command(&mut storage, &settings, args)?;
        }
        Some(Commands::List) => {
            load_quietly(&mut storage)?;
            handle_list_command(&storage, &settings)?;
        }
        Some(Commands::Report { month, budget }) => {
            load_quietly(&mut storage)?;
            handle_report_command(&mut storage, &settings, month, budget)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!("Ledger file: {}", storage.expenses.path().display());
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", storage.expenses.path().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}

/// Load the ledger, warning on stderr about rows that could not be read
fn load_quietly(storage: &mut Storage) -> Result<()> {
    let report = storage.load_all()?;
    if report.skipped > 0 {
        eprintln!(
            "Warning: skipped {} unreadable row(s) in {}",
            report.skipped,
            storage.expenses.path().display()
        );
    }
    Ok(())
}
