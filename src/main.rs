use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_categories_command, handle_config_command, handle_init_command,
    handle_summary_command, session_budget, SummaryArgs,
};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::logging;
use budget_tracker::state::BudgetStore;

#[derive(Parser)]
#[command(
    name = "budget-tracker",
    version,
    about = "Budget and expense planner for the terminal",
    long_about = "Set a budget, record expenses against it, and keep an eye on \
                  what is left. Runs as an interactive TUI or as one-shot \
                  commands."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Budget for the session; defaults to the configured budget
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// List the expense categories
    #[command(alias = "cats")]
    Categories,

    /// Record expenses in a one-off session and print the totals
    Summary(SummaryArgs),

    /// Show current configuration and paths
    Config,

    /// Write the default settings file
    Init {
        /// Overwrite existing settings
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui { budget: None });
    if !matches!(command, Commands::Tui { .. }) {
        logging::init_stderr(&settings.log_level);
    }

    match command {
        Commands::Tui { budget } => run_tui(&paths, &settings, budget.as_deref())?,
        Commands::Categories => handle_categories_command()?,
        Commands::Summary(args) => handle_summary_command(&settings, args)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
        Commands::Init { force } => handle_init_command(&paths, force)?,
    }

    Ok(())
}

fn run_tui(paths: &TrackerPaths, settings: &Settings, budget: Option<&str>) -> Result<()> {
    paths.ensure_directories()?;
    logging::init_file(&settings.log_level, &paths.log_file())?;

    let budget = session_budget(settings, budget)?;
    let store = BudgetStore::new(budget)?;
    budget_tracker::tui::run_tui(settings, store)
}
