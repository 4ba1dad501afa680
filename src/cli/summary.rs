//! Summary CLI command
//!
//! Runs a one-off session: a fresh store, the expenses given with
//! `--expense`, then any JSON actions from `--actions`, and prints the
//! result.

use chrono::{Local, NaiveDate};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::forms::{validate_draft, ExpenseField, ExpenseForm};
use crate::models::Money;
use crate::state::{BudgetAction, BudgetStore, IdGenerator, RandomIds};

/// Arguments for `budget-tracker summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Budget for the session (e.g. "300" or "300.00"); defaults to the configured budget
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Expense to record, as NAME,AMOUNT,CATEGORY[,DATE] (repeatable)
    #[arg(short, long = "expense", value_name = "NAME,AMOUNT,CATEGORY[,DATE]")]
    pub expenses: Vec<String>,

    /// File of JSON actions, one per line ("-" reads stdin); expenses are
    /// checked like `--expense` values
    #[arg(long, value_name = "FILE")]
    pub actions: Option<PathBuf>,

    /// Print the final state as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Split an `--expense` value into a form
///
/// The date is optional and defaults to `today`. Names cannot contain commas.
pub fn parse_expense_arg(arg: &str, today: NaiveDate) -> TrackerResult<ExpenseForm> {
    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(TrackerError::Validation(format!(
            "Expected NAME,AMOUNT,CATEGORY[,DATE], got '{}'",
            arg
        )));
    }

    let mut form = ExpenseForm::new(today);
    form.handle_change(ExpenseField::ExpenseName, parts[0]);
    form.handle_change(ExpenseField::Amount, parts[1]);
    form.handle_change(ExpenseField::Category, parts[2]);
    if let Some(date) = parts.get(3) {
        form.handle_change(ExpenseField::Date, *date);
    }
    Ok(form)
}

/// Resolve the session budget from the flag or the settings
pub fn session_budget(settings: &Settings, flag: Option<&str>) -> TrackerResult<Money> {
    match flag {
        Some(text) => Money::parse(text),
        None => Ok(settings.initial_budget),
    }
}

fn read_actions(path: &Path) -> TrackerResult<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }

    std::fs::read_to_string(path).map_err(|e| {
        TrackerError::Io(format!("Failed to read actions file {}: {}", path.display(), e))
    })
}

/// Parse one action line, holding expenses to the form's rules
fn parse_action_line(line: &str) -> TrackerResult<BudgetAction> {
    let action = BudgetAction::from_json(line)?;
    if let BudgetAction::AddExpense { expense } = &action {
        validate_draft(expense)?;
    }
    Ok(action)
}

/// Feed every non-blank, non-comment line to the store
pub fn apply_actions<G: IdGenerator>(
    store: &mut BudgetStore<G>,
    source: &str,
    input: &str,
) -> TrackerResult<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        parse_action_line(line)
            .and_then(|action| store.dispatch(action).map(|_| ()))
            .map_err(|e| TrackerError::Validation(format!("{}:{}: {}", source, index + 1, e)))?;
    }
    Ok(())
}

/// Build and populate the session store
pub fn run_summary(settings: &Settings, args: &SummaryArgs) -> TrackerResult<BudgetStore> {
    let budget = session_budget(settings, args.budget.as_deref())?;
    let mut store = BudgetStore::<RandomIds>::new(budget)?;
    let today = Local::now().date_naive();

    for arg in &args.expenses {
        let draft = parse_expense_arg(arg, today)?.submit()?;
        store.dispatch(BudgetAction::add_expense(draft))?;
    }

    if let Some(path) = &args.actions {
        let input = read_actions(path)?;
        apply_actions(&mut store, &path.display().to_string(), &input)?;
    }

    Ok(store)
}

/// Handle `budget-tracker summary`
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> TrackerResult<()> {
    let store = run_summary(settings, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.state())?);
        return Ok(());
    }

    print!("{}", format_summary(&store.summary(), settings));
    println!();
    print!("{}", format_expense_table(&store.state().expenses, settings));
    Ok(())
}
