//! Application state for the TUI
//!
//! The App owns the budget store for the session and everything needed to
//! render it and handle input. Business logic stays in the store: the App
//! only validates forms and dispatches actions.

use chrono::Local;

use crate::config::settings::Settings;
use crate::state::{BudgetAction, BudgetStore, IdGenerator, RandomIds};

use super::dialogs::expense::ExpenseFormState;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    ConfirmReset,
    Help,
}

/// Main application state
pub struct App<'a, G = RandomIds> {
    /// Application settings
    pub settings: &'a Settings,

    /// Owner of the budget state
    pub store: BudgetStore<G>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expense list
    pub selected_expense_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// New expense form state
    pub expense_form: ExpenseFormState,
}

impl<'a, G: IdGenerator> App<'a, G> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, store: BudgetStore<G>) -> Self {
        Self {
            settings,
            store,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_expense_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddExpense {
            self.expense_form = ExpenseFormState::new(Local::now().date_naive());
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn expense_count(&self) -> usize {
        self.store.state().expenses.len()
    }

    /// Move selection up in the expense list
    pub fn move_up(&mut self) {
        self.selected_expense_index = self.selected_expense_index.saturating_sub(1);
    }

    /// Move selection down in the expense list
    pub fn move_down(&mut self) {
        if self.selected_expense_index + 1 < self.expense_count() {
            self.selected_expense_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_expense_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_expense_index = self.expense_count().saturating_sub(1);
    }

    /// Validate the expense form and dispatch it
    ///
    /// Invalid input keeps the dialog open with the error shown; the store is
    /// not touched.
    pub fn submit_expense(&mut self) {
        let draft = match self.expense_form.build_draft() {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(%err, "expense form rejected");
                return;
            }
        };

        let name = draft.expense_name.clone();
        match self.store.dispatch(BudgetAction::add_expense(draft)) {
            Ok(_) => {
                self.close_dialog();
                self.select_last();
                self.set_status(format!("Added '{}'", name));
            }
            Err(err) if err.is_validation() => self.expense_form.set_error(err.to_string()),
            Err(err) => {
                tracing::error!(%err, "add expense failed");
                self.close_dialog();
                self.set_status(format!("Error: {}", err));
            }
        }
    }

    /// Dispatch the reset action and close the confirmation
    pub fn reset_app(&mut self) {
        match self.store.dispatch(BudgetAction::ResetApp) {
            Ok(_) => {
                self.selected_expense_index = 0;
                self.set_status("All expenses cleared");
            }
            Err(err) => self.set_status(format!("Reset failed: {}", err)),
        }
        self.close_dialog();
    }
}
