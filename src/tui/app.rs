//! Application state for the TUI
//!
//! The App struct holds the session plus everything the dashboard needs
//! for rendering and handling events: inputs, focus and theme.

use crate::config::Settings;
use crate::models::CategoryChoice;
use crate::services::{parse_budget, ExpenseForm};
use crate::session::{Session, SubmitOutcome};

use super::theme::Theme;
use super::widgets::TextInput;

/// Which field currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Budget,
    Amount,
    Date,
    Category,
    Custom,
    Assistant,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Budget,
        Focus::Amount,
        Focus::Date,
        Focus::Category,
        Focus::Custom,
        Focus::Assistant,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,

    pub session: Session,

    pub should_quit: bool,

    pub dark_mode: bool,

    pub focus: Focus,

    pub budget_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub category: CategoryChoice,
    pub custom_input: TextInput,
    pub assistant_input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        let budget = settings.default_budget;
        let budget_text = if budget.is_zero() {
            String::new()
        } else {
            budget.to_decimal_string()
        };

        let mut app = Self {
            settings,
            session: Session::new(budget),
            should_quit: false,
            dark_mode: settings.dark_mode,
            focus: Focus::default(),
            budget_input: TextInput::new()
                .label("Budget")
                .placeholder("Set budget")
                .content(budget_text),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
            category: CategoryChoice::default(),
            custom_input: TextInput::new()
                .label("Custom")
                .placeholder("Specify category"),
            assistant_input: TextInput::new()
                .label("Ask")
                .placeholder("Ask me something..."),
            status_message: None,
        };
        app.sync_focus();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.dark_mode)
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether the custom category field is shown
    pub fn custom_visible(&self) -> bool {
        self.category.is_others()
    }

    fn focusable(&self, focus: Focus) -> bool {
        focus != Focus::Custom || self.custom_visible()
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(Focus::ORDER.len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let len = Focus::ORDER.len();
        let mut index = self.focus.position();
        loop {
            index = (index + step) % len;
            if self.focusable(Focus::ORDER[index]) {
                break;
            }
        }
        self.focus = Focus::ORDER[index];
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.budget_input.focused = self.focus == Focus::Budget;
        self.amount_input.focused = self.focus == Focus::Amount;
        self.date_input.focused = self.focus == Focus::Date;
        self.custom_input.focused = self.focus == Focus::Custom;
        self.assistant_input.focused = self.focus == Focus::Assistant;
    }

    /// The text input under focus, if the focused field is a text field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Budget => Some(&mut self.budget_input),
            Focus::Amount => Some(&mut self.amount_input),
            Focus::Date => Some(&mut self.date_input),
            Focus::Custom => Some(&mut self.custom_input),
            Focus::Assistant => Some(&mut self.assistant_input),
            Focus::Category => None,
        }
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
    }

    /// Apply the budget field to the session
    ///
    /// Called after every edit so totals follow the typed value. Text that
    /// does not parse leaves the previous budget in place.
    pub fn apply_budget(&mut self) {
        match parse_budget(self.budget_input.value()) {
            Ok(budget) => {
                if budget != self.session.budget() {
                    self.session.set_budget(budget);
                }
                self.clear_status();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn expense_form(&self) -> ExpenseForm {
        ExpenseForm::new(
            self.amount_input.value(),
            self.date_input.value(),
            self.category,
            self.custom_input.value(),
        )
    }

    /// Submit the add-expense form
    ///
    /// Accepted entries clear the amount and custom fields; the date and
    /// category stay for the next entry. Rejected entries leave every field
    /// as typed.
    pub fn submit_expense(&mut self) -> SubmitOutcome {
        let outcome = self.session.submit(&self.expense_form());
        if outcome.is_recorded() {
            self.amount_input.clear();
            self.custom_input.clear();
            if let Some(expense) = self.session.expenses().last() {
                let message = format!(
                    "Added {} {}",
                    expense.category_name(),
                    self.settings.money(expense.amount)
                );
                self.set_status(message);
            }
        }
        outcome
    }

    /// Submit the assistant question; empty questions change nothing
    pub fn ask_assistant(&mut self) {
        if self.session.ask(self.assistant_input.value()).is_some() {
            self.assistant_input.clear();
        }
    }
}
