//! Coordinator: turns user intents into store operations and view output.
//!
//! The coordinator owns the interaction loop and the run flag. Each user
//! turn produces at most one store operation and one presentation
//! callback. Input arrives as typed `UserIntent` messages and `handle`
//! is the single entry point.

use crate::console::Console;
use crate::domain::{BirthDate, PhoneNumber, ValidationError};
use crate::error::{CoordinatorError, CoordinatorResult};
use crate::models::Client;
use crate::store::ClientStore;
use crate::view::View;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// The four actions reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddClient,
    ListClients,
    SearchClients,
    Quit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = CoordinatorError;

    /// Convert a raw menu number. The view filters user input before
    /// this point, so an out-of-range value here is a contract violation
    /// and surfaces as `ChoiceOutOfRange`.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::AddClient),
            2 => Ok(Self::ListClients),
            3 => Ok(Self::SearchClients),
            4 => Ok(Self::Quit),
            other => Err(CoordinatorError::ChoiceOutOfRange(other)),
        }
    }
}

/// Raw field values collected by the add dialog.
///
/// The values are format-checked by the view but still raw strings;
/// conversion into domain types happens when the submission is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSubmission {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone: String,
}

/// Name pair collected by the search dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSubmission {
    pub first_name: String,
    pub last_name: String,
}

/// One user turn's worth of input, as a tagged union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    Menu(MenuChoice),
    Add(AddSubmission),
    Search(SearchSubmission),
}

/// Drives the interaction loop over one store and one view.
pub struct Coordinator<C: Console> {
    store: Box<dyn ClientStore>,
    view: View<C>,
    running: bool,
}

impl<C: Console> Coordinator<C> {
    pub fn new(store: Box<dyn ClientStore>, view: View<C>) -> Self {
        Self {
            store,
            view,
            running: false,
        }
    }

    /// Enter the interaction loop. Terminates only via the quit choice;
    /// a closed console ends the loop with an error.
    pub fn run(&mut self) -> CoordinatorResult<()> {
        self.running = true;
        while self.running {
            if let Some(choice) = self.view.main_menu()? {
                self.handle(UserIntent::Menu(choice))?;
            }
        }
        Ok(())
    }

    /// Single entry point: apply one user intent and show the outcome.
    pub fn handle(&mut self, intent: UserIntent) -> CoordinatorResult<()> {
        match intent {
            UserIntent::Menu(MenuChoice::AddClient) => {
                let submission = self.view.add_dialog(today())?;
                self.handle(UserIntent::Add(submission))
            }
            UserIntent::Menu(MenuChoice::ListClients) => {
                let rows = self.store.all(today());
                debug!(records = rows.len(), "listing all records");
                self.view.table(&rows)?;
                Ok(())
            }
            UserIntent::Menu(MenuChoice::SearchClients) => {
                let submission = self.view.search_dialog()?;
                self.handle(UserIntent::Search(submission))
            }
            UserIntent::Menu(MenuChoice::Quit) => {
                debug!("quit requested, leaving the loop");
                self.running = false;
                Ok(())
            }
            UserIntent::Add(submission) => {
                match convert_submission(submission, today()) {
                    Ok(client) => {
                        self.store.add(client);
                        self.view.saved()?;
                    }
                    Err(error) => {
                        // The record is not appended; the loop continues.
                        warn!(%error, "add submission rejected");
                        self.view.operation_failed()?;
                    }
                }
                Ok(())
            }
            UserIntent::Search(submission) => {
                let rows = self.store.find_by_name(
                    &submission.first_name,
                    &submission.last_name,
                    today(),
                );
                debug!(matches = rows.len(), "name search finished");
                self.view.table(&rows)?;
                Ok(())
            }
        }
    }
}

/// The reference date for age computation and the future-date check,
/// taken from the wall clock at each call site.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn convert_submission(
    submission: AddSubmission,
    today: NaiveDate,
) -> Result<Client, ValidationError> {
    let birth_date = BirthDate::parse(&submission.date_of_birth, today)?;
    let phone = PhoneNumber::new(submission.phone)?;
    Ok(Client::new(
        submission.first_name,
        submission.last_name,
        birth_date,
        phone,
    ))
}
