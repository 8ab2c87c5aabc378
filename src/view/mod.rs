//! Presentation layer: main menu, dialogs and table output.
//!
//! The view owns every user-facing text and all lightweight format
//! validation. It never touches the store; collected input is returned
//! as typed submissions for the coordinator to act on.

pub mod table;

use crate::console::Console;
use crate::coordinator::{AddSubmission, MenuChoice, SearchSubmission};
use crate::domain::{BirthDate, PhoneNumber};
use crate::error::ConsoleResult;
use crate::models::ClientSummary;
use chrono::NaiveDate;

const MAIN_MENU: &str = "--------------------\n\
                         Evidence pojištěných\n\
                         --------------------\n\
                         \n\
                         Vyberte si akci:\n\
                         1 - Přidat nového pojištěného\n\
                         2 - Vypsat všechny pojištěné\n\
                         3 - Vyhledat pojištěného\n\
                         4 - Konec\n";

const MENU_PROMPT: &str = ">> ";
const UNKNOWN_CHOICE: &str = "Neznámá volba!";

const PROMPT_FIRST_NAME: &str = "Zadejte jméno pojištěného: ";
const PROMPT_LAST_NAME: &str = "Zadejte příjmení pojištěného: ";
const PROMPT_BIRTH_DATE: &str = "Zadejte datum narození pojištěného (ve formátu 1.1.1901): ";
const PROMPT_PHONE: &str = "Zadejte telefonní číslo pojištěného: ";

const ERROR_FIRST_NAME: &str = "Nesprávně zadané jméno!";
const ERROR_LAST_NAME: &str = "Nesprávně zadané příjmení!";
const ERROR_BIRTH_DATE: &str = "Nesprávně zadané datum narození!";
const ERROR_PHONE: &str = "Nesprávně zadané telefonní číslo!";

const PROMPT_SEARCH_FIRST_NAME: &str = "Zadejte křestní jméno: ";
const PROMPT_SEARCH_LAST_NAME: &str = "Zadejte příjmení: ";

const SAVED: &str = "Data byla uložena.";
const OPERATION_FAILED: &str = "Operace se nezdařila.";
const DIALOG_OVER: &str = "Pokračujte klávesou ENTER...";

/// Console front end over an abstract `Console`.
pub struct View<C: Console> {
    console: C,
}

impl<C: Console> View<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Show the main menu and read one choice.
    ///
    /// Lenient acceptance: only integers 1-4 are valid. Anything else
    /// prints the unknown-choice message, ends the turn and returns
    /// `None`; the caller re-shows the menu on its next iteration.
    pub fn main_menu(&mut self) -> ConsoleResult<Option<MenuChoice>> {
        self.console.write_line(MAIN_MENU);
        let answer = self.console.read_line(MENU_PROMPT)?;
        let choice = answer
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|number| MenuChoice::try_from(number).ok());
        match choice {
            Some(choice) => Ok(Some(choice)),
            None => {
                self.console.write_line(UNKNOWN_CHOICE);
                self.dialog_over()?;
                Ok(None)
            }
        }
    }

    /// Collect the fields of a new record, re-prompting each field until
    /// it passes its local format check.
    ///
    /// The collected values are forwarded raw; converting them into
    /// domain types is the coordinator's job.
    pub fn add_dialog(&mut self, today: NaiveDate) -> ConsoleResult<AddSubmission> {
        let first_name = self.prompt_name(PROMPT_FIRST_NAME, ERROR_FIRST_NAME)?;
        let last_name = self.prompt_name(PROMPT_LAST_NAME, ERROR_LAST_NAME)?;
        let date_of_birth = self.prompt_birth_date(today)?;
        let phone = self.prompt_phone()?;
        Ok(AddSubmission {
            first_name,
            last_name,
            date_of_birth,
            phone,
        })
    }

    /// Collect a name pair for the search operation. No format checks.
    pub fn search_dialog(&mut self) -> ConsoleResult<SearchSubmission> {
        let first_name = self.console.read_line(PROMPT_SEARCH_FIRST_NAME)?;
        let last_name = self.console.read_line(PROMPT_SEARCH_LAST_NAME)?;
        Ok(SearchSubmission {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        })
    }

    /// Render summaries as a fixed-width table, then close the dialog.
    pub fn table(&mut self, rows: &[ClientSummary]) -> ConsoleResult<()> {
        for line in table::render(rows) {
            self.console.write_line(&line);
        }
        self.dialog_over()
    }

    /// Confirm that a record was saved.
    pub fn saved(&mut self) -> ConsoleResult<()> {
        self.console.write_line(SAVED);
        self.dialog_over()
    }

    /// Report a failed operation.
    pub fn operation_failed(&mut self) -> ConsoleResult<()> {
        self.console.write_line(OPERATION_FAILED);
        self.dialog_over()
    }

    fn prompt_name(&mut self, prompt: &str, error: &str) -> ConsoleResult<String> {
        loop {
            let answer = self.console.read_line(prompt)?;
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            self.console.write_line(error);
        }
    }

    fn prompt_birth_date(&mut self, today: NaiveDate) -> ConsoleResult<String> {
        loop {
            let answer = self.console.read_line(PROMPT_BIRTH_DATE)?;
            if BirthDate::parse(&answer, today).is_ok() {
                return Ok(answer.trim().to_string());
            }
            self.console.write_line(ERROR_BIRTH_DATE);
        }
    }

    fn prompt_phone(&mut self) -> ConsoleResult<String> {
        loop {
            let answer = self.console.read_line(PROMPT_PHONE)?;
            if PhoneNumber::new(answer.as_str()).is_ok() {
                return Ok(answer);
            }
            self.console.write_line(ERROR_PHONE);
        }
    }

    fn dialog_over(&mut self) -> ConsoleResult<()> {
        self.console.write_line(DIALOG_OVER);
        self.console.read_line("")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::ScriptedConsole;
    use crate::error::ConsoleError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 29).unwrap()
    }

    #[test]
    fn test_main_menu_accepts_choices_in_range() {
        for (input, expected) in [
            ("1", MenuChoice::AddClient),
            ("2", MenuChoice::ListClients),
            ("3", MenuChoice::SearchClients),
            ("4", MenuChoice::Quit),
        ] {
            let console = ScriptedConsole::new(&[input]);
            let mut view = View::new(console);
            assert_eq!(view.main_menu().unwrap(), Some(expected));
        }
    }

    #[test]
    fn test_main_menu_rejects_unknown_choices_locally() {
        for input in ["0", "5", "42", "abc", "", " "] {
            let console = ScriptedConsole::new(&[input, ""]);
            let mut view = View::new(console.clone());
            assert_eq!(view.main_menu().unwrap(), None);
            assert!(console.transcript().contains(UNKNOWN_CHOICE));
        }
    }

    #[test]
    fn test_main_menu_trims_choice_input() {
        let console = ScriptedConsole::new(&[" 2 "]);
        let mut view = View::new(console);
        assert_eq!(view.main_menu().unwrap(), Some(MenuChoice::ListClients));
    }

    #[test]
    fn test_add_dialog_collects_and_trims_fields() {
        let console =
            ScriptedConsole::new(&[" Jana ", "Nováčková", "19.8.1986", "775 971 895"]);
        let mut view = View::new(console);
        let submission = view.add_dialog(today()).unwrap();
        assert_eq!(submission.first_name, "Jana");
        assert_eq!(submission.last_name, "Nováčková");
        assert_eq!(submission.date_of_birth, "19.8.1986");
        assert_eq!(submission.phone, "775 971 895");
    }

    #[test]
    fn test_add_dialog_reprompts_invalid_date_only() {
        let console = ScriptedConsole::new(&[
            "Jana",
            "Nováčková",
            "31.13.2020",
            "1.1.2999",
            "19.8.1986",
            "775 971 895",
        ]);
        let mut view = View::new(console.clone());
        let submission = view.add_dialog(today()).unwrap();
        assert_eq!(submission.date_of_birth, "19.8.1986");
        assert_eq!(
            console.transcript().matches(ERROR_BIRTH_DATE).count(),
            2,
            "malformed and future dates each re-prompt the date field"
        );
    }

    #[test]
    fn test_add_dialog_reprompts_invalid_phone() {
        let console =
            ScriptedConsole::new(&["Jana", "Nováčková", "19.8.1986", "abc-123", "775 971 895"]);
        let mut view = View::new(console.clone());
        let submission = view.add_dialog(today()).unwrap();
        assert_eq!(submission.phone, "775 971 895");
        assert_eq!(console.transcript().matches(ERROR_PHONE).count(), 1);
    }

    #[test]
    fn test_add_dialog_reprompts_empty_name() {
        let console =
            ScriptedConsole::new(&["", "  ", "Jana", "Nováčková", "19.8.1986", "775 971 895"]);
        let mut view = View::new(console.clone());
        let submission = view.add_dialog(today()).unwrap();
        assert_eq!(submission.first_name, "Jana");
        assert_eq!(console.transcript().matches(ERROR_FIRST_NAME).count(), 2);
    }

    #[test]
    fn test_search_dialog_trims_but_does_not_validate() {
        let console = ScriptedConsole::new(&[" Jana ", "Nováčková"]);
        let mut view = View::new(console);
        let submission = view.search_dialog().unwrap();
        assert_eq!(submission.first_name, "Jana");
        assert_eq!(submission.last_name, "Nováčková");
    }

    #[test]
    fn test_table_renders_then_waits_for_enter() {
        let console = ScriptedConsole::new(&[""]);
        let mut view = View::new(console.clone());
        view.table(&[]).unwrap();
        let transcript = console.transcript();
        assert!(transcript.contains("|Jméno"));
        assert!(transcript.contains(DIALOG_OVER));
    }

    #[test]
    fn test_closed_console_propagates() {
        let console = ScriptedConsole::new(&[]);
        let mut view = View::new(console);
        assert!(matches!(view.main_menu(), Err(ConsoleError::Closed)));
    }
}
