//! Insured Registry - an interactive console registry of insured clients.
//!
//! The registry keeps client records in memory for the process lifetime
//! and drives a fixed menu: add a record, list all records, search by
//! exact name, quit.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birth date)
//! - **models**: The client record and its table-row summary
//! - **store**: Record store trait and the in-memory implementation
//! - **console**: Terminal seam between the view and the outside world
//! - **view**: Menus, dialogs and table rendering (all user-facing text)
//! - **coordinator**: Interaction loop and intent dispatch
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

// Re-export commonly used types
pub mod config;
pub mod console;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;
pub mod view;

pub use config::Config;
pub use console::{Console, StdConsole};
pub use coordinator::{AddSubmission, Coordinator, MenuChoice, SearchSubmission, UserIntent};
pub use domain::{BirthDate, PhoneNumber, ValidationError};
pub use error::{ConfigError, ConsoleError, CoordinatorError};
pub use models::{Client, ClientSummary};
pub use store::{ClientStore, InMemoryClientStore};
pub use view::View;
