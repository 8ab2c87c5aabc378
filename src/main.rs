//! Insured Registry - Main entry point
//!
//! Wires the in-memory store, the terminal console, the view and the
//! coordinator together and enters the interaction loop.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use insured_registry::console::StdConsole;
use insured_registry::coordinator::Coordinator;
use insured_registry::domain::{BirthDate, PhoneNumber};
use insured_registry::models::Client;
use insured_registry::store::{ClientStore, InMemoryClientStore};
use insured_registry::view::View;
use insured_registry::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting the UI on stdout)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut store = InMemoryClientStore::new();
    if config.seed_demo {
        for client in demo_clients()? {
            store.add(client);
        }
        info!("Seeded demo records");
    }

    let console = StdConsole::new()?;
    let view = View::new(console);
    let mut coordinator = Coordinator::new(Box::new(store), view);

    info!("Starting insured registry");
    coordinator.run()?;

    info!("Insured registry shutdown complete");
    Ok(())
}

/// The three sample records available behind `REGISTRY_SEED_DEMO`.
fn demo_clients() -> Result<Vec<Client>> {
    let today = Local::now().date_naive();
    let records = [
        ("Vláďa", "Nováček", (2015, 1, 8), "000 000 000"),
        ("Jana", "Nováčková", (1986, 8, 19), "775 971 895"),
        ("Vladimír", "Nováček", (1985, 11, 7), "728 563 374"),
    ];

    records
        .iter()
        .map(|(first_name, last_name, (year, month, day), phone)| {
            let date = NaiveDate::from_ymd_opt(*year, *month, *day)
                .context("demo record has an invalid date")?;
            Ok(Client::new(
                *first_name,
                *last_name,
                BirthDate::new(date, today)?,
                PhoneNumber::new(*phone)?,
            ))
        })
        .collect()
}
