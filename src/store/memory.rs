//! In-memory client store.

use super::traits::ClientStore;
use crate::models::{Client, ClientSummary};
use chrono::NaiveDate;
use tracing::debug;

/// Vec-backed store holding all records for the process lifetime.
///
/// Insertion order is preserved and duplicates are permitted; there is
/// no identifier field to be unique on. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    clients: Vec<Client>,
}

impl InMemoryClientStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
        }
    }

    /// Create a store preloaded with the given clients.
    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self { clients }
    }
}

impl ClientStore for InMemoryClientStore {
    fn add(&mut self, client: Client) {
        debug!(
            first_name = %client.first_name,
            last_name = %client.last_name,
            "adding client record"
        );
        self.clients.push(client);
    }

    fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        reference: NaiveDate,
    ) -> Vec<ClientSummary> {
        self.clients
            .iter()
            .filter(|client| client.matches_name(first_name, last_name))
            .map(|client| client.summary(reference))
            .collect()
    }

    fn all(&self, reference: NaiveDate) -> Vec<ClientSummary> {
        self.clients
            .iter()
            .map(|client| client.summary(reference))
            .collect()
    }
}
