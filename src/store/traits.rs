use crate::models::{Client, ClientSummary};
use chrono::NaiveDate;

/// Store for client records.
///
/// Provides abstraction over record storage and queries, enabling
/// different implementations (in-memory, persistent) behind the same
/// Coordinator. The registry core is single-threaded by design, so the
/// trait is synchronous.
pub trait ClientStore {
    /// Append a new client record.
    ///
    /// Field validation is the caller's responsibility; the domain types
    /// carried by `Client` cannot represent malformed values.
    fn add(&mut self, client: Client);

    /// All records matching both name fields exactly (case-sensitive),
    /// in store order. An empty result is a normal outcome.
    ///
    /// Ages in the returned summaries are computed against `reference`.
    fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        reference: NaiveDate,
    ) -> Vec<ClientSummary>;

    /// Every record in insertion order, summarized against `reference`.
    fn all(&self, reference: NaiveDate) -> Vec<ClientSummary>;
}
