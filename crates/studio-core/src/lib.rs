pub mod ports;
pub mod event_bus;
pub mod ledger;
pub mod archive;
pub mod context;
pub mod generation;


/// Durable data that could not be read and was replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub key: String,
    pub detail: String,
}
