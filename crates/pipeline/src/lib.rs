//! Ingestion, classification and alerting.
//!
//! Every operation takes the store as `&dyn Store` so the caller decides
//! which engine backs it. Operations never retry and never repair partial
//! state; failures are returned to the caller as they happen.

pub mod alerts;
pub mod error;
pub mod ingest;
pub mod reconcile;
pub mod users;

#[cfg(test)]
mod testing;

pub use alerts::get_alerts;
pub use error::PipelineError;
pub use ingest::{ingest, IngestOutcome};
pub use reconcile::find_unalerted_readings;
pub use users::register_user;
