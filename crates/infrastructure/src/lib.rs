//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_record_store;
mod in_memory_record_store;
mod tracing_sinks;
mod uuid_candidate_source;

pub use http_record_store::HttpRecordStore;
pub use in_memory_record_store::InMemoryRecordStore;
pub use tracing_sinks::{TracingNavigationSink, TracingNotificationSink};
pub use uuid_candidate_source::UuidCandidateSource;
