//! `menucart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage or rendering
//! concerns).

pub mod error;
pub mod id;
pub mod report;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use report::{RecordingReporter, ReportEvent, Reporter};
