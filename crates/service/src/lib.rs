//! Record service.
//!
//! Orchestration layer over the document store and the local cache slot.
//! [`RecordService`] exposes the five operations the records manager
//! needs — add, list, delete, migrate, and demonstration seeding — each a
//! thin sequential composition of the injected capabilities.
//!
//! # Design
//!
//! RecordService is a stateless facade: it holds `Arc` references to the
//! store and the cache slot plus a small configuration value. Clone is
//! cheap, and every clone sees the same underlying data.

pub mod error;
pub mod records;
pub mod seed;

pub use error::{ServiceError, ServiceResult};
pub use records::{MigrationReport, RecordService, ServiceConfig, GRADUATES_COLLECTION};
pub use seed::demonstration_records;
