//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the host supplies: the table store (re-exported from
//! `gl-table-store`) and a clock for `CreatedAt` stamps.

use chrono::{DateTime, SecondsFormat, Utc};

pub use gl_table_store::{RowScan, TableStore};

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as an RFC 3339 timestamp, UTC, second precision.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time source pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl FixedTimeSource {
    /// Pinned to `secs` seconds after the Unix epoch.
    pub fn at_unix(secs: i64) -> Self {
        Self(DateTime::from_timestamp(secs, 0).unwrap_or_default())
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
