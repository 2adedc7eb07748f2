//! Audit types and data structures.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sky_shared::config::AuditSettings;

/// Kind of persistence write being audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    /// New record: all four audit fields are set.
    Insert,
    /// Existing record: only the update fields are set.
    Update,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.write_str("INSERT"),
            Self::Update => f.write_str("UPDATE"),
        }
    }
}

/// What to do when an entity cannot take an audit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditPolicy {
    /// Log a warning and let the write proceed with whatever was filled.
    #[default]
    Lenient,
    /// Fail the write before it reaches persistence.
    Strict,
}

impl From<AuditSettings> for AuditPolicy {
    fn from(settings: AuditSettings) -> Self {
        if settings.strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Who is writing, and when.
///
/// `now` is captured once so that an insert gets identical create and update
/// timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditContext {
    /// ID of the authenticated employee.
    pub user_id: i64,
    /// Timestamp stamped on the entity.
    pub now: DateTime<Utc>,
}

impl AuditContext {
    /// Context for `user_id` at the current instant.
    #[must_use]
    pub fn new(user_id: i64) -> Self {
        Self::at(user_id, Utc::now())
    }

    /// Context for `user_id` at a fixed instant.
    #[must_use]
    pub const fn at(user_id: i64, now: DateTime<Utc>) -> Self {
        Self { user_id, now }
    }
}

/// The four audit fields, ready to embed in an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    /// When the record was created.
    pub create_time: Option<DateTime<Utc>>,
    /// Who created the record.
    pub create_user: Option<i64>,
    /// When the record was last updated.
    pub update_time: Option<DateTime<Utc>>,
    /// Who last updated the record.
    pub update_user: Option<i64>,
}
