//! Audit field auto-fill for entities on their way to persistence.
//!
//! Every persistence write that carries an auditable entity goes through
//! [`AutoFill::around`], which stamps the entity and then runs the write:
//!
//! ```text
//! handler ──► AutoFill::around(op, ctx, entity, persist)
//!                 │
//!                 ├─ Insert: create_time, create_user, update_time, update_user
//!                 ├─ Update: update_time, update_user
//!                 └─► persist(entity)
//! ```
//!
//! The operation type and the acting user are explicit parameters; nothing is
//! looked up from ambient state.

mod error;
mod fill;
mod types;

pub use error::AuditError;
pub use fill::{Auditable, AutoFill};
pub use types::{AuditContext, AuditFields, AuditPolicy, OperationType};
