//! Audit auto-fill implementation.

use std::future::Future;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::error::AuditError;
use super::types::{AuditContext, AuditFields, AuditPolicy, OperationType};

/// Entity that can carry audit fields.
///
/// Every setter defaults to [`AuditError::Unsupported`], so an entity only
/// overrides the fields it actually stores.
pub trait Auditable {
    /// Set the creation timestamp.
    fn set_create_time(&mut self, _at: DateTime<Utc>) -> Result<(), AuditError> {
        Err(AuditError::unsupported::<Self>("create_time"))
    }

    /// Set the creating user.
    fn set_create_user(&mut self, _user_id: i64) -> Result<(), AuditError> {
        Err(AuditError::unsupported::<Self>("create_user"))
    }

    /// Set the last-update timestamp.
    fn set_update_time(&mut self, _at: DateTime<Utc>) -> Result<(), AuditError> {
        Err(AuditError::unsupported::<Self>("update_time"))
    }

    /// Set the last-updating user.
    fn set_update_user(&mut self, _user_id: i64) -> Result<(), AuditError> {
        Err(AuditError::unsupported::<Self>("update_user"))
    }
}

impl Auditable for AuditFields {
    fn set_create_time(&mut self, at: DateTime<Utc>) -> Result<(), AuditError> {
        self.create_time = Some(at);
        Ok(())
    }

    fn set_create_user(&mut self, user_id: i64) -> Result<(), AuditError> {
        self.create_user = Some(user_id);
        Ok(())
    }

    fn set_update_time(&mut self, at: DateTime<Utc>) -> Result<(), AuditError> {
        self.update_time = Some(at);
        Ok(())
    }

    fn set_update_user(&mut self, user_id: i64) -> Result<(), AuditError> {
        self.update_user = Some(user_id);
        Ok(())
    }
}

/// Stamps audit fields on entities before they are persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoFill {
    policy: AuditPolicy,
}

impl AutoFill {
    /// Create an auto-fill step with the given failure policy.
    #[must_use]
    pub const fn new(policy: AuditPolicy) -> Self {
        Self { policy }
    }

    /// The configured failure policy.
    #[must_use]
    pub const fn policy(&self) -> AuditPolicy {
        self.policy
    }

    /// Fill the audit fields `op` calls for.
    ///
    /// Under [`AuditPolicy::Lenient`] unsupported fields are logged and skipped
    /// and this always returns `Ok`. Under [`AuditPolicy::Strict`] the first
    /// unsupported field is returned.
    pub fn fill<E: Auditable + ?Sized>(
        &self,
        op: OperationType,
        ctx: &AuditContext,
        entity: &mut E,
    ) -> Result<(), AuditError> {
        info!(operation = %op, user_id = ctx.user_id, "auto-filling audit fields");

        if op == OperationType::Insert {
            self.apply(entity.set_create_time(ctx.now))?;
            self.apply(entity.set_create_user(ctx.user_id))?;
        }
        self.apply(entity.set_update_time(ctx.now))?;
        self.apply(entity.set_update_user(ctx.user_id))?;

        Ok(())
    }

    /// Fill `entity`, then hand it to `persist`.
    ///
    /// `persist` is not called when a strict fill fails.
    pub async fn around<E, F, Fut, T>(
        &self,
        op: OperationType,
        ctx: &AuditContext,
        mut entity: E,
        persist: F,
    ) -> Result<T, AuditError>
    where
        E: Auditable,
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        self.fill(op, ctx, &mut entity)?;
        Ok(persist(entity).await)
    }

    /// Like [`AutoFill::around`] for writes whose entity argument may be absent.
    ///
    /// With no entity there is nothing to fill and `persist` runs as-is.
    pub async fn around_optional<E, F, Fut, T>(
        &self,
        op: OperationType,
        ctx: &AuditContext,
        entity: Option<E>,
        persist: F,
    ) -> Result<T, AuditError>
    where
        E: Auditable,
        F: FnOnce(Option<E>) -> Fut,
        Fut: Future<Output = T>,
    {
        let Some(mut entity) = entity else {
            debug!(operation = %op, "no entity to auto-fill");
            return Ok(persist(None).await);
        };

        self.fill(op, ctx, &mut entity)?;
        Ok(persist(Some(entity)).await)
    }

    fn apply(&self, outcome: Result<(), AuditError>) -> Result<(), AuditError> {
        match (outcome, self.policy) {
            (Ok(()), _) => Ok(()),
            (Err(e), AuditPolicy::Strict) => Err(e),
            (Err(e), AuditPolicy::Lenient) => {
                warn!(error = %e, "audit field left unfilled");
                Ok(())
            }
        }
    }
}
