//! Ownership guard
//!
//! Pure decision: does the current principal own the resource it is about
//! to act on? Handlers fetch the resource first (missing id is `NotFound`)
//! and call this before any write or delete side effect. Owner-scoped
//! listings never reach this guard; their query is already scoped to the
//! principal at the store boundary.

use super::Principal;
use crate::error::ApiError;
use tracing::debug;

/// Kind of operation being authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Mutate,
    Delete,
}

/// Allow the operation only if the principal owns the resource
pub fn check_owner(
    principal: &Principal,
    owner_id: &str,
    operation: Operation,
) -> Result<(), ApiError> {
    if principal.account_id() == owner_id {
        Ok(())
    } else {
        debug!(
            "Denied {:?}: principal {} does not own the resource",
            operation,
            principal.account_id()
        );
        Err(ApiError::Forbidden)
    }
}
