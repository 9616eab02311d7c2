/// Ownership-based authorization gate
///
/// The single decision rule shared by every mutation path: a principal may
/// modify or delete a resource iff it is the owner. No roles, no admin
/// override, no delegation. The check is a pure function of two ids so it
/// can be unit-tested without any request context.
///
/// Callers must establish that the resource exists (and fetch its owner)
/// before invoking the gate; the gate itself must run before the mutation.
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Allow the operation iff `principal` owns the resource.
pub fn ensure_owner(principal: Uuid, resource_owner: Uuid) -> Result<()> {
    if principal == resource_owner {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_allowed() {
        let user = Uuid::new_v4();
        assert!(ensure_owner(user, user).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let result = ensure_owner(Uuid::new_v4(), Uuid::new_v4());
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[test]
    fn test_nil_principal_never_matches_a_real_owner() {
        // An absent principal is represented nowhere in this service, but a
        // nil uuid must still fail against any real owner.
        let result = ensure_owner(Uuid::nil(), Uuid::new_v4());
        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
