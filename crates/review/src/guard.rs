//! Ownership guard
//!
//! Pure checks run before every owner-initiated mutation or single-record
//! read. Both guards fire before any write is attempted, so a refused call
//! never leaves a partially updated row.

use scholartrack_common::auth::Actor;
use scholartrack_common::db::models::{ApprovalStatus, Owner};
use scholartrack_common::errors::{AppError, Result};
use uuid::Uuid;

/// Require that `actor` owns the record.
///
/// `record_owner` is None only for rows violating the exactly-one-owner
/// invariant; those are refused like any other non-owner access.
pub fn assert_owner(record_owner: Option<Owner>, actor: &Actor, record_id: Uuid) -> Result<()> {
    let claimed = actor.owner()?;

    match record_owner {
        Some(owner) if owner == claimed => Ok(()),
        _ => Err(AppError::NotRecordOwner {
            actor_id: actor.user_id.to_string(),
            record_id: record_id.to_string(),
        }),
    }
}

/// Require that the record is still editable by its owner.
///
/// APPROVED and LOCKED records are certified output; owners can neither
/// update nor delete them.
pub fn assert_editable(status: ApprovalStatus) -> Result<()> {
    if status.is_owner_editable() {
        Ok(())
    } else {
        Err(AppError::RecordImmutable { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholartrack_common::errors::ErrorCode;

    #[test]
    fn owner_match_passes() {
        let profile = Uuid::new_v4();
        let actor = Actor::faculty(Uuid::new_v4(), profile);
        assert!(assert_owner(Some(Owner::Faculty(profile)), &actor, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn owner_mismatch_fails() {
        let actor = Actor::faculty(Uuid::new_v4(), Uuid::new_v4());
        let err = assert_owner(
            Some(Owner::Faculty(Uuid::new_v4())),
            &actor,
            Uuid::new_v4(),
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotRecordOwner);
    }

    #[test]
    fn role_mismatch_fails() {
        // Same profile id on the wrong side of the Owner sum is not a match
        let profile = Uuid::new_v4();
        let actor = Actor::student(Uuid::new_v4(), profile);
        let err =
            assert_owner(Some(Owner::Faculty(profile)), &actor, Uuid::new_v4()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotRecordOwner);
    }

    #[test]
    fn ownerless_row_fails_closed() {
        let actor = Actor::faculty(Uuid::new_v4(), Uuid::new_v4());
        assert!(assert_owner(None, &actor, Uuid::new_v4()).is_err());
    }

    #[test]
    fn admins_are_not_owners() {
        let actor = Actor::admin(Uuid::new_v4());
        assert!(assert_owner(Some(Owner::Faculty(Uuid::new_v4())), &actor, Uuid::new_v4()).is_err());
    }

    #[test]
    fn editability_follows_status() {
        assert!(assert_editable(ApprovalStatus::Submitted).is_ok());
        assert!(assert_editable(ApprovalStatus::SentBack).is_ok());
        assert!(assert_editable(ApprovalStatus::Rejected).is_ok());

        for status in [ApprovalStatus::Approved, ApprovalStatus::Locked] {
            let err = assert_editable(status).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
        }
    }
}
