//! Approval state machine
//!
//! Pure transition planning: given the current status and a requested
//! administrative action, produce the exact write to apply, or refuse.
//! No I/O happens here; the executor in [`crate::approvals`] loads the
//! row, calls [`plan`], and persists the result.

use scholartrack_common::db::models::{ApprovalStatus, ReviewAction};
use scholartrack_common::db::repository::{RemarksUpdate, ReviewUpdate};
use scholartrack_common::errors::{AppError, Result};
use uuid::Uuid;

/// Plan the write for one administrative action.
///
/// Transition table:
///
/// | from                 | action    | to        |
/// |----------------------|-----------|-----------|
/// | SUBMITTED, SENT_BACK | APPROVE   | APPROVED  |
/// | SUBMITTED, SENT_BACK | REJECT    | REJECTED  |
/// | SUBMITTED, SENT_BACK | SEND_BACK | SENT_BACK |
/// | APPROVED             | LOCK      | LOCKED    |
///
/// Everything else is refused. REJECT demands a non-blank justification.
/// LOCK changes no review column except the status itself.
pub fn plan(
    current: ApprovalStatus,
    action: ReviewAction,
    admin_id: Uuid,
    remarks: Option<&str>,
) -> Result<ReviewUpdate> {
    match action {
        ReviewAction::Approve => {
            require_reviewable(current, action)?;
            Ok(ReviewUpdate {
                status: ApprovalStatus::Approved,
                remarks: RemarksUpdate::Clear,
                stamp: Some(admin_id),
            })
        }

        ReviewAction::Reject => {
            require_reviewable(current, action)?;
            let justification = match remarks {
                Some(text) if !text.trim().is_empty() => text.to_string(),
                _ => {
                    return Err(AppError::Validation {
                        message: "rejection requires remarks for the owner".to_string(),
                        field: Some("remarks".to_string()),
                    })
                }
            };
            Ok(ReviewUpdate {
                status: ApprovalStatus::Rejected,
                remarks: RemarksUpdate::Replace(justification),
                stamp: Some(admin_id),
            })
        }

        ReviewAction::SendBack => {
            require_reviewable(current, action)?;
            let remarks = match remarks {
                Some(text) if !text.trim().is_empty() => {
                    RemarksUpdate::Replace(text.to_string())
                }
                _ => RemarksUpdate::Keep,
            };
            Ok(ReviewUpdate {
                status: ApprovalStatus::SentBack,
                remarks,
                stamp: Some(admin_id),
            })
        }

        ReviewAction::Lock => {
            if current != ApprovalStatus::Approved {
                return Err(AppError::InvalidTransition {
                    from: current,
                    action,
                });
            }
            Ok(ReviewUpdate {
                status: ApprovalStatus::Locked,
                remarks: RemarksUpdate::Keep,
                stamp: None,
            })
        }
    }
}

fn require_reviewable(current: ApprovalStatus, action: ReviewAction) -> Result<()> {
    if current.is_reviewable() {
        Ok(())
    } else {
        Err(AppError::InvalidTransition {
            from: current,
            action,
        })
    }
}
