//! Capability traits over the shared workflow columns
//!
//! Every publication kind stores the same review columns next to its own
//! descriptive fields. These traits expose those columns generically so the
//! transition executor, the pending queue, and the report collectors are
//! written once and instantiated per kind.

use super::approval::{ApprovalStatus, Owner, PublicationCategory, PublicationKind};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

/// Read access to the shared columns of a publication row
pub trait ReviewColumns {
    fn record_id(&self) -> Uuid;
    fn record_title(&self) -> &str;
    fn record_year(&self) -> i32;
    fn record_category(&self) -> PublicationCategory;
    fn record_owner(&self) -> Option<Owner>;
    fn approval_status(&self) -> ApprovalStatus;
    fn review_remarks(&self) -> Option<&str>;
    fn record_created_at(&self) -> DateTimeWithTimeZone;
    fn record_updated_at(&self) -> DateTimeWithTimeZone;

    /// Journals and conferences override this; other kinds have none
    fn impact_factor(&self) -> Option<&str> {
        None
    }
}

/// Write access to the shared columns of a publication active model
pub trait ReviewPatch {
    fn set_approval_status(&mut self, status: ApprovalStatus);
    fn set_review_remarks(&mut self, remarks: Option<String>);
    fn set_reviewer_stamp(&mut self, approved_by: Uuid, approved_at: DateTimeWithTimeZone);
    fn set_updated_at(&mut self, at: DateTimeWithTimeZone);
}

/// Entity-level capabilities needed by the generic workflow queries
pub trait Reviewable: EntityTrait {
    const KIND: PublicationKind;

    /// Column holding the approval status, for pending/report filters
    fn status_column() -> Self::Column;
}
