//! Journal article entity
//!
//! Owned by a faculty member or a student (exactly one).

use super::approval::{ApprovalStatus, Owner, PublicationCategory, PublicationKind};
use super::workflow::{ReviewColumns, ReviewPatch, Reviewable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owner columns: exactly one of the pair is set
    pub faculty_id: Option<Uuid>,
    pub student_id: Option<Uuid>,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub authors: String,

    pub year: i32,

    #[sea_orm(column_type = "Text")]
    pub journal_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub issn: Option<String>,

    /// Kept as text; reports parse it and tolerate junk
    #[sea_orm(column_type = "Text", nullable)]
    pub impact_factor: Option<String>,

    pub category: PublicationCategory,

    /// Opaque blob-store path to the proof document
    #[sea_orm(column_type = "Text", nullable)]
    pub proof_path: Option<String>,

    pub approval_status: ApprovalStatus,

    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,

    pub approved_by: Option<Uuid>,

    pub approved_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

// Owner columns are weak references resolved at read time; no enforced
// foreign keys, matching the best-effort profile lookups
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ReviewColumns for Model {
    fn record_id(&self) -> Uuid {
        self.id
    }

    fn record_title(&self) -> &str {
        &self.title
    }

    fn record_year(&self) -> i32 {
        self.year
    }

    fn record_category(&self) -> PublicationCategory {
        self.category
    }

    fn record_owner(&self) -> Option<Owner> {
        Owner::from_columns(self.faculty_id, self.student_id)
    }

    fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    fn review_remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    fn record_created_at(&self) -> DateTimeWithTimeZone {
        self.created_at
    }

    fn record_updated_at(&self) -> DateTimeWithTimeZone {
        self.updated_at
    }

    fn impact_factor(&self) -> Option<&str> {
        self.impact_factor.as_deref()
    }
}

impl ReviewPatch for ActiveModel {
    fn set_approval_status(&mut self, status: ApprovalStatus) {
        self.approval_status = Set(status);
    }

    fn set_review_remarks(&mut self, remarks: Option<String>) {
        self.remarks = Set(remarks);
    }

    fn set_reviewer_stamp(&mut self, approved_by: Uuid, approved_at: DateTimeWithTimeZone) {
        self.approved_by = Set(Some(approved_by));
        self.approved_at = Set(Some(approved_at));
    }

    fn set_updated_at(&mut self, at: DateTimeWithTimeZone) {
        self.updated_at = Set(at);
    }
}

impl Reviewable for Entity {
    const KIND: PublicationKind = PublicationKind::Journal;

    fn status_column() -> Self::Column {
        Column::ApprovalStatus
    }
}
