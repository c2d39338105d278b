//! Patent entity (faculty-only ownership)

use super::approval::{ApprovalStatus, Owner, PublicationCategory, PublicationKind};
use super::workflow::{ReviewColumns, ReviewPatch, Reviewable};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub faculty_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub inventors: String,

    pub year: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub patent_number: Option<String>,

    /// Whether the patent has been granted (as opposed to filed/published)
    pub granted: bool,

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

// faculty_id is a weak reference resolved at read time
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
        Some(Owner::Faculty(self.faculty_id))
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
    const KIND: PublicationKind = PublicationKind::Patent;

    fn status_column() -> Self::Column {
        Column::ApprovalStatus
    }
}
