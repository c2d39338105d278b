//! Approval workflow vocabulary shared by every publication kind

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Workflow state of a publication record.
///
/// Every record is born SUBMITTED. Administrators move it through the
/// review actions; LOCKED has no outbound transition.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "SENT_BACK")]
    SentBack,
    #[sea_orm(string_value = "LOCKED")]
    Locked,
}

impl ApprovalStatus {
    /// Statuses an administrator can still review (approve/reject/send back)
    pub fn is_reviewable(&self) -> bool {
        matches!(self, ApprovalStatus::Submitted | ApprovalStatus::SentBack)
    }

    /// Statuses in which the owner may still update or delete the record
    pub fn is_owner_editable(&self) -> bool {
        !matches!(self, ApprovalStatus::Approved | ApprovalStatus::Locked)
    }

    /// Statuses counted by institutional (NAAC/NBA/NIRF) reports
    pub fn is_certified(&self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::Locked)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApprovalStatus::Submitted => "SUBMITTED",
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Rejected => "REJECTED",
            ApprovalStatus::SentBack => "SENT_BACK",
            ApprovalStatus::Locked => "LOCKED",
        };
        f.write_str(s)
    }
}

/// Administrative review action applied to a record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewAction {
    Approve,
    Reject,
    SendBack,
    Lock,
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewAction::Approve => "APPROVE",
            ReviewAction::Reject => "REJECT",
            ReviewAction::SendBack => "SEND_BACK",
            ReviewAction::Lock => "LOCK",
        };
        f.write_str(s)
    }
}

/// The five tracked publication kinds, each with its own table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationKind {
    Journal,
    Conference,
    Book,
    BookChapter,
    Patent,
}

impl PublicationKind {
    pub const ALL: [PublicationKind; 5] = [
        PublicationKind::Journal,
        PublicationKind::Conference,
        PublicationKind::Book,
        PublicationKind::BookChapter,
        PublicationKind::Patent,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PublicationKind::Journal => "journal",
            PublicationKind::Conference => "conference",
            PublicationKind::Book => "book",
            PublicationKind::BookChapter => "book_chapter",
            PublicationKind::Patent => "patent",
        }
    }
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// National/international split used by institutional reports
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicationCategory {
    #[sea_orm(string_value = "NATIONAL")]
    National,
    #[sea_orm(string_value = "INTERNATIONAL")]
    International,
}

impl fmt::Display for PublicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PublicationCategory::National => "NATIONAL",
            PublicationCategory::International => "INTERNATIONAL",
        };
        f.write_str(s)
    }
}

/// Who a record belongs to: exactly one faculty member or one student.
///
/// Journals and conferences persist this as a pair of nullable columns;
/// the sum type keeps both-set/neither-set rows out of the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Owner {
    Faculty(Uuid),
    Student(Uuid),
}

impl Owner {
    /// The owning profile id, whichever side it is on
    pub fn id(&self) -> Uuid {
        match self {
            Owner::Faculty(id) | Owner::Student(id) => *id,
        }
    }

    pub fn faculty_id(&self) -> Option<Uuid> {
        match self {
            Owner::Faculty(id) => Some(*id),
            Owner::Student(_) => None,
        }
    }

    pub fn student_id(&self) -> Option<Uuid> {
        match self {
            Owner::Student(id) => Some(*id),
            Owner::Faculty(_) => None,
        }
    }

    /// Rebuild the owner from the stored column pair.
    ///
    /// Returns None for rows violating the exactly-one-owner invariant;
    /// such rows are never written by this codebase.
    pub fn from_columns(faculty_id: Option<Uuid>, student_id: Option<Uuid>) -> Option<Owner> {
        match (faculty_id, student_id) {
            (Some(f), None) => Some(Owner::Faculty(f)),
            (None, Some(s)) => Some(Owner::Student(s)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_from_columns() {
        let f = Uuid::new_v4();
        let s = Uuid::new_v4();

        assert_eq!(Owner::from_columns(Some(f), None), Some(Owner::Faculty(f)));
        assert_eq!(Owner::from_columns(None, Some(s)), Some(Owner::Student(s)));
        assert_eq!(Owner::from_columns(Some(f), Some(s)), None);
        assert_eq!(Owner::from_columns(None, None), None);
    }

    #[test]
    fn test_status_predicates() {
        assert!(ApprovalStatus::Submitted.is_reviewable());
        assert!(ApprovalStatus::SentBack.is_reviewable());
        assert!(!ApprovalStatus::Approved.is_reviewable());

        assert!(ApprovalStatus::Rejected.is_owner_editable());
        assert!(!ApprovalStatus::Approved.is_owner_editable());
        assert!(!ApprovalStatus::Locked.is_owner_editable());

        assert!(ApprovalStatus::Approved.is_certified());
        assert!(ApprovalStatus::Locked.is_certified());
        assert!(!ApprovalStatus::Submitted.is_certified());
    }
}
