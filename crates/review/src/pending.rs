//! Pending-approval queue
//!
//! Cross-kind view of everything an administrator still has to review.
//! Each kind is scanned independently; reads are not a snapshot, so a
//! record reviewed mid-scan may or may not appear.

use scholartrack_common::db::models::{
    ApprovalStatus, BookChapterEntity, BookEntity, ConferenceEntity, JournalEntity, PatentEntity,
    PublicationKind, ReviewColumns, Reviewable,
};
use scholartrack_common::db::Repository;
use scholartrack_common::errors::Result;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// One record awaiting review, normalized across kinds
#[derive(Debug, Clone, Serialize)]
pub struct PendingEntry {
    pub id: Uuid,
    pub kind: PublicationKind,
    pub title: String,
    pub owner_faculty_id: Option<Uuid>,
    pub owner_faculty_name: Option<String>,
    pub owner_student_id: Option<Uuid>,
    pub owner_student_name: Option<String>,
    pub approval_status: ApprovalStatus,
    pub submitted_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// Builds the administrator's review queue
#[derive(Clone)]
pub struct PendingQueue {
    repo: Repository,
}

impl PendingQueue {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// All records in SUBMITTED or SENT_BACK, optionally restricted to one
    /// kind. Storage order; callers sort if they need an order.
    pub async fn list_pending(
        &self,
        kind_filter: Option<PublicationKind>,
    ) -> Result<Vec<PendingEntry>> {
        let kinds: &[PublicationKind] = match kind_filter {
            Some(ref kind) => std::slice::from_ref(kind),
            None => &PublicationKind::ALL,
        };

        let mut entries = Vec::new();
        for kind in kinds {
            match kind {
                PublicationKind::Journal => {
                    entries.extend(entries_of::<JournalEntity>(
                        self.repo.list_pending_records::<JournalEntity>().await?,
                    ));
                }
                PublicationKind::Conference => {
                    entries.extend(entries_of::<ConferenceEntity>(
                        self.repo.list_pending_records::<ConferenceEntity>().await?,
                    ));
                }
                PublicationKind::Book => {
                    entries.extend(entries_of::<BookEntity>(
                        self.repo.list_pending_records::<BookEntity>().await?,
                    ));
                }
                PublicationKind::BookChapter => {
                    entries.extend(entries_of::<BookChapterEntity>(
                        self.repo.list_pending_records::<BookChapterEntity>().await?,
                    ));
                }
                PublicationKind::Patent => {
                    entries.extend(entries_of::<PatentEntity>(
                        self.repo.list_pending_records::<PatentEntity>().await?,
                    ));
                }
            }
        }

        self.resolve_names(&mut entries).await;

        Ok(entries)
    }

    /// Fill owner names best-effort: a missing profile (or a failed lookup)
    /// leaves the name empty rather than failing the listing.
    async fn resolve_names(&self, entries: &mut [PendingEntry]) {
        let faculty_ids: Vec<Uuid> = entries.iter().filter_map(|e| e.owner_faculty_id).collect();
        let student_ids: Vec<Uuid> = entries.iter().filter_map(|e| e.owner_student_id).collect();

        let faculty_names = match self.repo.faculty_names(&faculty_ids).await {
            Ok(names) => names,
            Err(err) => {
                warn!(error = %err, "faculty name resolution failed; listing without names");
                Default::default()
            }
        };
        let student_names = match self.repo.student_names(&student_ids).await {
            Ok(names) => names,
            Err(err) => {
                warn!(error = %err, "student name resolution failed; listing without names");
                Default::default()
            }
        };

        for entry in entries {
            entry.owner_faculty_name = entry
                .owner_faculty_id
                .and_then(|id| faculty_names.get(&id).cloned());
            entry.owner_student_name = entry
                .owner_student_id
                .and_then(|id| student_names.get(&id).cloned());
        }
    }
}

fn entries_of<E>(rows: Vec<E::Model>) -> impl Iterator<Item = PendingEntry>
where
    E: Reviewable,
    E::Model: ReviewColumns,
{
    rows.into_iter().map(|row| {
        let owner = row.record_owner();
        PendingEntry {
            id: row.record_id(),
            kind: E::KIND,
            title: row.record_title().to_string(),
            owner_faculty_id: owner.and_then(|o| o.faculty_id()),
            owner_faculty_name: None,
            owner_student_id: owner.and_then(|o| o.student_id()),
            owner_student_name: None,
            approval_status: row.approval_status(),
            submitted_at: row.record_created_at(),
            updated_at: row.record_updated_at(),
        }
    })
}
