//! Flattened read-side view of every publication record
//!
//! The rollups only care about a handful of shared columns, so each kind
//! is projected down to one row shape before grouping. The five scans are
//! independent reads with no snapshot guarantee.

use scholartrack_common::db::models::{
    ApprovalStatus, BookChapterEntity, BookEntity, ConferenceEntity, JournalEntity, PatentEntity,
    PublicationCategory, PublicationKind, ReviewColumns, Reviewable,
};
use scholartrack_common::db::Repository;
use scholartrack_common::errors::Result;
use uuid::Uuid;

/// One publication record, reduced to what the rollups group by
#[derive(Debug, Clone)]
pub(crate) struct PublicationFacts {
    pub kind: PublicationKind,
    pub year: i32,
    pub category: PublicationCategory,
    pub status: ApprovalStatus,
    pub faculty_id: Option<Uuid>,
    pub impact_factor: Option<String>,
}

impl PublicationFacts {
    pub fn is_certified(&self) -> bool {
        self.status.is_certified()
    }
}

/// Load and flatten every record of every kind
pub(crate) async fn collect_all(repo: &Repository) -> Result<Vec<PublicationFacts>> {
    let (journals, conferences, books, chapters, patents) = futures::try_join!(
        repo.list_all_records::<JournalEntity>(),
        repo.list_all_records::<ConferenceEntity>(),
        repo.list_all_records::<BookEntity>(),
        repo.list_all_records::<BookChapterEntity>(),
        repo.list_all_records::<PatentEntity>(),
    )?;

    let mut facts = Vec::with_capacity(
        journals.len() + conferences.len() + books.len() + chapters.len() + patents.len(),
    );
    facts.extend(facts_of::<JournalEntity>(journals));
    facts.extend(facts_of::<ConferenceEntity>(conferences));
    facts.extend(facts_of::<BookEntity>(books));
    facts.extend(facts_of::<BookChapterEntity>(chapters));
    facts.extend(facts_of::<PatentEntity>(patents));

    Ok(facts)
}

fn facts_of<E>(rows: Vec<E::Model>) -> impl Iterator<Item = PublicationFacts>
where
    E: Reviewable,
    E::Model: ReviewColumns,
{
    rows.into_iter().map(|row| PublicationFacts {
        kind: E::KIND,
        year: row.record_year(),
        category: row.record_category(),
        status: row.approval_status(),
        faculty_id: row.record_owner().and_then(|o| o.faculty_id()),
        impact_factor: row.impact_factor().map(str::to_string),
    })
}
